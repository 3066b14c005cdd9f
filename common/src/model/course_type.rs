use serde::{Deserialize, Serialize};

use super::lenient;
use super::record::{Entity, Named};

/// A course category such as "Basic" or "Advanced". Courses refer to it by
/// name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CourseType {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
}

impl Entity for CourseType {
    const RESOURCE: &'static str = "/api/course-types";
    const SINGULAR: &'static str = "Course Type";
    const PLURAL: &'static str = "course types";
    const TITLE: &'static str = "Course Type Management";
}

impl Named for CourseType {
    fn name(&self) -> &str {
        &self.name
    }
}
