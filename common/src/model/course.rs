use serde::{Deserialize, Serialize};

use super::choice::Choice;
use super::lenient;
use super::record::{Entity, Named};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseStatus {
    Active,
    Inactive,
    Upcoming,
}

impl Choice for CourseStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Inactive, Self::Upcoming];

    fn wire(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Upcoming => "Upcoming",
        }
    }
}

/// A course offering. `course_type` and `expert` hold the *names* of a
/// [`CourseType`](super::CourseType) and an [`Expert`](super::Expert).
///
/// Some backends send the course type as `type`, some as `courseType`, some
/// both; `courseType` wins when it is set. It is always written back as
/// `courseType`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CourseWire", rename_all = "camelCase")]
pub struct Course {
    pub name: String,
    /// Free text, e.g. "2 weeks".
    pub duration: String,
    pub course_type: String,
    pub description: String,
    pub expert: String,
    /// A [`CourseStatus`] wire value, or empty when unset.
    pub status: String,
}

impl Course {
    pub fn known_status(&self) -> Option<CourseStatus> {
        CourseStatus::from_wire(&self.status)
    }
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CourseWire {
    #[serde(deserialize_with = "lenient::text")]
    name: String,
    #[serde(deserialize_with = "lenient::text")]
    duration: String,
    #[serde(deserialize_with = "lenient::text")]
    course_type: String,
    #[serde(rename = "type", deserialize_with = "lenient::text")]
    legacy_type: String,
    #[serde(deserialize_with = "lenient::text")]
    description: String,
    #[serde(deserialize_with = "lenient::text")]
    expert: String,
    #[serde(deserialize_with = "lenient::text")]
    status: String,
}

impl From<CourseWire> for Course {
    fn from(wire: CourseWire) -> Self {
        let course_type = if wire.course_type.is_empty() {
            wire.legacy_type
        } else {
            wire.course_type
        };
        Self {
            name: wire.name,
            duration: wire.duration,
            course_type,
            description: wire.description,
            expert: wire.expert,
            status: wire.status,
        }
    }
}

impl Entity for Course {
    const RESOURCE: &'static str = "/api/courses";
    const SINGULAR: &'static str = "Course";
    const PLURAL: &'static str = "courses";
    const TITLE: &'static str = "Course Management";
}

impl Named for Course {
    fn name(&self) -> &str {
        &self.name
    }
}
