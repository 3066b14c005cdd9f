use serde::{Deserialize, Serialize};

use super::lenient;
use super::record::{Entity, Named};

/// A trainer who delivers courses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Expert {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(deserialize_with = "lenient::text")]
    pub specialization: String,
}

impl Entity for Expert {
    const RESOURCE: &'static str = "/api/experts";
    const SINGULAR: &'static str = "Expert";
    const PLURAL: &'static str = "experts";
    const TITLE: &'static str = "Expert Management";
}

impl Named for Expert {
    fn name(&self) -> &str {
        &self.name
    }
}
