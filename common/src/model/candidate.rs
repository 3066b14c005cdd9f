use serde::{Deserialize, Serialize};

use super::lenient;
use super::record::{Entity, Named};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Candidate {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: String,
}

impl Entity for Candidate {
    const RESOURCE: &'static str = "/api/candidates";
    const SINGULAR: &'static str = "Candidate";
    const PLURAL: &'static str = "candidates";
    const TITLE: &'static str = "Candidate Management";
}

impl Named for Candidate {
    fn name(&self) -> &str {
        &self.name
    }
}
