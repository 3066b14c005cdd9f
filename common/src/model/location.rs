use serde::{Deserialize, Serialize};

use super::lenient;
use super::record::{Entity, Named};

/// A training venue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub address: String,
}

impl Entity for Location {
    const RESOURCE: &'static str = "/api/locations";
    const SINGULAR: &'static str = "Location";
    const PLURAL: &'static str = "locations";
    const TITLE: &'static str = "Location Management";
}

impl Named for Location {
    fn name(&self) -> &str {
        &self.name
    }
}
