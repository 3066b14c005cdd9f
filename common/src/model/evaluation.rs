use serde::{Deserialize, Serialize};

use super::lenient;
use super::record::Entity;

/// Outcome of a candidate on a course. Imported in bulk from spreadsheets,
/// see [`crate::import`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Evaluation {
    #[serde(deserialize_with = "lenient::text")]
    pub candidate_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub course_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub course_type: String,
    #[serde(deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(deserialize_with = "lenient::text")]
    pub duration: String,
    #[serde(deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(deserialize_with = "lenient::text")]
    pub remark: String,
    #[serde(deserialize_with = "lenient::number")]
    pub marks: f64,
}

impl Entity for Evaluation {
    const RESOURCE: &'static str = "/api/evaluations";
    const SINGULAR: &'static str = "Evaluation";
    const PLURAL: &'static str = "evaluations";
    const TITLE: &'static str = "Evaluation Management";
}

impl Evaluation {
    /// Collection path accepting a JSON array of evaluations in one call.
    pub const BULK_RESOURCE: &'static str = "/api/evaluations/bulk";
}
