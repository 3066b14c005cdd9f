use serde::{Deserialize, Serialize};

use super::choice::Choice;
use super::lenient;
use super::record::Entity;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CertificateStatus {
    #[default]
    Pending,
    Generated,
    Issued,
}

impl Choice for CertificateStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::Generated, Self::Issued];

    fn wire(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Generated => "Generated",
            Self::Issued => "Issued",
        }
    }
}

/// A certificate request. New forms start out `Pending`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certificate {
    #[serde(deserialize_with = "lenient::text")]
    pub candidate_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub course: String,
    #[serde(deserialize_with = "lenient::text")]
    pub course_type: String,
    #[serde(deserialize_with = "lenient::text")]
    pub duration: String,
    /// A [`CertificateStatus`] wire value as stored by the backend.
    #[serde(deserialize_with = "lenient::text")]
    pub status: String,
}

impl Default for Certificate {
    fn default() -> Self {
        Self {
            candidate_name: String::new(),
            course: String::new(),
            course_type: String::new(),
            duration: String::new(),
            status: CertificateStatus::default().wire().to_string(),
        }
    }
}

impl Certificate {
    pub fn known_status(&self) -> Option<CertificateStatus> {
        CertificateStatus::from_wire(&self.status)
    }
}

impl Entity for Certificate {
    const RESOURCE: &'static str = "/api/certificates";
    const SINGULAR: &'static str = "Certificate";
    const PLURAL: &'static str = "certificates";
    const TITLE: &'static str = "Certificate Generation";

    fn create_heading() -> String {
        "Generate New Certificate".to_string()
    }

    fn create_label() -> String {
        "Generate Certificate".to_string()
    }
}
