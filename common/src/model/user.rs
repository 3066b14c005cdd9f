use serde::{Deserialize, Serialize};

use super::choice::Choice;
use super::lenient;
use super::record::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Manager,
    User,
}

impl Choice for Role {
    const ALL: &'static [Self] = &[Self::Admin, Self::Manager, Self::User];

    fn wire(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::User => "user",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::User => "User",
        }
    }
}

/// A console user. The two photos travel inline as `data:` URLs in the JSON
/// body; there is no separate upload endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "lenient::text")]
    pub username: String,
    #[serde(deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(deserialize_with = "lenient::text")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub last_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub candidate_name: String,
    #[serde(deserialize_with = "lenient::count")]
    pub age: u32,
    #[serde(deserialize_with = "lenient::text")]
    pub department_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub id_proof_no: String,
    #[serde(deserialize_with = "lenient::text")]
    pub mobile_number: String,
    /// A [`Role`] wire value, or empty when unset.
    #[serde(deserialize_with = "lenient::text")]
    pub role: String,
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub candidate_photo: Option<String>,
    #[serde(
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub id_proof_photo: Option<String>,
}

impl User {
    pub fn known_role(&self) -> Option<Role> {
        Role::from_wire(&self.role)
    }
}

impl Entity for User {
    const RESOURCE: &'static str = "/api/users";
    const SINGULAR: &'static str = "User";
    const PLURAL: &'static str = "users";
    const TITLE: &'static str = "User Management";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use serde_json::json;

    #[test]
    fn photos_are_omitted_until_uploaded() {
        let value = serde_json::to_value(User::default()).unwrap();
        assert!(value.get("candidatePhoto").is_none());
        assert!(value.get("idProofPhoto").is_none());
        assert_eq!(value["role"], "");
        assert_eq!(value["age"], 0);
    }

    #[test]
    fn server_user_reads_with_photo_and_role() {
        let record: Record<User> = serde_json::from_value(json!({
            "id": "u1",
            "username": "ada",
            "firstName": "Ada",
            "age": "36",
            "role": "manager",
            "candidatePhoto": "data:image/png;base64,iVBORw0KGgo="
        }))
        .unwrap();
        assert_eq!(record.data.first_name, "Ada");
        assert_eq!(record.data.age, 36);
        assert_eq!(record.data.role, "manager");
        assert_eq!(record.data.known_role(), Some(Role::Manager));
        assert!(record.data.candidate_photo.is_some());
        assert_eq!(record.data.id_proof_photo, None);
    }

    #[test]
    fn unknown_role_and_null_fields_survive() {
        let record: Record<User> = serde_json::from_value(json!({
            "id": "u2",
            "username": "grace",
            "role": "auditor",
            "departmentName": null,
            "mobileNumber": 5550100
        }))
        .unwrap();
        assert_eq!(record.data.role, "auditor");
        assert_eq!(record.data.known_role(), None);
        assert_eq!(record.data.department_name, "");
        assert_eq!(record.data.mobile_number, "5550100");
    }

    #[test]
    fn role_labels_are_capitalised() {
        let labels: Vec<_> = Role::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(labels, ["Admin", "Manager", "User"]);
    }
}
