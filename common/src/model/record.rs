use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;

/// An entity kind managed by one CRUD screen.
///
/// Implemented on the entity's form type. The associated constants name the
/// REST collection and the nouns used in headings and user-facing messages.
pub trait Entity: Clone + Default + PartialEq + Serialize + DeserializeOwned + 'static {
    /// REST collection path, e.g. `/api/locations`.
    const RESOURCE: &'static str;
    /// Title-case singular noun, e.g. `Course Type`.
    const SINGULAR: &'static str;
    /// Lower-case plural noun, e.g. `course types`.
    const PLURAL: &'static str;
    /// Screen title, e.g. `Course Type Management`.
    const TITLE: &'static str;

    fn create_heading() -> String {
        format!("Add New {}", Self::SINGULAR)
    }

    fn create_label() -> String {
        format!("Add {}", Self::SINGULAR)
    }

    fn edit_heading() -> String {
        format!("Edit {}", Self::SINGULAR)
    }

    fn update_label() -> String {
        format!("Update {}", Self::SINGULAR)
    }

    fn list_heading() -> String {
        format!("{} List", Self::SINGULAR)
    }

    /// Path of a single record: `PUT` and `DELETE` target.
    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::RESOURCE, id)
    }
}

/// Entities other screens reference by display name (dropdown options).
pub trait Named {
    fn name(&self) -> &str;
}

/// A server record: the backend-assigned id plus the entity's fields,
/// flattened into one JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<E> {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(flatten)]
    pub data: E,
}

impl<E> Record<E> {
    pub fn new(id: impl Into<String>, data: E) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

/// Decodes a list-endpoint body.
///
/// Only a JSON array is a list: any other body (an object, `null`, plain
/// text, an HTML error page) decodes to an empty list. An array whose
/// elements are not records of `E` is an error.
pub fn decode_list<E: Entity>(body: &str) -> Result<Vec<Record<E>>, serde_json::Error> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(items)) => items.into_iter().map(serde_json::from_value).collect(),
        _ => Ok(Vec::new()),
    }
}
