//! Tolerant field readers for server records.
//!
//! The backend is not under our control: ids come back as strings or numbers,
//! numeric fields sometimes as strings, and optional fields as `null`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reads an id given as a JSON string or number.
pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(D::Error::custom(format!("unsupported record id: {other}"))),
    }
}

/// Reads a text field. `null` (and any array or object) is empty; numbers
/// and booleans keep their JSON spelling.
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Reads a non-negative whole number; anything unreadable is 0.
pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.min(u32::MAX as f64) as u32)
        .unwrap_or(0))
}

/// Reads a number; anything unreadable is 0.
pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(value.filter(|v| v.is_finite()).unwrap_or(0.0))
}

/// Reads an optional string where `null` and `""` both mean absent.
pub fn optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "id")]
        id: String,
        #[serde(default, deserialize_with = "count")]
        age: u32,
        #[serde(default, deserialize_with = "number")]
        marks: f64,
        #[serde(default, deserialize_with = "optional_text")]
        photo: Option<String>,
        #[serde(default, deserialize_with = "text")]
        remark: String,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn numbers_may_arrive_as_strings() {
        let p = probe(r#"{"id": 12, "age": "31", "marks": "77.5"}"#);
        assert_eq!(p.id, "12");
        assert_eq!(p.age, 31);
        assert_eq!(p.marks, 77.5);
    }

    #[test]
    fn unreadable_numbers_are_zero() {
        let p = probe(r#"{"id": "x", "age": -4, "marks": "n/a"}"#);
        assert_eq!(p.age, 0);
        assert_eq!(p.marks, 0.0);
    }

    #[test]
    fn empty_optional_text_is_absent() {
        assert_eq!(probe(r#"{"id": "x", "photo": ""}"#).photo, None);
        assert_eq!(probe(r#"{"id": "x", "photo": null}"#).photo, None);
        assert_eq!(
            probe(r#"{"id": "x", "photo": "data:image/png;base64,AA=="}"#).photo.as_deref(),
            Some("data:image/png;base64,AA==")
        );
    }

    #[test]
    fn null_text_is_empty() {
        assert_eq!(probe(r#"{"id": "x", "remark": null}"#).remark, "");
        assert_eq!(probe(r#"{"id": "x", "remark": {"a": 1}}"#).remark, "");
        assert_eq!(probe(r#"{"id": "x"}"#).remark, "");
    }

    #[test]
    fn scalar_text_keeps_its_spelling() {
        assert_eq!(probe(r#"{"id": "x", "remark": 12}"#).remark, "12");
        assert_eq!(probe(r#"{"id": "x", "remark": true}"#).remark, "true");
        assert_eq!(probe(r#"{"id": "x", "remark": "Good"}"#).remark, "Good");
    }

    #[test]
    fn boolean_ids_are_rejected() {
        assert!(serde_json::from_str::<Probe>(r#"{"id": true}"#).is_err());
    }
}
