use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Open mapping from field name to value, as produced by a form template.
///
/// Keys are template specific. Nothing on the server validates them against a
/// shared schema, so consumers must treat the key set as dynamic.
pub type Fields = BTreeMap<String, FieldValue>;

/// A single value inside a submitted form.
///
/// The set of shapes is closed: anything a form can produce fits one of these
/// variants. Signatures are not a separate variant; they travel as `Text`
/// holding a base64 data URI (or a `Group` wrapping one).
///
/// The JSON encoding is untagged, so `FieldValue::List(vec!["Oil".into()])`
/// is written as `["Oil"]` and a payload posted by any HTTP client maps
/// straight onto it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
    Group(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Empty means "nothing was entered": null, blank text, an empty list or
    /// a group whose members are all empty. `false` is an answer, not empty.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Bool(_) | FieldValue::Number(_) => false,
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Group(members) => members.values().all(FieldValue::is_empty),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Generic display form used by the data table.
    ///
    /// Booleans become `Yes`/`No`, lists are comma separated and groups are
    /// rendered as compact JSON.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Bool(true) => "Yes".to_string(),
            FieldValue::Bool(false) => "No".to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(text) => text.clone(),
            FieldValue::List(items) => items.join(", "),
            FieldValue::Group(_) => serde_json::to_string(self).unwrap_or_default(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

/// The `{formType, title, fields}` payload posted when a form is submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormEnvelope {
    pub form_type: String,
    pub title: String,
    #[serde(default)]
    pub fields: Fields,
}

/// A persisted submission, as returned by the forms API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub id: String,
    pub form_type: String,
    pub title: String,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub submitted_by: String,
    #[serde(default)]
    pub fields: Fields,
}

/// Status given to every record on creation.
pub const STATUS_SUBMITTED: &str = "submitted";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_uses_camel_case_and_plain_json_values() {
        let mut fields = Fields::new();
        fields.insert("bizName".into(), "Joe's Garage".into());
        fields.insert("parts".into(), vec!["Oil".to_string(), "Filters".to_string()].into());
        fields.insert("hasFleet".into(), true.into());
        let envelope = FormEnvelope {
            form_type: "CaForm1".into(),
            title: "Auto Parts Checklist - Joe's Garage".into(),
            fields,
        };

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "formType": "CaForm1",
                "title": "Auto Parts Checklist - Joe's Garage",
                "fields": {
                    "bizName": "Joe's Garage",
                    "hasFleet": true,
                    "parts": ["Oil", "Filters"]
                }
            })
        );
    }

    #[test]
    fn untyped_payload_maps_onto_closed_variants() {
        let fields: Fields = serde_json::from_value(json!({
            "note": null,
            "count": 3,
            "brands": ["Ford", "GM"],
            "services": { "oil": "Weekly", "tires": "Monthly" },
            "vendorSignature": "data:image/png;base64,AAAA"
        }))
        .unwrap();

        assert_eq!(fields["note"], FieldValue::Null);
        assert_eq!(fields["count"], FieldValue::Number(3.0));
        assert_eq!(
            fields["brands"],
            FieldValue::List(vec!["Ford".into(), "GM".into()])
        );
        assert!(matches!(fields["services"], FieldValue::Group(_)));
        assert_eq!(
            fields["vendorSignature"].as_text(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn arrays_of_numbers_are_rejected() {
        let result: Result<Fields, _> = serde_json::from_value(json!({ "bad": [1, 2] }));
        assert!(result.is_err());
    }

    #[test]
    fn display_renders_booleans_lists_and_groups() {
        assert_eq!(FieldValue::Bool(true).display(), "Yes");
        assert_eq!(FieldValue::Bool(false).display(), "No");
        assert_eq!(FieldValue::Number(2.5).display(), "2.5");
        assert_eq!(
            FieldValue::List(vec!["Oil".into(), "Filters".into()]).display(),
            "Oil, Filters"
        );
        let mut group = BTreeMap::new();
        group.insert("oil".to_string(), FieldValue::Text("Weekly".into()));
        assert_eq!(FieldValue::Group(group).display(), r#"{"oil":"Weekly"}"#);
    }

    #[test]
    fn emptiness_ignores_false_but_not_whitespace() {
        assert!(FieldValue::Text("   ".into()).is_empty());
        assert!(FieldValue::List(vec![]).is_empty());
        assert!(!FieldValue::Bool(false).is_empty());
        assert!(FieldValue::Group(BTreeMap::new()).is_empty());
    }
}
