use serde::{Deserialize, Serialize};
use std::fmt;

/// Sales territory a template belongs to. The data browser filters by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Jurisdiction {
    Canada,
    Usa,
}

impl Jurisdiction {
    pub const ALL: [Jurisdiction; 2] = [Jurisdiction::Canada, Jurisdiction::Usa];

    pub fn code(self) -> &'static str {
        match self {
            Jurisdiction::Canada => "CANADA",
            Jurisdiction::Usa => "USA",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|j| j.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    French,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::French => "FR",
        }
    }
}

/// How a single field is captured and what value shape it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Single line input, stored as text.
    Text,
    /// Multi line input, stored as text.
    LongText,
    /// Single checkbox, stored as a boolean.
    YesNo,
    /// One choice out of `options`, stored as text.
    Radio(&'static [&'static str]),
    /// Any subset of `options`, stored as a list in check order.
    CheckboxGroup(&'static [&'static str]),
    /// One choice per row, stored as a group keyed by row label.
    RadioMatrix {
        rows: &'static [&'static str],
        options: &'static [&'static str],
    },
    /// Uploaded image inlined as a base64 data URI.
    Signature,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind }
    }
}

/// Declarative description of one intake or contract form.
///
/// A single generic form component renders any template: the field list drives
/// the inputs, `required` drives validation, and `name` plus the value of
/// `title_field` become the submission title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTemplate {
    pub form_type: &'static str,
    pub jurisdiction: Jurisdiction,
    pub language: Language,
    pub name: &'static str,
    pub title_field: &'static str,
    pub required: &'static [&'static str],
    pub fields: &'static [FieldSpec],
}

impl FormTemplate {
    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn label_for(&self, key: &str) -> String {
        self.field(key)
            .map(|f| f.label.to_string())
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jurisdiction_codes_round_trip_case_insensitively() {
        assert_eq!(Jurisdiction::from_code("canada"), Some(Jurisdiction::Canada));
        assert_eq!(Jurisdiction::from_code("USA"), Some(Jurisdiction::Usa));
        assert_eq!(Jurisdiction::from_code("MEXICO"), None);
        assert_eq!(serde_json::to_string(&Jurisdiction::Usa).unwrap(), "\"USA\"");
    }
}
