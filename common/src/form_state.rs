//! Local, editable state of a form while the user fills it in.
//!
//! `FormState` is created from a `FormTemplate` with an empty default for
//! every field, so the envelope built at submit time always carries the full
//! key set of the template even when the user left fields untouched.

use crate::error::SubmitError;
use crate::model::submission::{FieldValue, Fields, FormEnvelope};
use crate::model::template::{FieldKind, FormTemplate};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    form_type: String,
    fields: Fields,
}

impl FormState {
    pub fn new(template: &FormTemplate) -> Self {
        let fields = template
            .fields
            .iter()
            .map(|spec| (spec.key.to_string(), empty_value(&spec.kind)))
            .collect();
        Self {
            form_type: template.form_type.to_string(),
            fields,
        }
    }

    pub fn form_type(&self) -> &str {
        &self.form_type
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn text(&self, key: &str) -> &str {
        self.fields.get(key).and_then(FieldValue::as_text).unwrap_or("")
    }

    /// Text, long text, radio and signature inputs overwrite by key.
    pub fn set_text(&mut self, key: &str, value: impl Into<String>) {
        self.fields
            .insert(key.to_string(), FieldValue::Text(value.into()));
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.fields.insert(key.to_string(), FieldValue::Bool(value));
    }

    pub fn is_checked(&self, group: &str, option: &str) -> bool {
        matches!(self.fields.get(group), Some(FieldValue::List(items)) if items.iter().any(|i| i == option))
    }

    /// Adds `option` to the group's list when checked, removes it when
    /// unchecked. Checking an option twice keeps a single entry.
    pub fn toggle_checkbox(&mut self, group: &str, option: &str, checked: bool) {
        let entry = self
            .fields
            .entry(group.to_string())
            .or_insert_with(|| FieldValue::List(Vec::new()));
        if !matches!(entry, FieldValue::List(_)) {
            *entry = FieldValue::List(Vec::new());
        }
        if let FieldValue::List(items) = entry {
            let present = items.iter().any(|i| i == option);
            if checked && !present {
                items.push(option.to_string());
            } else if !checked {
                items.retain(|i| i != option);
            }
        }
    }

    /// Stores the choice for one row of a radio matrix.
    pub fn set_matrix(&mut self, key: &str, row: &str, value: &str) {
        let entry = self
            .fields
            .entry(key.to_string())
            .or_insert_with(|| FieldValue::Group(BTreeMap::new()));
        if !matches!(entry, FieldValue::Group(_)) {
            *entry = FieldValue::Group(BTreeMap::new());
        }
        if let FieldValue::Group(rows) = entry {
            rows.insert(row.to_string(), FieldValue::Text(value.to_string()));
        }
    }

    pub fn matrix_choice(&self, key: &str, row: &str) -> Option<&str> {
        match self.fields.get(key) {
            Some(FieldValue::Group(rows)) => rows.get(row).and_then(FieldValue::as_text),
            _ => None,
        }
    }

    /// First required field that is missing or empty, by template order.
    pub fn first_missing<'t>(&self, template: &'t FormTemplate) -> Option<&'t str> {
        template.required.iter().copied().find(|key| {
            self.fields
                .get(*key)
                .map_or(true, FieldValue::is_empty)
        })
    }

    pub fn validate(&self, template: &FormTemplate) -> Result<(), SubmitError> {
        match self.first_missing(template) {
            Some(key) => Err(SubmitError::MissingRequired(template.label_for(key))),
            None => Ok(()),
        }
    }

    /// `"<template name> - <title field value>"`, or just the template name
    /// when the title field is blank.
    pub fn title(&self, template: &FormTemplate) -> String {
        let subject = self.text(template.title_field).trim();
        if subject.is_empty() {
            template.name.to_string()
        } else {
            format!("{} - {}", template.name, subject)
        }
    }

    /// Freezes the current state into the submission envelope.
    pub fn to_envelope(&self, template: &FormTemplate) -> FormEnvelope {
        FormEnvelope {
            form_type: self.form_type.clone(),
            title: self.title(template),
            fields: self.fields.clone(),
        }
    }
}

/// DOM id of one checkbox inside a group: `group-option`.
pub fn checkbox_id(group: &str, option: &str) -> String {
    format!("{}-{}", group, option)
}

fn empty_value(kind: &FieldKind) -> FieldValue {
    match kind {
        FieldKind::YesNo => FieldValue::Bool(false),
        FieldKind::CheckboxGroup(_) => FieldValue::List(Vec::new()),
        FieldKind::RadioMatrix { .. } => FieldValue::Group(BTreeMap::new()),
        FieldKind::Text | FieldKind::LongText | FieldKind::Radio(_) | FieldKind::Signature => {
            FieldValue::Text(String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates;

    fn parts_checklist() -> &'static FormTemplate {
        templates::find("CaForm1").unwrap()
    }

    #[test]
    fn new_state_tracks_every_template_field_with_empty_defaults() {
        let template = parts_checklist();
        let state = FormState::new(template);
        assert_eq!(state.fields().len(), template.fields.len());
        assert_eq!(state.get("bizName"), Some(&FieldValue::Text(String::new())));
        assert_eq!(state.get("parts"), Some(&FieldValue::List(vec![])));
    }

    #[test]
    fn checkbox_toggling_behaves_as_a_set() {
        let mut state = FormState::new(parts_checklist());
        state.toggle_checkbox("brands", "Ford", true);
        state.toggle_checkbox("brands", "GM", true);
        state.toggle_checkbox("brands", "Ford", false);
        assert_eq!(state.get("brands"), Some(&FieldValue::List(vec!["GM".into()])));

        state.toggle_checkbox("brands", "GM", true);
        assert_eq!(state.get("brands"), Some(&FieldValue::List(vec!["GM".into()])));
        assert!(state.is_checked("brands", "GM"));
        assert!(!state.is_checked("brands", "Ford"));

        state.toggle_checkbox("brands", "Toyota", false);
        assert_eq!(state.get("brands"), Some(&FieldValue::List(vec!["GM".into()])));
    }

    #[test]
    fn radio_and_text_overwrite_by_key() {
        let template = templates::find("CaForm2").unwrap();
        let mut state = FormState::new(template);
        state.set_text("paymentTerms", "Net 15");
        state.set_text("paymentTerms", "Net 30");
        assert_eq!(state.text("paymentTerms"), "Net 30");
    }

    #[test]
    fn radio_matrix_stores_a_group_keyed_by_row() {
        let template = templates::find("CaForm2").unwrap();
        let mut state = FormState::new(template);
        state.set_matrix("serviceSchedule", "Oil Change", "Weekly");
        state.set_matrix("serviceSchedule", "Oil Change", "Monthly");
        state.set_matrix("serviceSchedule", "Alignment", "Never");
        assert_eq!(state.matrix_choice("serviceSchedule", "Oil Change"), Some("Monthly"));
        assert_eq!(state.matrix_choice("serviceSchedule", "Alignment"), Some("Never"));
        assert_eq!(state.matrix_choice("serviceSchedule", "Detailing"), None);
    }

    #[test]
    fn validation_reports_the_first_missing_required_label() {
        let template = parts_checklist();
        let mut state = FormState::new(template);
        assert_eq!(
            state.validate(template),
            Err(SubmitError::MissingRequired("Business Name".into()))
        );

        state.set_text("bizName", "Joe's Garage");
        state.set_text("tmName", "   ");
        assert_eq!(
            state.validate(template),
            Err(SubmitError::MissingRequired("Territory Manager".into()))
        );

        state.set_text("tmName", "Alice");
        assert_eq!(state.validate(template), Ok(()));
    }

    #[test]
    fn parts_checklist_envelope_matches_expected_shape() {
        let template = parts_checklist();
        let mut state = FormState::new(template);
        state.set_text("bizName", "Joe's Garage");
        state.set_text("tmName", "Alice");
        state.toggle_checkbox("parts", "Oil", true);
        state.toggle_checkbox("parts", "Filters", true);

        let envelope = state.to_envelope(template);
        assert_eq!(envelope.form_type, "CaForm1");
        assert_eq!(envelope.title, "Auto Parts Checklist - Joe's Garage");
        assert_eq!(envelope.fields["bizName"], FieldValue::from("Joe's Garage"));
        assert_eq!(envelope.fields["tmName"], FieldValue::from("Alice"));
        assert_eq!(
            envelope.fields["parts"],
            FieldValue::List(vec!["Oil".into(), "Filters".into()])
        );
        assert_eq!(envelope.fields["contactName"], FieldValue::from(""));
        assert_eq!(envelope.fields["brands"], FieldValue::List(vec![]));
        assert_eq!(envelope.fields.len(), template.fields.len());
    }

    #[test]
    fn title_without_subject_is_the_template_name() {
        let template = parts_checklist();
        let state = FormState::new(template);
        assert_eq!(state.title(template), "Auto Parts Checklist");
    }

    #[test]
    fn checkbox_id_joins_group_and_option() {
        assert_eq!(checkbox_id("parts", "Brake Pads"), "parts-Brake Pads");
    }
}
