//! Registry of every form template the application can render.
//!
//! Templates are grouped by jurisdiction in sub-modules. Lookup is by the
//! `formType` string that is also stored with each submission, so the data
//! browser and the form component agree on identifiers.

mod canada;
mod usa;

use crate::model::template::{FormTemplate, Jurisdiction};

static TEMPLATES: &[FormTemplate] = &[
    canada::CA_FORM_1,
    canada::CA_FORM_2,
    canada::CA_FR_FORM_1,
    canada::CA_FR_FORM_2,
    usa::US_FORM_1,
    usa::US_FORM_4,
    usa::US_FORM_7,
];

pub fn all() -> &'static [FormTemplate] {
    TEMPLATES
}

pub fn find(form_type: &str) -> Option<&'static FormTemplate> {
    TEMPLATES.iter().find(|t| t.form_type == form_type)
}

pub fn for_jurisdiction(jurisdiction: Jurisdiction) -> impl Iterator<Item = &'static FormTemplate> {
    TEMPLATES
        .iter()
        .filter(move |t| t.jurisdiction == jurisdiction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::template::{FieldKind, Language};
    use std::collections::HashSet;

    #[test]
    fn form_types_are_unique() {
        let mut seen = HashSet::new();
        for template in all() {
            assert!(seen.insert(template.form_type), "{}", template.form_type);
        }
    }

    #[test]
    fn title_and_required_fields_exist_in_every_template() {
        for template in all() {
            assert!(template.field(template.title_field).is_some(), "{}", template.form_type);
            for key in template.required {
                assert!(template.field(key).is_some(), "{} {}", template.form_type, key);
            }
        }
    }

    #[test]
    fn field_keys_are_unique_within_a_template() {
        for template in all() {
            let keys: HashSet<_> = template.fields.iter().map(|f| f.key).collect();
            assert_eq!(keys.len(), template.fields.len(), "{}", template.form_type);
        }
    }

    #[test]
    fn jurisdictions_filter_templates() {
        let canada: Vec<_> = for_jurisdiction(Jurisdiction::Canada).map(|t| t.form_type).collect();
        assert!(canada.contains(&"CaForm1"));
        assert!(canada.contains(&"CaFrForm1"));
        assert!(!canada.contains(&"USForm7"));

        let usa: Vec<_> = for_jurisdiction(Jurisdiction::Usa).map(|t| t.form_type).collect();
        assert!(usa.contains(&"USForm7"));
        assert!(usa.iter().all(|t| t.starts_with("US")));
    }

    #[test]
    fn french_templates_are_registered() {
        let french = all().iter().filter(|t| t.language == Language::French).count();
        assert!(french >= 2);
    }

    #[test]
    fn ca_form_1_is_the_parts_checklist() {
        let template = find("CaForm1").unwrap();
        assert_eq!(template.name, "Auto Parts Checklist");
        assert_eq!(template.required, &["bizName", "tmName"]);
        assert!(matches!(
            template.field("parts").map(|f| &f.kind),
            Some(FieldKind::CheckboxGroup(options)) if options.contains(&"Oil")
        ));
        assert!(find("NoSuchForm").is_none());
    }
}
