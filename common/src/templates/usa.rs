use crate::model::template::FieldKind::{
    CheckboxGroup, LongText, Radio, RadioMatrix, Signature, Text, YesNo,
};
use crate::model::template::{FieldSpec, FormTemplate, Jurisdiction, Language};

const BAYS: &[&str] = &["1-2", "3-5", "6-10", "10+"];
const INTERESTS: &[&str] = &[
    "Parts Supply",
    "Fleet Maintenance",
    "Diagnostics Training",
    "Marketing Support",
];

pub(super) const US_FORM_1: FormTemplate = FormTemplate {
    form_type: "USForm1",
    jurisdiction: Jurisdiction::Usa,
    language: Language::English,
    name: "Business Intake",
    title_field: "bizName",
    required: &["bizName", "repName"],
    fields: &[
        FieldSpec::new("bizName", "Business Name", Text),
        FieldSpec::new("repName", "Sales Representative", Text),
        FieldSpec::new("ownerName", "Owner Name", Text),
        FieldSpec::new("state", "State", Text),
        FieldSpec::new("ein", "EIN", Text),
        FieldSpec::new("serviceBays", "Service Bays", Radio(BAYS)),
        FieldSpec::new("interests", "Program Interests", CheckboxGroup(INTERESTS)),
        FieldSpec::new("hasFleetAccounts", "Has Fleet Accounts", YesNo),
        FieldSpec::new("notes", "Notes", LongText),
    ],
};

pub(super) const US_FORM_4: FormTemplate = FormTemplate {
    form_type: "USForm4",
    jurisdiction: Jurisdiction::Usa,
    language: Language::English,
    name: "Shop Equipment Survey",
    title_field: "bizName",
    required: &["bizName"],
    fields: &[
        FieldSpec::new("bizName", "Business Name", Text),
        FieldSpec::new("repName", "Sales Representative", Text),
        FieldSpec::new(
            "equipmentCondition",
            "Equipment Condition",
            RadioMatrix {
                rows: &["Lifts", "Tire Changer", "Balancer", "Scan Tool"],
                options: &["Good", "Fair", "Replace"],
            },
        ),
        FieldSpec::new("budget", "Upgrade Budget", Radio(&["< $10k", "$10k-$50k", "> $50k"])),
        FieldSpec::new("comments", "Comments", LongText),
    ],
};

pub(super) const US_FORM_7: FormTemplate = FormTemplate {
    form_type: "USForm7",
    jurisdiction: Jurisdiction::Usa,
    language: Language::English,
    name: "Vendor Contract",
    title_field: "bizName",
    required: &["bizName", "signerName"],
    fields: &[
        FieldSpec::new("bizName", "Business Name", Text),
        FieldSpec::new("signerName", "Authorized Signer", Text),
        FieldSpec::new("signerTitle", "Signer Title", Text),
        FieldSpec::new("billingAddress", "Billing Address", LongText),
        FieldSpec::new("term", "Contract Term", Radio(&["12 Months", "24 Months", "36 Months"])),
        FieldSpec::new("acceptsTerms", "Accepts Terms and Conditions", YesNo),
        FieldSpec::new("customerSignature", "Customer Signature", Signature),
        FieldSpec::new("vendorSignature", "Vendor Signature", Signature),
    ],
};
