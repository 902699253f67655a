use crate::model::template::FieldKind::{
    CheckboxGroup, LongText, Radio, RadioMatrix, Signature, Text, YesNo,
};
use crate::model::template::{FieldSpec, FormTemplate, Jurisdiction, Language};

const PARTS: &[&str] = &[
    "Oil",
    "Filters",
    "Brake Pads",
    "Batteries",
    "Wiper Blades",
    "Tires",
];
const BRANDS: &[&str] = &["Ford", "GM", "Stellantis", "Toyota", "Honda", "Hyundai"];
const FREQUENCY: &[&str] = &["Weekly", "Monthly", "Quarterly", "Never"];
const SERVICES: &[&str] = &["Oil Change", "Tire Rotation", "Alignment", "Detailing"];

pub(super) const CA_FORM_1: FormTemplate = FormTemplate {
    form_type: "CaForm1",
    jurisdiction: Jurisdiction::Canada,
    language: Language::English,
    name: "Auto Parts Checklist",
    title_field: "bizName",
    required: &["bizName", "tmName"],
    fields: &[
        FieldSpec::new("bizName", "Business Name", Text),
        FieldSpec::new("tmName", "Territory Manager", Text),
        FieldSpec::new("contactName", "Contact Name", Text),
        FieldSpec::new("phone", "Phone", Text),
        FieldSpec::new("email", "Email", Text),
        FieldSpec::new("province", "Province", Text),
        FieldSpec::new("parts", "Parts Currently Stocked", CheckboxGroup(PARTS)),
        FieldSpec::new("brands", "Brands Serviced", CheckboxGroup(BRANDS)),
        FieldSpec::new("notes", "Notes", LongText),
    ],
};

pub(super) const CA_FORM_2: FormTemplate = FormTemplate {
    form_type: "CaForm2",
    jurisdiction: Jurisdiction::Canada,
    language: Language::English,
    name: "Service Agreement",
    title_field: "bizName",
    required: &["bizName"],
    fields: &[
        FieldSpec::new("bizName", "Business Name", Text),
        FieldSpec::new("legalName", "Legal Entity Name", Text),
        FieldSpec::new("address", "Business Address", LongText),
        FieldSpec::new("gstNumber", "GST/HST Number", Text),
        FieldSpec::new(
            "paymentTerms",
            "Payment Terms",
            Radio(&["Net 15", "Net 30", "Net 60"]),
        ),
        FieldSpec::new(
            "serviceSchedule",
            "Service Schedule",
            RadioMatrix {
                rows: SERVICES,
                options: FREQUENCY,
            },
        ),
        FieldSpec::new("autoRenew", "Automatic Renewal", YesNo),
        FieldSpec::new("customerSignature", "Customer Signature", Signature),
        FieldSpec::new("vendorSignature", "Vendor Signature", Signature),
    ],
};

pub(super) const CA_FR_FORM_1: FormTemplate = FormTemplate {
    form_type: "CaFrForm1",
    jurisdiction: Jurisdiction::Canada,
    language: Language::French,
    name: "Liste de vérification des pièces automobiles",
    title_field: "bizName",
    required: &["bizName", "tmName"],
    fields: &[
        FieldSpec::new("bizName", "Nom de l'entreprise", Text),
        FieldSpec::new("tmName", "Directeur de territoire", Text),
        FieldSpec::new("contactName", "Personne-ressource", Text),
        FieldSpec::new("phone", "Téléphone", Text),
        FieldSpec::new("courriel", "Courriel", Text),
        FieldSpec::new(
            "pieces",
            "Pièces en stock",
            CheckboxGroup(&["Huile", "Filtres", "Plaquettes de frein", "Batteries", "Pneus"]),
        ),
        FieldSpec::new("remarques", "Remarques", LongText),
    ],
};

pub(super) const CA_FR_FORM_2: FormTemplate = FormTemplate {
    form_type: "CaFrForm2",
    jurisdiction: Jurisdiction::Canada,
    language: Language::French,
    name: "Contrat de service",
    title_field: "bizName",
    required: &["bizName"],
    fields: &[
        FieldSpec::new("bizName", "Nom de l'entreprise", Text),
        FieldSpec::new("adresse", "Adresse", LongText),
        FieldSpec::new("numeroTvq", "Numéro de TVQ", Text),
        FieldSpec::new(
            "modalitesPaiement",
            "Modalités de paiement",
            Radio(&["Net 15", "Net 30", "Net 60"]),
        ),
        FieldSpec::new("renouvellement", "Renouvellement automatique", YesNo),
        FieldSpec::new("signatureClient", "Signature du client", Signature),
        FieldSpec::new("signatureVendeur", "Signature du vendeur", Signature),
    ],
};
