use common::model::template::{FormTemplate, Jurisdiction};
use common::notification::Notification;
use common::table::DataTable;
use common::templates;

pub struct DataBrowser {
    pub jurisdiction: Jurisdiction,
    /// Selected form type, `None` when the jurisdiction has no templates.
    pub form_type: Option<&'static str>,
    /// 1-based.
    pub page: u32,
    pub table: DataTable,
    pub loading: bool,
    /// Dismissible note left by a failed delete.
    pub note: Option<Notification>,
    /// Data URI shown in the signature sheet.
    pub signature: Option<String>,
}

impl DataBrowser {
    pub fn new() -> Self {
        let jurisdiction = Jurisdiction::Canada;
        Self {
            jurisdiction,
            form_type: first_form_type(jurisdiction),
            page: 1,
            table: DataTable::default(),
            loading: false,
            note: None,
            signature: None,
        }
    }

    pub fn templates(&self) -> Vec<&'static FormTemplate> {
        templates::for_jurisdiction(self.jurisdiction).collect()
    }
}

pub fn first_form_type(jurisdiction: Jurisdiction) -> Option<&'static str> {
    templates::for_jurisdiction(jurisdiction)
        .next()
        .map(|t| t.form_type)
}
