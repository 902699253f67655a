use common::form_state::FormState;
use common::model::template::FormTemplate;

pub struct FormComponent {
    /// Every field of the template, seeded with its empty default.
    pub state: FormState,

    /// Set while the submit request is in flight; disables the submit button.
    pub submitting: bool,
}

impl FormComponent {
    pub fn new(template: &FormTemplate) -> Self {
        Self {
            state: FormState::new(template),
            submitting: false,
        }
    }
}
