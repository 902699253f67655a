use common::error::ClientError;
use common::model::submission::FormSubmission;

pub enum Msg {
    SetText(&'static str, String),
    SetBool(&'static str, bool),
    ToggleCheckbox {
        group: &'static str,
        option: &'static str,
        checked: bool,
    },
    SetMatrix {
        key: &'static str,
        row: &'static str,
        value: &'static str,
    },
    SignatureSelected(&'static str, web_sys::File),
    SignatureLoaded(&'static str, String),
    ClearSignature(&'static str),
    Submit,
    Submitted(Result<FormSubmission, ClientError>),
    Print,
    Back,
}
