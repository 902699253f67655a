use common::model::template::FormTemplate;
use common::notification::Notification;
use common::session::Session;
use common::submission::Destination;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FormProps {
    /// Descriptor driving the fields, validation and title.
    pub template: &'static FormTemplate,

    /// Token source for the submit call.
    pub session: Session,

    /// Receives the success/error banner for the shell's notification slot.
    pub on_notify: Callback<Notification>,

    /// Called once any post-submit delay has elapsed.
    pub on_navigate: Callback<Destination>,
}
