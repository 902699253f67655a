use common::notification::Notification;
use common::session::Session;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DataBrowserProps {
    pub session: Session,
    pub on_notify: Callback<Notification>,
    /// Fired after a 401, once the usual delay has elapsed.
    pub on_session_expired: Callback<()>,
    pub on_back: Callback<()>,
}
