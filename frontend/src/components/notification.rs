use common::notification::{Notification, NotificationKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub notification: Option<Notification>,
    pub on_dismiss: Callback<()>,
}

/// Banner for the app's single notification slot. Expiry is driven by the
/// shell; this only renders and offers manual dismissal.
pub struct NotificationBanner;

impl Component for NotificationBanner {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        NotificationBanner
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let Some(notification) = &props.notification else {
            return html! {};
        };
        let (class, background) = match notification.kind {
            NotificationKind::Success => ("notification success", "#2e7d32"),
            NotificationKind::Error => ("notification error", "#c62828"),
        };
        let style = format!(
            "position:fixed;bottom:20px;left:50%;transform:translateX(-50%);background:{};color:#fff;padding:10px 20px;border-radius:4px;z-index:10000;font-family:Arial, sans-serif;display:flex;gap:16px;align-items:center;",
            background
        );

        html! {
            <div class={class} role="status" style={style}>
                <span>{ notification.message.clone() }</span>
                <button
                    class="notification-dismiss"
                    title="Dismiss"
                    onclick={props.on_dismiss.reform(|_: MouseEvent| ())}
                    style="background:none;border:none;color:#fff;cursor:pointer;font-size:1rem;"
                >
                    { "✕" }
                </button>
            </div>
        }
    }
}
