use common::session::{gate, GateDecision, Session};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub session: Session,
    pub on_redirect: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Renders protected content only while the session holds a token and asks
/// the shell to switch to the login view otherwise.
pub struct AuthGate;

impl Component for AuthGate {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        AuthGate
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match gate(&ctx.props().session) {
            GateDecision::Render => ctx.props().children.clone(),
            GateDecision::RedirectToLogin => html! {},
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if gate(&ctx.props().session) == GateDecision::RedirectToLogin {
            ctx.props().on_redirect.emit(());
        }
    }
}
