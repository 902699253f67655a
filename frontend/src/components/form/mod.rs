//! Generic form component: renders any `FormTemplate` and submits it.
//!
//! Same layout as the other stateful views: `state` holds the runtime data,
//! `update` mutates it per `Msg`, `view` renders, `helpers` holds the browser
//! side effects (timers, file reading, print).

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::FormProps;
pub use state::FormComponent;

impl Component for FormComponent {
    type Message = Msg;
    type Properties = FormProps;

    fn create(ctx: &Context<Self>) -> Self {
        FormComponent::new(ctx.props().template)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
