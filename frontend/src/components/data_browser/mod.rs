//! Data browser: paginated table of stored submissions for one form type.
//!
//! Columns are derived from the fetched records themselves (see
//! `common::table`), so any template's submissions can be browsed without a
//! per-form table definition.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::DataBrowserProps;
pub use state::DataBrowser;

impl Component for DataBrowser {
    type Message = Msg;
    type Properties = DataBrowserProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DataBrowser::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Fetch);
        }
    }
}
