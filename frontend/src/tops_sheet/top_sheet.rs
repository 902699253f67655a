use uuid::Uuid;
use yew::prelude::*;

/// Full-screen overlay sheet. The parent owns the `open` flag and closes the
/// sheet through `on_close` (close button or a click on the backdrop).
pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    pub on_close: Callback<()>,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }
        let close = props.on_close.reform(|_: MouseEvent| ());
        let on_backdrop = {
            let on_close = props.on_close.clone();
            let id = self.id.clone();
            Callback::from(move |e: MouseEvent| {
                // only clicks on the backdrop itself, not on the content
                let on_target = e
                    .target_dyn_into::<web_sys::Element>()
                    .map(|el| el.id() == id)
                    .unwrap_or(false);
                if on_target {
                    on_close.emit(());
                }
            })
        };

        html! {
            <div class="top-sheet show" id={self.id.clone()} onclick={on_backdrop}
                style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.85);z-index:9999;display:flex;flex-direction:column;align-items:center;justify-content:center;">
                <button
                    onclick={close}
                    style="position:absolute;top:24px;right:32px;z-index:10000;padding:0.5rem 1rem;font-size:1.5rem;background:#fff;border:none;border-radius:4px;cursor:pointer;"
                >
                    { "✕" }
                </button>
                { props.children.clone() }
            </div>
        }
    }
}
