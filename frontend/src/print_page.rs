use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct PrintPageProps {
    pub title: String,
    pub children: Children,
}

/// Letter-sized sheet the forms are laid out on, so the browser print dialog
/// produces one clean page per form.
pub struct PrintPage;

impl Component for PrintPage {
    type Message = ();
    type Properties = PrintPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        PrintPage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = "display: flex;
             flex-direction: column;
             gap: 12px;
             width: 19.59cm;
             min-height: 27.94cm;
             margin: auto;
             padding: 10mm;
             background: white;
             box-shadow: 0 0 8px #ccc;";

        html! {
            <div class="print-page" style={style}>
                <h1 class="print-page-title">{ props.title.clone() }</h1>
                { for props.children.iter() }
            </div>
        }
    }
}
