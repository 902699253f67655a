use common::model::template::Jurisdiction;
use common::templates;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_open_form: Callback<&'static str>,
    pub on_browse: Callback<()>,
    pub on_logout: Callback<()>,
}

/// Start page: every registered template grouped by jurisdiction, plus the
/// entry to the data browser.
pub struct Landing;

impl Component for Landing {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Landing
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <div class="landing">
                <div class="icon-toolbar">
                    { icon_button("table_chart", "Browse submissions", props.on_browse.reform(|_| ())) }
                    { icon_button("logout", "Log out", props.on_logout.reform(|_| ())) }
                </div>
                { for Jurisdiction::ALL.into_iter().map(|jurisdiction| jurisdiction_section(jurisdiction, &props.on_open_form)) }
            </div>
        }
    }
}

fn jurisdiction_section(jurisdiction: Jurisdiction, on_open: &Callback<&'static str>) -> Html {
    html! {
        <section class="jurisdiction">
            <h2>{ jurisdiction.code() }</h2>
            <ul class="template-list">
                { for templates::for_jurisdiction(jurisdiction).map(|template| {
                    let form_type = template.form_type;
                    let onclick = on_open.reform(move |_: MouseEvent| form_type);
                    html! {
                        <li>
                            <button class="template-link" {onclick}>
                                { template.name }
                                <span class="template-tag">{ format!(" ({}, {})", form_type, template.language.code()) }</span>
                            </button>
                        </li>
                    }
                }) }
            </ul>
        </section>
    }
}

fn icon_button(icon_name: &str, label: &str, on_click: Callback<MouseEvent>) -> Html {
    html! {
        <button class="icon-btn" onclick={on_click}>
            <i class="material-icons">{ icon_name }</i>
            <span class="icon-label">{ label }</span>
        </button>
    }
}
