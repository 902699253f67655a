//! View rendering for the form component. Each `FieldKind` maps to one input
//! widget; values are always read back from `FormState`.

use common::form_state::checkbox_id;
use common::model::submission::FieldValue;
use common::model::template::{FieldKind, FieldSpec};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::print_page::PrintPage;

use super::messages::Msg;
use super::state::FormComponent;

pub fn view(component: &FormComponent, ctx: &Context<FormComponent>) -> Html {
    let link = ctx.link();
    let template = ctx.props().template;

    html! {
        <div class="form-root">
            <div class="icon-toolbar no-print">
                { icon_button("arrow_back", "Back", link.callback(|_| Msg::Back)) }
                { icon_button("print", "Print", link.callback(|_| Msg::Print)) }
            </div>
            <PrintPage title={template.name.to_string()}>
                { for template.fields.iter().map(|spec| {
                    let required = template.required.contains(&spec.key);
                    field_row(component, link, spec, required)
                }) }
                <div class="form-actions no-print">
                    <button
                        class="submit-btn"
                        disabled={component.submitting}
                        onclick={link.callback(|_| Msg::Submit)}
                    >
                        { if component.submitting { "Submitting..." } else { "Submit" } }
                    </button>
                </div>
            </PrintPage>
        </div>
    }
}

fn field_row(
    component: &FormComponent,
    link: &Scope<FormComponent>,
    spec: &'static FieldSpec,
    required: bool,
) -> Html {
    html! {
        <div class="form-field">
            <label class="field-label" for={spec.key}>
                { spec.label }
                if required {
                    <span class="required">{ " *" }</span>
                }
            </label>
            { field_input(component, link, spec) }
        </div>
    }
}

fn field_input(component: &FormComponent, link: &Scope<FormComponent>, spec: &'static FieldSpec) -> Html {
    let key = spec.key;
    let state = &component.state;

    match &spec.kind {
        FieldKind::Text => html! {
            <input id={key} type="text" value={state.text(key).to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetText(key, input.value())
                })} />
        },
        FieldKind::LongText => html! {
            <textarea id={key} rows="4" value={state.text(key).to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::SetText(key, input.value())
                })} />
        },
        FieldKind::YesNo => {
            let checked = state.get(key) == Some(&FieldValue::Bool(true));
            html! {
                <input id={key} type="checkbox" {checked}
                    onchange={link.callback(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetBool(key, input.checked())
                    })} />
            }
        }
        FieldKind::Radio(options) => html! {
            <div class="radio-group">
                { for options.iter().map(|&option| html! {
                    <label>
                        <input type="radio" name={key} value={option}
                            checked={state.text(key) == option}
                            onchange={link.callback(move |_: Event| Msg::SetText(key, option.to_string()))} />
                        { option }
                    </label>
                }) }
            </div>
        },
        FieldKind::CheckboxGroup(options) => html! {
            <div class="checkbox-group">
                { for options.iter().map(|&option| {
                    let id = checkbox_id(key, option);
                    html! {
                        <label for={id.clone()}>
                            <input {id} type="checkbox"
                                checked={state.is_checked(key, option)}
                                onchange={link.callback(move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    Msg::ToggleCheckbox { group: key, option, checked: input.checked() }
                                })} />
                            { option }
                        </label>
                    }
                }) }
            </div>
        },
        FieldKind::RadioMatrix { rows, options } => html! {
            <table class="radio-matrix">
                <thead>
                    <tr>
                        <th></th>
                        { for options.iter().map(|option| html! { <th>{ *option }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|&row| html! {
                        <tr>
                            <td>{ row }</td>
                            { for options.iter().map(|&option| html! {
                                <td>
                                    <input type="radio" name={format!("{}-{}", key, row)} value={option}
                                        checked={state.matrix_choice(key, row) == Some(option)}
                                        onchange={link.callback(move |_: Event| Msg::SetMatrix { key, row, value: option })} />
                                </td>
                            }) }
                        </tr>
                    }) }
                </tbody>
            </table>
        },
        FieldKind::Signature => signature_input(state.text(key), link, key),
    }
}

fn signature_input(current: &str, link: &Scope<FormComponent>, key: &'static str) -> Html {
    let onchange = link.batch_callback(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| Msg::SignatureSelected(key, file))
    });

    html! {
        <div class="signature">
            if current.is_empty() {
                <input id={key} class="no-print" type="file" accept="image/*" {onchange} />
            } else {
                <img class="signature-preview" src={current.to_string()} alt="signature"
                    style="max-width:300px;max-height:120px;border-bottom:1px solid #333;" />
                <button class="no-print" onclick={link.callback(move |_| Msg::ClearSignature(key))}>
                    { "Clear" }
                </button>
            }
        </div>
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
