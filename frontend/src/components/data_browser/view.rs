//! View rendering for the data browser: selectors, table, pager, and the
//! signature sheet.

use common::model::submission::FormSubmission;
use common::model::template::Jurisdiction;
use common::table::{cell, headers, row_signatures, Cell, Column};
use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::tops_sheet::top_sheet::TopSheet;

use super::messages::Msg;
use super::state::DataBrowser;
use super::update::window;

pub fn view(component: &DataBrowser, ctx: &Context<DataBrowser>) -> Html {
    let link = ctx.link();
    let columns = component.table.columns();

    html! {
        <div class="data-browser">
            <div class="icon-toolbar">
                <button class="icon-btn" onclick={ctx.props().on_back.reform(|_: MouseEvent| ())}>
                    <i class="material-icons">{ "arrow_back" }</i>
                    <span class="icon-label">{ "Back" }</span>
                </button>
                { selectors(component, link) }
            </div>
            { note(component, link) }
            <table class="data-table">
                <thead>
                    <tr>
                        { for headers(&columns).into_iter().map(|h| html! { <th>{ h }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for component.table.rows.iter().map(|record| row(record, &columns, link)) }
                </tbody>
            </table>
            if component.loading {
                <p class="loading">{ "Loading..." }</p>
            } else if component.table.rows.is_empty() {
                <p class="empty">{ "No submissions yet." }</p>
            }
            { pager(component, link) }
            <TopSheet open={component.signature.is_some()} on_close={link.callback(|_| Msg::CloseSignature)}>
                if let Some(uri) = &component.signature {
                    <img src={uri.clone()} alt="signature" style="max-width:80vw;max-height:80vh;background:#fff;" />
                }
            </TopSheet>
        </div>
    }
}

fn selectors(component: &DataBrowser, link: &Scope<DataBrowser>) -> Html {
    let on_jurisdiction = link.batch_callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Jurisdiction::from_code(&select.value()).map(Msg::SetJurisdiction)
    });
    let on_form_type = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetFormType(select.value())
    });

    html! {
        <>
            <select class="jurisdiction-select" onchange={on_jurisdiction}>
                { for Jurisdiction::ALL.into_iter().map(|j| html! {
                    <option value={j.code()} selected={j == component.jurisdiction}>{ j.code() }</option>
                }) }
            </select>
            <select class="form-type-select" onchange={on_form_type}>
                { for component.templates().into_iter().map(|t| html! {
                    <option value={t.form_type} selected={component.form_type == Some(t.form_type)}>
                        { format!("{} ({})", t.name, t.form_type) }
                    </option>
                }) }
            </select>
        </>
    }
}

fn row(record: &FormSubmission, columns: &[Column], link: &Scope<DataBrowser>) -> Html {
    let id = record.id.clone();
    html! {
        <tr key={record.id.clone()}>
            <td>{ record.id.clone() }</td>
            <td>{ record.title.clone() }</td>
            <td>{ record.status.clone() }</td>
            <td>{ record.submitted_at.format("%Y-%m-%d %H:%M").to_string() }</td>
            { for columns.iter().map(|column| match cell(record, column) {
                Cell::Blank => html! { <td></td> },
                Cell::Text(text) => html! { <td>{ text }</td> },
                Cell::Signature(uri) => {
                    let open = uri.clone();
                    html! {
                        <td>
                            <img class="signature-thumb" src={uri} alt={column.header.clone()}
                                style="max-width:80px;max-height:40px;cursor:pointer;"
                                onclick={link.callback(move |_| Msg::ShowSignature(open.clone()))} />
                        </td>
                    }
                }
            }) }
            <td class="actions">
                { for row_signatures(record, columns).into_iter().map(|(header, uri)| html! {
                    <button class="icon-btn" title={format!("View {}", header)}
                        onclick={link.callback(move |_| Msg::ShowSignature(uri.clone()))}>
                        <i class="material-icons">{ "draw" }</i>
                    </button>
                }) }
                <button class="icon-btn danger" title="Delete"
                    onclick={link.callback(move |_| Msg::RequestDelete(id.clone()))}>
                    <i class="material-icons">{ "delete" }</i>
                </button>
            </td>
        </tr>
    }
}

fn pager(component: &DataBrowser, link: &Scope<DataBrowser>) -> Html {
    let window = window(component);
    html! {
        <div class="pager">
            <button disabled={!window.has_previous()} onclick={link.callback(|_| Msg::PreviousPage)}>
                { "Previous" }
            </button>
            <span class="range">{ window.range_text() }</span>
            <button disabled={!window.has_next()} onclick={link.callback(|_| Msg::NextPage)}>
                { "Next" }
            </button>
        </div>
    }
}

fn note(component: &DataBrowser, link: &Scope<DataBrowser>) -> Html {
    match &component.note {
        Some(note) => html! {
            <div class="note error">
                <span>{ note.message.clone() }</span>
                <button onclick={link.callback(|_| Msg::DismissNote)}>{ "Dismiss" }</button>
            </div>
        },
        None => html! {},
    }
}
