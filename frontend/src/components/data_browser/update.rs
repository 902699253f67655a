use common::error::ClientError;
use common::notification::Notification;
use common::submission::NAVIGATE_DELAY_MS;
use common::table::PageWindow;
use common::templates;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::client::{self, PAGE_SIZE};

use super::messages::Msg;
use super::state::{first_form_type, DataBrowser};

pub fn update(component: &mut DataBrowser, ctx: &Context<DataBrowser>, msg: Msg) -> bool {
    match msg {
        Msg::SetJurisdiction(jurisdiction) => {
            component.jurisdiction = jurisdiction;
            component.form_type = first_form_type(jurisdiction);
            component.page = 1;
            ctx.link().send_message(Msg::Fetch);
            true
        }
        Msg::SetFormType(form_type) => {
            component.form_type = templates::find(&form_type).map(|t| t.form_type);
            component.page = 1;
            ctx.link().send_message(Msg::Fetch);
            true
        }
        Msg::Fetch => {
            let Some(form_type) = component.form_type else {
                component.table.clear();
                return true;
            };
            let Some(token) = ctx.props().session.token().map(str::to_string) else {
                ctx.props().on_session_expired.emit(());
                return false;
            };
            let seq = component.table.begin_request();
            component.loading = true;
            let page = component.page;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client::fetch_page(&token, form_type, page, PAGE_SIZE).await;
                link.send_message(Msg::PageLoaded(seq, result));
            });
            true
        }
        Msg::PageLoaded(seq, result) => {
            if !component.table.is_current(seq) {
                return false;
            }
            component.loading = false;
            match result {
                Ok(page) => component.table.apply_page(seq, page),
                Err(err) => {
                    // rows of the previous type or page must not stay under the new selection
                    component.table.clear();
                    report(ctx, err);
                    true
                }
            }
        }
        Msg::PreviousPage => {
            if !window(component).has_previous() {
                return false;
            }
            component.page -= 1;
            ctx.link().send_message(Msg::Fetch);
            false
        }
        Msg::NextPage => {
            if !window(component).has_next() {
                return false;
            }
            component.page += 1;
            ctx.link().send_message(Msg::Fetch);
            false
        }
        Msg::RequestDelete(id) => {
            if !confirm(&format!("Delete record {}?", id)) {
                return false;
            }
            let Some(token) = ctx.props().session.token().map(str::to_string) else {
                ctx.props().on_session_expired.emit(());
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client::delete_form(&token, &id).await;
                link.send_message(Msg::Deleted(id, result));
            });
            false
        }
        Msg::Deleted(id, result) => {
            if let Err(err) = &result {
                gloo_console::warn!(format!("delete of {} failed: {}", id, err));
                if err.is_unauthorized() {
                    expire_later(ctx);
                }
            }
            component.note = component.table.apply_delete(&id, result);
            let page = component.table.page_after_delete(component.page);
            if page != component.page {
                component.page = page;
                ctx.link().send_message(Msg::Fetch);
            }
            true
        }
        Msg::ShowSignature(uri) => {
            component.signature = Some(uri);
            true
        }
        Msg::CloseSignature => component.signature.take().is_some(),
        Msg::DismissNote => component.note.take().is_some(),
    }
}

pub fn window(component: &DataBrowser) -> PageWindow {
    PageWindow::new(component.page, PAGE_SIZE, component.table.count)
}

fn report(ctx: &Context<DataBrowser>, err: ClientError) {
    gloo_console::error!(format!("fetching submissions failed: {}", err));
    ctx.props().on_notify.emit(Notification::error(err.to_string()));
    if err.is_unauthorized() {
        expire_later(ctx);
    }
}

fn expire_later(ctx: &Context<DataBrowser>) {
    let on_expired = ctx.props().on_session_expired.clone();
    spawn_local(async move {
        TimeoutFuture::new(NAVIGATE_DELAY_MS).await;
        on_expired.emit(());
    });
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
