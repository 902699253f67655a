//! Update function for the form component.
//!
//! Field messages only touch `FormState`. `Submit` asks
//! `common::submission::prepare` whether a request may be sent at all; the
//! outcome of the request is turned into effects by `on_success` /
//! `on_failure` and run by `helpers::run_effects`.

use common::error::SubmitError;
use common::notification::Notification;
use common::submission;
use gloo_file::futures::read_as_bytes;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::client;

use super::helpers::{data_uri, print_page, run_effects};
use super::messages::Msg;
use super::state::FormComponent;

pub fn update(component: &mut FormComponent, ctx: &Context<FormComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SetText(key, value) => {
            component.state.set_text(key, value);
            true
        }
        Msg::SetBool(key, value) => {
            component.state.set_bool(key, value);
            true
        }
        Msg::ToggleCheckbox {
            group,
            option,
            checked,
        } => {
            component.state.toggle_checkbox(group, option, checked);
            true
        }
        Msg::SetMatrix { key, row, value } => {
            component.state.set_matrix(key, row, value);
            true
        }
        Msg::SignatureSelected(key, file) => {
            let file = gloo_file::File::from(file);
            let mime = file.raw_mime_type();
            if !mime.starts_with("image/") {
                ctx.props()
                    .on_notify
                    .emit(Notification::error("Signatures must be image files"));
                return false;
            }
            let link = ctx.link().clone();
            spawn_local(async move {
                match read_as_bytes(&file).await {
                    Ok(bytes) => link.send_message(Msg::SignatureLoaded(key, data_uri(&mime, &bytes))),
                    Err(err) => gloo_console::error!(format!("could not read signature: {}", err)),
                }
            });
            false
        }
        Msg::SignatureLoaded(key, uri) => {
            component.state.set_text(key, uri);
            true
        }
        Msg::ClearSignature(key) => {
            component.state.set_text(key, "");
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            let props = ctx.props();
            match submission::prepare(props.template, &component.state, &props.session) {
                Ok(prepared) => {
                    component.submitting = true;
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = client::submit_form(&prepared.token, &prepared.envelope).await;
                        link.send_message(Msg::Submitted(result));
                    });
                    true
                }
                Err(err) => {
                    run_effects(props, submission::on_failure(&err));
                    false
                }
            }
        }
        Msg::Submitted(result) => {
            component.submitting = false;
            let effects = match result {
                Ok(saved) => {
                    gloo_console::log!(format!("submitted {} as {}", saved.form_type, saved.id));
                    submission::on_success()
                }
                Err(err) => {
                    gloo_console::error!(format!("submit failed: {}", err));
                    submission::on_failure(&SubmitError::from(err))
                }
            };
            run_effects(ctx.props(), effects);
            true
        }
        Msg::Print => {
            print_page();
            false
        }
        Msg::Back => {
            ctx.props()
                .on_navigate
                .emit(submission::Destination::Landing);
            false
        }
    }
}
