use base64::{engine::general_purpose, Engine as _};
use common::submission::Effect;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use super::props::FormProps;

/// Runs submit effects in order. Navigation waits `after_ms` first.
pub fn run_effects(props: &FormProps, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::Notify(notification) => props.on_notify.emit(notification),
            Effect::Navigate { to, after_ms } => {
                let on_navigate = props.on_navigate.clone();
                spawn_local(async move {
                    TimeoutFuture::new(after_ms).await;
                    on_navigate.emit(to);
                });
            }
        }
    }
}

pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(bytes))
}

pub fn print_page() {
    if let Some(window) = web_sys::window() {
        if window.print().is_err() {
            gloo_console::warn!("print dialog unavailable");
        }
    }
}
