//! `localStorage` access for the bearer token. Only the app shell calls
//! these; everything below it receives a `Session`.

use common::session::{Session, TOKEN_STORAGE_KEY};
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_session() -> Session {
    local_storage()
        .and_then(|s| s.get_item(TOKEN_STORAGE_KEY).ok().flatten())
        .map(Session::with_token)
        .unwrap_or_default()
}

pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
            gloo_console::warn!("could not persist session token");
        }
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}
