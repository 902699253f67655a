//! # Forms Service Module
//!
//! Stores and serves submitted intake and contract forms. Records are kept
//! schema-free: whatever field set a template produced is persisted as JSON
//! and returned unchanged, so the data browser derives its columns from the
//! records themselves.
//!
//! ## Registered Routes (under `/api/forms`, all bearer-authenticated):
//!
//! *   **`POST /`**: `{formType, title, fields}` → `201` with the stored record.
//! *   **`GET /type/{form_type}?page=&limit=`**: `{data, count}`, newest first.
//! *   **`GET /{id}`**: a single record, `404` if absent.
//! *   **`POST /delete/{id}`**: removes a record, `404` if absent.

mod create;
mod delete;
mod get;
mod list;
mod store;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/forms";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("/type/{form_type}", get().to(list::process))
        .route("/delete/{id}", post().to(delete::process))
        .route("/{id}", get().to(get::process))
}
