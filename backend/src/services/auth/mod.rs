//! # Authentication Service Module
//!
//! Sales reps sign in with email and password and receive an opaque bearer
//! token. Tokens live in the `sessions` table with an expiry; every forms
//! endpoint resolves them through the `AuthenticatedRep` extractor.
//!
//! ## Registered Routes (under `/api/auth`):
//!
//! *   **`POST /login`**: `{email, password}` → `200 {token}`, or `401` on bad credentials.
//! *   **`POST /register`**: `{email, password, name}` → `201 {token}`, `409` if the email is taken.
//! *   **`POST /logout`**: revokes the caller's token.

pub mod extractor;
mod login;
mod logout;
mod password;
mod register;
mod reps;
mod sessions;

pub use register::ensure_account;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/auth";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/login", post().to(login::process))
        .route("/register", post().to(register::process))
        .route("/logout", post().to(logout::process))
}

/// Issues a session for an existing rep without going through the password
/// check. Test setup only.
#[cfg(test)]
pub(crate) fn create_test_session(
    conn: &rusqlite::Connection,
    email: &str,
) -> Result<String, crate::error::ApiError> {
    let rep = match reps::find_by_email(conn, email)? {
        Some(rep) => rep,
        None => reps::insert(conn, email, "Test Rep", "unused")?,
    };
    sessions::create(conn, &rep.id, chrono::Duration::hours(1))
}
