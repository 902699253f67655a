//! # Login Service
//!
//! ## Workflow
//!
//! 1.  **Input**: email (trimmed, case-insensitive) and password, both required.
//! 2.  **Verification**: the rep is looked up and the password checked against
//!     its argon2 hash. Unknown email and wrong password give the same `401`.
//! 3.  **Session**: a fresh token is stored in `sessions` with the configured
//!     lifetime; expired rows are purged on the way.
//! 4.  **Response**: `200 OK` with `{token}`.

use crate::error::ApiError;
use crate::services::auth::{password, reps, sessions};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::{LoginRequest, TokenResponse};
use log::{info, warn};

/// Actix web handler for `POST /api/auth/login`.
///
/// # Arguments
/// * `state` - Shared state; provides the database and the session lifetime.
/// * `payload` - `{email, password}`.
///
/// # Returns
/// - `200 OK` with `{token}`.
/// - `400 Bad Request` when either value is empty.
/// - `401 Unauthorized` on unknown email or wrong password.
pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let LoginRequest { email, password } = payload.into_inner();
    let email = email.trim().to_string();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::BadRequest(
            "Email and password are required".into(),
        ));
    }

    let ttl = state.session_ttl;
    let attempted = email.clone();
    let token = state
        .db
        .call(move |conn| {
            let Some(rep) = reps::find_by_email(conn, &email)? else {
                return Ok(None);
            };
            if !password::verify_password(&password, &rep.password_hash)? {
                return Ok(None);
            }
            info!("Rep {} ({}) logged in", rep.email, rep.name);
            sessions::create(conn, &rep.id, ttl).map(Some)
        })
        .await?;

    match token {
        Some(token) => Ok(HttpResponse::Ok().json(TokenResponse { token: Some(token) })),
        None => {
            warn!("Failed login for {}", attempted);
            Err(ApiError::Unauthorized("Invalid email or password".into()))
        }
    }
}
