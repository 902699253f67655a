use crate::error::ApiError;
use crate::services::auth::{password, reps, sessions};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::{RegisterRequest, TokenResponse};
use log::info;
use regex::Regex;
use std::sync::OnceLock;

const MIN_PASSWORD_LEN: usize = 8;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles")
    })
}

/// Actix web handler for `POST /api/auth/register`. Creates a rep account
/// and signs it in.
///
/// # Arguments
/// * `payload` - `{email, password, name}`; `name` may be omitted.
///
/// # Returns
/// - `201 Created` with `{token}`.
/// - `400 Bad Request` for an empty or malformed email, or a password shorter
///   than eight characters.
/// - `409 Conflict` when the email is already registered.
pub async fn process(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let RegisterRequest {
        email,
        password,
        name,
    } = payload.into_inner();
    let email = email.trim().to_string();

    if email.is_empty() || password.is_empty() {
        return Err(ApiError::BadRequest(
            "Email and password are required".into(),
        ));
    }
    if !email_pattern().is_match(&email) {
        return Err(ApiError::BadRequest(format!("{} is not a valid email", email)));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    let ttl = state.session_ttl;
    let token = state
        .db
        .call(move |conn| {
            let hash = password::hash_password(&password)?;
            let rep = reps::insert(conn, &email, name.trim(), &hash)?;
            info!("Registered rep {}", rep.email);
            sessions::create(conn, &rep.id, ttl)
        })
        .await?;

    Ok(HttpResponse::Created().json(TokenResponse { token: Some(token) }))
}

/// Creates `email` with `password` unless an account already exists.
/// Used for the seed account configured through the environment.
pub fn ensure_account(
    conn: &rusqlite::Connection,
    email: &str,
    password: &str,
) -> Result<bool, ApiError> {
    if reps::find_by_email(conn, email)?.is_some() {
        return Ok(false);
    }
    let hash = password::hash_password(password)?;
    reps::insert(conn, email, "Administrator", &hash)?;
    Ok(true)
}
