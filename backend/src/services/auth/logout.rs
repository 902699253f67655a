use crate::error::ApiError;
use crate::services::auth::extractor::AuthenticatedRep;
use crate::services::auth::sessions;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::MessageBody;
use log::info;

/// `POST /api/auth/logout`: revokes the bearer token of the caller.
///
/// # Returns
/// - `200 OK` with `{message}`. Other sessions of the same rep stay valid.
pub async fn process(
    rep: AuthenticatedRep,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let token = rep.token.clone();
    state
        .db
        .call(move |conn| sessions::revoke(conn, &token))
        .await?;
    info!("Rep {} logged out", rep.email);
    Ok(HttpResponse::Ok().json(MessageBody::new("Logged out")))
}
