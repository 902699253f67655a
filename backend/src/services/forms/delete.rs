//! # Form Deletion Service
//!
//! Backs `POST /api/forms/delete/{id}`. The data browser removes the row
//! from its view whatever this answers and relies on the next listing, so a
//! `404` for an already deleted record is harmless.

use crate::error::ApiError;
use crate::services::auth::extractor::AuthenticatedRep;
use crate::services::forms::store;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::MessageBody;
use log::info;

/// Actix web handler for `POST /api/forms/delete/{id}`.
///
/// # Arguments
/// * `rep` - The signed-in rep, logged with the deletion.
/// * `id` - Record id from the URL path.
///
/// # Returns
/// - `200 OK` with `{message}` once the row is gone.
/// - `404 Not Found` when no record has that id.
pub async fn process(
    rep: AuthenticatedRep,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let target = id.clone();
    let removed = state.db.call(move |conn| store::delete(conn, &target)).await?;

    if removed {
        info!("Rep {} deleted form {}", rep.email, id);
        Ok(HttpResponse::Ok().json(MessageBody::new("Form deleted")))
    } else {
        Err(ApiError::NotFound(format!("Form {} not found", id)))
    }
}
