use crate::error::ApiError;
use crate::services::auth::extractor::AuthenticatedRep;
use crate::services::forms::store;
use crate::state::AppState;
use actix_web::{web, HttpResponse};

/// Actix web handler for `GET /api/forms/{id}`.
///
/// # Returns
/// - `200 OK` with the `FormSubmission`.
/// - `404 Not Found` when no record has that id.
pub async fn process(
    _rep: AuthenticatedRep,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let lookup_id = id.clone();
    match state.db.call(move |conn| store::find(conn, &lookup_id)).await? {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Err(ApiError::NotFound(format!("Form {} not found", id))),
    }
}
