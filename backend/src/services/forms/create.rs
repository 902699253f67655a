//! # Form Submission Service
//!
//! Backs `POST /api/forms`, the endpoint every form view posts its envelope to.
//!
//! ## Workflow
//!
//! 1.  **Authentication**: `AuthenticatedRep` resolves the bearer token; the
//!     rep's email is recorded as `submitted_by`.
//! 2.  **Validation**: `formType` must be non-blank. A blank `title` falls back
//!     to the form type. The field map is not inspected.
//! 3.  **Persistence**: `store::insert` assigns an id, the `submitted` status and
//!     the current time, and writes the fields as JSON.
//! 4.  **Response**: `201 Created` with the stored `FormSubmission`.

use crate::error::ApiError;
use crate::services::auth::extractor::AuthenticatedRep;
use crate::services::forms::store;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::model::submission::FormEnvelope;
use log::info;

/// Actix web handler for `POST /api/forms`.
///
/// # Arguments
/// * `rep` - The signed-in rep, resolved from the bearer token.
/// * `state` - Shared state holding the database handle.
/// * `payload` - The `{formType, title, fields}` envelope. Fields are stored as
///   received; only `formType` is checked.
///
/// # Returns
/// - `201 Created` with the stored `FormSubmission`.
/// - `400 Bad Request` when `formType` is blank.
/// - `401 Unauthorized` without a valid token.
pub async fn process(
    rep: AuthenticatedRep,
    state: web::Data<AppState>,
    payload: web::Json<FormEnvelope>,
) -> Result<HttpResponse, ApiError> {
    let mut envelope = payload.into_inner();
    envelope.form_type = envelope.form_type.trim().to_string();
    envelope.title = envelope.title.trim().to_string();

    if envelope.form_type.is_empty() {
        return Err(ApiError::BadRequest("formType is required".into()));
    }
    if envelope.title.is_empty() {
        envelope.title = envelope.form_type.clone();
    }

    let submitted_by = rep.email.clone();
    let record = state
        .db
        .call(move |conn| store::insert(conn, envelope, &submitted_by))
        .await?;

    info!(
        "Rep {} submitted {} \"{}\" ({} fields) as {}",
        rep.email,
        record.form_type,
        record.title,
        record.fields.len(),
        record.id
    );
    Ok(HttpResponse::Created().json(record))
}
