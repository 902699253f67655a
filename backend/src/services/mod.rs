pub mod auth;
pub mod forms;

use crate::error::ApiError;
use actix_web::web;

/// Registers every API scope plus JSON and query extractor settings.
///
/// Malformed bodies and queries are answered through `ApiError` so clients
/// always receive a `{"message": ...}` body.
pub fn configure(cfg: &mut web::ServiceConfig, max_body_bytes: usize) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(max_body_bytes)
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .service(auth::configure_routes())
    .service(forms::configure_routes());
}
