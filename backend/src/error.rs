//! Error type returned by every handler.
//!
//! Each variant maps to one HTTP status and is rendered as a JSON
//! `{"message": ...}` body, the shape the frontend client reads error text
//! from. Server-side failures are logged with their details and answered
//! with a generic message.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::requests::MessageBody;
use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if status.is_server_error() {
            error!("{}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        HttpResponse::build(status).json(MessageBody::new(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn client_errors_keep_their_message() {
        let response = ApiError::NotFound("Form not found".into()).error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body()).await.unwrap();
        let body: MessageBody = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.message, "Form not found");
    }

    #[actix_web::test]
    async fn server_errors_hide_details() {
        let response = ApiError::Internal("disk on fire".into()).error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body()).await.unwrap();
        let body: MessageBody = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.message, "Internal server error");
    }
}
