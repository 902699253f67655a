//! HTTP client for the intake API.
//!
//! Every call takes the bearer token explicitly from the caller's `Session`
//! and returns a `ClientError` that keeps the HTTP status, so views can treat
//! a 401 differently from other failures. No retries, batching or caching.

use common::error::ClientError;
use common::model::submission::{FormEnvelope, FormSubmission};
use common::requests::{
    LoginRequest, MessageBody, Page, RegisterRequest, TokenResponse, DEFAULT_PAGE_SIZE,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// API base URL, overridable at build time with `INTAKE_API_URL`.
pub const API_BASE: &str = match option_env!("INTAKE_API_URL") {
    Some(url) => url,
    None => "/api",
};

pub const PAGE_SIZE: u32 = DEFAULT_PAGE_SIZE;

fn url(path: &str) -> String {
    format!("{}{}", API_BASE.trim_end_matches('/'), path)
}

fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", token))
}

/// Error for a non-2xx response, using the body's `message` when present.
async fn error_from(response: Response) -> ClientError {
    let status = response.status();
    let message = response.json::<MessageBody>().await.ok().map(|b| b.message);
    ClientError::from_status(status, message)
}

async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, ClientError> {
    let request = request.map_err(|e| ClientError::Network(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;
    if response.ok() {
        Ok(response)
    } else {
        Err(error_from(response).await)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

/// `POST /forms` with the submission envelope.
pub async fn submit_form(
    token: &str,
    envelope: &FormEnvelope,
) -> Result<FormSubmission, ClientError> {
    let request = authorized(Request::post(&url("/forms")), token).json(envelope);
    decode(send(request).await?).await
}

/// `GET /forms/type/{form_type}?page=&limit=`.
pub async fn fetch_page(
    token: &str,
    form_type: &str,
    page: u32,
    limit: u32,
) -> Result<Page<FormSubmission>, ClientError> {
    let page = page.to_string();
    let limit = limit.to_string();
    let request = authorized(Request::get(&url(&format!("/forms/type/{}", form_type))), token)
        .query([("page", page.as_str()), ("limit", limit.as_str())])
        .build();
    decode(send(request).await?).await
}

/// `POST /forms/delete/{id}`. The body of a successful answer is ignored.
pub async fn delete_form(token: &str, id: &str) -> Result<(), ClientError> {
    let request = authorized(Request::post(&url(&format!("/forms/delete/{}", id))), token).build();
    send(request).await.map(|_| ())
}

/// `POST /auth/login`. Returns the token from the body, or `None` when the
/// server answered OK without one.
pub async fn login(email: &str, password: &str) -> Result<Option<String>, ClientError> {
    let request = Request::post(&url("/auth/login")).json(&LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    });
    token_from(send(request).await?).await
}

/// `POST /auth/register`, signing the new account in.
pub async fn register(
    email: &str,
    password: &str,
    name: &str,
) -> Result<Option<String>, ClientError> {
    let request = Request::post(&url("/auth/register")).json(&RegisterRequest {
        email: email.to_string(),
        password: password.to_string(),
        name: name.to_string(),
    });
    token_from(send(request).await?).await
}

/// `POST /auth/logout`. Best effort; the caller clears the local token anyway.
pub async fn logout(token: &str) -> Result<(), ClientError> {
    let request = authorized(Request::post(&url("/auth/logout")), token).build();
    send(request).await.map(|_| ())
}

async fn token_from(response: Response) -> Result<Option<String>, ClientError> {
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))?;
    TokenResponse::parse_body(&body).map_err(|e| ClientError::Decode(e.to_string()))
}
