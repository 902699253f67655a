use crate::error::ApiError;
use crate::services::auth::sessions::{self, SessionRep};
use crate::state::AppState;
use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use log::warn;

/// Extractor for handlers that require a signed-in rep.
///
/// Reads `Authorization: Bearer <token>` and resolves it against the
/// `sessions` table. Missing, unknown and expired tokens all answer 401.
#[derive(Debug, Clone)]
pub struct AuthenticatedRep {
    pub rep_id: String,
    pub email: String,
    pub token: String,
}

impl FromRequest for AuthenticatedRep {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = bearer_token(req);
        let path = req.path().to_string();

        Box::pin(async move {
            let state = state
                .ok_or_else(|| ApiError::Internal("application state is not configured".into()))?;
            let Some(token) = token else {
                warn!("Rejected {}: missing bearer token", path);
                return Err(ApiError::Unauthorized("Authentication required".into()));
            };

            let lookup_token = token.clone();
            let rep = state
                .db
                .call(move |conn| sessions::lookup(conn, &lookup_token))
                .await?;

            match rep {
                Some(SessionRep { rep_id, email }) => Ok(AuthenticatedRep {
                    rep_id,
                    email,
                    token,
                }),
                None => {
                    warn!("Rejected {}: unknown or expired token", path);
                    Err(ApiError::Unauthorized(
                        "Your session has expired. Please log in again.".into(),
                    ))
                }
            }
        })
    }
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn bearer_scheme_is_case_insensitive() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "bearer abc123"))
            .to_http_request();
        assert_eq!(bearer_token(&req), Some("abc123".into()));
    }

    #[test]
    fn other_schemes_and_blank_tokens_are_ignored() {
        let basic = TestRequest::default()
            .insert_header((AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_http_request();
        assert_eq!(bearer_token(&basic), None);

        let blank = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer   "))
            .to_http_request();
        assert_eq!(bearer_token(&blank), None);

        let missing = TestRequest::default().to_http_request();
        assert_eq!(bearer_token(&missing), None);
    }
}
