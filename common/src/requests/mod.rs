use serde::{Deserialize, Serialize};

/// Default and upper bound for `limit` on paginated listings.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: String,
}

/// Body of a successful login or register. The server always fills `token`;
/// clients also accept `{}`, `{"token": null}` and an empty body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub token: Option<String>,
}

impl TokenResponse {
    /// Token carried by a 2xx login body, `None` when there is none to use.
    /// Only malformed JSON is an error.
    pub fn parse_body(body: &str) -> Result<Option<String>, serde_json::Error> {
        if body.trim().is_empty() {
            return Ok(None);
        }
        let response: TokenResponse = serde_json::from_str(body)?;
        Ok(response.token.filter(|t| !t.trim().is_empty()))
    }
}

/// Body of every error response and of plain acknowledgements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `?page=&limit=` query of the listing endpoint. Pages are 1-based.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PageQuery {
    /// Clamps `page` to at least 1 and `limit` into `1..=MAX_PAGE_SIZE`.
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            limit: self.limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

/// One page of a listing together with the total number of matching rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_defaults_and_clamping() {
        let q: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!((q.page, q.limit), (1, DEFAULT_PAGE_SIZE));

        let q = PageQuery { page: 0, limit: 1000 }.normalized();
        assert_eq!((q.page, q.limit), (1, MAX_PAGE_SIZE));
    }

    #[test]
    fn login_bodies_without_a_token_are_accepted() {
        for body in ["", "  ", "{}", r#"{"token":null}"#, r#"{"token":""}"#] {
            assert_eq!(TokenResponse::parse_body(body).unwrap(), None, "body {:?}", body);
        }
        assert_eq!(
            TokenResponse::parse_body(r#"{"token":"abc123"}"#).unwrap(),
            Some("abc123".to_string())
        );
        assert!(TokenResponse::parse_body("<html>").is_err());
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(PageQuery { page: 1, limit: 10 }.offset(), 0);
        assert_eq!(PageQuery { page: 2, limit: 10 }.offset(), 10);
        assert_eq!(PageQuery { page: 3, limit: 25 }.offset(), 50);
    }
}
