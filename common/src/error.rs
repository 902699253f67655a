use thiserror::Error;

/// Failure reported by the HTTP client when talking to the backend.
///
/// The HTTP status is kept so callers can tell an expired session (401) apart
/// from any other server error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    pub const GENERIC_MESSAGE: &'static str = "Something went wrong. Please try again.";

    /// Builds the error for a non-2xx response, preferring the `message`
    /// field of the body and falling back to a generic text.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| Self::GENERIC_MESSAGE.to_string());
        if status == 401 {
            ClientError::Unauthorized(message)
        } else {
            ClientError::Server { status, message }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized(_))
    }
}

/// Reasons a form cannot be submitted, in the order they are checked.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("Please fill in the required field: {0}")]
    MissingRequired(String),
    #[error("You are not logged in. Please log in and try again.")]
    MissingToken,
    #[error(transparent)]
    Client(#[from] ClientError),
}
