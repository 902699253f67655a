//! Submit-time decisions of the form component, kept free of any browser API.
//!
//! The component asks `prepare` for the token and envelope to send. Only an
//! `Ok` may reach the network. Once the request settles, `on_success` /
//! `on_failure` describe what the UI does next as an ordered list of effects.

use crate::error::{ClientError, SubmitError};
use crate::form_state::FormState;
use crate::model::submission::FormEnvelope;
use crate::model::template::FormTemplate;
use crate::notification::Notification;
use crate::session::Session;

/// Delay before leaving the form after a success or a 401.
pub const NAVIGATE_DELAY_MS: u32 = 2_000;

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Landing,
    Login,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Notify(Notification),
    Navigate { to: Destination, after_ms: u32 },
}

/// A validated request ready to be posted.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSubmission {
    pub token: String,
    pub envelope: FormEnvelope,
}

/// Validates required fields first, then checks for a token.
pub fn prepare(
    template: &FormTemplate,
    state: &FormState,
    session: &Session,
) -> Result<PreparedSubmission, SubmitError> {
    state.validate(template)?;
    let token = session.token().ok_or(SubmitError::MissingToken)?;
    Ok(PreparedSubmission {
        token: token.to_string(),
        envelope: state.to_envelope(template),
    })
}

pub fn on_success() -> Vec<Effect> {
    vec![
        Effect::Notify(Notification::success(SUCCESS_MESSAGE)),
        Effect::Navigate {
            to: Destination::Landing,
            after_ms: NAVIGATE_DELAY_MS,
        },
    ]
}

/// Error notification for any failure; a 401 also sends the user back to
/// the login view after the usual delay.
pub fn on_failure(error: &SubmitError) -> Vec<Effect> {
    let mut effects = vec![Effect::Notify(Notification::error(error.to_string()))];
    let unauthorized = matches!(error, SubmitError::Client(ClientError::Unauthorized(_)));
    if unauthorized || *error == SubmitError::MissingToken {
        effects.push(Effect::Navigate {
            to: Destination::Login,
            after_ms: NAVIGATE_DELAY_MS,
        });
    }
    effects
}
