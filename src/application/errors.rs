use crate::core::user::decider::register::decide::DecideError;
use thiserror::Error;

/// The only error surfaced by registration. `reason` names the rule that failed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("registration rejected: {reason}")]
pub struct RegistrationError {
    pub reason: String,
}

impl From<DecideError> for RegistrationError {
    fn from(error: DecideError) -> Self {
        Self {
            reason: error.to_string(),
        }
    }
}
