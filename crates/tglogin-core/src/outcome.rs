//! Terminal authentication outcomes.

use http::StatusCode;
use tglogin_auth::ValidationError;

use crate::error::StrategyError;

/// The result of one authentication attempt.
///
/// Exactly one outcome is produced per attempt. Validation failures and
/// application rejections are data, not errors; only unexpected faults and
/// the callback's error channel surface as [`AuthOutcome::Error`].
#[derive(Debug)]
pub enum AuthOutcome<U> {
    /// The identity was verified and accepted by the application.
    Success {
        /// The application-level user object.
        user: U,
        /// Optional additional info from the verification callback.
        info: Option<String>,
    },
    /// The attempt was rejected, either by validation or by the application.
    Failure {
        /// A human-readable failure message, when one exists.
        message: Option<String>,
        /// HTTP-style status hint for the hosting framework.
        status: StatusCode,
    },
    /// The attempt failed with an unexpected fault.
    Error(StrategyError),
}

impl<U> AuthOutcome<U> {
    /// Build the failure outcome for a validation error, with the status
    /// code the protocol assigns to it: 403 for a signature mismatch, 400
    /// for everything else.
    #[must_use]
    pub fn from_validation(err: &ValidationError) -> Self {
        let status = match err {
            ValidationError::HashMismatch => StatusCode::FORBIDDEN,
            ValidationError::MissingFields | ValidationError::Outdated => StatusCode::BAD_REQUEST,
        };
        Self::Failure {
            message: Some(err.to_string()),
            status,
        }
    }

    /// Whether this is a [`AuthOutcome::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_map_missing_fields_to_400() {
        let outcome: AuthOutcome<()> = AuthOutcome::from_validation(&ValidationError::MissingFields);
        match outcome {
            AuthOutcome::Failure { message, status } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message.as_deref(), Some("Missing some important data"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_should_map_outdated_to_400() {
        let outcome: AuthOutcome<()> = AuthOutcome::from_validation(&ValidationError::Outdated);
        match outcome {
            AuthOutcome::Failure { message, status } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message.as_deref(), Some("Data is outdated"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_should_map_hash_mismatch_to_403() {
        let outcome: AuthOutcome<()> = AuthOutcome::from_validation(&ValidationError::HashMismatch);
        match outcome {
            AuthOutcome::Failure { message, status } => {
                assert_eq!(status, StatusCode::FORBIDDEN);
                assert_eq!(message.as_deref(), Some("Hash validation failed"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
