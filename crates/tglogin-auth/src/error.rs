//! Error types for login data validation.
//!
//! All validation failures are represented by [`ValidationError`]. The
//! `Display` strings double as the user-facing failure messages reported to
//! the hosting framework, so they are stable protocol surface.

/// Reasons a set of login redirect fields can fail validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    /// One of the required fields (`id`, `auth_date`, `hash`) is absent.
    #[error("Missing some important data")]
    MissingFields,

    /// The `auth_date` field is older than the configured freshness window,
    /// or could not be parsed as a Unix timestamp.
    #[error("Data is outdated")]
    Outdated,

    /// The computed digest does not match the provided `hash` field.
    #[error("Hash validation failed")]
    HashMismatch,
}
