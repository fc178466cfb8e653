//! Error types for the authentication strategy.

/// Faults raised by the strategy itself, as opposed to validation failures,
/// which are reported as [`crate::AuthOutcome::Failure`] data.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    /// The strategy was constructed without a bot token.
    #[error("bot_token is required")]
    MissingBotToken,

    /// The verification callback dropped its sink without reporting a result.
    #[error("verification callback dropped without reporting a result")]
    VerifyAbandoned,

    /// The verification callback reported an application-level error.
    #[error(transparent)]
    Verify(#[from] anyhow::Error),
}
