//! Strategy configuration.

use tglogin_auth::NO_EXPIRATION;

/// Default maximum age of login data, in seconds (one day).
pub const DEFAULT_QUERY_EXPIRATION: i64 = 86400;

/// Configuration for [`crate::TelegramStrategy`].
///
/// Immutable once the strategy is constructed.
///
/// # Examples
///
/// ```
/// use tglogin_core::StrategyOptions;
///
/// let options = StrategyOptions::new("123456:ABC-DEF1234ghIkl").with_query_expiration(3600);
/// assert_eq!(options.query_expiration, 3600);
/// ```
#[derive(Debug, Clone)]
pub struct StrategyOptions {
    /// The bot token obtained from @BotFather. Required, non-empty.
    pub bot_token: String,
    /// Maximum allowed age of the `auth_date` field in seconds.
    /// `-1` disables the freshness check.
    pub query_expiration: i64,
}

impl StrategyOptions {
    /// Create options for the given bot token with the default freshness window.
    #[must_use]
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            query_expiration: DEFAULT_QUERY_EXPIRATION,
        }
    }

    /// Override the freshness window, in seconds.
    ///
    /// Pass `-1` to accept login data of any age.
    #[must_use]
    pub fn with_query_expiration(mut self, seconds: i64) -> Self {
        self.query_expiration = seconds;
        self
    }

    /// Disable the freshness check entirely.
    #[must_use]
    pub fn without_query_expiration(self) -> Self {
        self.with_query_expiration(NO_EXPIRATION)
    }
}
