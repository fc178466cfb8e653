//! The authentication orchestrator.
//!
//! [`TelegramStrategy`] sequences one authentication attempt:
//!
//! 1. Extract the login fields from the request (query string on GET, body
//!    otherwise).
//! 2. Run the query validator against the pre-derived widget secret. Any
//!    validation failure becomes an immediate [`AuthOutcome::Failure`] with
//!    its status code; the application callback is never invoked.
//! 3. Normalize the fields into a [`TelegramProfile`] and invoke the
//!    verification callback exactly once with a fresh result sink.
//! 4. Await the sink's single fulfillment and map it to the terminal
//!    outcome: error → [`AuthOutcome::Error`], rejection →
//!    [`AuthOutcome::Failure`], accepted user → [`AuthOutcome::Success`].
//!
//! The strategy holds no per-attempt state; concurrent attempts share only
//! the immutable options and derived key.

use chrono::Utc;
use http::StatusCode;
use tracing::debug;

use tglogin_auth::{WidgetSecret, validate_login};

use crate::error::StrategyError;
use crate::latch::{LatchError, latch};
use crate::options::StrategyOptions;
use crate::outcome::AuthOutcome;
use crate::profile::normalize_profile;
use crate::request::LoginRequest;
use crate::verify::{Verdict, Verifier, VerifySink};

/// The strategy name hosting frameworks register this strategy under.
const STRATEGY_NAME: &str = "telegram";

/// Telegram Login Widget authentication strategy.
///
/// Construct once with the bot token and the application's verification
/// callback, then call [`authenticate`](Self::authenticate) for every
/// incoming login redirect. `U` is the application-level user type produced
/// by the callback.
#[derive(Debug)]
pub struct TelegramStrategy<U> {
    options: StrategyOptions,
    secret: WidgetSecret,
    verify: Verifier<U>,
}

impl<U> TelegramStrategy<U> {
    /// Create a strategy from options and a verification callback.
    ///
    /// Derives the widget secret from the bot token exactly once; every
    /// subsequent validation reuses it.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::MissingBotToken`] if the bot token is empty.
    pub fn new(options: StrategyOptions, verify: Verifier<U>) -> Result<Self, StrategyError> {
        if options.bot_token.is_empty() {
            return Err(StrategyError::MissingBotToken);
        }

        let secret = WidgetSecret::derive(&options.bot_token);
        Ok(Self {
            options,
            secret,
            verify,
        })
    }

    /// The name hosting frameworks register this strategy under.
    #[must_use]
    pub fn name(&self) -> &'static str {
        STRATEGY_NAME
    }

    /// The strategy's configuration.
    #[must_use]
    pub fn options(&self) -> &StrategyOptions {
        &self.options
    }

    /// Run one authentication attempt and produce its terminal outcome.
    ///
    /// Suspends only while waiting for the verification callback to report;
    /// the callback may complete its sink synchronously or from a spawned
    /// task. Always resolves to exactly one outcome.
    pub async fn authenticate(&self, request: &LoginRequest) -> AuthOutcome<U> {
        self.authenticate_at(request, Utc::now().timestamp()).await
    }

    /// [`authenticate`](Self::authenticate) with an injected clock value,
    /// for deterministic tests.
    pub(crate) async fn authenticate_at(
        &self,
        request: &LoginRequest,
        now: i64,
    ) -> AuthOutcome<U> {
        let fields = request.credential_fields();

        if let Err(err) = validate_login(fields, &self.secret, self.options.query_expiration, now)
        {
            debug!(%err, "Login validation failed");
            return AuthOutcome::from_validation(&err);
        }

        let profile = normalize_profile(fields);
        let (completer, completion) = latch();
        self.verify
            .invoke(request, profile, VerifySink::new(completer));

        match completion.wait().await {
            Ok(Verdict::Accepted { user, info }) => AuthOutcome::Success { user, info },
            Ok(Verdict::Rejected { info }) => AuthOutcome::Failure {
                message: info,
                status: StatusCode::UNAUTHORIZED,
            },
            Ok(Verdict::Failed(cause)) => AuthOutcome::Error(StrategyError::Verify(cause)),
            Err(LatchError::Abandoned | LatchError::AlreadyCompleted) => {
                AuthOutcome::Error(StrategyError::VerifyAbandoned)
            }
        }
    }
}
