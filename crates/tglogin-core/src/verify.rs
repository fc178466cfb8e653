//! Verification callback variants and the result sink.
//!
//! Applications supply a verification callback that maps a normalized
//! [`TelegramProfile`] to an application-level user object or a rejection.
//! The callback receives a [`VerifySink`] and must eventually report exactly
//! one of accept / reject / error through it, either synchronously before
//! returning or later from a spawned task.
//!
//! Two call shapes exist, chosen once at construction as a [`Verifier`]
//! variant rather than inspected at call time: with or without the incoming
//! [`LoginRequest`] as additional context.

use std::fmt;

use tracing::debug;

use crate::latch::{Completer, LatchError};
use crate::profile::TelegramProfile;
use crate::request::LoginRequest;

/// What the verification callback decided, before outcome mapping.
#[derive(Debug)]
pub(crate) enum Verdict<U> {
    /// The application recognized the identity as `user`.
    Accepted {
        /// The application-level user object.
        user: U,
        /// Optional additional info for the hosting framework.
        info: Option<String>,
    },
    /// The application rejected the identity (no user).
    Rejected {
        /// Optional rejection info for the hosting framework.
        info: Option<String>,
    },
    /// The application hit an error while verifying.
    Failed(anyhow::Error),
}

/// The result handler handed to the verification callback.
///
/// Each reporting method completes the underlying single-fulfillment latch;
/// calling a second one (or the same one twice) is a programmer error and
/// returns [`LatchError::AlreadyCompleted`]; the first report wins.
pub struct VerifySink<U> {
    completer: Completer<Verdict<U>>,
}

impl<U> Clone for VerifySink<U> {
    fn clone(&self) -> Self {
        Self {
            completer: self.completer.clone(),
        }
    }
}

impl<U> fmt::Debug for VerifySink<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VerifySink(..)")
    }
}

impl<U> VerifySink<U> {
    pub(crate) fn new(completer: Completer<Verdict<U>>) -> Self {
        Self { completer }
    }

    /// Report a verified user, optionally with additional info.
    ///
    /// # Errors
    ///
    /// Returns [`LatchError::AlreadyCompleted`] if a result was reported before.
    pub fn accept(&self, user: U, info: Option<String>) -> Result<(), LatchError> {
        self.completer.complete(Verdict::Accepted { user, info })
    }

    /// Report that the identity is valid but not accepted by the application.
    ///
    /// # Errors
    ///
    /// Returns [`LatchError::AlreadyCompleted`] if a result was reported before.
    pub fn reject(&self, info: Option<String>) -> Result<(), LatchError> {
        self.completer.complete(Verdict::Rejected { info })
    }

    /// Report an application-level error.
    ///
    /// # Errors
    ///
    /// Returns [`LatchError::AlreadyCompleted`] if a result was reported before.
    pub fn error(&self, cause: impl Into<anyhow::Error>) -> Result<(), LatchError> {
        self.completer.complete(Verdict::Failed(cause.into()))
    }
}

/// Callback invoked with the profile only.
pub type ProfileFn<U> = dyn Fn(TelegramProfile, VerifySink<U>) + Send + Sync;

/// Callback invoked with the incoming request as additional context.
pub type RequestFn<U> = dyn Fn(&LoginRequest, TelegramProfile, VerifySink<U>) + Send + Sync;

/// The application-supplied verification callback.
///
/// The variant fixes the call shape once at construction; the strategy picks
/// the matching invocation instead of inspecting anything at call time.
pub enum Verifier<U> {
    /// `verify(profile, sink)`
    Profile(Box<ProfileFn<U>>),
    /// `verify(request, profile, sink)`
    WithRequest(Box<RequestFn<U>>),
}

impl<U> fmt::Debug for Verifier<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Profile(_) => f.write_str("Verifier::Profile(..)"),
            Self::WithRequest(_) => f.write_str("Verifier::WithRequest(..)"),
        }
    }
}

impl<U> Verifier<U> {
    /// Wrap a `verify(profile, sink)` callback.
    #[must_use]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(TelegramProfile, VerifySink<U>) + Send + Sync + 'static,
    {
        Self::Profile(Box::new(f))
    }

    /// Wrap a `verify(request, profile, sink)` callback that also receives
    /// the incoming request.
    #[must_use]
    pub fn with_request<F>(f: F) -> Self
    where
        F: Fn(&LoginRequest, TelegramProfile, VerifySink<U>) + Send + Sync + 'static,
    {
        Self::WithRequest(Box::new(f))
    }

    /// Invoke the callback with the shape fixed at construction.
    pub(crate) fn invoke(
        &self,
        request: &LoginRequest,
        profile: TelegramProfile,
        sink: VerifySink<U>,
    ) {
        debug!(id = %profile.id, "Invoking verification callback");
        match self {
            Self::Profile(f) => f(profile, sink),
            Self::WithRequest(f) => f(request, profile, sink),
        }
    }
}
