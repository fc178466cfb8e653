//! Telegram Login Widget authentication strategy.
//!
//! This crate orchestrates a full authentication attempt against the
//! Telegram Login Widget protocol: it validates the signed redirect fields
//! (via [`tglogin_auth`]), normalizes them into a passport-style profile,
//! hands the profile to an application-supplied verification callback, and
//! maps the callback's report into exactly one terminal
//! [`AuthOutcome`](outcome::AuthOutcome): success, failure, or error.
//!
//! # Usage
//!
//! ```rust
//! use tglogin_core::{LoginRequest, StrategyOptions, TelegramStrategy, Verifier};
//!
//! #[derive(Debug)]
//! struct User { id: String }
//!
//! let strategy = TelegramStrategy::new(
//!     StrategyOptions::new("123456:ABC-DEF1234ghIkl"),
//!     Verifier::from_fn(|profile, sink| {
//!         // Look up or create the application user, then report exactly once.
//!         let _ = sink.accept(User { id: profile.id.clone() }, None);
//!     }),
//! ).unwrap();
//!
//! // The hosting framework builds a LoginRequest from the incoming redirect
//! // and awaits `strategy.authenticate(&request)` for the outcome.
//! # let _ = strategy.name();
//! ```
//!
//! # Modules
//!
//! - [`error`] - Strategy error types
//! - [`latch`] - Single-fulfillment result latch bridging callback and await
//! - [`options`] - Strategy configuration
//! - [`outcome`] - Terminal authentication outcomes
//! - [`profile`] - Normalized identity profile
//! - [`request`] - Incoming request abstraction
//! - [`strategy`] - The authentication orchestrator
//! - [`verify`] - Verification callback variants and result sink

pub mod error;
pub mod latch;
pub mod options;
pub mod outcome;
pub mod profile;
pub mod request;
pub mod strategy;
pub mod verify;

pub use error::StrategyError;
pub use latch::LatchError;
pub use options::{DEFAULT_QUERY_EXPIRATION, StrategyOptions};
pub use outcome::AuthOutcome;
pub use profile::{PROVIDER, ProfileName, ProfilePhoto, TelegramProfile, normalize_profile};
pub use request::LoginRequest;
pub use strategy::TelegramStrategy;
pub use verify::{Verifier, VerifySink};
