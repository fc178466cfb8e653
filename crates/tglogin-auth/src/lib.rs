//! Telegram Login Widget signature verification.
//!
//! This crate implements the verification side of the Telegram Login Widget
//! protocol: given the key/value fields Telegram attaches to the login
//! redirect and the bot token shared with Telegram, it decides whether the
//! fields are an authentic, time-valid assertion from Telegram.
//!
//! # Overview
//!
//! Telegram signs the login data with `HMAC-SHA256(SHA-256(bot_token), data)`
//! where `data` is a newline-joined, lexicographically sorted list of
//! `name=value` pairs over a fixed field whitelist. This crate reconstructs
//! that canonical data string from the untrusted fields, recomputes the
//! digest with the locally derived key, and compares it against the `hash`
//! field in constant time.
//!
//! # Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use tglogin_auth::{WidgetSecret, build_canonical_data, compute_login_hash, validate_login};
//!
//! let secret = WidgetSecret::derive("123456:ABC-DEF1234ghIkl");
//!
//! let mut fields = HashMap::new();
//! fields.insert("id".to_owned(), "42".to_owned());
//! fields.insert("auth_date".to_owned(), "1700000000".to_owned());
//! let hash = compute_login_hash(&secret, &build_canonical_data(&fields));
//! fields.insert("hash".to_owned(), hash);
//!
//! assert!(validate_login(&fields, &secret, 86400, 1_700_000_100).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical data string construction over the signed-field whitelist
//! - [`error`] - Validation error types
//! - [`secret`] - Bot-token key derivation
//! - [`validate`] - Main validation logic (presence, freshness, signature)

pub mod canonical;
pub mod error;
pub mod secret;
pub mod validate;

pub use canonical::{SIGNED_FIELDS, build_canonical_data};
pub use error::ValidationError;
pub use secret::WidgetSecret;
pub use validate::{NO_EXPIRATION, compute_login_hash, validate_login};
