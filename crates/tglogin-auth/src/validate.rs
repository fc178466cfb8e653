//! Login data validation.
//!
//! This module implements the full verification flow for a login redirect's
//! fields:
//!
//! 1. Check that the required fields (`id`, `auth_date`, `hash`) are present.
//! 2. Check that `auth_date` is within the configured freshness window.
//! 3. Build the canonical data string over the signed-field whitelist.
//! 4. Compute `HMAC-SHA256(derived_key, canonical_data)` as lowercase hex.
//! 5. Compare the computed digest against the `hash` field using
//!    constant-time comparison.
//!
//! The main entry point is [`validate_login`]. It is a pure function over
//! the field map, the derived key, and an injected clock value, with no side
//! effects beyond debug-level tracing.

use std::collections::HashMap;

use hmac::{Hmac, KeyInit, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::canonical::build_canonical_data;
use crate::error::ValidationError;
use crate::secret::WidgetSecret;

type HmacSha256 = Hmac<Sha256>;

/// Freshness window value that disables the expiry check entirely.
pub const NO_EXPIRATION: i64 = -1;

/// Fields that must be present on every login redirect.
const REQUIRED_FIELDS: [&str; 3] = ["id", "auth_date", "hash"];

/// Compute the login digest for a canonical data string.
///
/// Returns `HMAC-SHA256(key, data)` as lowercase hex, the format Telegram
/// places in the `hash` field.
///
/// # Examples
///
/// ```
/// use tglogin_auth::{WidgetSecret, compute_login_hash};
///
/// let secret = WidgetSecret::derive("bot123");
/// let hash = compute_login_hash(&secret, "auth_date=1700000000\nfirst_name=Ann\nid=5");
/// assert_eq!(
///     hash,
///     "e1363cd78fcf25729282b148f01ee62d31995569365f259714b794da860064ee"
/// );
/// ```
#[must_use]
pub fn compute_login_hash(secret: &WidgetSecret, data: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can accept keys of any length");
    mac.update(data.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Validate a login redirect's fields against the derived key.
///
/// # Arguments
///
/// - `fields` - The untrusted field map from the redirect. Never mutated.
/// - `secret` - The key derived from the bot token.
/// - `query_expiration` - Maximum allowed age of `auth_date` in seconds.
///   [`NO_EXPIRATION`] (`-1`) disables the freshness check entirely,
///   including the `auth_date` parse.
/// - `now` - Current Unix timestamp in seconds, injected for testability.
///
/// # Errors
///
/// Returns [`ValidationError::MissingFields`] if `id`, `auth_date`, or
/// `hash` is absent, [`ValidationError::Outdated`] if `auth_date` fails to
/// parse or is older than the window, and [`ValidationError::HashMismatch`]
/// if the computed digest does not match the `hash` field.
pub fn validate_login(
    fields: &HashMap<String, String>,
    secret: &WidgetSecret,
    query_expiration: i64,
    now: i64,
) -> Result<(), ValidationError> {
    if REQUIRED_FIELDS
        .iter()
        .any(|name| fields.get(*name).is_none_or(|value| value.is_empty()))
    {
        debug!("Login data is missing a required field");
        return Err(ValidationError::MissingFields);
    }

    if query_expiration != NO_EXPIRATION {
        let auth_date: i64 = fields["auth_date"]
            .parse()
            .map_err(|_| ValidationError::Outdated)?;
        if now - auth_date > query_expiration {
            debug!(auth_date, now, query_expiration, "Login data is outdated");
            return Err(ValidationError::Outdated);
        }
    }

    let data = build_canonical_data(fields);
    let expected = compute_login_hash(secret, &data);
    let provided = &fields["hash"];

    debug!(data, "Built canonical login data");

    // Constant-time comparison to prevent timing attacks.
    if provided.as_bytes().ct_eq(expected.as_bytes()).into() {
        debug!("Login signature verification succeeded");
        Ok(())
    } else {
        debug!(%expected, %provided, "Login signature mismatch");
        Err(ValidationError::HashMismatch)
    }
}
