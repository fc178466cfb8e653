//! Bot-token key derivation.
//!
//! Telegram does not use the bot token directly as the HMAC key: the key is
//! `SHA-256(bot_token)`. [`WidgetSecret`] performs that derivation once and
//! holds the result as opaque bytes, so per-request validation never re-hashes
//! the token.

use std::fmt;

use sha2::{Digest, Sha256};

/// The HMAC key derived from a bot token.
///
/// Derive once at configuration time and reuse for every validation. The raw
/// key bytes stay private to this crate; `Debug` output is redacted.
///
/// # Examples
///
/// ```
/// use tglogin_auth::WidgetSecret;
///
/// let secret = WidgetSecret::derive("123456:ABC-DEF1234ghIkl");
/// assert_eq!(format!("{secret:?}"), "WidgetSecret(..)");
/// ```
#[derive(Clone)]
pub struct WidgetSecret([u8; 32]);

impl WidgetSecret {
    /// Derive the HMAC key from a bot token: `SHA-256(bot_token)`.
    #[must_use]
    pub fn derive(bot_token: &str) -> Self {
        Self(Sha256::digest(bot_token.as_bytes()).into())
    }

    /// The derived key bytes, for use as an HMAC key.
    pub(crate) fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for WidgetSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WidgetSecret(..)")
    }
}
