//! Normalized identity profile.
//!
//! Telegram's raw redirect fields are normalized into the passport-style
//! profile shape (provider, id, displayName, name, photos) while every raw
//! field is preserved alongside for backward compatibility. Serialization
//! uses camelCase names and flattens the raw fields to match the original
//! wire shape.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The provider tag carried by every normalized profile.
pub const PROVIDER: &str = "telegram";

/// Structured name split out of the raw fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileName {
    /// The `first_name` field, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    /// The `last_name` field, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
}

/// A single profile photo reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePhoto {
    /// The photo URL.
    pub value: String,
}

/// A normalized Telegram identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelegramProfile {
    /// Always [`PROVIDER`].
    pub provider: String,
    /// The numeric Telegram user id, as the decimal string Telegram sent.
    pub id: String,
    /// The `username` field, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Structured given/family name.
    pub name: ProfileName,
    /// Zero or one photo references, from `photo_url`.
    pub photos: Vec<ProfilePhoto>,
    /// Every raw redirect field, preserved unmodified.
    #[serde(flatten)]
    pub raw: HashMap<String, String>,
}

/// Normalize raw redirect fields into a [`TelegramProfile`].
///
/// Pure and total: missing optional fields are simply omitted from the
/// derived sub-structures, and the input map is never mutated.
#[must_use]
pub fn normalize_profile(fields: &HashMap<String, String>) -> TelegramProfile {
    TelegramProfile {
        provider: PROVIDER.to_owned(),
        id: fields.get("id").cloned().unwrap_or_default(),
        display_name: fields.get("username").cloned(),
        name: ProfileName {
            given_name: fields.get("first_name").cloned(),
            family_name: fields.get("last_name").cloned(),
        },
        photos: fields
            .get("photo_url")
            .map(|url| ProfilePhoto { value: url.clone() })
            .into_iter()
            .collect(),
        raw: fields.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_should_normalize_full_profile() {
        let profile = normalize_profile(&fields(&[
            ("id", "42"),
            ("first_name", "Ada"),
            ("last_name", "Lovelace"),
            ("username", "adal"),
            ("photo_url", "https://t.me/i/userpic/320/adal.jpg"),
            ("auth_date", "1700000000"),
            ("hash", "abc"),
        ]));

        assert_eq!(profile.provider, "telegram");
        assert_eq!(profile.id, "42");
        assert_eq!(profile.display_name.as_deref(), Some("adal"));
        assert_eq!(profile.name.given_name.as_deref(), Some("Ada"));
        assert_eq!(profile.name.family_name.as_deref(), Some("Lovelace"));
        assert_eq!(profile.photos.len(), 1);
        assert_eq!(profile.photos[0].value, "https://t.me/i/userpic/320/adal.jpg");
    }

    #[test]
    fn test_should_omit_missing_optional_fields() {
        let profile = normalize_profile(&fields(&[("id", "42"), ("auth_date", "1700000000")]));

        assert!(profile.display_name.is_none());
        assert!(profile.name.given_name.is_none());
        assert!(profile.name.family_name.is_none());
        assert!(profile.photos.is_empty());
    }

    #[test]
    fn test_should_preserve_raw_fields() {
        let input = fields(&[("id", "42"), ("auth_date", "1700000000"), ("hash", "abc")]);
        let profile = normalize_profile(&input);
        assert_eq!(profile.raw, input);
    }

    #[test]
    fn test_should_not_mutate_input() {
        let input = fields(&[("id", "42"), ("username", "adal")]);
        let before = input.clone();
        let _profile = normalize_profile(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_should_serialize_passport_compatible_shape() {
        let profile = normalize_profile(&fields(&[
            ("id", "42"),
            ("first_name", "Ada"),
            ("username", "adal"),
        ]));

        let json = serde_json::to_value(&profile).expect("test serialize");
        assert_eq!(json["provider"], "telegram");
        assert_eq!(json["displayName"], "adal");
        assert_eq!(json["name"]["givenName"], "Ada");
        // Raw fields are flattened alongside the normalized ones.
        assert_eq!(json["first_name"], "Ada");
        assert_eq!(json["username"], "adal");
    }
}
