//! Canonical data string construction for login widget signatures.
//!
//! Telegram computes the login signature over a canonical representation of
//! the redirect fields:
//!
//! ```text
//! auth_date=<value>\n
//! first_name=<value>\n
//! id=<value>
//! ```
//!
//! Field names are sorted lexicographically (byte order, ascending), each
//! line is `name=value`, lines are joined by a single newline with no
//! trailing newline, and only fields on the signed whitelist participate.
//! The `hash` field itself and any extra fields a client may have injected
//! are excluded, so unsigned data can neither break nor forge validation.

use std::collections::{BTreeMap, HashMap};

/// The fields covered by the login signature.
///
/// Only these fields, when present, are folded into the canonical data
/// string. `hash` is deliberately not on this list.
pub const SIGNED_FIELDS: [&str; 6] = [
    "id",
    "first_name",
    "last_name",
    "username",
    "photo_url",
    "auth_date",
];

/// Build the canonical data string for signature computation.
///
/// Sorting goes through a `BTreeMap` so the result is independent of the
/// iteration order of the input map.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use tglogin_auth::build_canonical_data;
///
/// let mut fields = HashMap::new();
/// fields.insert("id".to_owned(), "5".to_owned());
/// fields.insert("auth_date".to_owned(), "1700000000".to_owned());
/// fields.insert("hash".to_owned(), "ignored".to_owned());
///
/// assert_eq!(build_canonical_data(&fields), "auth_date=1700000000\nid=5");
/// ```
#[must_use]
pub fn build_canonical_data(fields: &HashMap<String, String>) -> String {
    let sorted: BTreeMap<&str, &str> = fields
        .iter()
        .filter(|(name, _)| SIGNED_FIELDS.contains(&name.as_str()))
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();

    sorted
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("\n")
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
    fn test_should_sort_fields_lexicographically() {
        let data = build_canonical_data(&fields(&[
            ("username", "adal"),
            ("id", "42"),
            ("first_name", "Ada"),
            ("last_name", "Lovelace"),
            ("auth_date", "1700000000"),
        ]));
        assert_eq!(
            data,
            "auth_date=1700000000\nfirst_name=Ada\nid=42\nlast_name=Lovelace\nusername=adal"
        );
    }

    #[test]
    fn test_should_exclude_hash_field() {
        let data = build_canonical_data(&fields(&[("id", "1"), ("hash", "deadbeef")]));
        assert_eq!(data, "id=1");
    }

    #[test]
    fn test_should_exclude_unsigned_extra_fields() {
        let data = build_canonical_data(&fields(&[
            ("id", "1"),
            ("auth_date", "1700000000"),
            ("injected", "evil"),
            ("admin", "true"),
        ]));
        assert_eq!(data, "auth_date=1700000000\nid=1");
    }

    #[test]
    fn test_should_be_independent_of_insertion_order() {
        let forward = build_canonical_data(&fields(&[
            ("id", "42"),
            ("first_name", "Ada"),
            ("auth_date", "1700000000"),
        ]));
        let reverse = build_canonical_data(&fields(&[
            ("auth_date", "1700000000"),
            ("first_name", "Ada"),
            ("id", "42"),
        ]));
        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_should_produce_empty_string_for_no_signed_fields() {
        let data = build_canonical_data(&fields(&[("hash", "abc"), ("other", "x")]));
        assert_eq!(data, "");
    }

    #[test]
    fn test_should_not_append_trailing_newline() {
        let data = build_canonical_data(&fields(&[("id", "1"), ("auth_date", "2")]));
        assert!(!data.ends_with('\n'));
    }
}
