//! Incoming request abstraction.
//!
//! The strategy does not own HTTP routing; the hosting layer hands it a
//! [`LoginRequest`] carrying the method and the already-parsed query and
//! body parameter maps. Telegram delivers the login fields in the query
//! string on GET redirects and in an `application/x-www-form-urlencoded`
//! body otherwise, so the strategy picks the field source by method.

use std::collections::HashMap;

use http::Method;

/// An incoming login redirect as seen by the strategy.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    method: Method,
    query: HashMap<String, String>,
    body: HashMap<String, String>,
}

impl LoginRequest {
    /// Create a request from pre-parsed parameter maps.
    #[must_use]
    pub fn new(
        method: Method,
        query: HashMap<String, String>,
        body: HashMap<String, String>,
    ) -> Self {
        Self {
            method,
            query,
            body,
        }
    }

    /// Build a request from HTTP request parts and raw body bytes.
    ///
    /// The URI query string and the body are both parsed as
    /// `application/x-www-form-urlencoded`. Repeated parameters keep the
    /// last occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use tglogin_core::LoginRequest;
    ///
    /// let (parts, _body) = http::Request::builder()
    ///     .method("GET")
    ///     .uri("https://example.com/auth/telegram?id=42&auth_date=1700000000")
    ///     .body(())
    ///     .unwrap()
    ///     .into_parts();
    ///
    /// let request = LoginRequest::from_parts(&parts, b"");
    /// assert_eq!(request.credential_fields()["id"], "42");
    /// ```
    #[must_use]
    pub fn from_parts(parts: &http::request::Parts, body: &[u8]) -> Self {
        Self {
            method: parts.method.clone(),
            query: parse_urlencoded(parts.uri.query().unwrap_or("").as_bytes()),
            body: parse_urlencoded(body),
        }
    }

    /// The request's HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The query-string parameters.
    #[must_use]
    pub fn query(&self) -> &HashMap<String, String> {
        &self.query
    }

    /// The body parameters.
    #[must_use]
    pub fn body(&self) -> &HashMap<String, String> {
        &self.body
    }

    /// The parameter map carrying the login fields: the query string on GET
    /// requests, the body otherwise.
    #[must_use]
    pub fn credential_fields(&self) -> &HashMap<String, String> {
        if self.method == Method::GET {
            &self.query
        } else {
            &self.body
        }
    }
}

/// Parse `application/x-www-form-urlencoded` bytes into a parameter map.
fn parse_urlencoded(input: &[u8]) -> HashMap<String, String> {
    form_urlencoded::parse(input)
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect()
}
