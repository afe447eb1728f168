//! Transport-ready request descriptors.
//!
//! Every data operation uses the same shape: a `POST` to the base address plus a fixed
//! endpoint path, the caller's identity in two custom headers, and the operation payload
//! as the JSON body. Construction is pure and total; payload validation is left to the
//! remote service.

// self
use crate::{
	_prelude::*,
	auth::{BaseUrl, Credential},
};

/// Header carrying the session token.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
/// Header carrying the user identifier.
pub const USER_ID_HEADER: &str = "X-User-Id";
/// Content-type header name.
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
/// Content type used by every request body.
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Verb used by every operation.
pub const METHOD: &str = "POST";

/// Plain-data request handed to a [`Transport`](crate::http::Transport).
#[derive(Clone, PartialEq)]
pub struct RequestDescriptor {
	/// HTTP verb, always [`METHOD`].
	pub method: &'static str,
	/// Fully-resolved endpoint address.
	pub url: Url,
	/// Header name/value pairs in insertion order.
	pub headers: Vec<(&'static str, String)>,
	/// JSON body, forwarded untouched.
	pub body: Value,
}
impl RequestDescriptor {
	/// Builds an authenticated request for `path` under `base`.
	pub fn authenticated(credential: &Credential, base: &BaseUrl, path: &str, body: Value) -> Self {
		Self {
			method: METHOD,
			url: base.endpoint(path),
			headers: vec![
				(AUTH_TOKEN_HEADER, credential.auth_token.expose().to_owned()),
				(USER_ID_HEADER, credential.user_id.clone()),
				(CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE.to_owned()),
			],
			body,
		}
	}

	/// Builds a request without identity headers; only login uses this.
	pub fn anonymous(base: &BaseUrl, path: &str, body: Value) -> Self {
		Self {
			method: METHOD,
			url: base.endpoint(path),
			headers: vec![(CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE.to_owned())],
			body,
		}
	}

	/// Returns the first header value matching `name` (ASCII case-insensitive).
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}
impl Debug for RequestDescriptor {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let headers = self
			.headers
			.iter()
			.map(|(key, value)| {
				if key.eq_ignore_ascii_case(AUTH_TOKEN_HEADER) {
					(*key, "<redacted>")
				} else {
					(*key, value.as_str())
				}
			})
			.collect::<Vec<_>>();

		f.debug_struct("RequestDescriptor")
			.field("method", &self.method)
			.field("url", &self.url.as_str())
			.field("headers", &headers)
			.field("body", &self.body)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	fn base() -> BaseUrl {
		BaseUrl::parse("https://app.buzzy.buzz").expect("Test base address should parse.")
	}

	#[test]
	fn authenticated_request_carries_identity_headers() {
		let credential = Credential::new("token-123", "user-9");
		let payload = json!({ "rowID": "row-1", "extra": { "nested": [1, 2] } });
		let request = RequestDescriptor::authenticated(
			&credential,
			&base(),
			"/api/microappdata/row",
			payload.clone(),
		);

		assert_eq!(request.method, "POST");
		assert_eq!(request.url.as_str(), "https://app.buzzy.buzz/api/microappdata/row");
		assert_eq!(request.header("x-auth-token"), Some("token-123"));
		assert_eq!(request.header(USER_ID_HEADER), Some("user-9"));
		assert_eq!(request.header(CONTENT_TYPE_HEADER), Some("application/json"));
		assert_eq!(request.headers.len(), 3);
		assert_eq!(request.body, payload);
	}

	#[test]
	fn anonymous_request_omits_identity_headers() {
		let request =
			RequestDescriptor::anonymous(&base(), "/api/login", json!({ "email": "a@b.c" }));

		assert_eq!(request.header(AUTH_TOKEN_HEADER), None);
		assert_eq!(request.header(USER_ID_HEADER), None);
		assert_eq!(request.header(CONTENT_TYPE_HEADER), Some(JSON_CONTENT_TYPE));
	}

	#[test]
	fn debug_output_redacts_token() {
		let credential = Credential::new("very-secret-token", "user-9");
		let request =
			RequestDescriptor::authenticated(&credential, &base(), "/api/userid", json!({}));
		let rendered = format!("{request:?}");

		assert!(!rendered.contains("very-secret-token"));
		assert!(rendered.contains("user-9"));
	}
}
