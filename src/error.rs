//! Client-level error types shared across the dispatcher, transport, and operations.

// std
use std::collections::BTreeMap;
// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The dispatcher could not deliver an operation result.
	#[error(transparent)]
	Dispatch(#[from] DispatchError),

	/// Remote service answered with a non-success HTTP status.
	#[error("Remote service responded with HTTP {status}.")]
	Status {
		/// HTTP status code returned by the service.
		status: u16,
		/// Decoded response body, when the service sent JSON.
		body: Option<Value>,
	},
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base address cannot be parsed or cannot carry endpoint paths.
	#[error("Base address `{url}` is not a valid API base.")]
	InvalidBaseUrl {
		/// Raw address supplied by the caller.
		url: String,
		/// Underlying parsing failure, if the address did not parse at all.
		#[source]
		source: Option<url::ParseError>,
	},
	/// Operation payload could not be encoded as JSON.
	#[error("Payload for `{operation}` could not be encoded.")]
	Payload {
		/// Operation whose payload failed to encode.
		operation: &'static str,
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// Dispatcher was constructed outside a Tokio runtime.
	#[error("Dispatcher requires a running Tokio runtime.")]
	NoRuntime,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Failures owned by the dispatcher itself; operation errors never land here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ThisError)]
pub enum DispatchError {
	/// The admitted job ended (or was discarded) without delivering a result.
	#[error("Dispatched `{operation}` call ended without producing a result.")]
	Dropped {
		/// Operation label supplied at submission.
		operation: &'static str,
	},
}

/// Fixed-shape error envelope handed back to consumers that speak the service's
/// `{ status, statusCode, body, headers }` convention.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse<E> {
	/// Always `"error"`.
	pub status: &'static str,
	/// Always `400`.
	pub status_code: u16,
	/// The original error value, untouched.
	pub body: E,
	/// Always `Content-Type: text/html`.
	pub headers: BTreeMap<&'static str, &'static str>,
}

/// Wraps an arbitrary error value in an [`ErrorResponse`].
pub fn error_response<E>(err: E) -> ErrorResponse<E> {
	ErrorResponse {
		status: "error",
		status_code: 400,
		body: err,
		headers: BTreeMap::from([("Content-Type", "text/html")]),
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn error_response_has_fixed_shape() {
		let response = error_response("Test error");
		let json = serde_json::to_value(&response).expect("Error response should serialize.");

		assert_eq!(
			json,
			serde_json::json!({
				"status": "error",
				"statusCode": 400,
				"body": "Test error",
				"headers": { "Content-Type": "text/html" },
			})
		);
	}

	#[test]
	fn error_response_keeps_structured_bodies() {
		let response = error_response(serde_json::json!({ "reason": "missing row" }));

		assert_eq!(response.body["reason"], "missing row");
		assert_eq!(response.status_code, 400);
	}
}
