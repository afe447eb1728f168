//! Transport primitives for Buzzy API calls.
//!
//! The module exposes [`Transport`] alongside [`TransportResponse`] so downstream crates can
//! plug in custom HTTP stacks (or deterministic fakes in tests) without touching the
//! dispatcher or the envelope normalizer. A transport only moves bytes: it returns every
//! response it receives, whatever the status, and reserves [`TransportError`] for calls that
//! never produced a response. Status classification happens in the client so all transports
//! share one failure taxonomy.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
#[cfg(feature = "reqwest")] use crate::error::ConfigError;
use crate::{_prelude::*, error::TransportError, request::RequestDescriptor};

/// Boxed future returned by [`Transport::send`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP stacks capable of executing [`RequestDescriptor`]s.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can sit behind an
/// `Arc` shared by the unthrottled client, every throttled view of it, and the jobs queued in
/// a [`Dispatcher`](crate::dispatch::Dispatcher).
pub trait Transport
where
	Self: 'static + Send + Sync,
{
	/// Executes one request and resolves with the raw response.
	fn send(&self, request: RequestDescriptor) -> TransportFuture<'_>;
}

/// Raw response handed back by a [`Transport`].
#[derive(Clone, Debug, PartialEq)]
pub struct TransportResponse {
	/// HTTP status code.
	pub status: u16,
	/// Decoded JSON body; `None` when the body was empty or not JSON.
	pub body: Option<Value>,
}
impl TransportResponse {
	/// Creates a response with the given status and body.
	pub fn new(status: u16, body: Option<Value>) -> Self {
		Self { status, body }
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Decodes raw body bytes, treating empty or non-JSON payloads as absent.
	pub fn decode_body(bytes: &[u8]) -> Option<Value> {
		if bytes.iter().all(u8::is_ascii_whitespace) {
			return None;
		}

		serde_json::from_slice(bytes).ok()
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a transport whose requests give up after `timeout`.
	pub fn with_timeout(timeout: Duration) -> Result<Self, ConfigError> {
		Ok(Self(ReqwestClient::builder().timeout(timeout).build()?))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Transport for ReqwestTransport {
	fn send(&self, request: RequestDescriptor) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let method = reqwest::Method::from_bytes(request.method.as_bytes())
				.map_err(TransportError::network)?;
			let body = serde_json::to_vec(&request.body).map_err(TransportError::network)?;
			let mut builder = client.request(method, request.url);

			for (name, value) in request.headers {
				builder = builder.header(name, value);
			}

			let response = builder.body(body).send().await?;
			let status = response.status().as_u16();
			let bytes = response.bytes().await?;

			Ok(TransportResponse::new(status, TransportResponse::decode_body(&bytes)))
		})
	}
}
