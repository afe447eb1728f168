//! Throttled async client for the Buzzy REST API. Operations share one admission queue and
//! decode every response through one typed envelope.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod api;
pub mod auth;
pub mod client;
pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod http;
pub mod obs;
pub mod operation;
pub mod request;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::{BaseUrl, Credential, Target},
		client::Client,
		http::ReqwestTransport,
	};

	/// Client type alias used by reqwest-backed integration tests.
	pub type ReqwestTestClient = Client<ReqwestTransport>;

	/// Builds a reqwest transport that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_transport() -> ReqwestTransport {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestTransport::with_client(client)
	}

	/// Constructs an unthrottled [`Client`] backed by the reqwest transport used across
	/// integration tests.
	pub fn build_reqwest_test_client() -> ReqwestTestClient {
		Client::with_transport(test_reqwest_transport())
	}

	/// Builds a [`Target`] pointing at `base` with a fixed test credential.
	pub fn test_target(base: &str) -> Target {
		let base = BaseUrl::parse(base).expect("Mock server URL should be a valid base address.");

		Target::new(base, Credential::new("test-token", "test-user"))
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
		time::Duration,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;
	pub use tokio::time::Instant;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use serde_json;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _};

pub use api::*;
pub use auth::{BaseUrl, Credential, Target};
pub use client::Client;
pub use dispatch::{Dispatcher, ThrottleConfig};
pub use error::{ErrorResponse, error_response};
