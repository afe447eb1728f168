//! Credential pair issued by the login operation.

// self
use crate::{_prelude::*, auth::AuthToken};

/// Auth token + user identifier pair required by every authenticated operation.
///
/// The client never caches or refreshes credentials; callers obtain one via
/// [`Client::login`](crate::client::Client::login) and pass it into each call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
	/// Session token sent as `X-Auth-Token`.
	pub auth_token: AuthToken,
	/// User identifier sent as `X-User-Id`.
	pub user_id: String,
}
impl Credential {
	/// Creates a credential from raw token and user identifier values.
	pub fn new(auth_token: impl Into<String>, user_id: impl Into<String>) -> Self {
		Self { auth_token: AuthToken::new(auth_token), user_id: user_id.into() }
	}
}
