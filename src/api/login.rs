//! Login: the one operation that runs without a credential.

// self
use crate::{
	_prelude::*,
	auth::{BaseUrl, Credential},
	client::Client,
	error::ConfigError,
	http::{Transport, TransportResponse},
	obs::{self, OperationOutcome, OperationSpan},
	operation::{LOGIN, LOGIN_PATH},
	request::RequestDescriptor,
};

/// Login payload.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
	/// Account email.
	pub email: String,
	/// Account password.
	pub password: String,
}
impl LoginRequest {
	/// Creates a login payload.
	pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
		Self { email: email.into(), password: password.into() }
	}
}
impl Debug for LoginRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("LoginRequest")
			.field("email", &self.email)
			.field("password", &"<redacted>")
			.finish()
	}
}

/// Reasons a login produced no credential.
#[derive(Debug, ThisError)]
pub enum LoginRejection {
	/// Service answered with a non-success status.
	#[error("Login endpoint responded with HTTP {0}.")]
	Status(u16),
	/// Response carried no body.
	#[error("Login response has no body.")]
	MissingBody,
	/// Body did not match the expected credential shape.
	#[error("Login response is malformed at `{}`.", .0.path())]
	Malformed(#[source] serde_path_to_error::Error<serde_json::Error>),
	/// Body lacked one of the credential fields.
	#[error("Login response is missing `{0}`.")]
	MissingField(&'static str),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
	auth_token: Option<String>,
	user_id: Option<String>,
}

/// Extracts a [`Credential`] from a login response.
pub fn credential_from_response(
	response: TransportResponse,
) -> Result<Credential, LoginRejection> {
	if !response.is_success() {
		return Err(LoginRejection::Status(response.status));
	}

	let body = response.body.ok_or(LoginRejection::MissingBody)?;
	let LoginResponse { auth_token, user_id } =
		serde_path_to_error::deserialize(body).map_err(LoginRejection::Malformed)?;
	let auth_token = auth_token.ok_or(LoginRejection::MissingField("authToken"))?;
	let user_id = user_id.ok_or(LoginRejection::MissingField("userId"))?;

	Ok(Credential::new(auth_token, user_id))
}

impl<T> Client<T>
where
	T: ?Sized + Transport,
{
	/// Exchanges an email + password for a [`Credential`].
	///
	/// A rejected login (non-success status, missing or malformed body) is logged and resolves
	/// to `Ok(None)`; callers check for a missing credential instead of handling an error.
	/// Only failures to reach the service at all surface as `Err`.
	pub async fn login(
		&self,
		base: &BaseUrl,
		request: &LoginRequest,
	) -> Result<Option<Credential>> {
		let body = serde_json::to_value(request)
			.map_err(|source| ConfigError::Payload { operation: LOGIN, source })?;
		let descriptor = RequestDescriptor::anonymous(base, LOGIN_PATH, body);
		let transport = Arc::clone(self.transport());

		self.run(LOGIN, async move {
			let span = OperationSpan::new(LOGIN, "execute");

			obs::record_operation_outcome(LOGIN, OperationOutcome::Attempt);

			span.instrument(async move {
				let response = match transport.send(descriptor).await {
					Ok(response) => response,
					Err(e) => {
						obs::record_operation_outcome(LOGIN, OperationOutcome::Failure);

						return Err(e.into());
					},
				};

				match credential_from_response(response) {
					Ok(credential) => {
						obs::record_operation_outcome(LOGIN, OperationOutcome::Success);

						Ok(Some(credential))
					},
					Err(rejection) => {
						obs::log_login_rejected(&rejection);
						obs::record_operation_outcome(LOGIN, OperationOutcome::Swallowed);

						Ok(None)
					},
				}
			})
			.await
		})
		.await
	}
}
