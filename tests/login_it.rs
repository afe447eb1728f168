// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use buzzy_api::{
	_preludet::*,
	api::LoginRequest,
	auth::{BaseUrl, Credential},
	error::TransportError,
};

fn base(server: &MockServer) -> BaseUrl {
	BaseUrl::parse(&server.base_url()).expect("Mock server URL should be a valid base address.")
}

#[tokio::test]
async fn login_returns_credential_without_auth_headers() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/login")
				.header("content-type", "application/json")
				.json_body(json!({ "email": "a@b.c", "password": "pw" }));
			then.status(200).json_body(json!({ "authToken": "tok-1", "userId": "user-1" }));
		})
		.await;
	let client = build_reqwest_test_client();
	let credential = client
		.login(&base(&server), &LoginRequest::new("a@b.c", "pw"))
		.await
		.expect("Login should reach the mock server.")
		.expect("Login should yield a credential.");

	assert_eq!(credential, Credential::new("tok-1", "user-1"));
	assert_eq!(credential.auth_token.expose(), "tok-1");

	mock.assert_async().await;
}

#[tokio::test]
async fn rejected_login_resolves_to_none() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/login");
			then.status(401).json_body(json!({ "status": "error", "message": "Unauthorized" }));
		})
		.await;
	let client = build_reqwest_test_client();
	let credential = client
		.login(&base(&server), &LoginRequest::new("a@b.c", "wrong"))
		.await
		.expect("Rejected logins should not be errors.");

	assert!(credential.is_none());

	mock.assert_async().await;
}

#[tokio::test]
async fn login_without_usable_body_resolves_to_none() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/login");
			then.status(200).body("");
		})
		.await;
	let client = build_reqwest_test_client();
	let credential = client
		.login(&base(&server), &LoginRequest::new("a@b.c", "pw"))
		.await
		.expect("Empty login responses should not be errors.");

	assert!(credential.is_none());

	mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_login_is_an_error() {
	let client = build_reqwest_test_client();
	let base = BaseUrl::parse("http://127.0.0.1:9").expect("Literal base address should parse.");
	let err = client
		.login(&base, &LoginRequest::new("a@b.c", "pw"))
		.await
		.expect_err("Network failures should surface to the caller.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
}
