//! Demonstrates logging in, then fanning out row fetches through one shared dispatcher so the
//! mock Buzzy service sees at most one call at a time, spaced 150 ms apart.

// std
use std::time::Instant;
// crates.io
use color_eyre::{Result, eyre::eyre};
use httpmock::prelude::*;
use serde_json::json;
// self
use buzzy_api::{
	BaseUrl, Client, Dispatcher, Target, ThrottleConfig,
	api::{LoginRequest, RowRef},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let login_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/login");
			then.status(200).json_body(json!({ "authToken": "demo-token", "userId": "demo-user" }));
		})
		.await;
	let row_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/microappdata/row").header("x-auth-token", "demo-token");
			then.status(200).json_body(json!({ "body": { "currentRow": { "title": "Tomato" } } }));
		})
		.await;
	let base = BaseUrl::parse(&server.base_url())?;
	let client = Client::new();
	let credential = client
		.login(&base, &LoginRequest::new("demo@buzzy.buzz", "demo-password"))
		.await?
		.ok_or_else(|| eyre!("Login was rejected."))?;
	let target = Target::new(base, credential);
	let dispatcher = Dispatcher::new(ThrottleConfig::default())?;
	let throttled = client.throttled(&dispatcher);
	let started = Instant::now();
	let mut handles = Vec::new();

	for id in ["row-1", "row-2", "row-3", "row-4"] {
		let throttled = throttled.clone();
		let target = target.clone();

		handles.push(tokio::spawn(async move {
			throttled.get_micro_app_data_row(&target, &RowRef::new(id)).await
		}));
	}
	for handle in handles {
		let row = handle.await??;

		println!("Fetched row after {:?}: {}.", started.elapsed(), serde_json::Value::Object(row));
	}

	login_mock.assert_async().await;
	row_mock.assert_calls_async(4).await;

	Ok(())
}
