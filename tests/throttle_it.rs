// std
use std::time::Instant as StdInstant;
// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use buzzy_api::{
	_preludet::*,
	api::RowRef,
	dispatch::{Dispatcher, ThrottleConfig},
};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn throttled_row_fetches_are_spaced() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/microappdata/row");
			then.status(200)
				.delay(Duration::from_millis(10))
				.json_body(json!({ "body": { "currentRow": { "_id": "row-1" } } }));
		})
		.await;
	let dispatcher = Dispatcher::new(ThrottleConfig::default())
		.expect("Dispatcher should build inside a Tokio runtime.");
	let client = build_reqwest_test_client().throttled(&dispatcher);
	let target = test_target(&server.base_url());
	let started = StdInstant::now();
	let handles = (0..5)
		.map(|_| {
			let client = client.clone();
			let target = target.clone();

			tokio::spawn(async move {
				client.get_micro_app_data_row(&target, &RowRef::new("row-1")).await
			})
		})
		.collect::<Vec<_>>();

	for handle in handles {
		let row = handle
			.await
			.expect("Row fetch task should not panic.")
			.expect("Row fetches should succeed against the mock server.");

		assert_eq!(row.get("_id"), Some(&json!("row-1")));
	}

	assert!(started.elapsed() >= Duration::from_millis(600));

	mock.assert_calls_async(5).await;
}

#[tokio::test]
async fn unthrottled_view_bypasses_the_queue() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/microappdata/row");
			then.status(200).json_body(json!({ "body": { "currentRow": {} } }));
		})
		.await;
	let dispatcher = Dispatcher::new(ThrottleConfig::default())
		.expect("Dispatcher should build inside a Tokio runtime.");
	let client = build_reqwest_test_client().throttled(&dispatcher).unthrottled();
	let target = test_target(&server.base_url());

	assert!(client.dispatcher().is_none());

	for _ in 0..3 {
		client
			.get_micro_app_data_row(&target, &RowRef::new("row-1"))
			.await
			.expect("Row fetches should succeed against the mock server.");
	}

	mock.assert_calls_async(3).await;
}
