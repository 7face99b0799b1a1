#![cfg(feature = "reqwest")]

mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use common::*;
use fragments_client::{error::Error, fragment::FragmentPayload};

#[tokio::test]
async fn create_text_fragment_sends_declared_type_and_body() {
	let server = MockServer::start_async().await;
	let location = server.url("/v1/fragments/30a84843");
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v1/fragments")
				.header("authorization", BEARER)
				.header("content-type", "text/plain")
				.body("hello");
			then.status(201)
				.header("location", &location)
				.header("content-type", "application/json")
				.body("{\"status\":\"ok\",\"fragment\":{\"id\":\"30a84843\",\"type\":\"text/plain\"}}");
		})
		.await;
	let client = client_for(&server);
	let receipt = client
		.create_fragment(&session(), FragmentPayload::text("hello", "text/plain"))
		.await
		.expect("Create should succeed against a 201 response.");

	assert_eq!(receipt.status, 201);
	assert_eq!(receipt.fragment_id(), Some(fragment_id("30a84843")));
	assert_eq!(
		receipt.metadata.as_ref().and_then(|body| body.pointer("/fragment/type")),
		Some(&json!("text/plain"))
	);

	mock.assert_async().await;
}

#[tokio::test]
async fn create_image_fragment_sends_raw_bytes() {
	let server = MockServer::start_async().await;
	let image = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v1/fragments")
				.header("authorization", BEARER)
				.header("content-type", "image/png")
				.header("content-length", "8");
			then.status(201);
		})
		.await;
	let client = client_for(&server);
	let receipt = client
		.create_fragment(&session(), FragmentPayload::binary(image, "image/png"))
		.await
		.expect("Image create should succeed.");

	assert_eq!(receipt.location, None);
	assert_eq!(receipt.metadata, None);

	mock.assert_async().await;
}

#[tokio::test]
async fn update_json_fragment_sends_round_tripped_body() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(PUT)
				.path("/v1/fragments/id1")
				.header("authorization", BEARER)
				.header("content-type", "application/json")
				.json_body(json!({ "x": 1 }));
			then.status(200).header("content-type", "application/json").body("{\"status\":\"ok\"}");
		})
		.await;
	let client = client_for(&server);
	let receipt = client
		.update_fragment(&session(), &fragment_id("id1"), FragmentPayload::json(json!({ "x": 1 })))
		.await
		.expect("Update should succeed against a 200 response.");

	assert_eq!(receipt.status, 200);
	assert_eq!(receipt.metadata, Some(json!({ "status": "ok" })));

	mock.assert_async().await;
}

#[tokio::test]
async fn delete_sends_session_headers() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/v1/fragments/id1").header("authorization", BEARER);
			then.status(200).header("content-type", "application/json").body("{\"status\":\"ok\"}");
		})
		.await;
	let client = client_for(&server);

	client
		.delete_fragment(&session(), &fragment_id("id1"))
		.await
		.expect("Delete should succeed against a 200 response.");

	mock.assert_async().await;
}

#[tokio::test]
async fn deleting_twice_fails_the_same_way_each_time() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/v1/fragments/gone");
			then.status(404)
				.header("content-type", "application/json")
				.body("{\"status\":\"error\",\"error\":{\"code\":404,\"message\":\"not found\"}}");
		})
		.await;
	let client = client_for(&server);
	let id = fragment_id("gone");

	for _ in 0..2 {
		let err = client
			.delete_fragment(&session(), &id)
			.await
			.expect_err("Deleting a missing fragment must fail.");

		assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
		assert!(err.to_string().contains("404"));
		// Callers ignoring the error channel observe a no-op.
		assert_eq!(client.delete_fragment(&session(), &id).await.ok(), None);
	}

	mock.assert_calls_async(4).await;
}
