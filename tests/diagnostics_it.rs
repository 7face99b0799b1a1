#![cfg(all(feature = "reqwest", feature = "tracing"))]

mod common;

// crates.io
use httpmock::prelude::*;
use tracing::dispatcher::DefaultGuard;
use tracing_subscriber::{filter::LevelFilter, util::SubscriberInitExt};
// self
use common::*;
use fragments_client::{fragment::FragmentPayload, view::FragmentView};

fn capture_logs() -> (LogCapture, DefaultGuard) {
	let capture = LogCapture::default();
	let guard = tracing_subscriber::fmt()
		.with_writer(capture.clone())
		.with_max_level(LevelFilter::INFO)
		.finish()
		.set_default();

	(capture, guard)
}

#[tokio::test]
async fn failures_are_logged_with_status_code() {
	let (capture, _guard) = capture_logs();
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/fragments/missing/info");
			then.status(404);
		})
		.await;
	let client = client_for(&server);
	let result = client.fragment_info(&session(), &fragment_id("missing")).await;

	assert!(result.is_err());

	let logs = capture.contents();

	assert!(logs.contains("Unable to call GET /v1/fragments/missing/info"), "Logs: {logs}");
	assert!(logs.contains("404"), "Logs: {logs}");
	assert!(logs.contains("fragments_client.request"), "Logs: {logs}");
	assert!(!logs.contains(ID_TOKEN), "Identity tokens must never be logged.");

	mock.assert_async().await;
}

#[tokio::test]
async fn every_operation_logs_its_404() {
	let (capture, _guard) = capture_logs();
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|_when, then| {
			then.status(404);
		})
		.await;
	let client = client_for(&server);
	let session = session();
	let id = fragment_id("gone");
	let view = FragmentView::default();

	// Callers ignoring the error channel only ever see these failures in the logs.
	let _ = client.list_fragments(&session).await;
	let _ = client.list_fragments_expanded(&session).await;
	let _ = client.create_fragment(&session, FragmentPayload::text("x", "text/plain")).await;
	let _ = client.show_fragment(&session, &id, &view).await;
	let _ = client.fragment_info(&session, &id).await;
	let _ = client.update_fragment(&session, &id, FragmentPayload::text("y", "text/plain")).await;
	let _ = client.delete_fragment(&session, &id).await;

	let logs = capture.contents();

	for call in [
		"GET /v1/fragments:",
		"GET /v1/fragments/?expand=1:",
		"POST /v1/fragments:",
		"GET /v1/fragments/gone:",
		"GET /v1/fragments/gone/info:",
		"PUT /v1/fragments/gone:",
		"DELETE /v1/fragments/gone:",
	] {
		let line = logs
			.lines()
			.find(|line| line.contains(&format!("Unable to call {call}")))
			.unwrap_or_else(|| panic!("No failure logged for {call}. Logs: {logs}"));

		assert!(line.contains("404"), "Failure line lacks the status: {line}");
	}

	assert!(view.text().is_none());

	mock.assert_calls_async(7).await;
}

#[tokio::test]
async fn metadata_bodies_are_logged() {
	let (capture, _guard) = capture_logs();
	let server = MockServer::start_async().await;
	let listing = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/fragments/").query_param("expand", "1");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"fragments\":[{\"id\":\"LISTED-7f3a\"}]}");
		})
		.await;
	let info = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/fragments/x/info");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"fragment\":{\"ownerId\":\"OWNER-91cc\"}}");
		})
		.await;
	let client = client_for(&server);

	client.list_fragments_expanded(&session()).await.expect("Expanded listing should succeed.");
	client.fragment_info(&session(), &fragment_id("x")).await.expect("Info should succeed.");

	let logs = capture.contents();

	assert!(logs.contains("LISTED-7f3a"), "Expanded listing body missing. Logs: {logs}");
	assert!(logs.contains("OWNER-91cc"), "Info body missing. Logs: {logs}");

	listing.assert_async().await;
	info.assert_async().await;
}
