//! Walks a signed-in user through listing, creating, viewing, updating, and deleting a fragment
//! against a mocked fragments service using the default reqwest transport.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use fragments_client::{
	auth::UserSession,
	client::ReqwestFragmentsClient,
	config::{API_URL_ENV, ClientConfig},
	fragment::{FragmentInfo, FragmentPayload, fragment_ids},
	view::FragmentView,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let location = server.url("/v1/fragments/demo-1");
	let list_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/fragments").header("authorization", "Bearer demo-token");
			then.status(200).header("content-type", "application/json").body("{\"fragments\":[]}");
		})
		.await;
	let create_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v1/fragments").header("content-type", "text/markdown");
			then.status(201).header("location", &location);
		})
		.await;
	let read_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/fragments/demo-1");
			then.status(200).header("content-type", "text/markdown").body("# Hello");
		})
		.await;
	let info_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1/fragments/demo-1/info");
			then.status(200).json_body(json!({
				"fragment": {
					"id": "demo-1",
					"ownerId": "11d4c22e",
					"created": "2024-01-01T00:00:00Z",
					"updated": "2024-01-01T00:00:00Z",
					"type": "text/markdown",
					"size": 7
				}
			}));
		})
		.await;
	let update_mock = server
		.mock_async(|when, then| {
			when.method(PUT).path("/v1/fragments/demo-1");
			then.status(200);
		})
		.await;
	let delete_mock = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/v1/fragments/demo-1");
			then.status(200);
		})
		.await;
	// Resolve the base URL the same way `ClientConfig::from_env` does, fed by the mock server.
	let base_url = server.base_url();
	let config = ClientConfig::from_lookup(|key| (key == API_URL_ENV).then_some(base_url))?;
	let client = ReqwestFragmentsClient::new(config)?;
	let session = UserSession::new("demo-user", "demo-token");
	let view = FragmentView::default();
	let existing = client.list_fragments(&session).await?;

	println!("Fragments before create: {:?}.", fragment_ids(&existing)?);

	let receipt = client
		.create_fragment(&session, FragmentPayload::text("# Hello", "text/markdown"))
		.await?;
	let id = receipt.fragment_id().ok_or_else(|| color_eyre::eyre::eyre!("Missing Location."))?;
	let category = client.show_fragment(&session, &id, &view).await?;

	println!("Rendered {category:?} output: {:?}.", view.text());

	let info = FragmentInfo::from_value(&client.fragment_info(&session, &id).await?)?;

	println!("Fragment {} is {} bytes of {}.", info.id, info.size, info.mime_type());

	client
		.update_fragment(&session, &id, FragmentPayload::text("# Hello again", "text/markdown"))
		.await?;
	client.delete_fragment(&session, &id).await?;

	for mock in [list_mock, create_mock, read_mock, info_mock, update_mock, delete_mock] {
		mock.assert_async().await;
	}

	Ok(())
}
