#![allow(dead_code)]

// std
use std::io::{Result as IoResult, Write};
// crates.io
use httpmock::MockServer;
use parking_lot::Mutex;
// self
use fragments_client::{
	auth::{FragmentId, UserSession},
	client::ReqwestFragmentsClient,
	config::ClientConfig,
};

pub const USERNAME: &str = "user1@email.com";
pub const ID_TOKEN: &str = "eyJraWQiOi.test-id-token";
pub const BEARER: &str = "Bearer eyJraWQiOi.test-id-token";

pub fn session() -> UserSession {
	UserSession::new(USERNAME, ID_TOKEN)
}

pub fn fragment_id(value: &str) -> FragmentId {
	FragmentId::new(value).expect("Fragment id fixture should be valid.")
}

/// Client pointed at `server`, which must speak plain HTTP for the default TLS roots to apply.
pub fn client_for(server: &MockServer) -> ReqwestFragmentsClient {
	let config =
		ClientConfig::new(server.base_url()).expect("Mock server base URL should be valid.");

	assert_eq!(config.base_url().scheme(), "http", "Mock servers must not require TLS.");

	ReqwestFragmentsClient::new(config).expect("Default transport should build.")
}

/// `MakeWriter` target that keeps formatted log lines in memory.
#[derive(Clone, Default)]
pub struct LogCapture(std::sync::Arc<Mutex<Vec<u8>>>);
impl LogCapture {
	pub fn contents(&self) -> String {
		String::from_utf8_lossy(&self.0.lock()).into_owned()
	}
}
impl Write for LogCapture {
	fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
		self.0.lock().extend_from_slice(buf);

		Ok(buf.len())
	}

	fn flush(&mut self) -> IoResult<()> {
		Ok(())
	}
}
impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogCapture {
	type Writer = Self;

	fn make_writer(&'a self) -> Self::Writer {
		self.clone()
	}
}
