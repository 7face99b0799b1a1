//! Transport primitives for fragments service calls.
//!
//! The module exposes [`FragmentTransport`] alongside the owned [`FragmentRequest`] and
//! [`FragmentResponse`] values so downstream crates can plug in custom HTTP stacks (or
//! recording fakes in tests) without touching the client's request-building or decoding
//! logic. The default [`ReqwestTransport`] is enabled by the `reqwest` feature.

// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Boxed future returned by [`FragmentTransport::execute`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<FragmentResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing fragments service requests.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared by clones of
/// the client, and the returned futures must be `Send` so operations can hop executors. A
/// transport only moves bytes: status handling and body decoding stay in the client.
pub trait FragmentTransport
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Executes `request` and resolves once the full response body has arrived.
	fn execute(&self, request: FragmentRequest) -> TransportFuture<'_, Self::TransportError>;
}
impl<T> FragmentTransport for Arc<T>
where
	T: ?Sized + FragmentTransport,
{
	type TransportError = T::TransportError;

	fn execute(&self, request: FragmentRequest) -> TransportFuture<'_, Self::TransportError> {
		(**self).execute(request)
	}
}

/// HTTP methods issued by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// `GET`
	Get,
	/// `POST`
	Post,
	/// `PUT`
	Put,
	/// `DELETE`
	Delete,
}
impl Method {
	/// Returns the canonical upper-case method name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Put => "PUT",
			Method::Delete => "DELETE",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Fully built request handed to a [`FragmentTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentRequest {
	/// HTTP method.
	pub method: Method,
	/// Absolute request URL.
	pub url: Url,
	/// Request headers, keyed by header name.
	pub headers: BTreeMap<String, String>,
	/// Optional request body.
	pub body: Option<Vec<u8>>,
}
impl FragmentRequest {
	/// Creates a body-less request.
	pub fn new(method: Method, url: Url) -> Self {
		Self { method, url, headers: BTreeMap::new(), body: None }
	}

	/// Merges `headers` into the request, replacing same-named entries.
	pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		for (name, value) in headers {
			self.headers.insert(name.into(), value.into());
		}

		self
	}

	/// Attaches a request body.
	pub fn with_body(mut self, body: Vec<u8>) -> Self {
		self.body = Some(body);

		self
	}

	/// Looks up a request header, ignoring ASCII case.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}

	/// Returns the path plus query, as logged by the client.
	pub fn target(&self) -> String {
		match self.url.query() {
			Some(query) => format!("{}?{query}", self.url.path()),
			None => self.url.path().to_owned(),
		}
	}
}

/// Response returned by a [`FragmentTransport`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FragmentResponse {
	/// HTTP status code.
	pub status: u16,
	/// Reason phrase for the status.
	pub status_text: String,
	/// Response headers with lower-cased names.
	pub headers: BTreeMap<String, String>,
	/// Full response body.
	pub body: Vec<u8>,
}
impl FragmentResponse {
	/// Returns `true` for statuses in the 200-299 range.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Looks up a response header by (case-insensitive) name.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
	}

	/// Returns the declared `Content-Type`, if any.
	pub fn content_type(&self) -> Option<&str> {
		self.header("content-type")
	}

	/// Returns the `Location` header set by the service after a create.
	pub fn location(&self) -> Option<&str> {
		self.header("location")
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// No timeout is configured; a request that never completes keeps its operation pending.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Builds a transport around a default reqwest client.
	///
	/// Fails with [`ConfigError::HttpClientBuild`] when the TLS backend cannot be initialized.
	pub fn new() -> Result<Self, ConfigError> {
		Ok(Self(ReqwestClient::builder().build()?))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	async fn send(
		client: ReqwestClient,
		request: FragmentRequest,
	) -> Result<FragmentResponse, ReqwestError> {
		let method = match request.method {
			Method::Get => reqwest::Method::GET,
			Method::Post => reqwest::Method::POST,
			Method::Put => reqwest::Method::PUT,
			Method::Delete => reqwest::Method::DELETE,
		};
		let mut builder = client.request(method, request.url);

		for (name, value) in &request.headers {
			builder = builder.header(name.as_str(), value.as_str());
		}
		if let Some(body) = request.body {
			builder = builder.body(body);
		}

		let response = builder.send().await?;
		let status = response.status();
		let headers = response
			.headers()
			.iter()
			.filter_map(|(name, value)| {
				value.to_str().ok().map(|value| (name.as_str().to_owned(), value.to_owned()))
			})
			.collect();
		let body = response.bytes().await?.to_vec();

		Ok(FragmentResponse {
			status: status.as_u16(),
			status_text: status.canonical_reason().unwrap_or_default().to_owned(),
			headers,
			body,
		})
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl FragmentTransport for ReqwestTransport {
	type TransportError = ReqwestError;

	fn execute(&self, request: FragmentRequest) -> TransportFuture<'_, Self::TransportError> {
		Box::pin(Self::send(self.0.clone(), request))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn response_helpers_read_lowercased_headers() {
		let response = FragmentResponse {
			status: 201,
			status_text: "Created".into(),
			headers: BTreeMap::from([
				("content-type".into(), "text/plain; charset=utf-8".into()),
				("location".into(), "http://localhost:8080/v1/fragments/id1".into()),
			]),
			body: Vec::new(),
		};

		assert!(response.is_success());
		assert_eq!(response.content_type(), Some("text/plain; charset=utf-8"));
		assert_eq!(response.header("Location"), response.location());
		assert!(!FragmentResponse { status: 404, ..Default::default() }.is_success());
		assert!(!FragmentResponse { status: 300, ..Default::default() }.is_success());
	}

	#[test]
	fn request_builders_merge_headers() {
		let url = Url::parse("http://localhost:8080/v1/fragments/?expand=1")
			.expect("Fixture URL should parse.");
		let request = FragmentRequest::new(Method::Get, url)
			.with_headers([("Authorization", "Bearer a")])
			.with_headers([("Authorization", "Bearer b")]);

		assert_eq!(request.header("authorization"), Some("Bearer b"));
		assert_eq!(request.target(), "/v1/fragments/?expand=1");
		assert_eq!(Method::Delete.to_string(), "DELETE");
	}

	#[cfg(feature = "reqwest")]
	#[test]
	fn reqwest_transport_builds_and_maps_builder_failures() {
		let transport = ReqwestTransport::new().expect("Default reqwest client should build.");
		let err = transport
			.as_ref()
			.get("not a url")
			.build()
			.expect_err("An unparsable URL must fail to build.");

		assert!(matches!(ConfigError::from(err), ConfigError::HttpClientBuild { .. }));
	}
}
