//! Fragment API client: one authenticated HTTP call per operation.
//!
//! Operations are grouped by concern: `listing` (collection reads), `retrieval` (reads of a
//! single fragment, including content-type dispatch into an [`OutputSink`]) and `mutation`
//! (create, update, delete). Every operation runs through one shared `call` helper, which
//! instruments the request, turns non-2xx statuses into [`Error::HttpStatus`], and logs any
//! failure at the operation boundary before returning it.
//!
//! [`OutputSink`]: crate::view::OutputSink

mod listing;
mod mutation;
mod retrieval;

pub use mutation::{CONTENT_TYPE, MutationReceipt};

// self
use crate::{
	_prelude::*,
	auth::Session,
	config::ClientConfig,
	error::TransportError,
	http::{FragmentRequest, FragmentResponse, FragmentTransport, Method},
	obs::{self, OperationKind, OperationOutcome, RequestSpan},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestFragmentsClient = FragmentsClient<ReqwestTransport>;

/// Issues authenticated requests against `<base>/v1/fragments`.
///
/// The client holds no per-user state: every operation receives the [`Session`] it acts for,
/// so one client can serve any number of concurrent operations and users. Clones share the
/// transport.
pub struct FragmentsClient<T>
where
	T: ?Sized + FragmentTransport,
{
	/// Transport used for every outbound request.
	pub transport: Arc<T>,
	config: ClientConfig,
}
impl<T> FragmentsClient<T>
where
	T: ?Sized + FragmentTransport,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_transport(config: ClientConfig, transport: impl Into<Arc<T>>) -> Self {
		Self { transport: transport.into(), config }
	}

	/// Configuration the client was built with.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Builds a read request carrying the session's own authorization headers.
	fn read_request<S>(session: &S, request: FragmentRequest) -> FragmentRequest
	where
		S: ?Sized + Session,
	{
		request.with_headers(session.authorization_headers())
	}

	/// Executes one request inside an instrumented span.
	///
	/// `prepare` finishes the request (headers, body) and `decode` maps a 2xx response into the
	/// operation's result. Failures from either step, the transport, or a non-2xx status are
	/// logged here and returned unchanged.
	async fn call<O, P, D>(
		&self,
		kind: OperationKind,
		method: Method,
		url: Url,
		prepare: P,
		decode: D,
	) -> Result<O>
	where
		P: FnOnce(FragmentRequest) -> Result<FragmentRequest>,
		D: FnOnce(FragmentResponse) -> Result<O>,
	{
		let request = FragmentRequest::new(method, url);
		let target = request.target();
		let span = RequestSpan::new(kind, method, &target);

		obs::record_operation_outcome(kind, OperationOutcome::Attempt);

		let result = span
			.instrument(async {
				let result: Result<O> = async {
					let request = prepare(request)?;

					obs::log_attempt(method, &target);

					let response = self
						.transport
						.execute(request)
						.await
						.map_err(TransportError::network)?;

					if !response.is_success() {
						return Err(Error::HttpStatus {
							status: response.status,
							status_text: response.status_text,
						});
					}

					let status = response.status;
					let output = decode(response)?;

					obs::log_success(kind, status, &target);

					Ok(output)
				}
				.await;

				match &result {
					Err(Error::UnrecognizedContentType { content_type }) =>
						obs::log_unrecognized(&target, content_type),
					Err(err) => obs::log_failure(method, &target, err),
					Ok(_) => {},
				}

				result
			})
			.await;

		match &result {
			Ok(_) => obs::record_operation_outcome(kind, OperationOutcome::Success),
			Err(_) => obs::record_operation_outcome(kind, OperationOutcome::Failure),
		}

		result
	}
}
#[cfg(feature = "reqwest")]
impl FragmentsClient<ReqwestTransport> {
	/// Creates a client backed by a default reqwest transport.
	pub fn new(config: ClientConfig) -> Result<Self> {
		Ok(Self::with_transport(config, ReqwestTransport::new()?))
	}
}
impl<T> Clone for FragmentsClient<T>
where
	T: ?Sized + FragmentTransport,
{
	fn clone(&self) -> Self {
		Self { transport: Arc::clone(&self.transport), config: self.config.clone() }
	}
}
impl<T> Debug for FragmentsClient<T>
where
	T: ?Sized + FragmentTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("FragmentsClient")
			.field("base_url", &self.config.base_url().as_str())
			.finish()
	}
}
