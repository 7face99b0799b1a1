// self
use crate::{_prelude::*, http::Method, obs::OperationKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedRequest<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRequest<F> = F;

/// A span builder used by client operations.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RequestSpan {
	/// Creates a new span tagged with the operation kind, method, and request path.
	pub fn new(kind: OperationKind, method: Method, path: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"fragments_client.request",
				operation = kind.as_str(),
				method = method.as_str(),
				path
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, method, path);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRequest<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Logs the start of a request.
pub fn log_attempt(method: Method, target: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!("Fetching {method} {target}.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (method, target);
	}
}

/// Logs a completed request.
pub fn log_success(kind: OperationKind, status: u16, detail: &dyn Display) {
	#[cfg(feature = "tracing")]
	{
		tracing::info!(operation = kind.as_str(), status, "Completed {kind}: {detail}.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, status, detail);
	}
}

/// Logs the decoded body of a read whose result callers usually only inspect in logs.
pub fn log_body(kind: OperationKind, body: &Value) {
	#[cfg(feature = "tracing")]
	{
		tracing::info!(operation = kind.as_str(), %body, "Received {kind} body.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, body);
	}
}

/// Logs a failed request at the operation boundary.
///
/// The message embeds the error, so HTTP failures always mention their numeric status.
pub fn log_failure(method: Method, target: &str, err: &Error) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(kind = err.kind().as_str(), "Unable to call {method} {target}: {err}");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (method, target, err);
	}
}

/// Logs a read whose content type matched no decoding rule.
pub fn log_unrecognized(target: &str, content_type: &str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!("No output for {target}: content type `{content_type}` is not rendered.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (target, content_type);
	}
}
