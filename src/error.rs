//! Client-level error types shared across configuration, transport, and decoding.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
///
/// Every operation logs the failure before returning it, so callers that discard the error
/// channel (for example via `.ok()`) observe a silent no-op.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response decoding failure.
	#[error(transparent)]
	Decode(#[from] DecodeError),

	/// The service answered outside the 2xx range.
	#[error("Fragments service responded with {status} {status_text}.")]
	HttpStatus {
		/// Numeric HTTP status code.
		status: u16,
		/// Reason phrase accompanying the status.
		status_text: String,
	},
	/// The response declared a content type the client does not know how to decode.
	#[error("Fragment content type `{content_type}` is not text, image, or JSON.")]
	UnrecognizedContentType {
		/// Raw `Content-Type` header value (empty when absent).
		content_type: String,
	},
}
impl Error {
	/// Classifies the error into the coarse failure taxonomy.
	pub fn kind(&self) -> FailureKind {
		match self {
			Self::Config(_) | Self::Transport(_) => FailureKind::Transport,
			Self::HttpStatus { .. } => FailureKind::HttpStatus,
			Self::UnrecognizedContentType { .. } => FailureKind::DecodeAmbiguous,
			Self::Decode(_) => FailureKind::Decode,
		}
	}

	/// Returns the HTTP status carried by [`Error::HttpStatus`], if any.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::HttpStatus { status, .. } => Some(*status),
			_ => None,
		}
	}
}

/// Coarse failure categories callers can branch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
	/// The request could not be built or completed.
	Transport,
	/// The service answered with a non-success status.
	HttpStatus,
	/// The response content type matched no known category.
	DecodeAmbiguous,
	/// The response body did not match its declared format.
	Decode,
}
impl FailureKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FailureKind::Transport => "transport",
			FailureKind::HttpStatus => "http_status",
			FailureKind::DecodeAmbiguous => "decode_ambiguous",
			FailureKind::Decode => "decode",
		}
	}
}
impl Display for FailureKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Configuration and validation failures raised by the client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URL cannot be parsed.
	#[error("Base URL `{value}` is invalid.")]
	InvalidBaseUrl {
		/// Raw value that failed to parse.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL uses a scheme other than `http` or `https`.
	#[error("Base URL must use http or https, not `{scheme}`.")]
	UnsupportedScheme {
		/// Offending scheme.
		scheme: String,
	},
	/// Base URL carries a query or fragment component.
	#[error("Base URL must not carry a {part} component.")]
	UnexpectedUrlPart {
		/// Which component was present.
		part: &'static str,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the fragments service.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}

/// Body decoding failures.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Body was declared JSON but could not be parsed.
	#[error("Fragments service returned malformed JSON.")]
	Json {
		/// Structured parsing failure, including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Payload could not be serialized to JSON.
	#[error("Fragment payload could not be encoded as JSON.")]
	Encode(#[source] serde_json::Error),
}
impl From<serde_path_to_error::Error<serde_json::Error>> for DecodeError {
	fn from(source: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::Json { source }
	}
}
