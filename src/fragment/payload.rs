//! Request bodies for create and update calls.
//!
//! The client trusts the caller's declared content type: no sniffing or validation happens
//! here, the declared type is forwarded verbatim as the `Content-Type` header.

// self
use crate::{_prelude::*, error::DecodeError};

/// Content type that triggers JSON normalization of the payload.
pub const APPLICATION_JSON: &str = "application/json";

/// Body variants accepted by create and update calls.
#[derive(Clone, Debug, PartialEq)]
pub enum PayloadBody {
	/// Text typed or pasted by the user.
	Text(String),
	/// Structured data serialized as JSON on the wire.
	Json(Value),
	/// Raw bytes, typically an uploaded image.
	Binary(Vec<u8>),
}

/// Body plus caller-declared content type.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentPayload {
	/// Declared MIME type, sent as `Content-Type`.
	pub content_type: String,
	/// Body to send.
	pub body: PayloadBody,
}
impl FragmentPayload {
	/// Text payload with an arbitrary declared type (`text/plain`, `text/markdown`, ...).
	pub fn text(data: impl Into<String>, content_type: impl Into<String>) -> Self {
		Self { content_type: content_type.into(), body: PayloadBody::Text(data.into()) }
	}

	/// JSON payload declared as `application/json`.
	pub fn json(value: Value) -> Self {
		Self { content_type: APPLICATION_JSON.into(), body: PayloadBody::Json(value) }
	}

	/// JSON payload built from any serializable value.
	pub fn json_from<T>(value: &T) -> Result<Self, DecodeError>
	where
		T: ?Sized + Serialize,
	{
		serde_json::to_value(value).map(Self::json).map_err(DecodeError::Encode)
	}

	/// Binary payload such as an image upload.
	pub fn binary(data: impl Into<Vec<u8>>, content_type: impl Into<String>) -> Self {
		Self { content_type: content_type.into(), body: PayloadBody::Binary(data.into()) }
	}

	/// Returns `true` when the declared type is exactly `application/json`.
	pub fn is_json(&self) -> bool {
		self.content_type == APPLICATION_JSON
	}

	/// Produces the bytes sent on the wire.
	///
	/// For `application/json` payloads holding structured data, the value is encoded, decoded,
	/// and re-encoded so the body is a structurally faithful JSON round trip. Text declared as
	/// JSON passes through unchanged, since a string survives the round trip as itself.
	pub fn into_bytes(self) -> Result<Vec<u8>, DecodeError> {
		let is_json = self.is_json();

		match self.body {
			PayloadBody::Text(text) => Ok(text.into_bytes()),
			PayloadBody::Binary(bytes) => Ok(bytes),
			PayloadBody::Json(value) if is_json => {
				let encoded = serde_json::to_vec(&value).map_err(DecodeError::Encode)?;
				let normalized: Value = decode_json(&encoded)?;

				serde_json::to_vec(&normalized).map_err(DecodeError::Encode)
			},
			PayloadBody::Json(value) => serde_json::to_vec(&value).map_err(DecodeError::Encode),
		}
	}
}

/// Decodes JSON while tracking the path of any failure.
pub(crate) fn decode_json<T>(bytes: &[u8]) -> Result<T, DecodeError>
where
	T: serde::de::DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(bytes);

	Ok(serde_path_to_error::deserialize(&mut deserializer)?)
}
