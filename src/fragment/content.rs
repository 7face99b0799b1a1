//! Content-type-driven decoding of fragment bodies.
//!
//! Classification looks only at the response's declared `Content-Type`, checked in a fixed
//! order: a "text" substring wins first, then an "image" prefix, then a "json" substring.
//! Anything else is [`ContentCategory::Unrecognized`] and produces no output.

// self
use crate::{
	_prelude::*, error::DecodeError, fragment::payload, http::FragmentResponse, view::Blob,
};

/// Decoding strategy chosen for a response body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentCategory {
	/// Decode as text.
	Text,
	/// Keep as binary image data.
	Image,
	/// Decode as JSON.
	Json,
	/// No known decoding applies.
	Unrecognized,
}
impl ContentCategory {
	/// Classifies a declared content type.
	pub fn classify(content_type: &str) -> Self {
		if content_type.contains("text") {
			Self::Text
		} else if content_type.starts_with("image") {
			Self::Image
		} else if content_type.contains("json") {
			Self::Json
		} else {
			Self::Unrecognized
		}
	}

	/// Returns a stable label suitable for span or log fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Image => "image",
			Self::Json => "json",
			Self::Unrecognized => "unrecognized",
		}
	}
}

/// Decoded fragment data.
#[derive(Clone, Debug, PartialEq)]
pub enum FragmentContent {
	/// Text body.
	Text(String),
	/// Image bytes plus their declared type.
	Image(Blob),
	/// Parsed JSON body.
	Json(Value),
}
impl FragmentContent {
	/// Decodes `response` according to its declared content type.
	///
	/// Returns `Ok(None)` for [`ContentCategory::Unrecognized`]; the body is left untouched.
	pub fn decode(response: FragmentResponse) -> Result<Option<Self>, DecodeError> {
		let content_type = response.content_type().unwrap_or_default().to_owned();
		let content = match ContentCategory::classify(&content_type) {
			// Invalid UTF-8 is replaced rather than rejected, matching browser text decoding.
			ContentCategory::Text =>
				Self::Text(String::from_utf8_lossy(&response.body).into_owned()),
			ContentCategory::Image => Self::Image(Blob::new(content_type, response.body)),
			ContentCategory::Json => Self::Json(payload::decode_json(&response.body)?),
			ContentCategory::Unrecognized => return Ok(None),
		};

		Ok(Some(content))
	}

	/// Returns the category this content was decoded as.
	pub fn category(&self) -> ContentCategory {
		match self {
			Self::Text(_) => ContentCategory::Text,
			Self::Image(_) => ContentCategory::Image,
			Self::Json(_) => ContentCategory::Json,
		}
	}

	/// Renders text or JSON content as the string written to a text output.
	pub fn as_text(&self) -> Option<String> {
		match self {
			Self::Text(text) => Some(text.clone()),
			Self::Json(value) => Some(value.to_string()),
			Self::Image(_) => None,
		}
	}
}
