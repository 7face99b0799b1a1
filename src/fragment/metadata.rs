//! Typed views over metadata returned by the service.
//!
//! Operations return metadata as raw JSON; these helpers are for callers that want typed
//! access. They accept both bare records and the service's `{ "fragment": ... }` /
//! `{ "fragments": [...] }` envelopes.

// self
use crate::{_prelude::*, auth::FragmentId, error::DecodeError, fragment::ContentCategory};

/// Descriptive record for one stored fragment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentInfo {
	/// Fragment reference.
	pub id: FragmentId,
	/// Hashed owner identifier assigned by the service.
	pub owner_id: String,
	/// Creation instant.
	#[serde(with = "time::serde::rfc3339")]
	pub created: OffsetDateTime,
	/// Last update instant.
	#[serde(with = "time::serde::rfc3339")]
	pub updated: OffsetDateTime,
	/// Stored content type, possibly with parameters.
	#[serde(rename = "type")]
	pub content_type: String,
	/// Stored size in bytes.
	pub size: u64,
}
impl FragmentInfo {
	/// Parses one record from a bare object or a `{ "fragment": ... }` envelope.
	pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
		let record = value.get("fragment").unwrap_or(value);

		Ok(serde_path_to_error::deserialize(record)?)
	}

	/// Parses the records of an expanded listing.
	pub fn list_from_value(value: &Value) -> Result<Vec<Self>, DecodeError> {
		let records = value.get("fragments").unwrap_or(value);

		Ok(serde_path_to_error::deserialize(records)?)
	}

	/// Returns the content type without parameters (`text/plain; charset=utf-8` → `text/plain`).
	pub fn mime_type(&self) -> &str {
		self.content_type.split(';').next().unwrap_or_default().trim()
	}

	/// Returns the decoding category a read of this fragment would use.
	pub fn category(&self) -> ContentCategory {
		ContentCategory::classify(&self.content_type)
	}
}

/// Parses the fragment references of a non-expanded listing.
pub fn fragment_ids(value: &Value) -> Result<Vec<FragmentId>, DecodeError> {
	let ids = value.get("fragments").unwrap_or(value);

	Ok(serde_path_to_error::deserialize(ids)?)
}
