//! Strongly typed fragment references.
//!
//! A reference is opaque: any non-empty string other than a dot segment is accepted, and
//! [`ClientConfig::endpoint`] percent-encodes it as a single path segment.
//!
//! [`ClientConfig::endpoint`]: crate::config::ClientConfig::endpoint

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

/// Error returned when a fragment reference is rejected.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum IdentifierError {
	/// The reference was empty.
	#[error("Fragment ID required.")]
	Empty,
	/// The reference was `.` or `..`, which URL path resolution drops.
	#[error("Fragment ID `{0}` is a dot segment.")]
	DotSegment(String),
}

/// Opaque reference naming a fragment stored by the service.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FragmentId(String);
impl FragmentId {
	/// Creates a reference, rejecting empty values and dot segments.
	pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
		let value = value.into();

		if value.is_empty() {
			return Err(IdentifierError::Empty);
		}
		if matches!(value.as_str(), "." | "..") {
			return Err(IdentifierError::DotSegment(value));
		}

		Ok(Self(value))
	}
}
impl Deref for FragmentId {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for FragmentId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for FragmentId {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<FragmentId> for String {
	fn from(value: FragmentId) -> Self {
		value.0
	}
}
impl TryFrom<String> for FragmentId {
	type Error = IdentifierError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl FromStr for FragmentId {
	type Err = IdentifierError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
impl Debug for FragmentId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Fragment({})", self.0)
	}
}
impl Display for FragmentId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
