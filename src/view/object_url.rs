//! Revocable object URLs for binary blobs.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
// self
use crate::_prelude::*;

type BlobMap = Arc<Mutex<HashMap<String, Blob>>>;

/// Origin used by [`ObjectUrlRegistry::default`].
pub const DEFAULT_ORIGIN: &str = "fragments.local";

/// Binary data tagged with its declared content type.
#[derive(Clone, PartialEq, Eq)]
pub struct Blob {
	content_type: String,
	bytes: Arc<[u8]>,
}
impl Blob {
	/// Wraps bytes with their content type.
	pub fn new(content_type: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
		Self { content_type: content_type.into(), bytes: bytes.into() }
	}

	/// Declared content type.
	pub fn content_type(&self) -> &str {
		&self.content_type
	}

	/// Raw bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Byte length.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Returns `true` when the blob carries no bytes.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Renders an inline `data:` URL for sinks that cannot resolve object URLs.
	pub fn data_url(&self) -> String {
		format!("data:{};base64,{}", self.content_type, STANDARD.encode(&self.bytes))
	}
}
impl Debug for Blob {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Blob")
			.field("content_type", &self.content_type)
			.field("len", &self.bytes.len())
			.finish()
	}
}

/// Issues and resolves object URLs for blobs.
///
/// Clones share the same table, so a handle created through one clone resolves through all.
#[derive(Clone, Debug)]
pub struct ObjectUrlRegistry {
	origin: Arc<str>,
	blobs: BlobMap,
}
impl ObjectUrlRegistry {
	/// Creates a registry whose URLs read `blob:<origin>/<id>`.
	pub fn new(origin: impl AsRef<str>) -> Self {
		Self { origin: Arc::from(origin.as_ref()), blobs: Default::default() }
	}

	/// Registers `blob` and returns the handle that keeps it alive.
	pub fn create(&self, blob: Blob) -> ObjectUrl {
		let url = format!("blob:{}/{:032x}", self.origin, rand::random::<u128>());

		self.blobs.lock().insert(url.clone(), blob);

		ObjectUrl { url, blobs: Arc::clone(&self.blobs) }
	}

	/// Resolves a live URL to its blob.
	pub fn resolve(&self, url: &str) -> Option<Blob> {
		self.blobs.lock().get(url).cloned()
	}

	/// Number of URLs that have not been revoked yet.
	pub fn live(&self) -> usize {
		self.blobs.lock().len()
	}
}
impl Default for ObjectUrlRegistry {
	fn default() -> Self {
		Self::new(DEFAULT_ORIGIN)
	}
}

/// Displayable reference to a registered blob.
///
/// The URL stays resolvable until the handle is revoked or dropped.
pub struct ObjectUrl {
	url: String,
	blobs: BlobMap,
}
impl ObjectUrl {
	/// The URL string to assign as a display source.
	pub fn as_str(&self) -> &str {
		&self.url
	}

	/// Revokes the URL now.
	pub fn revoke(self) {
		drop(self);
	}
}
impl AsRef<str> for ObjectUrl {
	fn as_ref(&self) -> &str {
		&self.url
	}
}
impl Debug for ObjectUrl {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ObjectUrl").field(&self.url).finish()
	}
}
impl Display for ObjectUrl {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.url)
	}
}
impl Drop for ObjectUrl {
	fn drop(&mut self) {
		self.blobs.lock().remove(&self.url);
	}
}
