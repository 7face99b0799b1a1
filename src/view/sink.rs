//! Output roles written by fragment reads.

// self
use crate::{
	_prelude::*,
	view::{Blob, ObjectUrl, ObjectUrlRegistry},
};

/// Destination for decoded fragment content, identified by role rather than UI toolkit.
pub trait OutputSink
where
	Self: Send + Sync,
{
	/// Replaces the text output area with `text`.
	fn write_text(&self, text: String);

	/// Displays `blob` in the image output.
	fn show_image(&self, blob: Blob);

	/// Empties both outputs before a new read.
	fn clear(&self);
}

/// In-memory sink with one text area and one image slot.
///
/// The image slot owns at most one [`ObjectUrl`]; installing a new image revokes the previous
/// handle first, so repeated reads never accumulate live URLs.
#[derive(Debug, Default)]
pub struct FragmentView {
	registry: ObjectUrlRegistry,
	text: Mutex<Option<String>>,
	image: Mutex<Option<ObjectUrl>>,
}
impl FragmentView {
	/// Creates a view that issues image URLs from `registry`.
	pub fn with_registry(registry: ObjectUrlRegistry) -> Self {
		Self { registry, text: Default::default(), image: Default::default() }
	}

	/// Current text output, if any.
	pub fn text(&self) -> Option<String> {
		self.text.lock().clone()
	}

	/// Current image source URL, if any.
	pub fn image_url(&self) -> Option<String> {
		self.image.lock().as_ref().map(|url| url.as_str().to_owned())
	}

	/// Blob behind the current image source, if any.
	pub fn image(&self) -> Option<Blob> {
		self.image.lock().as_ref().and_then(|url| self.registry.resolve(url.as_str()))
	}

	/// Registry backing the image slot.
	pub fn registry(&self) -> &ObjectUrlRegistry {
		&self.registry
	}

	fn release_image(&self) {
		if let Some(previous) = self.image.lock().take() {
			previous.revoke();
		}
	}
}
impl OutputSink for FragmentView {
	fn write_text(&self, text: String) {
		*self.text.lock() = Some(text);
	}

	fn show_image(&self, blob: Blob) {
		self.release_image();

		let url = self.registry.create(blob);

		*self.image.lock() = Some(url);
	}

	fn clear(&self) {
		*self.text.lock() = None;

		self.release_image();
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn new_image_releases_previous_handle() {
		let view = FragmentView::default();

		view.show_image(Blob::new("image/png", b"one".to_vec()));

		let first = view.image_url().expect("First image should be displayed.");

		view.show_image(Blob::new("image/png", b"two".to_vec()));

		let second = view.image_url().expect("Second image should be displayed.");

		assert_ne!(first, second);
		assert_eq!(view.registry().live(), 1);
		assert!(view.registry().resolve(&first).is_none());
		assert_eq!(view.image().map(|blob| blob.bytes().to_vec()), Some(b"two".to_vec()));
	}

	#[test]
	fn clear_resets_both_outputs() {
		let registry = ObjectUrlRegistry::default();
		let view = FragmentView::with_registry(registry.clone());

		view.write_text("hello".into());
		view.show_image(Blob::new("image/jpeg", vec![0xFF_u8, 0xD8]));
		view.clear();

		assert!(view.text().is_none());
		assert!(view.image_url().is_none());
		assert_eq!(registry.live(), 0);
	}
}
