//! Output sinks for decoded fragments and the scoped image resources they display.
//!
//! `object_url` hands out revocable [`ObjectUrl`] handles for image blobs, so a display
//! source never outlives the data behind it. `sink` defines the [`OutputSink`] roles a read
//! writes into plus the in-memory [`FragmentView`], which releases the previous image handle
//! before installing a new one.

pub mod object_url;
pub mod sink;

pub use object_url::*;
pub use sink::*;
