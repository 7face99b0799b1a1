//! Fragment payloads sent to the service and content decoded from it.

pub mod content;
pub mod metadata;
pub mod payload;

pub use content::*;
pub use metadata::*;
pub use payload::*;
