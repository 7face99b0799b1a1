//! Auth-domain identifiers, identity tokens, and the session capability.

pub mod id;
pub mod secret;
pub mod session;

pub use id::*;
pub use secret::*;
pub use session::*;
