//! Optional observability helpers for client operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (default) to run every operation inside a `fragments_client.request` span
//!   with `operation` and `path` fields and to emit success/failure events from it.
//! - Enable `metrics` to increment the `fragments_client_request_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Client operations observed by the instrumentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
	/// List fragment references.
	ListFragments,
	/// List fragments with expanded metadata.
	ListFragmentsExpanded,
	/// Create a fragment.
	CreateFragment,
	/// Read fragment data.
	ReadFragment,
	/// Read fragment metadata.
	FragmentInfo,
	/// Replace fragment data.
	UpdateFragment,
	/// Delete a fragment.
	DeleteFragment,
}
impl OperationKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationKind::ListFragments => "list_fragments",
			OperationKind::ListFragmentsExpanded => "list_fragments_expanded",
			OperationKind::CreateFragment => "create_fragment",
			OperationKind::ReadFragment => "read_fragment",
			OperationKind::FragmentInfo => "fragment_info",
			OperationKind::UpdateFragment => "update_fragment",
			OperationKind::DeleteFragment => "delete_fragment",
		}
	}
}
impl Display for OperationKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure returned to the caller.
	Failure,
}
impl OperationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationOutcome::Attempt => "attempt",
			OperationOutcome::Success => "success",
			OperationOutcome::Failure => "failure",
		}
	}
}
impl Display for OperationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
