use crate::CatalogError;

/// A discovered handler left out of the index because its name broke the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedHandler {
	pub type_name: String,
	/// Position in the discovery order.
	pub ordinal: usize,
	pub error: CatalogError,
}

/// A second handler for an already-indexed (name, namespace) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedDuplicate {
	pub name: String,
	pub namespace: String,
	/// Ordinal of the handler that stayed in the index.
	pub kept: usize,
	/// Ordinal of the handler that was discarded.
	pub dropped: usize,
}

/// Everything the builder discarded, for startup reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexDiagnostics {
	pub skipped: Vec<SkippedHandler>,
	pub dropped: Vec<DroppedDuplicate>,
}

impl IndexDiagnostics {
	/// Returns true if the build discarded nothing.
	pub fn is_clean(&self) -> bool {
		self.skipped.is_empty() && self.dropped.is_empty()
	}
}
