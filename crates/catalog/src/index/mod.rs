//! Duplicate-name handler index.
//!
//! # Purpose
//!
//! A plain name table cannot hold two handlers called `Orders`. This index keeps exactly
//! those names, keyed a second time by namespace, so a route that declares candidate
//! namespaces can still pick one.
//!
//! # Build Rules
//!
//! 1. Handlers are taken in discovery order; position in that order is the ordinal.
//! 2. Type names missing the configured suffix are skipped and reported.
//! 3. Base names seen only once are dropped: the unique-name table serves them.
//! 4. Within one base name, the first handler seen for a namespace wins; later ones are
//!    reported as [`DroppedDuplicate`].
//!
//! # Lookup
//!
//! [`DuplicateIndex::lookup`] walks the candidate namespaces in the order given and
//! returns the first record found, so callers control precedence.

mod build;
mod diagnostics;
mod types;

use std::sync::Arc;

pub use build::IndexBuilder;
pub use diagnostics::{DroppedDuplicate, IndexDiagnostics, SkippedHandler};
pub use types::{DuplicateIndex, HandlerRecord};

use crate::HandlerDescriptor;


/// Builds a [`DuplicateIndex`] from a full discovery result.
pub fn build_duplicate_index<D, I>(suffix: &str, descriptors: I) -> DuplicateIndex<D>
where
	D: HandlerDescriptor,
	I: IntoIterator<Item = Arc<D>>,
{
	let mut builder = IndexBuilder::new(suffix);
	builder.extend(descriptors);
	builder.build()
}
