use std::collections::hash_map::Entry;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use super::diagnostics::{DroppedDuplicate, IndexDiagnostics, SkippedHandler};
use super::types::{DuplicateIndex, HandlerRecord, Map};
use crate::{BaseName, HandlerDescriptor, fold_key};

/// A handler that passed name validation, awaiting grouping.
struct Candidate<D> {
	name: String,
	ordinal: usize,
	def: Arc<D>,
}

/// Builder for constructing a [`DuplicateIndex`].
pub struct IndexBuilder<'s, D: HandlerDescriptor> {
	suffix: &'s str,
	defs: Vec<Arc<D>>,
}

impl<'s, D: HandlerDescriptor> IndexBuilder<'s, D> {
	/// Creates a builder that strips `suffix` from every handler type name.
	pub fn new(suffix: &'s str) -> Self {
		Self {
			suffix,
			defs: Vec::new(),
		}
	}

	/// Returns the number of handlers pushed so far.
	pub fn len(&self) -> usize {
		self.defs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.defs.is_empty()
	}

	/// Adds a single handler. Push order is discovery order.
	pub fn push(&mut self, def: Arc<D>) {
		self.defs.push(def);
	}

	/// Adds multiple handlers.
	pub fn extend<I: IntoIterator<Item = Arc<D>>>(&mut self, defs: I) {
		self.defs.extend(defs);
	}

	/// Groups, filters and deduplicates the handlers into an immutable index.
	pub fn build(self) -> DuplicateIndex<D> {
		let mut diagnostics = IndexDiagnostics::default();
		let mut groups: IndexMap<Box<str>, Vec<Candidate<D>>, FxBuildHasher> = IndexMap::default();

		for (ordinal, def) in self.defs.into_iter().enumerate() {
			let name = match BaseName::strip(def.type_name(), self.suffix) {
				Ok(base) => base.as_str().to_owned(),
				Err(error) => {
					tracing::warn!(handler = def.type_name(), ordinal, %error, "Skipping handler with malformed name");
					diagnostics.skipped.push(SkippedHandler {
						type_name: def.type_name().to_owned(),
						ordinal,
						error,
					});
					continue;
				}
			};
			groups.entry(fold_key(&name)).or_default().push(Candidate { name, ordinal, def });
		}

		let mut records: Vec<HandlerRecord<D>> = Vec::new();
		let mut by_name: Map<Box<str>, Map<Box<str>, usize>> = Map::default();

		for (key, group) in groups {
			if group.len() < 2 {
				continue;
			}

			let mut namespaces: Map<Box<str>, usize> = Map::default();
			for Candidate { name, ordinal, def } in group {
				let namespace = def.namespace().unwrap_or_default().to_owned();
				match namespaces.entry(fold_key(&namespace)) {
					Entry::Occupied(slot) => {
						let kept = records[*slot.get()].ordinal;
						tracing::debug!(%name, %namespace, kept, dropped = ordinal, "Dropping duplicate handler within namespace");
						diagnostics.dropped.push(DroppedDuplicate {
							name,
							namespace,
							kept,
							dropped: ordinal,
						});
					}
					Entry::Vacant(slot) => {
						slot.insert(records.len());
						records.push(HandlerRecord {
							name,
							namespace,
							descriptor: def,
							ordinal,
						});
					}
				}
			}
			by_name.insert(key, namespaces);
		}

		tracing::debug!(
			names = by_name.len(),
			records = records.len(),
			skipped = diagnostics.skipped.len(),
			dropped = diagnostics.dropped.len(),
			"Built duplicate handler index"
		);

		DuplicateIndex {
			records: records.into(),
			by_name,
			diagnostics,
		}
	}
}
