use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::diagnostics::IndexDiagnostics;
use crate::{HandlerDescriptor, fold_key};

pub(super) type Map<K, V> = FxHashMap<K, V>;

/// One handler in the duplicate index.
#[derive(Debug)]
pub struct HandlerRecord<D: HandlerDescriptor> {
	/// Base name as discovered (suffix removed, original casing).
	pub name: String,
	/// Namespace as discovered; empty when the handler is ungrouped.
	pub namespace: String,
	pub descriptor: Arc<D>,
	/// Position in the discovery order.
	pub ordinal: usize,
}

impl<D: HandlerDescriptor> Clone for HandlerRecord<D> {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			namespace: self.namespace.clone(),
			descriptor: self.descriptor.clone(),
			ordinal: self.ordinal,
		}
	}
}

/// Immutable index of handlers whose base name is not unique.
///
/// Built once by [`super::IndexBuilder`]; safe to share across threads without locking.
pub struct DuplicateIndex<D: HandlerDescriptor> {
	pub(super) records: Arc<[HandlerRecord<D>]>,
	/// Folded name -> folded namespace -> slot in `records`.
	pub(super) by_name: Map<Box<str>, Map<Box<str>, usize>>,
	pub(super) diagnostics: IndexDiagnostics,
}

impl<D: HandlerDescriptor> DuplicateIndex<D> {
	/// Returns the first record named `name` whose namespace appears in `candidates`.
	///
	/// Candidates are tried in iteration order, so the first listed namespace that holds
	/// a match wins.
	pub fn lookup<'a, I>(&self, name: &str, candidates: I) -> Option<&HandlerRecord<D>>
	where
		I: IntoIterator<Item = &'a str>,
	{
		let namespaces = self.by_name.get(&*fold_key(name))?;
		candidates
			.into_iter()
			.find_map(|namespace| namespaces.get(&*fold_key(namespace)))
			.map(|&slot| &self.records[slot])
	}

	/// Returns the record for an exact (name, namespace) pair.
	pub fn get(&self, name: &str, namespace: &str) -> Option<&HandlerRecord<D>> {
		self.lookup(name, [namespace])
	}

	/// Returns true if `name` is one of the duplicated base names.
	pub fn contains_name(&self, name: &str) -> bool {
		self.by_name.contains_key(&*fold_key(name))
	}

	/// Returns every record sharing `name`, in discovery order.
	pub fn records_named<'s>(&'s self, name: &str) -> impl Iterator<Item = &'s HandlerRecord<D>> + use<'s, D> {
		let folded = fold_key(name);
		self.records.iter().filter(move |record| fold_key(&record.name) == folded)
	}

	/// Returns the namespaces (as discovered) holding `name`, in discovery order.
	///
	/// Empty when `name` is unique or unknown.
	pub fn namespaces_of<'s>(&'s self, name: &str) -> impl Iterator<Item = &'s str> + use<'s, D> {
		self.records_named(name).map(|record| record.namespace.as_str())
	}

	/// Returns all records, grouped by base name in first-seen order.
	#[inline]
	pub fn records(&self) -> &[HandlerRecord<D>] {
		&self.records
	}

	/// Returns what the build discarded.
	#[inline]
	pub fn diagnostics(&self) -> &IndexDiagnostics {
		&self.diagnostics
	}

	/// Returns the number of distinct duplicated base names.
	#[inline]
	pub fn name_count(&self) -> usize {
		self.by_name.len()
	}

	/// Returns the number of records.
	#[inline]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl<D: HandlerDescriptor> std::fmt::Debug for DuplicateIndex<D> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DuplicateIndex")
			.field("names", &self.by_name.len())
			.field("records", &self.records.len())
			.field("diagnostics", &self.diagnostics)
			.finish()
	}
}
