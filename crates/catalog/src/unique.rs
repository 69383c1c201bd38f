use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{BaseName, HandlerDescriptor, fold_key};

/// Base name -> handler, for names discovered exactly once.
///
/// This is the ordinary dispatch table that namespace resolution sits in front of. A
/// name discovered more than once (in any namespaces) is absent here and only reachable
/// through [`crate::DuplicateIndex`].
pub struct UniqueNameTable<D: HandlerDescriptor> {
	by_name: FxHashMap<Box<str>, Arc<D>>,
	ambiguous: usize,
}

impl<D: HandlerDescriptor> UniqueNameTable<D> {
	/// Builds the table from a full discovery result.
	///
	/// Handlers whose type name lacks `suffix` are ignored.
	pub fn build<'a, I>(suffix: &str, descriptors: I) -> Self
	where
		I: IntoIterator<Item = &'a Arc<D>>,
	{
		let mut seen: FxHashMap<Box<str>, Option<Arc<D>>> = FxHashMap::default();
		for def in descriptors {
			let Ok(base) = BaseName::strip(def.type_name(), suffix) else {
				tracing::trace!(handler = def.type_name(), "Ignoring handler with malformed name");
				continue;
			};
			seen.entry(fold_key(base.as_str()))
				.and_modify(|slot| *slot = None)
				.or_insert_with(|| Some(def.clone()));
		}

		let ambiguous = seen.values().filter(|slot| slot.is_none()).count();
		let by_name = seen
			.into_iter()
			.filter_map(|(key, slot)| slot.map(|def| (key, def)))
			.collect();

		Self { by_name, ambiguous }
	}

	/// Looks up a handler by base name (case-insensitive).
	#[inline]
	pub fn get(&self, name: &str) -> Option<&Arc<D>> {
		self.by_name.get(&*fold_key(name))
	}

	#[inline]
	pub fn contains(&self, name: &str) -> bool {
		self.by_name.contains_key(&*fold_key(name))
	}

	/// Returns the number of base names left out because they were discovered more than once.
	#[inline]
	pub fn ambiguous_count(&self) -> usize {
		self.ambiguous
	}

	/// Returns the number of unique names.
	#[inline]
	pub fn len(&self) -> usize {
		self.by_name.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.by_name.is_empty()
	}
}

impl<D: HandlerDescriptor> std::fmt::Debug for UniqueNameTable<D> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("UniqueNameTable")
			.field("names", &self.by_name.len())
			.field("ambiguous", &self.ambiguous)
			.finish()
	}
}
