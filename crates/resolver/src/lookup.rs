use std::sync::Arc;

use nsroute_catalog::{HandlerDescriptor, UniqueNameTable};

/// The ordinary name -> handler lookup that [`crate::NamespaceResolver`] decorates.
///
/// Implementations report a miss both for unknown names and for names that exist only
/// as duplicates; the resolver treats both the same way.
pub trait PrimaryLookup<D: HandlerDescriptor> {
	fn lookup(&self, name: &str) -> Option<Arc<D>>;
}

impl<D: HandlerDescriptor> PrimaryLookup<D> for UniqueNameTable<D> {
	fn lookup(&self, name: &str) -> Option<Arc<D>> {
		self.get(name).cloned()
	}
}

impl<D: HandlerDescriptor, P: PrimaryLookup<D> + ?Sized> PrimaryLookup<D> for Arc<P> {
	fn lookup(&self, name: &str) -> Option<Arc<D>> {
		(**self).lookup(name)
	}
}

impl<D: HandlerDescriptor, P: PrimaryLookup<D> + ?Sized> PrimaryLookup<D> for &P {
	fn lookup(&self, name: &str) -> Option<Arc<D>> {
		(**self).lookup(name)
	}
}

/// Primary lookup backed by a closure. See [`lookup_fn`].
pub struct LookupFn<F>(F);

impl<D, F> PrimaryLookup<D> for LookupFn<F>
where
	D: HandlerDescriptor,
	F: Fn(&str) -> Option<Arc<D>>,
{
	fn lookup(&self, name: &str) -> Option<Arc<D>> {
		(self.0)(name)
	}
}

/// Wraps a closure as a [`PrimaryLookup`].
pub fn lookup_fn<D, F>(f: F) -> LookupFn<F>
where
	D: HandlerDescriptor,
	F: Fn(&str) -> Option<Arc<D>>,
{
	LookupFn(f)
}
