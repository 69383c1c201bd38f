use std::sync::Arc;

use crate::HandlerDescriptor;

/// Supplies every discoverable handler, synchronously, once per catalog.
///
/// The result is assumed stable for the lifetime of the process; [`crate::HandlerCatalog`]
/// calls [`discover`](Self::discover) at most once and caches what it returns.
pub trait HandlerDiscoverySource<D: HandlerDescriptor>: Send + Sync {
	/// Returns all handlers in a stable discovery order.
	fn discover(&self) -> Vec<Arc<D>>;
}

impl<D: HandlerDescriptor> HandlerDiscoverySource<D> for Vec<Arc<D>> {
	fn discover(&self) -> Vec<Arc<D>> {
		self.clone()
	}
}

impl<D: HandlerDescriptor, const N: usize> HandlerDiscoverySource<D> for [Arc<D>; N] {
	fn discover(&self) -> Vec<Arc<D>> {
		self.to_vec()
	}
}

impl<D: HandlerDescriptor> HandlerDiscoverySource<D> for Arc<[Arc<D>]> {
	fn discover(&self) -> Vec<Arc<D>> {
		self.to_vec()
	}
}

/// Discovery backed by a closure. See [`from_fn`].
pub struct FnDiscovery<F>(F);

impl<D, F> HandlerDiscoverySource<D> for FnDiscovery<F>
where
	D: HandlerDescriptor,
	F: Fn() -> Vec<Arc<D>> + Send + Sync,
{
	fn discover(&self) -> Vec<Arc<D>> {
		(self.0)()
	}
}

/// Wraps a closure as a [`HandlerDiscoverySource`].
pub fn from_fn<D, F>(f: F) -> FnDiscovery<F>
where
	D: HandlerDescriptor,
	F: Fn() -> Vec<Arc<D>> + Send + Sync,
{
	FnDiscovery(f)
}
