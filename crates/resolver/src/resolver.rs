use std::sync::Arc;

use nsroute_catalog::{HandlerCatalog, HandlerDescriptor, HandlerDiscoverySource, UniqueNameTable};
use serde_json::{Map, Value};

use crate::{ConfigError, NamespaceHint, NotFound, PrimaryLookup, Resolution, ResolvedVia, ResolverConfig, RouteKeys, RouteMatch};

/// Per-request entry point: picks the handler for a matched route.
///
/// Cheap to share across request threads; all state behind it is published once and
/// then read-only.
pub struct NamespaceResolver<D: HandlerDescriptor, P = Arc<UniqueNameTable<D>>> {
	catalog: Arc<HandlerCatalog<D>>,
	primary: P,
	keys: RouteKeys,
}

impl<D: HandlerDescriptor> NamespaceResolver<D> {
	/// Uses the catalog's own unique-name table as the primary lookup.
	pub fn with_unique_names(catalog: Arc<HandlerCatalog<D>>) -> Self {
		let primary = catalog.unique_names();
		Self::new(catalog, primary)
	}

	/// Builds catalog and resolver from configuration.
	pub fn from_config<S>(config: &ResolverConfig, source: S) -> Result<Self, ConfigError>
	where
		S: HandlerDiscoverySource<D> + 'static,
	{
		config.validate()?;
		let catalog = HandlerCatalog::new(config.catalog.clone(), source)?;
		Ok(Self::with_unique_names(Arc::new(catalog)).with_route_keys(config.route.clone()))
	}
}

impl<D: HandlerDescriptor, P: PrimaryLookup<D>> NamespaceResolver<D, P> {
	/// Decorates `primary` with namespace disambiguation backed by `catalog`.
	pub fn new(catalog: Arc<HandlerCatalog<D>>, primary: P) -> Self {
		Self {
			catalog,
			primary,
			keys: RouteKeys::default(),
		}
	}

	/// Sets the route keys read by [`resolve_route`](Self::resolve_route).
	pub fn with_route_keys(mut self, keys: RouteKeys) -> Self {
		self.keys = keys;
		self
	}

	pub fn catalog(&self) -> &Arc<HandlerCatalog<D>> {
		&self.catalog
	}

	pub fn primary(&self) -> &P {
		&self.primary
	}

	pub fn route_keys(&self) -> &RouteKeys {
		&self.keys
	}

	/// Resolves raw route data: captured `values` and declared `defaults`.
	pub fn resolve_route(&self, values: &Map<String, Value>, defaults: &Map<String, Value>) -> Resolution<D> {
		self.resolve(&RouteMatch::from_route(values, defaults, &self.keys))
	}

	pub fn resolve(&self, route: &RouteMatch) -> Resolution<D> {
		self.resolve_name(route.handler.as_deref(), &route.namespaces)
	}

	/// Resolves `name` using the route's namespace hint.
	pub fn resolve_name(&self, name: Option<&str>, hint: &NamespaceHint) -> Resolution<D> {
		let candidates = match hint {
			NamespaceHint::Absent => return self.delegate(name),
			NamespaceHint::Malformed => {
				tracing::debug!(handler = name, "Malformed namespace hint; using plain lookup");
				return self.delegate(name);
			}
			NamespaceHint::Candidates(candidates) => candidates,
		};

		let Some(name) = name.filter(|name| !name.is_empty()) else {
			return self.delegate(name);
		};

		if let Some(descriptor) = self.primary.lookup(name) {
			tracing::trace!(handler = name, "Resolved by plain lookup");
			return Resolution::primary(descriptor);
		}

		let index = self.catalog.duplicate_index();
		match index.lookup(name, candidates.iter()) {
			Some(record) => {
				tracing::trace!(handler = name, namespace = %record.namespace, "Resolved by namespace");
				Resolution::Found {
					descriptor: record.descriptor.clone(),
					via: ResolvedVia::Namespace(record.namespace.clone()),
				}
			}
			None if !index.contains_name(name) => {
				tracing::debug!(handler = name, "Handler not found by plain lookup or in duplicate index");
				Resolution::NotFound(NotFound::Unresolved { name: name.to_owned() })
			}
			None => {
				tracing::debug!(handler = name, candidates = candidates.len(), "No candidate namespace holds handler");
				Resolution::NotFound(NotFound::NoCandidateMatched { name: name.to_owned() })
			}
		}
	}

	/// Plain lookup only, with the result passed through.
	fn delegate(&self, name: Option<&str>) -> Resolution<D> {
		let requested = name.unwrap_or_default();
		match self.primary.lookup(requested) {
			Some(descriptor) => Resolution::primary(descriptor),
			None if requested.is_empty() => Resolution::NotFound(NotFound::MissingName),
			None => Resolution::NotFound(NotFound::Unresolved {
				name: requested.to_owned(),
			}),
		}
	}
}

impl<D: HandlerDescriptor, P> std::fmt::Debug for NamespaceResolver<D, P> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NamespaceResolver")
			.field("catalog", &self.catalog)
			.field("keys", &self.keys)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests;
