//! Lazily-published handler catalog.
//!
//! # Concurrency
//!
//! - Discovery, the duplicate index and the unique-name table each sit behind their own
//!   [`OnceLock`]. Racing first callers block until the single initializer finishes and
//!   then share its `Arc`.
//! - Once published, nothing is mutated again; reads take no locks.

use std::sync::{Arc, OnceLock};

use crate::{
	CatalogConfig, ConfigError, DuplicateIndex, HandlerDescriptor, HandlerDiscoverySource, UniqueNameTable,
	build_duplicate_index,
};

/// Owns handler discovery and the tables derived from it.
pub struct HandlerCatalog<D: HandlerDescriptor> {
	config: CatalogConfig,
	source: Box<dyn HandlerDiscoverySource<D>>,
	descriptors: OnceLock<Arc<[Arc<D>]>>,
	index: OnceLock<Arc<DuplicateIndex<D>>>,
	unique: OnceLock<Arc<UniqueNameTable<D>>>,
}

impl<D: HandlerDescriptor> HandlerCatalog<D> {
	/// Creates a catalog. Nothing is discovered or built until first use.
	pub fn new<S>(config: CatalogConfig, source: S) -> Result<Self, ConfigError>
	where
		S: HandlerDiscoverySource<D> + 'static,
	{
		config.validate()?;
		Ok(Self {
			config,
			source: Box::new(source),
			descriptors: OnceLock::new(),
			index: OnceLock::new(),
			unique: OnceLock::new(),
		})
	}

	pub fn config(&self) -> &CatalogConfig {
		&self.config
	}

	/// Returns the suffix stripped from handler type names.
	pub fn suffix(&self) -> &str {
		&self.config.handler_suffix
	}

	/// Returns every discovered handler, running discovery on first call.
	pub fn descriptors(&self) -> Arc<[Arc<D>]> {
		self.descriptors
			.get_or_init(|| {
				let found = self.source.discover();
				tracing::debug!(handlers = found.len(), "Discovered handlers");
				found.into()
			})
			.clone()
	}

	/// Returns the duplicate-name index, building it on first call.
	pub fn duplicate_index(&self) -> Arc<DuplicateIndex<D>> {
		self.index
			.get_or_init(|| {
				let descriptors = self.descriptors();
				Arc::new(build_duplicate_index(self.suffix(), descriptors.iter().cloned()))
			})
			.clone()
	}

	/// Returns the unique-name table, building it on first call.
	pub fn unique_names(&self) -> Arc<UniqueNameTable<D>> {
		self.unique
			.get_or_init(|| {
				let descriptors = self.descriptors();
				Arc::new(UniqueNameTable::build(self.suffix(), descriptors.iter()))
			})
			.clone()
	}

	/// Returns true once the duplicate index has been materialized.
	pub fn is_index_built(&self) -> bool {
		self.index.get().is_some()
	}
}

impl<D: HandlerDescriptor> std::fmt::Debug for HandlerCatalog<D> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("HandlerCatalog")
			.field("config", &self.config)
			.field("discovered", &self.descriptors.get().map(|d| d.len()))
			.field("index", &self.index.get())
			.field("unique", &self.unique.get())
			.finish()
	}
}
