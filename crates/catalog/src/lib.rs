//! Handler catalog for namespace-aware dispatch.
//!
//! This crate owns the handler side of dispatch disambiguation:
//! - [`HandlerDescriptor`]: what the discovery layer hands us for each handler
//! - [`HandlerDiscoverySource`]: the one-shot discovery capability
//! - [`DuplicateIndex`]: base name -> namespace -> handler, for names that are not unique
//! - [`UniqueNameTable`]: base name -> handler, for names that are unique
//! - [`HandlerCatalog`]: lazily builds and publishes both exactly once
//!
//! # Mental Model
//!
//! 1. **Discovery:** the host supplies every handler it knows about once, at startup.
//! 2. **Naming:** each handler's type name has the configured suffix stripped to get its
//!    base name. Names without the suffix break the discovery contract and are skipped.
//! 3. **Indexing:** base names seen once go to the [`UniqueNameTable`]; base names seen
//!    more than once go to the [`DuplicateIndex`], keyed by namespace.
//! 4. **Publication:** [`HandlerCatalog`] memoizes discovery and both tables behind
//!    [`std::sync::OnceLock`], so racing first callers all observe one instance.
//!
//! # Invariants
//!
//! - No two records in a [`DuplicateIndex`] share a folded (name, namespace) pair.
//!   - Enforced in: [`IndexBuilder::build`].
//!   - Failure symptom: a route resolves to different handlers depending on build order.
//!
//! - Every identifier comparison is case-insensitive and goes through [`fold_key`].
//!
//! - Each table is materialized at most once per catalog.
//!   - Enforced in: [`HandlerCatalog::duplicate_index`], [`HandlerCatalog::unique_names`].

mod catalog;
mod config;
mod descriptor;
mod discovery;
mod error;
pub mod index;
mod key;
mod unique;

pub use catalog::HandlerCatalog;
pub use config::{CatalogConfig, ConfigError, DEFAULT_HANDLER_SUFFIX};
pub use descriptor::HandlerDescriptor;
pub use discovery::{FnDiscovery, HandlerDiscoverySource, from_fn};
pub use error::CatalogError;
pub use index::{
	DroppedDuplicate, DuplicateIndex, HandlerRecord, IndexBuilder, IndexDiagnostics, SkippedHandler,
	build_duplicate_index,
};
pub use key::{BaseName, fold_key};
pub use unique::UniqueNameTable;

#[cfg(test)]
pub(crate) mod test_fixtures;
