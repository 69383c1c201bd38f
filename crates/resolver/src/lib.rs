//! Namespace-disambiguating handler resolution.
//!
//! [`NamespaceResolver`] sits in front of an ordinary name -> handler lookup. Routes that
//! declare candidate namespaces get a second chance when the plain lookup misses: the
//! catalog's [`nsroute_catalog::DuplicateIndex`] is consulted for a handler with the
//! requested name in one of those namespaces.
//!
//! # Decision Order
//!
//! 1. No namespace hint on the route (or a malformed one): plain lookup only.
//! 2. No handler name: plain lookup only.
//! 3. Plain lookup hit: return it. The duplicate index is never touched.
//! 4. Otherwise: first candidate namespace, in declaration order, that holds the name.
//!    A name the duplicate index does not know is [`NotFound::Unresolved`].
//!
//! Every failure is a [`Resolution::NotFound`]; nothing here aborts dispatch.

mod config;
mod hint;
mod lookup;
mod resolution;
mod resolver;

pub use config::{ConfigError, DEFAULT_HANDLER_KEY, DEFAULT_NAMESPACES_KEY, ResolverConfig, RouteKeys};
pub use hint::{CandidateNamespaces, NamespaceHint, RouteMatch};
pub use lookup::{LookupFn, PrimaryLookup, lookup_fn};
pub use resolution::{NotFound, Resolution, ResolvedVia};
pub use resolver::NamespaceResolver;
