use std::sync::Arc;

use nsroute_catalog::HandlerDescriptor;
use thiserror::Error;

/// How a handler was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedVia {
	/// The plain name lookup.
	Primary,
	/// The duplicate index, in the given namespace (as discovered).
	Namespace(String),
}

/// Why no handler was found.
///
/// The routing layer decides what a miss means to the client (typically a 404).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
	/// The route did not capture a handler name.
	#[error("route did not name a handler")]
	MissingName,

	/// No handler by this name, in the plain lookup or the duplicate index.
	#[error("no handler named {name:?}")]
	Unresolved { name: String },

	/// The name is duplicated, but none of the route's candidate namespaces holds it.
	#[error("handler {name:?} is not declared in any of the route's namespaces")]
	NoCandidateMatched { name: String },
}

/// Outcome of one resolution.
pub enum Resolution<D: HandlerDescriptor> {
	Found { descriptor: Arc<D>, via: ResolvedVia },
	NotFound(NotFound),
}

impl<D: HandlerDescriptor> Resolution<D> {
	pub(crate) fn primary(descriptor: Arc<D>) -> Self {
		Self::Found {
			descriptor,
			via: ResolvedVia::Primary,
		}
	}

	/// Returns true if a handler was found.
	pub fn is_found(&self) -> bool {
		matches!(self, Self::Found { .. })
	}

	/// Returns the handler, if found.
	pub fn descriptor(&self) -> Option<&Arc<D>> {
		match self {
			Self::Found { descriptor, .. } => Some(descriptor),
			Self::NotFound(_) => None,
		}
	}

	/// Returns how the handler was found, if it was.
	pub fn via(&self) -> Option<&ResolvedVia> {
		match self {
			Self::Found { via, .. } => Some(via),
			Self::NotFound(_) => None,
		}
	}

	/// Converts to Option, returning Some for Found, None otherwise.
	pub fn into_descriptor(self) -> Option<Arc<D>> {
		match self {
			Self::Found { descriptor, .. } => Some(descriptor),
			Self::NotFound(_) => None,
		}
	}

	pub fn into_result(self) -> Result<Arc<D>, NotFound> {
		match self {
			Self::Found { descriptor, .. } => Ok(descriptor),
			Self::NotFound(reason) => Err(reason),
		}
	}
}

// Manual impls: no `Clone`/`Debug` bounds on `D`.

impl<D: HandlerDescriptor> Clone for Resolution<D> {
	fn clone(&self) -> Self {
		match self {
			Self::Found { descriptor, via } => Self::Found {
				descriptor: descriptor.clone(),
				via: via.clone(),
			},
			Self::NotFound(reason) => Self::NotFound(reason.clone()),
		}
	}
}

impl<D: HandlerDescriptor> std::fmt::Debug for Resolution<D> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Found { descriptor, via } => f
				.debug_struct("Found")
				.field("handler", &descriptor.type_name())
				.field("via", via)
				.finish(),
			Self::NotFound(reason) => f.debug_tuple("NotFound").field(reason).finish(),
		}
	}
}
