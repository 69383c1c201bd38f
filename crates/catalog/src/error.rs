use thiserror::Error;

/// A discovered handler that breaks the naming contract of the discovery layer.
///
/// These never abort index construction: the offending handler is logged and left out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
	/// The handler's type name does not end with the configured suffix.
	#[error("handler {name:?} does not end with suffix {suffix:?}")]
	MissingSuffix { name: String, suffix: String },

	/// The handler's type name is the suffix and nothing else.
	#[error("handler {name:?} has an empty base name")]
	EmptyBaseName { name: String },
}
