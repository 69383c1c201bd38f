//! Catalog configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Suffix stripped from handler type names when none is configured.
pub const DEFAULT_HANDLER_SUFFIX: &str = "Handler";

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// The handler suffix was configured as an empty string.
	#[error("handler suffix must not be empty")]
	EmptySuffix,
}

/// Static parameters supplied when a [`crate::HandlerCatalog`] is constructed.
///
/// ```toml
/// handler_suffix = "Controller"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
	/// Conventional suffix every discovered handler type name must carry.
	pub handler_suffix: String,
}

impl Default for CatalogConfig {
	fn default() -> Self {
		Self {
			handler_suffix: DEFAULT_HANDLER_SUFFIX.to_owned(),
		}
	}
}

impl CatalogConfig {
	pub fn new(handler_suffix: impl Into<String>) -> Self {
		Self {
			handler_suffix: handler_suffix.into(),
		}
	}

	/// Parses and validates a TOML document. Missing fields take their defaults.
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.handler_suffix.is_empty() {
			return Err(ConfigError::EmptySuffix);
		}
		Ok(())
	}
}
