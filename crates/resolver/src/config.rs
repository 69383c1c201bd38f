//! Resolver configuration.

use nsroute_catalog::CatalogConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Route value holding the requested handler name, when none is configured.
pub const DEFAULT_HANDLER_KEY: &str = "handler";
/// Route default holding the candidate namespaces, when none is configured.
pub const DEFAULT_NAMESPACES_KEY: &str = "namespaces";

/// Errors that can occur when loading or validating resolver configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// The catalog section failed validation.
	#[error(transparent)]
	Catalog(#[from] nsroute_catalog::ConfigError),

	/// A route key was configured as an empty string.
	#[error("route key {field} must not be empty")]
	EmptyRouteKey { field: &'static str },
}

/// Names of the route entries the resolver reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteKeys {
	/// Key in the matched route's values naming the requested handler.
	pub handler_key: String,
	/// Key in the matched route's defaults listing candidate namespaces.
	pub namespaces_key: String,
}

impl Default for RouteKeys {
	fn default() -> Self {
		Self {
			handler_key: DEFAULT_HANDLER_KEY.to_owned(),
			namespaces_key: DEFAULT_NAMESPACES_KEY.to_owned(),
		}
	}
}

/// Full resolver configuration.
///
/// ```toml
/// [catalog]
/// handler_suffix = "Controller"
///
/// [route]
/// handler_key = "controller"
/// namespaces_key = "namespaces"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
	pub catalog: CatalogConfig,
	pub route: RouteKeys,
}

impl ResolverConfig {
	/// Parses and validates a TOML document. Missing sections take their defaults.
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		self.catalog.validate()?;
		if self.route.handler_key.is_empty() {
			return Err(ConfigError::EmptyRouteKey { field: "handler_key" });
		}
		if self.route.namespaces_key.is_empty() {
			return Err(ConfigError::EmptyRouteKey { field: "namespaces_key" });
		}
		Ok(())
	}
}
