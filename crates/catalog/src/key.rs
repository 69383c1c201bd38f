//! Identifier folding and base-name derivation.

use crate::CatalogError;

/// Folds a handler name or namespace id into its comparison form.
///
/// All identity checks in the catalog and resolver go through this function.
pub fn fold_key(raw: &str) -> Box<str> {
	raw.to_lowercase().into_boxed_str()
}

/// A handler's type name with the configured implementation suffix removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseName<'a>(&'a str);

impl<'a> BaseName<'a> {
	/// Strips `suffix` (ASCII case-insensitive) from the end of `full`.
	pub fn strip(full: &'a str, suffix: &str) -> Result<Self, CatalogError> {
		let missing = || CatalogError::MissingSuffix {
			name: full.to_owned(),
			suffix: suffix.to_owned(),
		};

		let at = full
			.len()
			.checked_sub(suffix.len())
			.filter(|&at| full.is_char_boundary(at))
			.ok_or_else(missing)?;
		let (base, tail) = full.split_at(at);

		if !tail.eq_ignore_ascii_case(suffix) {
			return Err(missing());
		}
		if base.is_empty() {
			return Err(CatalogError::EmptyBaseName { name: full.to_owned() });
		}
		Ok(Self(base))
	}

	pub fn as_str(&self) -> &'a str {
		self.0
	}
}

impl std::fmt::Display for BaseName<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.0)
	}
}
