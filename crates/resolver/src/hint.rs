//! Route-supplied resolution inputs.

use indexmap::IndexMap;
use nsroute_catalog::fold_key;
use serde_json::{Map, Value};

use crate::RouteKeys;

/// Ordered, case-insensitively de-duplicated namespace ids declared by a route.
///
/// Declaration order is precedence order: when several candidates hold a handler with
/// the requested name, the earliest one wins.
#[derive(Debug, Clone, Default)]
pub struct CandidateNamespaces {
	/// Folded id -> id as declared.
	ids: IndexMap<Box<str>, String>,
}

impl CandidateNamespaces {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a namespace id. Returns false if it was already present.
	pub fn push(&mut self, namespace: impl Into<String>) -> bool {
		let namespace = namespace.into();
		match self.ids.entry(fold_key(&namespace)) {
			indexmap::map::Entry::Occupied(_) => false,
			indexmap::map::Entry::Vacant(slot) => {
				slot.insert(namespace);
				true
			}
		}
	}

	/// Returns true if `namespace` was declared (case-insensitive).
	pub fn contains(&self, namespace: &str) -> bool {
		self.ids.contains_key(&*fold_key(namespace))
	}

	/// Iterates the ids as declared, in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
		self.ids.values().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}
}

impl PartialEq for CandidateNamespaces {
	fn eq(&self, other: &Self) -> bool {
		self.ids.iter().eq(other.ids.iter())
	}
}

impl Eq for CandidateNamespaces {}

impl<S: Into<String>> FromIterator<S> for CandidateNamespaces {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		let mut candidates = Self::new();
		for namespace in iter {
			candidates.push(namespace);
		}
		candidates
	}
}

/// The namespace-disambiguation hint carried by a matched route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NamespaceHint {
	/// The route declares no candidate namespaces.
	#[default]
	Absent,
	/// The route declares something, but not a list of strings.
	Malformed,
	/// The route declares candidate namespaces.
	Candidates(CandidateNamespaces),
}

impl NamespaceHint {
	/// Builds a hint from candidate namespace ids.
	pub fn candidates<I, S>(namespaces: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::Candidates(namespaces.into_iter().collect())
	}

	/// Interprets a raw route-default value.
	///
	/// Missing or `null` is [`Absent`](Self::Absent); an array of strings is
	/// [`Candidates`](Self::Candidates); any other shape, including a bare string, is
	/// [`Malformed`](Self::Malformed).
	pub fn from_value(value: Option<&Value>) -> Self {
		match value {
			None | Some(Value::Null) => Self::Absent,
			Some(Value::Array(items)) => items
				.iter()
				.map(Value::as_str)
				.collect::<Option<CandidateNamespaces>>()
				.map_or(Self::Malformed, Self::Candidates),
			Some(_) => Self::Malformed,
		}
	}

	/// Returns the candidates if the hint is well-formed.
	pub fn as_candidates(&self) -> Option<&CandidateNamespaces> {
		match self {
			Self::Candidates(candidates) => Some(candidates),
			_ => None,
		}
	}
}

/// What the routing layer knows about one incoming request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMatch {
	/// Requested handler base name, if the route captured one.
	pub handler: Option<String>,
	pub namespaces: NamespaceHint,
}

impl RouteMatch {
	/// A route naming `handler` with no namespace hint.
	pub fn new(handler: impl Into<String>) -> Self {
		Self {
			handler: Some(handler.into()),
			namespaces: NamespaceHint::Absent,
		}
	}

	/// Attaches candidate namespaces.
	pub fn with_namespaces<I, S>(mut self, namespaces: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.namespaces = NamespaceHint::candidates(namespaces);
		self
	}

	/// Reads the handler name from the route's captured values and the hint from its
	/// declared defaults.
	pub fn from_route(values: &Map<String, Value>, defaults: &Map<String, Value>, keys: &RouteKeys) -> Self {
		Self {
			handler: values.get(&keys.handler_key).and_then(route_value_string),
			namespaces: NamespaceHint::from_value(defaults.get(&keys.namespaces_key)),
		}
	}
}

fn route_value_string(value: &Value) -> Option<String> {
	match value {
		Value::String(s) => Some(s.clone()),
		Value::Number(n) => Some(n.to_string()),
		Value::Bool(b) => Some(b.to_string()),
		_ => None,
	}
}
