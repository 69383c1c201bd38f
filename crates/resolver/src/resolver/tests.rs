use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use nsroute_catalog::{CatalogConfig, HandlerCatalog, HandlerDescriptor};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

use super::*;
use crate::lookup_fn;

/// Test handler type.
#[derive(Debug)]
struct TestHandler {
	type_name: String,
	namespace: Option<String>,
}

impl HandlerDescriptor for TestHandler {
	fn type_name(&self) -> &str {
		&self.type_name
	}

	fn namespace(&self) -> Option<&str> {
		self.namespace.as_deref()
	}
}

fn handler(type_name: &str, namespace: Option<&str>) -> Arc<TestHandler> {
	Arc::new(TestHandler {
		type_name: type_name.to_owned(),
		namespace: namespace.map(str::to_owned),
	})
}

/// `{Orders (A), Orders (B), Users (A)}` plus the resolver over them.
fn orders_users() -> (Vec<Arc<TestHandler>>, NamespaceResolver<TestHandler>) {
	let defs = vec![
		handler("OrdersHandler", Some("A")),
		handler("OrdersHandler", Some("B")),
		handler("UsersHandler", Some("A")),
	];
	(defs.clone(), resolver_over(defs))
}

fn resolver_over(defs: Vec<Arc<TestHandler>>) -> NamespaceResolver<TestHandler> {
	let catalog = HandlerCatalog::new(CatalogConfig::default(), defs).unwrap();
	NamespaceResolver::with_unique_names(Arc::new(catalog))
}

fn found(resolution: &Resolution<TestHandler>) -> &Arc<TestHandler> {
	resolution.descriptor().unwrap_or_else(|| panic!("expected a handler, got {resolution:?}"))
}

#[test]
fn scenario_duplicate_resolved_by_candidate_namespace() {
	let (defs, resolver) = orders_users();

	let resolution = resolver.resolve(&RouteMatch::new("Orders").with_namespaces(["B"]));
	assert!(Arc::ptr_eq(found(&resolution), &defs[1]));
	assert_eq!(resolution.via(), Some(&ResolvedVia::Namespace("B".into())));
}

#[test]
fn scenario_no_candidate_holds_duplicate() {
	let (_, resolver) = orders_users();

	let resolution = resolver.resolve(&RouteMatch::new("Orders").with_namespaces(["C"]));
	assert_eq!(
		resolution.into_result().unwrap_err(),
		NotFound::NoCandidateMatched { name: "Orders".into() }
	);
}

#[test]
fn scenario_unique_name_ignores_candidates() {
	let (defs, resolver) = orders_users();

	let resolution = resolver.resolve(&RouteMatch::new("Users").with_namespaces(["B"]));
	assert!(Arc::ptr_eq(found(&resolution), &defs[2]));
	assert_eq!(resolution.via(), Some(&ResolvedVia::Primary));
	assert!(!resolver.catalog().is_index_built(), "fast path must not build the index");
}

#[test]
fn scenario_duplicate_without_hint_is_not_found() {
	let (_, resolver) = orders_users();

	let resolution = resolver.resolve(&RouteMatch::new("Orders"));
	assert_eq!(
		resolution.into_result().unwrap_err(),
		NotFound::Unresolved { name: "Orders".into() }
	);
	assert!(!resolver.catalog().is_index_built());
}

#[test]
fn malformed_discovered_name_is_excluded() {
	let resolver = resolver_over(vec![
		handler("OrdersHandler", Some("A")),
		handler("OrdersService", Some("B")),
		handler("OrdersHandler", Some("C")),
	]);

	assert!(resolver.resolve(&RouteMatch::new("Orders").with_namespaces(["C"])).is_found());
	assert!(!resolver.resolve(&RouteMatch::new("Orders").with_namespaces(["B"])).is_found());
	assert_eq!(resolver.catalog().duplicate_index().diagnostics().skipped.len(), 1);
}

#[test]
fn malformed_hint_falls_back_to_plain_lookup() {
	let (defs, resolver) = orders_users();

	let users = resolver.resolve_name(Some("Users"), &NamespaceHint::Malformed);
	assert!(Arc::ptr_eq(found(&users), &defs[2]));

	let orders = resolver.resolve_name(Some("Orders"), &NamespaceHint::Malformed);
	assert!(!orders.is_found());
	assert!(!resolver.catalog().is_index_built());
}

#[test]
fn missing_name_is_not_found() {
	let (_, resolver) = orders_users();
	let hint = NamespaceHint::candidates(["A"]);

	for name in [None, Some("")] {
		let resolution = resolver.resolve_name(name, &hint);
		assert_eq!(resolution.into_result().unwrap_err(), NotFound::MissingName);
	}
	assert!(!resolver.catalog().is_index_built());
}

#[test]
fn first_declared_candidate_wins() {
	let (defs, resolver) = orders_users();

	let resolution = resolver.resolve(&RouteMatch::new("Orders").with_namespaces(["C", "B", "A"]));
	assert!(Arc::ptr_eq(found(&resolution), &defs[1]));

	let resolution = resolver.resolve(&RouteMatch::new("Orders").with_namespaces(["A", "B"]));
	assert!(Arc::ptr_eq(found(&resolution), &defs[0]));
}

#[test]
fn names_and_namespaces_match_case_insensitively() {
	let (defs, resolver) = orders_users();

	let resolution = resolver.resolve(&RouteMatch::new("orders").with_namespaces(["b"]));
	assert!(Arc::ptr_eq(found(&resolution), &defs[1]));
	assert_eq!(resolution.via(), Some(&ResolvedVia::Namespace("B".into())));
}

#[test]
fn empty_candidate_list_matches_nothing() {
	let (_, resolver) = orders_users();

	let resolution = resolver.resolve_name(Some("Orders"), &NamespaceHint::candidates(Vec::<String>::new()));
	assert_eq!(
		resolution.into_result().unwrap_err(),
		NotFound::NoCandidateMatched { name: "Orders".into() }
	);
}

#[test]
fn unknown_name_with_candidates_is_unresolved() {
	let (_, resolver) = orders_users();

	let resolution = resolver.resolve(&RouteMatch::new("Missing").with_namespaces(["A"]));
	assert_eq!(
		resolution.into_result().unwrap_err(),
		NotFound::Unresolved { name: "Missing".into() }
	);
	assert!(resolver.catalog().is_index_built());
}

#[test]
fn resolves_raw_route_data() {
	let (defs, resolver) = orders_users();
	let values = json!({ "handler": "Orders" });
	let defaults = json!({ "namespaces": ["B"] });

	let resolution = resolver.resolve_route(values.as_object().unwrap(), defaults.as_object().unwrap());
	assert!(Arc::ptr_eq(found(&resolution), &defs[1]));

	let malformed = json!({ "namespaces": "B" });
	let resolution = resolver.resolve_route(values.as_object().unwrap(), malformed.as_object().unwrap());
	assert!(!resolution.is_found());
}

#[test]
fn from_config_applies_suffix_and_route_keys() {
	let config = ResolverConfig::from_toml_str(
		r#"
		[catalog]
		handler_suffix = "Controller"

		[route]
		handler_key = "controller"
		"#,
	)
	.unwrap();
	let defs = vec![
		handler("OrdersController", Some("Api.V1")),
		handler("OrdersController", Some("Api.V2")),
	];
	let resolver = NamespaceResolver::from_config(&config, defs.clone()).unwrap();

	let values = json!({ "controller": "Orders" });
	let defaults = json!({ "namespaces": ["Api.V2"] });
	let resolution = resolver.resolve_route(values.as_object().unwrap(), defaults.as_object().unwrap());
	assert!(Arc::ptr_eq(found(&resolution), &defs[1]));
}

#[test]
fn custom_primary_lookup_is_consulted_first() {
	let (defs, _) = orders_users();
	let catalog = Arc::new(HandlerCatalog::new(CatalogConfig::default(), defs.clone()).unwrap());
	let calls = AtomicUsize::new(0);
	let pinned = defs[0].clone();
	let resolver = NamespaceResolver::new(
		catalog,
		lookup_fn(|name: &str| {
			calls.fetch_add(1, Ordering::SeqCst);
			(name == "Pinned").then(|| pinned.clone())
		}),
	);

	let resolution = resolver.resolve(&RouteMatch::new("Pinned").with_namespaces(["B"]));
	assert!(Arc::ptr_eq(found(&resolution), &defs[0]));
	assert_eq!(resolution.via(), Some(&ResolvedVia::Primary));

	let resolution = resolver.resolve(&RouteMatch::new("Orders").with_namespaces(["B"]));
	assert!(Arc::ptr_eq(found(&resolution), &defs[1]));
	assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn concurrent_resolution_shares_one_index() {
	let (defs, resolver) = orders_users();

	std::thread::scope(|scope| {
		for _ in 0..8 {
			scope.spawn(|| {
				let resolution = resolver.resolve(&RouteMatch::new("Orders").with_namespaces(["A"]));
				assert!(Arc::ptr_eq(found(&resolution), &defs[0]));
			});
		}
	});

	assert!(Arc::ptr_eq(
		&resolver.catalog().duplicate_index(),
		&resolver.catalog().duplicate_index()
	));
}

const NAMES: &[&str] = &["Orders", "Users", "Items", "Reports"];
const NAMESPACES: &[Option<&str>] = &[None, Some("A"), Some("B"), Some("Billing")];

fn arb_handlers() -> impl Strategy<Value = Vec<Arc<TestHandler>>> {
	prop::collection::vec((0..NAMES.len(), 0..NAMESPACES.len()), 0..16).prop_map(|picks| {
		picks
			.into_iter()
			.map(|(n, ns)| handler(&format!("{}Handler", NAMES[n]), NAMESPACES[ns]))
			.collect()
	})
}

fn arb_candidates() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec(prop::sample::select(vec!["", "A", "b", "B", "Billing", "Z"]), 0..4)
		.prop_map(|picks| picks.into_iter().map(str::to_owned).collect())
}

proptest! {
	/// A globally unique name resolves to its handler whatever the candidates are.
	#[test]
	fn prop_unique_names_take_fast_path(defs in arb_handlers(), candidates in arb_candidates()) {
		let resolver = resolver_over(defs);
		let unique = resolver.catalog().unique_names();
		let hint = NamespaceHint::candidates(candidates);

		for &name in NAMES {
			if let Some(expected) = unique.get(name) {
				let resolution = resolver.resolve_name(Some(name), &hint);
				prop_assert!(resolution.descriptor().is_some_and(|d| Arc::ptr_eq(d, expected)));
				prop_assert_eq!(resolution.via(), Some(&ResolvedVia::Primary));
			}
		}
	}

	/// Without a hint, resolution is exactly the plain lookup.
	#[test]
	fn prop_no_hint_is_plain_lookup(defs in arb_handlers(), pick in 0..NAMES.len()) {
		let resolver = resolver_over(defs);
		let name = NAMES[pick];

		let resolution = resolver.resolve_name(Some(name), &NamespaceHint::Absent);
		let expected = resolver.primary().lookup(name);
		match (resolution.descriptor(), expected.as_ref()) {
			(Some(got), Some(want)) => prop_assert!(Arc::ptr_eq(got, want)),
			(None, None) => {}
			(got, want) => prop_assert!(false, "mismatch: {:?} vs {:?}", got, want),
		}
		prop_assert!(!resolver.catalog().is_index_built());
	}

	/// A namespace resolution always lands in one of the declared candidates.
	#[test]
	fn prop_namespace_result_is_a_candidate(
		defs in arb_handlers(),
		candidates in arb_candidates(),
		pick in 0..NAMES.len(),
	) {
		let resolver = resolver_over(defs);
		let hint = NamespaceHint::candidates(candidates);
		let declared = hint.as_candidates().unwrap();

		let resolution = resolver.resolve_name(Some(NAMES[pick]), &hint);
		if let Some(ResolvedVia::Namespace(namespace)) = resolution.via() {
			prop_assert!(declared.contains(namespace));
			prop_assert_eq!(
				resolution.descriptor().unwrap().type_name().to_lowercase(),
				format!("{}handler", NAMES[pick].to_lowercase())
			);
		}
	}
}
