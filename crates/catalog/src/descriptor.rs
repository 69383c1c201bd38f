/// A concrete handler implementation as reported by the discovery layer.
///
/// The catalog never invokes handlers. It only reads their naming metadata and hands
/// back the shared descriptor, which is compared by pointer identity.
pub trait HandlerDescriptor: Send + Sync + 'static {
	/// Full type name, including the implementation suffix (e.g. `OrdersHandler`).
	fn type_name(&self) -> &str;

	/// Namespace the handler is declared in. `None` means ungrouped.
	fn namespace(&self) -> Option<&str> {
		None
	}
}
