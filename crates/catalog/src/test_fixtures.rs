use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::HandlerDescriptor;

/// Test handler type.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct TestHandler {
	pub type_name: String,
	pub namespace: Option<String>,
}

impl HandlerDescriptor for TestHandler {
	fn type_name(&self) -> &str {
		&self.type_name
	}

	fn namespace(&self) -> Option<&str> {
		self.namespace.as_deref()
	}
}

pub(crate) fn handler(type_name: &str, namespace: Option<&str>) -> Arc<TestHandler> {
	Arc::new(TestHandler {
		type_name: type_name.to_owned(),
		namespace: namespace.map(str::to_owned),
	})
}

/// `{Orders (A), Orders (B), Users (A)}`.
pub(crate) fn orders_users() -> Vec<Arc<TestHandler>> {
	vec![
		handler("OrdersHandler", Some("A")),
		handler("OrdersHandler", Some("B")),
		handler("UsersHandler", Some("A")),
	]
}

/// One captured tracing event.
#[derive(Debug, Clone)]
pub(crate) struct CapturedEvent {
	pub level: tracing::Level,
	pub handler: Option<String>,
	pub message: String,
}

/// Layer that records events into a shared buffer.
struct CaptureLayer(Arc<Mutex<Vec<CapturedEvent>>>);

struct EventVisitor<'a>(&'a mut CapturedEvent);

impl Visit for EventVisitor<'_> {
	fn record_str(&mut self, field: &Field, value: &str) {
		match field.name() {
			"handler" => self.0.handler = Some(value.to_owned()),
			"message" => self.0.message = value.to_owned(),
			_ => {}
		}
	}

	fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
		match field.name() {
			"handler" => self.0.handler = Some(format!("{value:?}")),
			"message" => self.0.message = format!("{value:?}"),
			_ => {}
		}
	}
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
	fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
		let mut captured = CapturedEvent {
			level: *event.metadata().level(),
			handler: None,
			message: String::new(),
		};
		event.record(&mut EventVisitor(&mut captured));
		self.0.lock().unwrap().push(captured);
	}
}

/// Runs `f` with a thread-local subscriber and returns its result plus every event it emitted.
pub(crate) fn capture_events<T>(f: impl FnOnce() -> T) -> (T, Vec<CapturedEvent>) {
	let events = Arc::new(Mutex::new(Vec::new()));
	let subscriber = Registry::default().with(CaptureLayer(Arc::clone(&events)));
	let output = tracing::subscriber::with_default(subscriber, f);
	let events = events.lock().unwrap().clone();
	(output, events)
}
