//! Synchronous dispatch of location-changed events.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::history::NavigationKind;

/// The payload of a location-changed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationChange {
	/// Name of the matched route.
	pub name: String,
	/// The raw path that resolved.
	pub path: String,
	/// Parameters extracted from the path.
	#[serde(default)]
	pub params: HashMap<String, String>,
	/// How the change was performed.
	pub kind: NavigationKind,
}

/// Receiver callback for location changes.
pub type Receiver = Arc<dyn Fn(&LocationChange) + Send + Sync>;

struct Subscription {
	receiver: Receiver,
	key: Option<String>,
}

/// A synchronous signal fanning location changes out to receivers.
///
/// Receivers run on the navigating thread, in connect order. Connecting
/// under a key replaces any earlier receiver with the same key, so
/// re-initialized components do not stack up stale callbacks.
#[derive(Clone, Default)]
pub struct LocationSignal {
	subscriptions: Arc<RwLock<Vec<Subscription>>>,
}

impl LocationSignal {
	/// Creates a signal with no receivers.
	pub fn new() -> Self {
		Self::default()
	}

	/// Connects an anonymous receiver.
	pub fn connect<F>(&self, receiver: F)
	where
		F: Fn(&LocationChange) + Send + Sync + 'static,
	{
		self.subscriptions.write().push(Subscription {
			receiver: Arc::new(receiver),
			key: None,
		});
	}

	/// Connects a receiver under `key`, replacing any earlier receiver
	/// with the same key.
	pub fn connect_keyed<F>(&self, key: impl Into<String>, receiver: F)
	where
		F: Fn(&LocationChange) + Send + Sync + 'static,
	{
		let key = key.into();
		let mut subscriptions = self.subscriptions.write();
		subscriptions.retain(|s| s.key.as_deref() != Some(key.as_str()));
		subscriptions.push(Subscription {
			receiver: Arc::new(receiver),
			key: Some(key),
		});
	}

	/// Disconnects the receiver under `key`. Returns whether one existed.
	pub fn disconnect(&self, key: &str) -> bool {
		let mut subscriptions = self.subscriptions.write();
		let before = subscriptions.len();
		subscriptions.retain(|s| s.key.as_deref() != Some(key));
		subscriptions.len() < before
	}

	/// Sends a change to every receiver, in connect order.
	pub fn send(&self, change: &LocationChange) {
		let subscriptions = self.subscriptions.read();
		for subscription in subscriptions.iter() {
			(subscription.receiver)(change);
		}
	}

	/// Number of connected receivers.
	pub fn receiver_count(&self) -> usize {
		self.subscriptions.read().len()
	}

	/// Returns whether any receiver is connected.
	pub fn has_receivers(&self) -> bool {
		self.receiver_count() > 0
	}
}

impl fmt::Debug for LocationSignal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LocationSignal")
			.field("receivers", &self.receiver_count())
			.finish()
	}
}
