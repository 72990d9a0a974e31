//! The navigator: current-location state over a route table and a
//! history backend.
//!
//! Navigation is synchronous and processed to completion one request at a
//! time. The navigator is the only writer of the current-location record
//! and of its history backend; all failures are returned to the caller
//! before any state is mutated.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::dispatch::{LocationChange, LocationSignal};
use crate::error::RouterError;
use crate::history::{History, HistoryEntry, MemoryHistory, NavigationKind};
use crate::table::RouteTable;

/// Push vs replace semantics for a navigation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavigationMode {
	/// Append a new history entry (the default).
	#[default]
	Push,
	/// Overwrite the current history entry.
	Replace,
}

/// Drives navigation over an immutable [`RouteTable`].
///
/// Every successful navigation resolves the path, records the visit in
/// the history backend, updates the current-location record, and fans a
/// [`LocationChange`] out to subscribers, in that order.
pub struct Navigator<V, H: History = MemoryHistory> {
	table: RouteTable<V>,
	history: H,
	current: Option<LocationChange>,
	fallback: Option<V>,
	signal: LocationSignal,
}

impl<V> Navigator<V, MemoryHistory> {
	/// Creates a navigator over an empty in-memory history stack.
	pub fn new(table: RouteTable<V>) -> Self {
		Self::with_history(table, MemoryHistory::new())
	}
}

impl<V, H: History> Navigator<V, H> {
	/// Creates a navigator over a caller-supplied history backend.
	pub fn with_history(table: RouteTable<V>, history: H) -> Self {
		Self {
			table,
			history,
			current: None,
			fallback: None,
			signal: LocationSignal::new(),
		}
	}

	/// Sets the view returned by [`Navigator::current_view`] when no
	/// route is current.
	pub fn with_fallback(mut self, view: V) -> Self {
		self.fallback = Some(view);
		self
	}

	/// Returns the route table.
	pub fn table(&self) -> &RouteTable<V> {
		&self.table
	}

	/// Returns the history backend.
	pub fn history(&self) -> &H {
		&self.history
	}

	/// The current location, once a navigation has succeeded.
	pub fn current(&self) -> Option<&LocationChange> {
		self.current.as_ref()
	}

	/// The view of the current route, falling back to the not-found view
	/// when nothing is current.
	pub fn current_view(&self) -> Option<&V> {
		self.current
			.as_ref()
			.and_then(|change| self.table.get(&change.name))
			.map(|route| route.view())
			.or(self.fallback.as_ref())
	}

	/// Subscribes to location changes. Receivers run synchronously on the
	/// navigating thread, in connect order.
	pub fn on_change<F>(&self, receiver: F)
	where
		F: Fn(&LocationChange) + Send + Sync + 'static,
	{
		self.signal.connect(receiver);
	}

	/// Subscribes under a key; reconnecting with the same key replaces
	/// the earlier receiver. See [`LocationSignal::connect_keyed`].
	pub fn on_change_keyed<F>(&self, key: impl Into<String>, receiver: F)
	where
		F: Fn(&LocationChange) + Send + Sync + 'static,
	{
		self.signal.connect_keyed(key, receiver);
	}

	/// Removes the receiver under `key`. Returns whether one existed.
	pub fn unsubscribe(&self, key: &str) -> bool {
		self.signal.disconnect(key)
	}

	/// Navigates to a concrete path, appending a history entry.
	pub fn push(&mut self, path: &str) -> Result<&LocationChange, RouterError> {
		self.navigate(path, NavigationMode::Push)
	}

	/// Navigates to a concrete path, overwriting the current history
	/// entry.
	pub fn replace(&mut self, path: &str) -> Result<&LocationChange, RouterError> {
		self.navigate(path, NavigationMode::Replace)
	}

	/// Navigates to a concrete path with the given mode.
	///
	/// # Errors
	///
	/// Returns [`RouterError::NotFound`] if no route matches and
	/// [`RouterError::NavigationBlocked`] if the matched route's guard
	/// vetoes the change. Neither touches the current location or the
	/// history backend.
	pub fn navigate(
		&mut self,
		path: &str,
		mode: NavigationMode,
	) -> Result<&LocationChange, RouterError> {
		let matched = self
			.table
			.resolve(path)
			.ok_or_else(|| RouterError::NotFound(path.to_string()))?;

		let change = LocationChange {
			name: matched.name().to_string(),
			path: path.to_string(),
			params: matched.params().clone(),
			kind: match mode {
				NavigationMode::Push => NavigationKind::Push,
				NavigationMode::Replace => NavigationKind::Replace,
			},
		};

		if !matched.route().allows(&change) {
			return Err(RouterError::NavigationBlocked(change.name));
		}

		let entry = HistoryEntry::new(path)
			.with_route_name(change.name.as_str())
			.with_params(change.params.clone());
		match mode {
			NavigationMode::Push => self.history.push(entry),
			NavigationMode::Replace => self.history.replace(entry),
		}

		debug!(path, route = %change.name, kind = ?change.kind, "location changed");
		Ok(self.commit(change))
	}

	/// Programmatic navigation by route name: fills the named route's
	/// pattern from `params` and navigates to the resulting path.
	///
	/// # Errors
	///
	/// Propagates [`RouterError::UnknownRoute`] /
	/// [`RouterError::MissingParameter`] from reverse resolution, plus
	/// the [`Navigator::navigate`] errors.
	pub fn navigate_by_name(
		&mut self,
		name: &str,
		params: &HashMap<String, String>,
		mode: NavigationMode,
	) -> Result<&LocationChange, RouterError> {
		let path = self.table.path_for(name, params)?;
		self.navigate(&path, mode)
	}

	/// [`Navigator::navigate_by_name`] with the default push mode.
	pub fn push_by_name(
		&mut self,
		name: &str,
		params: &HashMap<String, String>,
	) -> Result<&LocationChange, RouterError> {
		self.navigate_by_name(name, params, NavigationMode::Push)
	}

	/// Moves back one history entry and restores its location.
	///
	/// Returns `None` at the start of the stack, or if the restored
	/// entry's path no longer resolves against the table.
	pub fn back(&mut self) -> Option<&LocationChange> {
		let entry = self.history.back()?.clone();
		self.restore(entry)
	}

	/// Moves forward one history entry and restores its location.
	pub fn forward(&mut self) -> Option<&LocationChange> {
		let entry = self.history.forward()?.clone();
		self.restore(entry)
	}

	/// Restores the location recorded at the history backend's cursor,
	/// without moving it. Useful at startup over a pre-seeded backend.
	pub fn restore_current(&mut self) -> Option<&LocationChange> {
		let entry = self.history.current()?.clone();
		self.restore(entry)
	}

	/// Restores a location from a history entry with pop semantics: the
	/// current record and subscribers update, the stack itself is left
	/// alone and guards are not consulted (the visit was already
	/// committed). Entries without a recorded route name are re-resolved.
	fn restore(&mut self, entry: HistoryEntry) -> Option<&LocationChange> {
		let (name, params) = match entry.route_name {
			Some(name) => (name, entry.params),
			None => {
				let matched = self.table.resolve(&entry.path)?;
				(matched.name().to_string(), matched.params().clone())
			}
		};

		let change = LocationChange {
			name,
			path: entry.path,
			params,
			kind: NavigationKind::Pop,
		};
		debug!(path = %change.path, route = %change.name, "location restored");
		Some(self.commit(change))
	}

	/// Installs `change` as the current location and notifies
	/// subscribers.
	fn commit(&mut self, change: LocationChange) -> &LocationChange {
		let change = self.current.insert(change);
		self.signal.send(change);
		change
	}
}

impl<V, H: History> fmt::Debug for Navigator<V, H> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Navigator")
			.field("routes", &self.table.len())
			.field("history_len", &self.history.len())
			.field("current", &self.current.as_ref().map(|c| c.path.as_str()))
			.field("has_fallback", &self.fallback.is_some())
			.finish()
	}
}
