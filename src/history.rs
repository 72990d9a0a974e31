//! History backends.
//!
//! The ambient history stack (the browser's, in a deployed single-page
//! application) is modelled as the [`History`] trait so the navigator can
//! be driven against an in-memory stack in tests and non-browser hosts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// How a location change was performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationKind {
	/// A new entry was appended to the stack.
	Push,
	/// The current entry was overwritten in place.
	Replace,
	/// The cursor moved across existing entries (back/forward).
	Pop,
}

/// One recorded visit: the state object attached to a history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
	/// The raw path of the visit.
	pub path: String,
	/// The matched route name, when the path resolved at the time of the
	/// visit.
	pub route_name: Option<String>,
	/// Parameters extracted at resolution time.
	#[serde(default)]
	pub params: HashMap<String, String>,
}

impl HistoryEntry {
	/// Creates an entry for a path with no resolution attached.
	pub fn new(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			route_name: None,
			params: HashMap::new(),
		}
	}

	/// Attaches the matched route name.
	pub fn with_route_name(mut self, name: impl Into<String>) -> Self {
		self.route_name = Some(name.into());
		self
	}

	/// Attaches the extracted parameters.
	pub fn with_params(mut self, params: HashMap<String, String>) -> Self {
		self.params = params;
		self
	}
}

/// A navigable stack of history entries with a cursor.
///
/// Implementations own the stack; the navigator is their only caller.
pub trait History {
	/// The entry the cursor points at, if the stack is non-empty.
	fn current(&self) -> Option<&HistoryEntry>;

	/// Appends an entry after the cursor, dropping any forward tail, and
	/// moves the cursor to it.
	fn push(&mut self, entry: HistoryEntry);

	/// Overwrites the entry at the cursor, or seeds an empty stack.
	fn replace(&mut self, entry: HistoryEntry);

	/// Moves the cursor one entry back. Returns `None` at the start of
	/// the stack, leaving the cursor in place.
	fn back(&mut self) -> Option<&HistoryEntry>;

	/// Moves the cursor one entry forward. Returns `None` at the end of
	/// the stack, leaving the cursor in place.
	fn forward(&mut self) -> Option<&HistoryEntry>;

	/// Number of entries on the stack.
	fn len(&self) -> usize;

	/// Returns whether the stack is empty.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// In-memory history stack.
///
/// Mirrors browser semantics: pushing while the cursor is not at the end
/// discards the forward tail.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
	entries: Vec<HistoryEntry>,
	/// Index of the current entry; only meaningful when non-empty.
	cursor: usize,
}

impl MemoryHistory {
	/// Creates an empty stack.
	pub fn new() -> Self {
		Self::default()
	}

	/// The entries currently on the stack, oldest first.
	pub fn entries(&self) -> &[HistoryEntry] {
		&self.entries
	}
}

impl History for MemoryHistory {
	fn current(&self) -> Option<&HistoryEntry> {
		self.entries.get(self.cursor)
	}

	fn push(&mut self, entry: HistoryEntry) {
		if !self.entries.is_empty() {
			self.entries.truncate(self.cursor + 1);
		}
		self.entries.push(entry);
		self.cursor = self.entries.len() - 1;
	}

	fn replace(&mut self, entry: HistoryEntry) {
		match self.entries.get_mut(self.cursor) {
			Some(slot) => *slot = entry,
			None => {
				self.entries.push(entry);
				self.cursor = self.entries.len() - 1;
			}
		}
	}

	fn back(&mut self) -> Option<&HistoryEntry> {
		if self.cursor == 0 {
			return None;
		}
		self.cursor -= 1;
		self.entries.get(self.cursor)
	}

	fn forward(&mut self) -> Option<&HistoryEntry> {
		if self.cursor + 1 >= self.entries.len() {
			return None;
		}
		self.cursor += 1;
		self.entries.get(self.cursor)
	}

	fn len(&self) -> usize {
		self.entries.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(path: &str) -> HistoryEntry {
		HistoryEntry::new(path)
	}

	#[test]
	fn test_empty_stack() {
		let history = MemoryHistory::new();
		assert!(history.is_empty());
		assert!(history.current().is_none());
	}

	#[test]
	fn test_push_moves_cursor() {
		let mut history = MemoryHistory::new();
		history.push(entry("/"));
		history.push(entry("/teams"));

		assert_eq!(history.len(), 2);
		assert_eq!(history.current().unwrap().path, "/teams");
	}

	#[test]
	fn test_back_and_forward() {
		let mut history = MemoryHistory::new();
		history.push(entry("/"));
		history.push(entry("/teams"));
		history.push(entry("/graph"));

		assert_eq!(history.back().unwrap().path, "/teams");
		assert_eq!(history.back().unwrap().path, "/");
		assert!(history.back().is_none());
		assert_eq!(history.current().unwrap().path, "/");

		assert_eq!(history.forward().unwrap().path, "/teams");
		assert_eq!(history.forward().unwrap().path, "/graph");
		assert!(history.forward().is_none());
	}

	#[test]
	fn test_push_truncates_forward_tail() {
		let mut history = MemoryHistory::new();
		history.push(entry("/"));
		history.push(entry("/teams"));
		history.push(entry("/graph"));
		history.back();
		history.back();

		history.push(entry("/metrics/1"));

		assert_eq!(history.len(), 2);
		assert_eq!(history.current().unwrap().path, "/metrics/1");
		assert!(history.forward().is_none());
	}

	#[test]
	fn test_replace_overwrites_in_place() {
		let mut history = MemoryHistory::new();
		history.push(entry("/"));
		history.push(entry("/teams"));

		history.replace(entry("/graph"));

		assert_eq!(history.len(), 2);
		assert_eq!(history.current().unwrap().path, "/graph");
		assert_eq!(history.back().unwrap().path, "/");
	}

	#[test]
	fn test_replace_seeds_empty_stack() {
		let mut history = MemoryHistory::new();
		history.replace(entry("/"));

		assert_eq!(history.len(), 1);
		assert_eq!(history.current().unwrap().path, "/");
	}

	#[test]
	fn test_entry_serialization() {
		let mut params = HashMap::new();
		params.insert("id".to_string(), "42".to_string());
		let entry = HistoryEntry::new("/teams/42/metrics")
			.with_route_name("team-metrics")
			.with_params(params);

		let json = serde_json::to_string(&entry).unwrap();
		let restored: HistoryEntry = serde_json::from_str(&json).unwrap();
		assert_eq!(restored, entry);
	}
}
