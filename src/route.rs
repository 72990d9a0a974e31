//! Route records.

use std::fmt;
use std::sync::Arc;

use crate::dispatch::LocationChange;
use crate::error::ConfigError;
use crate::pattern::PathPattern;

/// Guard callback: inspects a pending location change and may veto it.
pub type RouteGuard = Arc<dyn Fn(&LocationChange) -> bool + Send + Sync>;

/// One route: a compiled path pattern, a unique name, and an opaque view
/// reference.
///
/// The view is whatever the surrounding application renders for this
/// route; the router never constructs or interprets it.
pub struct Route<V> {
	pattern: PathPattern,
	name: String,
	view: V,
	guard: Option<RouteGuard>,
}

impl<V> Route<V> {
	/// Creates a route from a pattern string.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::InvalidPattern`] if the pattern does not
	/// compile.
	pub fn new(name: impl Into<String>, pattern: &str, view: V) -> Result<Self, ConfigError> {
		Ok(Self {
			pattern: PathPattern::parse(pattern)?,
			name: name.into(),
			view,
			guard: None,
		})
	}

	/// Attaches a navigation guard.
	///
	/// The guard runs when a push or replace navigation is about to commit
	/// to this route; returning `false` aborts the navigation before any
	/// state is mutated. Restoring an already-committed entry via
	/// back/forward does not consult the guard.
	pub fn with_guard<G>(mut self, guard: G) -> Self
	where
		G: Fn(&LocationChange) -> bool + Send + Sync + 'static,
	{
		self.guard = Some(Arc::new(guard));
		self
	}

	/// Returns the route name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the compiled pattern.
	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}

	/// Returns the view reference.
	pub fn view(&self) -> &V {
		&self.view
	}

	/// Runs the guard, if any. Routes without a guard always allow.
	pub(crate) fn allows(&self, change: &LocationChange) -> bool {
		self.guard.as_ref().map(|g| g(change)).unwrap_or(true)
	}
}

impl<V: Clone> Clone for Route<V> {
	fn clone(&self) -> Self {
		Self {
			pattern: self.pattern.clone(),
			name: self.name.clone(),
			view: self.view.clone(),
			guard: self.guard.clone(),
		}
	}
}

impl<V> fmt::Debug for Route<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Route")
			.field("name", &self.name)
			.field("pattern", &self.pattern)
			.field("has_guard", &self.guard.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	use crate::history::NavigationKind;

	fn change(name: &str) -> LocationChange {
		LocationChange {
			name: name.to_string(),
			path: format!("/{}", name),
			params: HashMap::new(),
			kind: NavigationKind::Push,
		}
	}

	#[test]
	fn test_route_new() {
		let route = Route::new("teams", "/teams", "TeamsView").unwrap();
		assert_eq!(route.name(), "teams");
		assert_eq!(route.pattern().as_str(), "/teams");
		assert_eq!(*route.view(), "TeamsView");
	}

	#[test]
	fn test_route_invalid_pattern() {
		assert!(Route::new("teams", "teams", "TeamsView").is_err());
	}

	#[test]
	fn test_route_without_guard_allows() {
		let route = Route::new("teams", "/teams", ()).unwrap();
		assert!(route.allows(&change("teams")));
	}

	#[test]
	fn test_route_guard_vetoes() {
		let route = Route::new("admin", "/admin", ())
			.unwrap()
			.with_guard(|_| false);
		assert!(!route.allows(&change("admin")));
	}

	#[test]
	fn test_route_guard_sees_change() {
		let route = Route::new("teams", "/teams", ())
			.unwrap()
			.with_guard(|change| change.name == "teams");
		assert!(route.allows(&change("teams")));
	}
}
