//! The route table: validated ordered registration and path resolution.

use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use crate::error::{ConfigError, ParamError, RouterError};
use crate::params::FromParam;
use crate::pattern::Captures;
use crate::route::Route;

/// An immutable, validated, ordered route table.
///
/// The table is built once at startup; resolution walks the routes in
/// registration order and returns the first full match.
pub struct RouteTable<V> {
	routes: Vec<Route<V>>,
	/// Route name to index into `routes`.
	by_name: HashMap<String, usize>,
}

impl<V> RouteTable<V> {
	/// Builds a table from routes in registration order.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::DuplicateName`] if two routes share a name,
	/// and [`ConfigError::AmbiguousPattern`] if two patterns match exactly
	/// the same set of paths (the later one could never be reached).
	pub fn new(routes: Vec<Route<V>>) -> Result<Self, ConfigError> {
		let mut by_name = HashMap::with_capacity(routes.len());
		let mut shapes: HashMap<String, usize> = HashMap::with_capacity(routes.len());

		for (index, route) in routes.iter().enumerate() {
			if by_name
				.insert(route.name().to_string(), index)
				.is_some()
			{
				return Err(ConfigError::DuplicateName(route.name().to_string()));
			}
			if let Some(&earlier) = shapes.get(&route.pattern().shape()) {
				return Err(ConfigError::AmbiguousPattern {
					first: routes[earlier].pattern().as_str().to_string(),
					second: route.pattern().as_str().to_string(),
				});
			}
			shapes.insert(route.pattern().shape(), index);
		}

		Ok(Self { routes, by_name })
	}

	/// Resolves a concrete path to the first matching route in
	/// registration order.
	///
	/// `None` is the not-found result; it is up to the caller (usually the
	/// navigator) to surface it.
	pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_, V>> {
		trace!(path, "resolving path");
		self.routes.iter().find_map(|route| {
			route
				.pattern()
				.matches(path)
				.map(|captures| RouteMatch { route, captures })
		})
	}

	/// Reverse resolution: produces the concrete path for a named route,
	/// filling its placeholders from `params` in pattern order.
	///
	/// # Errors
	///
	/// Returns [`RouterError::UnknownRoute`] if no route has this name,
	/// and propagates [`RouterError::MissingParameter`] /
	/// [`RouterError::InvalidParameter`] from placeholder filling.
	pub fn path_for(
		&self,
		name: &str,
		params: &HashMap<String, String>,
	) -> Result<String, RouterError> {
		let route = self
			.get(name)
			.ok_or_else(|| RouterError::UnknownRoute(name.to_string()))?;
		route.pattern().fill(name, params)
	}

	/// Looks a route up by name.
	pub fn get(&self, name: &str) -> Option<&Route<V>> {
		self.by_name.get(name).map(|&index| &self.routes[index])
	}

	/// Returns whether a route with this name is registered.
	pub fn contains(&self, name: &str) -> bool {
		self.by_name.contains_key(name)
	}

	/// Returns the routes in registration order.
	pub fn routes(&self) -> &[Route<V>] {
		&self.routes
	}

	/// Number of registered routes.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Returns whether the table has no routes.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}

impl<V> fmt::Debug for RouteTable<V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteTable")
			.field("routes", &self.routes.len())
			.field("names", &{
				let mut names: Vec<&str> =
					self.routes.iter().map(Route::name).collect();
				names.sort_unstable();
				names
			})
			.finish()
	}
}

/// A successful resolution: the matched route plus captured parameters.
pub struct RouteMatch<'t, V> {
	route: &'t Route<V>,
	captures: Captures,
}

impl<'t, V> RouteMatch<'t, V> {
	/// Returns the matched route.
	pub fn route(&self) -> &'t Route<V> {
		self.route
	}

	/// Returns the matched route's name.
	pub fn name(&self) -> &str {
		self.route.name()
	}

	/// Returns the matched route's view reference.
	pub fn view(&self) -> &'t V {
		self.route.view()
	}

	/// Returns the extracted parameters, name to string value.
	pub fn params(&self) -> &HashMap<String, String> {
		&self.captures.params
	}

	/// Returns the extracted values in the order their placeholders appear
	/// in the pattern.
	pub fn param_values(&self) -> &[String] {
		&self.captures.values
	}

	/// Returns one captured parameter as a raw string.
	pub fn param(&self, name: &str) -> Option<&str> {
		self.captures.params.get(name).map(String::as_str)
	}

	/// Parses one captured parameter into `T`.
	///
	/// # Errors
	///
	/// Returns [`ParamError::Missing`] if no such parameter was captured,
	/// and [`ParamError::Parse`] if the value does not parse.
	pub fn parse<T: FromParam>(&self, name: &str) -> Result<T, ParamError> {
		let raw = self
			.param(name)
			.ok_or_else(|| ParamError::Missing(name.to_string()))?;
		T::from_param(name, raw)
	}
}

impl<V> fmt::Debug for RouteMatch<'_, V> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteMatch")
			.field("route", &self.route.name())
			.field("params", &self.captures.params)
			.finish()
	}
}
