//! Error types for table construction, navigation, and parameter access.

use thiserror::Error;

/// Errors raised while building a route table.
///
/// All of these are fatal at startup: the table constructor returns the
/// error and no router is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
	/// Two routes share the same name.
	#[error("duplicate route name: {0}")]
	DuplicateName(String),

	/// Two patterns match exactly the same set of paths; the later one
	/// could never be reached.
	#[error("ambiguous route patterns: '{first}' and '{second}' match the same paths")]
	AmbiguousPattern {
		/// Pattern registered first.
		first: String,
		/// The shadowed pattern.
		second: String,
	},

	/// A pattern string could not be compiled.
	#[error("invalid route pattern '{pattern}': {reason}")]
	InvalidPattern {
		/// The offending pattern string.
		pattern: String,
		/// Why compilation rejected it.
		reason: String,
	},
}

/// Errors raised by resolution and navigation.
///
/// These are recoverable: they are returned to the caller synchronously
/// and leave the navigator's state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
	/// No registered pattern matches the path.
	#[error("no route matches path: {0}")]
	NotFound(String),

	/// Programmatic navigation named a route that is not registered.
	#[error("unknown route name: {0}")]
	UnknownRoute(String),

	/// Reverse resolution is missing a value for a placeholder, or the
	/// value is empty and could never re-resolve.
	#[error("missing value for parameter ':{param}' of route '{route}'")]
	MissingParameter {
		/// The route being reversed.
		route: String,
		/// The unfilled placeholder.
		param: String,
	},

	/// A parameter value supplied to reverse resolution would change the
	/// path structure.
	#[error("invalid value for parameter ':{param}' of route '{route}': contains reserved path characters")]
	InvalidParameter {
		/// The route being reversed.
		route: String,
		/// The placeholder whose value was rejected.
		param: String,
	},

	/// A route guard rejected the navigation.
	#[error("navigation to route '{0}' was blocked by its guard")]
	NavigationBlocked(String),
}

/// Errors raised by typed access to captured parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
	/// No parameter with the requested name was captured.
	#[error("no parameter named '{0}' was captured")]
	Missing(String),

	/// The captured value failed to parse as the requested type.
	#[error("failed to parse parameter '{name}' value '{raw}' as {ty}: {message}")]
	Parse {
		/// The parameter name.
		name: String,
		/// The raw captured value.
		raw: String,
		/// The requested target type.
		ty: &'static str,
		/// The parser's own message.
		message: String,
	},
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_config_error_display() {
		assert_eq!(
			ConfigError::DuplicateName("home".to_string()).to_string(),
			"duplicate route name: home"
		);
		let err = ConfigError::AmbiguousPattern {
			first: "/teams/:id".to_string(),
			second: "/teams/:team".to_string(),
		};
		assert!(err.to_string().contains("/teams/:id"));
		assert!(err.to_string().contains("/teams/:team"));
	}

	#[rstest]
	fn test_router_error_display() {
		assert_eq!(
			RouterError::NotFound("/nope".to_string()).to_string(),
			"no route matches path: /nope"
		);
		let err = RouterError::MissingParameter {
			route: "metric-details".to_string(),
			param: "id".to_string(),
		};
		assert!(err.to_string().contains(":id"));
		assert!(err.to_string().contains("metric-details"));
	}

	#[rstest]
	fn test_param_error_display() {
		let err = ParamError::Parse {
			name: "id".to_string(),
			raw: "abc".to_string(),
			ty: "i64",
			message: "invalid digit found in string".to_string(),
		};
		assert!(err.to_string().contains("'id'"));
		assert!(err.to_string().contains("abc"));
		assert!(err.to_string().contains("i64"));
	}
}
