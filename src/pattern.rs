//! Path pattern compilation and matching.
//!
//! Patterns are `/`-separated; a segment prefixed with `:` is a named
//! parameter:
//! - `/teams` - literal match only
//! - `/teams/:id/metrics` - captures the middle segment under `id`
//!
//! Matching requires an exact segment count; there is no prefix or
//! wildcard matching. Empty leading and trailing segments are discarded on
//! both sides, so `/teams` and `/teams/` name the same location.

use std::collections::HashMap;
use std::fmt;

use crate::error::{ConfigError, RouterError};

/// Maximum allowed length for a pattern string in bytes.
const MAX_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed number of segments in a pattern.
const MAX_PATTERN_SEGMENTS: usize = 32;

/// Characters that may not appear in a reverse-resolution parameter value.
/// Any of them would change the structure of the produced path.
const RESERVED_VALUE_CHARS: [char; 3] = ['/', '?', '#'];

/// One compiled segment of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	/// Matches its text exactly.
	Literal(String),
	/// Matches any non-empty value, captured under the given name.
	Param(String),
}

/// A compiled path pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
	/// The original pattern string.
	raw: String,
	/// Compiled segments in order.
	segments: Vec<Segment>,
	/// Parameter names in the order they appear.
	param_names: Vec<String>,
}

impl PathPattern {
	/// Compiles a pattern string.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::InvalidPattern`] if the pattern does not
	/// start with `/`, exceeds the length or segment limits, contains an
	/// empty segment, a parameter with an empty name, or two parameters
	/// with the same name.
	pub fn parse(pattern: &str) -> Result<Self, ConfigError> {
		let invalid = |reason: String| ConfigError::InvalidPattern {
			pattern: pattern.to_string(),
			reason,
		};

		if pattern.len() > MAX_PATTERN_LENGTH {
			return Err(invalid(format!(
				"length {} exceeds maximum of {} bytes",
				pattern.len(),
				MAX_PATTERN_LENGTH
			)));
		}
		if !pattern.starts_with('/') {
			return Err(invalid("pattern must start with '/'".to_string()));
		}

		let trimmed = pattern.trim_matches('/');
		let mut segments = Vec::new();
		let mut param_names: Vec<String> = Vec::new();

		if !trimmed.is_empty() {
			for part in trimmed.split('/') {
				if part.is_empty() {
					return Err(invalid("empty path segment".to_string()));
				}
				if let Some(name) = part.strip_prefix(':') {
					if name.is_empty() {
						return Err(invalid(
							"parameter segment with empty name".to_string(),
						));
					}
					if param_names.iter().any(|n| n == name) {
						return Err(invalid(format!(
							"duplicate parameter name ':{}'",
							name
						)));
					}
					param_names.push(name.to_string());
					segments.push(Segment::Param(name.to_string()));
				} else {
					segments.push(Segment::Literal(part.to_string()));
				}
			}
		}

		if segments.len() > MAX_PATTERN_SEGMENTS {
			return Err(invalid(format!(
				"{} segments exceed maximum of {}",
				segments.len(),
				MAX_PATTERN_SEGMENTS
			)));
		}

		Ok(Self {
			raw: pattern.to_string(),
			segments,
			param_names,
		})
	}

	/// Returns the original pattern string.
	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// Returns the parameter names in pattern order.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Returns whether the pattern has no parameter segments.
	pub fn is_static(&self) -> bool {
		self.param_names.is_empty()
	}

	/// Structural shape of the pattern: literal segments keep their text,
	/// parameter segments collapse to `:`. Two patterns with equal shapes
	/// match exactly the same set of paths, whatever their parameters are
	/// called. Literal segments can never start with `:`, so shapes are
	/// collision-free.
	pub(crate) fn shape(&self) -> String {
		if self.segments.is_empty() {
			return "/".to_string();
		}
		let mut shape = String::new();
		for segment in &self.segments {
			shape.push('/');
			match segment {
				Segment::Literal(text) => shape.push_str(text),
				Segment::Param(_) => shape.push(':'),
			}
		}
		shape
	}

	/// Attempts to match a concrete path against this pattern.
	///
	/// Returns the captured parameters on a full match: literal segments
	/// must match exactly, parameter segments match any non-empty value.
	pub fn matches(&self, path: &str) -> Option<Captures> {
		let parts = split_path(path);
		if parts.len() != self.segments.len() {
			return None;
		}

		let mut params = HashMap::new();
		let mut values = Vec::with_capacity(self.param_names.len());
		for (segment, part) in self.segments.iter().zip(&parts) {
			match segment {
				Segment::Literal(text) => {
					if text != part {
						return None;
					}
				}
				Segment::Param(name) => {
					if part.is_empty() {
						return None;
					}
					params.insert(name.clone(), (*part).to_string());
					values.push((*part).to_string());
				}
			}
		}

		Some(Captures { params, values })
	}

	/// Returns whether this pattern would match the given path.
	pub fn is_match(&self, path: &str) -> bool {
		self.matches(path).is_some()
	}

	/// Fills the pattern's placeholders from `params`, producing a
	/// concrete path. Placeholders are substituted in pattern order;
	/// surplus entries in `params` are ignored.
	///
	/// `route` is only used to label errors.
	///
	/// # Errors
	///
	/// Returns [`RouterError::MissingParameter`] if a placeholder has no
	/// value in `params` or its value is empty, and
	/// [`RouterError::InvalidParameter`] if a value contains `/`, `?`, or
	/// `#`.
	pub fn fill(
		&self,
		route: &str,
		params: &HashMap<String, String>,
	) -> Result<String, RouterError> {
		if self.segments.is_empty() {
			return Ok("/".to_string());
		}

		let mut path = String::new();
		for segment in &self.segments {
			path.push('/');
			match segment {
				Segment::Literal(text) => path.push_str(text),
				Segment::Param(name) => {
					let value = params.get(name).filter(|v| !v.is_empty()).ok_or_else(
						|| RouterError::MissingParameter {
							route: route.to_string(),
							param: name.clone(),
						},
					)?;
					if value.contains(RESERVED_VALUE_CHARS) {
						return Err(RouterError::InvalidParameter {
							route: route.to_string(),
							param: name.clone(),
						});
					}
					path.push_str(value);
				}
			}
		}

		Ok(path)
	}
}

impl PartialEq for PathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.raw == other.raw
	}
}

impl Eq for PathPattern {}

impl fmt::Display for PathPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.raw)
	}
}

/// Captured parameters from a successful match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures {
	/// Parameter name to extracted value. Values are kept as strings; no
	/// type coercion happens here.
	pub params: HashMap<String, String>,
	/// Values in the order their placeholders appear in the pattern.
	pub values: Vec<String>,
}

/// Splits a path into segments, discarding empty leading and trailing
/// segments. `/` and the empty string both split to no segments.
fn split_path(path: &str) -> Vec<&str> {
	let trimmed = path.trim_matches('/');
	if trimmed.is_empty() {
		Vec::new()
	} else {
		trimmed.split('/').collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_static_pattern() {
		let pattern = PathPattern::parse("/teams").unwrap();
		assert!(pattern.is_static());
		assert!(pattern.is_match("/teams"));
		assert!(pattern.is_match("/teams/"));
		assert!(!pattern.is_match("/teams/42"));
		assert!(!pattern.is_match("/"));
	}

	#[test]
	fn test_root_pattern() {
		let pattern = PathPattern::parse("/").unwrap();
		assert!(pattern.is_match("/"));
		assert!(pattern.is_match(""));
		assert!(!pattern.is_match("/teams"));
	}

	#[test]
	fn test_single_param() {
		let pattern = PathPattern::parse("/metrics/:id").unwrap();
		assert!(!pattern.is_static());
		assert_eq!(pattern.param_names(), &["id"]);

		let captures = pattern.matches("/metrics/42").unwrap();
		assert_eq!(captures.params.get("id"), Some(&"42".to_string()));
		assert_eq!(captures.values, vec!["42".to_string()]);
	}

	#[test]
	fn test_param_between_literals() {
		let pattern = PathPattern::parse("/teams/:id/metrics").unwrap();

		let captures = pattern.matches("/teams/42/metrics").unwrap();
		assert_eq!(captures.params.get("id"), Some(&"42".to_string()));

		assert!(!pattern.is_match("/teams/42"));
		assert!(!pattern.is_match("/teams/42/members"));
		assert!(!pattern.is_match("/teams/42/metrics/7"));
	}

	#[test]
	fn test_multiple_params() {
		let pattern = PathPattern::parse("/teams/:team/metrics/:metric").unwrap();
		let captures = pattern.matches("/teams/42/metrics/velocity").unwrap();

		assert_eq!(captures.params.get("team"), Some(&"42".to_string()));
		assert_eq!(captures.params.get("metric"), Some(&"velocity".to_string()));
		assert_eq!(captures.values, vec!["42".to_string(), "velocity".to_string()]);
	}

	#[test]
	fn test_param_requires_nonempty_value() {
		let pattern = PathPattern::parse("/teams/:id/metrics").unwrap();
		assert!(!pattern.is_match("/teams//metrics"));
	}

	#[test]
	fn test_trailing_slash_equivalence() {
		let pattern = PathPattern::parse("/teams/:id/metrics/").unwrap();
		assert!(pattern.is_match("/teams/42/metrics"));
		assert!(pattern.is_match("/teams/42/metrics/"));
	}

	#[test]
	fn test_rejects_relative_pattern() {
		assert!(matches!(
			PathPattern::parse("teams"),
			Err(ConfigError::InvalidPattern { .. })
		));
	}

	#[test]
	fn test_rejects_empty_segment() {
		assert!(PathPattern::parse("/teams//metrics").is_err());
	}

	#[test]
	fn test_rejects_empty_param_name() {
		assert!(PathPattern::parse("/teams/:").is_err());
	}

	#[test]
	fn test_rejects_duplicate_param_name() {
		let err = PathPattern::parse("/teams/:id/metrics/:id").unwrap_err();
		match err {
			ConfigError::InvalidPattern { reason, .. } => {
				assert!(reason.contains(":id"));
			}
			other => panic!("expected InvalidPattern, got {:?}", other),
		}
	}

	#[test]
	fn test_rejects_excessive_length() {
		let long = format!("/{}", "a".repeat(MAX_PATTERN_LENGTH + 1));
		assert!(PathPattern::parse(&long).is_err());
	}

	#[test]
	fn test_rejects_excessive_segments() {
		let segments: Vec<String> =
			(0..MAX_PATTERN_SEGMENTS + 1).map(|i| format!("s{}", i)).collect();
		let pattern = format!("/{}", segments.join("/"));
		assert!(PathPattern::parse(&pattern).is_err());
	}

	#[test]
	fn test_shape_collapses_param_names() {
		let a = PathPattern::parse("/teams/:id/metrics").unwrap();
		let b = PathPattern::parse("/teams/:team/metrics").unwrap();
		let c = PathPattern::parse("/teams/new/metrics").unwrap();

		assert_eq!(a.shape(), b.shape());
		assert_ne!(a.shape(), c.shape());
		assert_eq!(PathPattern::parse("/").unwrap().shape(), "/");
	}

	#[test]
	fn test_fill_simple() {
		let pattern = PathPattern::parse("/metrics/:id").unwrap();
		let mut params = HashMap::new();
		params.insert("id".to_string(), "42".to_string());

		assert_eq!(pattern.fill("metric-details", &params).unwrap(), "/metrics/42");
	}

	#[test]
	fn test_fill_root() {
		let pattern = PathPattern::parse("/").unwrap();
		assert_eq!(pattern.fill("home", &HashMap::new()).unwrap(), "/");
	}

	#[test]
	fn test_fill_ignores_surplus_params() {
		let pattern = PathPattern::parse("/teams").unwrap();
		let mut params = HashMap::new();
		params.insert("id".to_string(), "42".to_string());

		assert_eq!(pattern.fill("teams", &params).unwrap(), "/teams");
	}

	#[test]
	fn test_fill_missing_param() {
		let pattern = PathPattern::parse("/metrics/:id").unwrap();
		let err = pattern.fill("metric-details", &HashMap::new()).unwrap_err();
		assert_eq!(
			err,
			RouterError::MissingParameter {
				route: "metric-details".to_string(),
				param: "id".to_string(),
			}
		);
	}

	#[test]
	fn test_fill_empty_value_is_missing() {
		let pattern = PathPattern::parse("/metrics/:id").unwrap();
		let mut params = HashMap::new();
		params.insert("id".to_string(), String::new());

		assert!(matches!(
			pattern.fill("metric-details", &params),
			Err(RouterError::MissingParameter { .. })
		));
	}

	#[test]
	fn test_fill_rejects_reserved_characters() {
		let pattern = PathPattern::parse("/metrics/:id").unwrap();
		for value in ["a/b", "a?b", "a#b"] {
			let mut params = HashMap::new();
			params.insert("id".to_string(), value.to_string());
			assert!(matches!(
				pattern.fill("metric-details", &params),
				Err(RouterError::InvalidParameter { .. })
			));
		}
	}

	#[test]
	fn test_pattern_display_and_equality() {
		let a = PathPattern::parse("/teams/:id/metrics").unwrap();
		let b = PathPattern::parse("/teams/:id/metrics").unwrap();
		let c = PathPattern::parse("/teams/:team/metrics").unwrap();

		assert_eq!(format!("{}", a), "/teams/:id/metrics");
		assert_eq!(a, b);
		assert_ne!(a, c);
	}
}
