//! Typed access to captured path parameters.
//!
//! The core model keeps parameter values as strings; this module layers
//! opt-in parsing on top of the string mapping, via
//! [`RouteMatch::parse`](crate::RouteMatch::parse).

use std::any::type_name;
use std::str::FromStr;

use crate::error::ParamError;

/// Types that can be parsed from a single captured path parameter.
///
/// Blanket-implemented for every [`FromStr`] type with a displayable
/// error, which covers the integer, uuid-like, and string types path
/// parameters are made of. `name` labels errors with the parameter the
/// value was captured under.
pub trait FromParam: Sized {
	/// Parses `raw` as captured under parameter `name`.
	///
	/// # Errors
	///
	/// Returns [`ParamError::Parse`] when `raw` does not parse.
	fn from_param(name: &str, raw: &str) -> Result<Self, ParamError>;
}

impl<T> FromParam for T
where
	T: FromStr,
	T::Err: std::fmt::Display,
{
	fn from_param(name: &str, raw: &str) -> Result<Self, ParamError> {
		raw.parse::<T>().map_err(|err| ParamError::Parse {
			name: name.to_string(),
			raw: raw.to_string(),
			ty: type_name::<T>(),
			message: err.to_string(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_param_integers() {
		assert_eq!(i64::from_param("id", "42").unwrap(), 42);
		assert_eq!(u32::from_param("id", "7").unwrap(), 7);
	}

	#[test]
	fn test_from_param_string_is_identity() {
		assert_eq!(String::from_param("slug", "hello-world").unwrap(), "hello-world");
	}

	#[test]
	fn test_from_param_bool() {
		assert!(bool::from_param("flag", "true").unwrap());
		assert!(!bool::from_param("flag", "false").unwrap());
	}

	#[test]
	fn test_from_param_parse_error() {
		let err = i32::from_param("id", "not_a_number").unwrap_err();
		match err {
			ParamError::Parse { name, raw, ty, .. } => {
				assert_eq!(name, "id");
				assert_eq!(raw, "not_a_number");
				assert_eq!(ty, "i32");
			}
			other => panic!("expected Parse, got {:?}", other),
		}
	}
}
