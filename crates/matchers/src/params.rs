//! Caller-owned parameter map populated by the matcher.

use std::collections::HashMap;
use std::collections::hash_map;
use std::str::FromStr;

use crate::error::ParamError;

/// A mutable mapping from placeholder name to the path segment bound to it.
///
/// The map is owned by the caller and reused across matcher invocations so
/// that a match does not allocate a fresh container per call. The matcher
/// only ever inserts; it never removes existing keys and never clears the
/// map on entry.
///
/// # Reuse contract
///
/// Callers must [`clear`](Self::clear) the map between independent matches.
/// After a *failed* match the map may hold partial bindings written before
/// the mismatch was found — check the boolean result before reading it.
///
/// # Example
///
/// ```
/// use lagrene_matchers::{PathParams, path_matches_pattern};
///
/// let mut params = PathParams::new();
/// assert!(path_matches_pattern("/users/{id}", "/users/42", &mut params).unwrap());
/// assert_eq!(params.get("id"), Some("42"));
///
/// params.clear();
/// assert!(params.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
	map: HashMap<String, String>,
}

impl PathParams {
	/// Creates an empty parameter map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Binds `name` to `value`, overwriting any previous binding.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.map.insert(name.into(), value.into());
	}

	/// Returns the value bound to `name`, if any.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.map.get(name).map(String::as_str)
	}

	/// Returns the value bound to `name`, parsed as `T`.
	///
	/// # Errors
	///
	/// Returns [`ParamError::Missing`] if no binding exists and
	/// [`ParamError::Parse`] if the bound value does not parse as `T`.
	pub fn get_parsed<T>(&self, name: &str) -> Result<T, ParamError>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		let value = self.get(name).ok_or_else(|| ParamError::Missing {
			name: name.to_string(),
		})?;

		value.parse::<T>().map_err(|e| ParamError::Parse {
			name: name.to_string(),
			value: value.to_string(),
			ty: std::any::type_name::<T>(),
			message: e.to_string(),
		})
	}

	/// Returns whether a binding exists for `name`.
	pub fn contains(&self, name: &str) -> bool {
		self.map.contains_key(name)
	}

	/// Returns the number of bindings.
	pub fn len(&self) -> usize {
		self.map.len()
	}

	/// Returns whether there are no bindings.
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	/// Removes all bindings, keeping the allocated capacity.
	pub fn clear(&mut self) {
		self.map.clear();
	}

	/// Iterates over `(name, value)` bindings in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

impl FromIterator<(String, String)> for PathParams {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		Self {
			map: iter.into_iter().collect(),
		}
	}
}

impl<'a> FromIterator<(&'a str, &'a str)> for PathParams {
	fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
		Self {
			map: iter
				.into_iter()
				.map(|(k, v)| (k.to_string(), v.to_string()))
				.collect(),
		}
	}
}

impl Extend<(String, String)> for PathParams {
	fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
		self.map.extend(iter);
	}
}

impl IntoIterator for PathParams {
	type Item = (String, String);
	type IntoIter = hash_map::IntoIter<String, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.map.into_iter()
	}
}

impl From<HashMap<String, String>> for PathParams {
	fn from(map: HashMap<String, String>) -> Self {
		Self { map }
	}
}

impl From<PathParams> for HashMap<String, String> {
	fn from(params: PathParams) -> Self {
		params.map
	}
}
