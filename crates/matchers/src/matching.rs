//! Path matching entry points.
//!
//! [`path_matches_pattern`] is the core operation: a single pass over an
//! uncompiled pattern and a request path, writing placeholder bindings into
//! a caller-owned, reusable [`PathParams`]. The [`path_matches`] and
//! [`extract_params`] helpers cover callers that want a plain answer and do
//! not reuse a map.

use crate::error::PatternError;
use crate::params::PathParams;
use crate::pattern::{PathPattern, SegmentKind, classify_segment};

/// Matches `path` against `pattern`, binding placeholder values into
/// `params`.
///
/// The pattern is walked segment by segment without prior compilation; use
/// [`PathPattern`] when the same pattern is matched repeatedly.
///
/// `params` is caller-owned and only ever inserted into. Callers reusing a
/// map across calls must clear it between independent matches; after a
/// failed match the map may hold partial bindings.
///
/// # Errors
///
/// Returns [`PatternError`] for malformed placeholder syntax (`{}`, `{name`,
/// `name}`), but only when the walk would otherwise have succeeded: a
/// malformed segment consumes its path segment without binding, and the
/// error surfaces only alongside a would-be match. A reported non-match -
/// whether from a segment-count mismatch or a literal mismatch - is always
/// `Ok(false)`, malformed syntax or not. Patterns rejected here are also
/// rejected eagerly by [`PathPattern::parse`], which is the right place to
/// catch them at registration time.
///
/// # Example
///
/// ```
/// use lagrene_matchers::{PathParams, path_matches_pattern};
///
/// let mut params = PathParams::new();
///
/// let matched = path_matches_pattern("/{slug}/{name}", "/hello_world/mux", &mut params).unwrap();
/// assert!(matched);
/// assert_eq!(params.get("slug"), Some("hello_world"));
/// assert_eq!(params.get("name"), Some("mux"));
/// ```
pub fn path_matches_pattern(
	pattern: &str,
	path: &str,
	params: &mut PathParams,
) -> Result<bool, PatternError> {
	if pattern.is_empty() || path.is_empty() {
		return Ok(false);
	}
	if pattern.split('/').count() != path.split('/').count() {
		return Ok(false);
	}

	let mut malformed: Option<PatternError> = None;
	for (segment, value) in pattern.split('/').zip(path.split('/')) {
		match classify_segment(segment) {
			Ok(SegmentKind::Param(name)) => params.insert(name, value),
			Ok(SegmentKind::Literal(lit)) => {
				if lit != value {
					return Ok(false);
				}
			}
			Err(kind) => {
				// Deferred: malformed syntax only surfaces when every
				// other segment lines up
				if malformed.is_none() {
					malformed = Some(kind.into_error(pattern, segment));
				}
			}
		}
	}

	if let Some(err) = malformed {
		return Err(err);
	}

	tracing::trace!(pattern, path, bound = params.len(), "path matched pattern");
	Ok(true)
}

/// Checks whether `path` matches `pattern`.
///
/// Malformed patterns are treated as matching nothing.
pub fn path_matches(path: &str, pattern: &str) -> bool {
	match PathPattern::parse(pattern) {
		Ok(pat) => pat.is_match(path),
		Err(_) => false,
	}
}

/// Extracts placeholder bindings from `path` using `pattern`.
///
/// Returns an empty map when the path does not match or the pattern is
/// malformed.
pub fn extract_params(path: &str, pattern: &str) -> PathParams {
	match PathPattern::parse(pattern) {
		Ok(pat) => pat.matches(path).unwrap_or_default(),
		Err(_) => PathParams::default(),
	}
}
