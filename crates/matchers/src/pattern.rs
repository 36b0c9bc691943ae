//! Path pattern parsing and matching.
//!
//! Patterns are `/`-separated strings whose segments are either literal text
//! or `{name}` placeholders. Classification happens once, at parse time, so
//! matching is a plain lockstep walk over pre-tagged segments with no string
//! inspection per call.

use crate::error::PatternError;
use crate::params::PathParams;

/// A pattern segment, classified once at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternSegment {
	/// Matched verbatim against the corresponding path segment.
	Literal(String),
	/// Binds the corresponding path segment's value to the name.
	Param(String),
}

/// Borrowed classification of a single pattern segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SegmentKind<'a> {
	Literal(&'a str),
	Param(&'a str),
}

/// Why a segment failed to classify as a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MalformedSegment {
	EmptyName,
	Unbalanced,
	BraceInName,
}

impl MalformedSegment {
	pub(crate) fn into_error(self, pattern: &str, segment: &str) -> PatternError {
		match self {
			Self::EmptyName => PatternError::EmptyPlaceholderName {
				pattern: pattern.to_string(),
				segment: segment.to_string(),
			},
			Self::Unbalanced => PatternError::UnbalancedBraces {
				pattern: pattern.to_string(),
				segment: segment.to_string(),
			},
			Self::BraceInName => PatternError::InvalidPlaceholderName {
				pattern: pattern.to_string(),
				name: segment[1..segment.len() - 1].to_string(),
			},
		}
	}
}

/// Classifies one pattern segment.
///
/// A segment is a placeholder iff it starts with `{`, ends with `}`, and the
/// enclosed name is non-empty and brace-free. A segment that only starts
/// with `{` or only ends with `}` is malformed. Braces strictly inside a
/// segment (`a{b}c`) leave it an ordinary literal.
pub(crate) fn classify_segment(segment: &str) -> Result<SegmentKind<'_>, MalformedSegment> {
	let opens = segment.starts_with('{');
	let closes = segment.ends_with('}');

	if opens && closes && segment.len() >= 2 {
		let name = &segment[1..segment.len() - 1];
		if name.is_empty() {
			return Err(MalformedSegment::EmptyName);
		}
		if name.contains('{') || name.contains('}') {
			return Err(MalformedSegment::BraceInName);
		}
		return Ok(SegmentKind::Param(name));
	}

	if opens || closes {
		return Err(MalformedSegment::Unbalanced);
	}

	Ok(SegmentKind::Literal(segment))
}

/// A compiled path pattern.
///
/// Supports patterns like:
/// - `/users/` - literal-only match
/// - `/users/{id}/` - single path parameter
/// - `/users/{id}/posts/{post_id}/` - multiple parameters
///
/// # Matching model
///
/// Both pattern and path are split on `/` with empty segments preserved, so
/// leading and trailing slashes take part in the comparison positionally.
/// The segment counts must be equal: no segment is optional and there is no
/// catch-all. A placeholder accepts any value for its slot - including the
/// empty string, whitespace, and unencoded special characters - while `/`
/// always delimits segments. No URL decoding is performed.
///
/// As a deliberate degenerate case, an empty pattern and an empty path never
/// match anything, not even each other.
///
/// # Example
///
/// ```
/// use lagrene_matchers::PathPattern;
///
/// let pattern = PathPattern::parse("/api/{name}/provider/{git}").unwrap();
/// let params = pattern.matches("/api/mux/provider/github").unwrap();
///
/// assert_eq!(params.get("name"), Some("mux"));
/// assert_eq!(params.get("git"), Some("github"));
/// ```
#[derive(Debug, Clone)]
pub struct PathPattern {
	/// The original pattern string.
	pattern: String,
	/// Pre-classified segments.
	segments: Vec<PatternSegment>,
	/// Whether this pattern has no placeholders.
	is_exact: bool,
}

impl PathPattern {
	/// Parses a pattern string, classifying every segment up front.
	///
	/// Malformed placeholder syntax is rejected here, making `parse` the
	/// configuration-time failure point: a successfully parsed pattern can
	/// never raise an error while matching.
	///
	/// # Errors
	///
	/// Returns [`PatternError`] if any segment starts with `{` or ends with
	/// `}` without forming a valid `{name}` placeholder (empty name,
	/// unbalanced braces, or a brace inside the name).
	pub fn parse(pattern: &str) -> Result<Self, PatternError> {
		let mut segments = Vec::new();
		for segment in pattern.split('/') {
			match classify_segment(segment) {
				Ok(SegmentKind::Literal(lit)) => {
					segments.push(PatternSegment::Literal(lit.to_string()));
				}
				Ok(SegmentKind::Param(name)) => {
					segments.push(PatternSegment::Param(name.to_string()));
				}
				Err(kind) => return Err(kind.into_error(pattern, segment)),
			}
		}

		let is_exact = segments
			.iter()
			.all(|s| matches!(s, PatternSegment::Literal(_)));

		Ok(Self {
			pattern: pattern.to_string(),
			segments,
			is_exact,
		})
	}

	/// Returns the original pattern string.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Returns the placeholder names in the order they appear.
	///
	/// Duplicate names are kept; when matching, the last binding wins.
	pub fn param_names(&self) -> Vec<&str> {
		self.segments
			.iter()
			.filter_map(|s| match s {
				PatternSegment::Param(name) => Some(name.as_str()),
				PatternSegment::Literal(_) => None,
			})
			.collect()
	}

	/// Returns whether this is an exact-match pattern (no placeholders).
	pub fn is_exact(&self) -> bool {
		self.is_exact
	}

	/// Matches `path` against this pattern, writing placeholder bindings
	/// into the caller-owned `params`.
	///
	/// Returns `true` exactly when every pattern segment positionally
	/// corresponds to the path and every literal is equal. On success the
	/// bindings written this call cover exactly the pattern's placeholder
	/// names. On failure the map may hold partial bindings written before
	/// the mismatch; nothing is rolled back and the map is never cleared
	/// here - callers reusing a map must clear it between matches.
	pub fn matches_into(&self, path: &str, params: &mut PathParams) -> bool {
		if self.pattern.is_empty() || path.is_empty() {
			return false;
		}
		if path.split('/').count() != self.segments.len() {
			return false;
		}

		for (segment, value) in self.segments.iter().zip(path.split('/')) {
			match segment {
				PatternSegment::Literal(lit) => {
					if lit.as_str() != value {
						return false;
					}
				}
				PatternSegment::Param(name) => params.insert(name.as_str(), value),
			}
		}

		true
	}

	/// Matches `path` and returns a freshly allocated parameter map on
	/// success.
	///
	/// Convenience wrapper over [`matches_into`](Self::matches_into) for
	/// callers that do not need to reuse a map across calls.
	pub fn matches(&self, path: &str) -> Option<PathParams> {
		let mut params = PathParams::new();
		self.matches_into(path, &mut params).then_some(params)
	}

	/// Checks whether `path` would match, without binding any parameters.
	pub fn is_match(&self, path: &str) -> bool {
		if self.pattern.is_empty() || path.is_empty() {
			return false;
		}
		if path.split('/').count() != self.segments.len() {
			return false;
		}

		self.segments
			.iter()
			.zip(path.split('/'))
			.all(|(segment, value)| match segment {
				PatternSegment::Literal(lit) => lit.as_str() == value,
				PatternSegment::Param(_) => true,
			})
	}
}

impl PartialEq for PathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern
	}
}

impl Eq for PathPattern {}

impl std::fmt::Display for PathPattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.pattern)
	}
}
