//! Error types for pattern parsing and parameter extraction.

use thiserror::Error;

/// Error type for malformed placeholder syntax in a route pattern.
///
/// A segment is malformed when it looks like a placeholder but is not one:
/// it starts with `{` or ends with `}` without enclosing a valid name.
/// Braces strictly inside a segment (`a{b}c`) are ordinary literal text and
/// never produce an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
	/// `{}` — a placeholder with no name.
	#[error("empty placeholder name in segment `{segment}` of pattern `{pattern}`")]
	EmptyPlaceholderName {
		/// The full pattern string.
		pattern: String,
		/// The offending segment.
		segment: String,
	},
	/// `{name` or `name}` — a brace that never closes or never opens.
	#[error("unbalanced braces in segment `{segment}` of pattern `{pattern}`")]
	UnbalancedBraces {
		/// The full pattern string.
		pattern: String,
		/// The offending segment.
		segment: String,
	},
	/// `{na{me}` — a brace inside a placeholder name.
	#[error("invalid placeholder name `{name}` in pattern `{pattern}`")]
	InvalidPlaceholderName {
		/// The full pattern string.
		pattern: String,
		/// The brace-containing name.
		name: String,
	},
}

/// Error type for typed access to matched path parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
	/// No binding exists for the requested name.
	#[error("missing path parameter `{name}`")]
	Missing {
		/// The requested parameter name.
		name: String,
	},
	/// A binding exists but could not be parsed as the requested type.
	#[error("failed to parse path parameter `{name}`=`{value}` as {ty}: {message}")]
	Parse {
		/// The requested parameter name.
		name: String,
		/// The raw bound value.
		value: String,
		/// Name of the requested type.
		ty: &'static str,
		/// Error message from parsing.
		message: String,
	},
}
