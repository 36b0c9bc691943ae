//! # Lagrene Matchers
//!
//! Segment-based URL path matching with named placeholders:
//!
//! - **One-shot matching**: match a pattern string directly against a path,
//!   reusing a caller-owned parameter map across calls
//! - **Compiled patterns**: classify a pattern's segments once and match it
//!   repeatedly without re-inspecting the pattern string
//! - **Typed parameter access**: parse bound values into concrete types
//!
//! A pattern is a `/`-separated string whose segments are either literals,
//! matched verbatim, or `{name}` placeholders, each binding exactly one path
//! segment. Segment counts must line up exactly; there are no optional or
//! catch-all segments.
//!
//! # Examples
//!
//! ## One-shot matching with a reused map
//!
//! ```
//! use lagrene_matchers::{PathParams, path_matches_pattern};
//!
//! let mut params = PathParams::new();
//!
//! let matched = path_matches_pattern("/api/{name}/provider/{git}", "/api/mux/provider/github", &mut params)
//! 	.expect("well-formed pattern");
//! assert!(matched);
//! assert_eq!(params.get("name"), Some("mux"));
//!
//! // Clear before the next independent match
//! params.clear();
//! ```
//!
//! ## Compiled patterns
//!
//! ```
//! use lagrene_matchers::PathPattern;
//!
//! let pattern = PathPattern::parse("/users/{id}/").unwrap();
//! assert_eq!(pattern.param_names(), vec!["id"]);
//!
//! let params = pattern.matches("/users/42/").unwrap();
//! assert_eq!(params.get_parsed::<u32>("id"), Ok(42));
//! ```

pub mod error;
pub mod matching;
pub mod params;
pub mod pattern;

pub use error::{ParamError, PatternError};
pub use matching::{extract_params, path_matches, path_matches_pattern};
pub use params::PathParams;
pub use pattern::PathPattern;
