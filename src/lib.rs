//! URL path matching for Lagrene.
//!
//! This crate is a unified interface over the matching core:
//!
//! - `lagrene-matchers`: segment-based path pattern matching and parameter
//!   extraction
//!
//! # Examples
//!
//! ```
//! use lagrene::prelude::*;
//!
//! let mut params = PathParams::new();
//! let matched = path_matches_pattern("/api/{name}/provider/{git}", "/api/mux/provider/github", &mut params)
//! 	.expect("well-formed pattern");
//!
//! assert!(matched);
//! assert_eq!(params.get("name"), Some("mux"));
//! assert_eq!(params.get("git"), Some("github"));
//! ```

pub use lagrene_matchers as matchers;

// Re-export commonly used types from the matching core
pub mod prelude {
	pub use lagrene_matchers::{
		ParamError, PathParams, PathPattern, PatternError, extract_params, path_matches,
		path_matches_pattern,
	};
}
