//! Property-based tests for path matching

use lagrene_matchers::{PathParams, path_matches_pattern};
use proptest::prelude::*;

fn literal_segments() -> impl Strategy<Value = Vec<String>> {
	proptest::collection::vec("[a-z0-9_]{1,8}", 1..5)
}

proptest! {
	#[test]
	fn prop_segment_count_mismatch_never_matches(segs in literal_segments()) {
		// Arrange: a literal pattern and the same path with one extra segment
		let pattern = format!("/{}", segs.join("/"));
		let path = format!("{}/extra", pattern);

		// Act
		let mut params = PathParams::new();
		let result = path_matches_pattern(&pattern, &path, &mut params);

		// Assert
		prop_assert_eq!(result, Ok(false));
		prop_assert!(params.is_empty());
	}

	#[test]
	fn prop_literal_pattern_matches_exactly_itself(
		segs in literal_segments(),
		other in "/[a-z0-9_/]{0,16}",
	) {
		let pattern = format!("/{}", segs.join("/"));

		// Act
		let mut params = PathParams::new();
		let self_result = path_matches_pattern(&pattern, &pattern, &mut params);
		let other_result = path_matches_pattern(&pattern, &other, &mut params);

		// Assert: a literal-only pattern matches a path iff they are
		// character-for-character equal
		prop_assert_eq!(self_result, Ok(true));
		prop_assert_eq!(other_result, Ok(other == pattern));
		prop_assert!(params.is_empty());
	}

	#[test]
	fn prop_placeholder_binds_substituted_value(
		prefix in "[a-z]{1,6}",
		value in "[a-zA-Z0-9 _.~-]{0,12}",
	) {
		// Arrange: pattern `/<prefix>/{x}` and path `/<prefix>/<value>`
		let pattern = format!("/{prefix}/{{x}}");
		let path = format!("/{prefix}/{value}");

		// Act
		let mut params = PathParams::new();
		let result = path_matches_pattern(&pattern, &path, &mut params);

		// Assert: any slash-free value is accepted verbatim, empty included
		prop_assert_eq!(result, Ok(true));
		prop_assert_eq!(params.get("x"), Some(value.as_str()));
		prop_assert_eq!(params.len(), 1);
	}

	#[test]
	fn prop_matching_is_idempotent(
		a in "[a-z0-9]{0,8}",
		b in "[a-z0-9]{0,8}",
	) {
		let pattern = "/{first}/{second}";
		let path = format!("/{a}/{b}");

		// Act: run the same match twice with freshly cleared maps
		let mut once = PathParams::new();
		let mut twice = PathParams::new();
		let r1 = path_matches_pattern(pattern, &path, &mut once);
		let r2 = path_matches_pattern(pattern, &path, &mut twice);

		// Assert
		prop_assert_eq!(r1, r2);
		prop_assert_eq!(once, twice);
	}
}
