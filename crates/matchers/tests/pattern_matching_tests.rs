// Pattern matching and parameter extraction tests for the one-shot matcher

use lagrene_matchers::{PathParams, PatternError, path_matches_pattern};
use rstest::rstest;

// The full case matrix: literal routes, placeholder routes, trailing
// slashes, segment-count mismatches, and the degenerate empty inputs
#[rstest]
#[case("/main", "/", false, &[])]
#[case("/api/{name}/provider/{git}", "/api/mux/provider/github", true, &[("name", "mux"), ("git", "github")])]
#[case("/{slug}/{name}/{age}", "/hello_world/mux/123", true, &[("slug", "hello_world"), ("name", "mux"), ("age", "123")])]
#[case("/{slug}/{name}/{age}", "/hello_world/mux", false, &[])]
#[case("/{slug}/{name}/{age}", "/hello_world/mux/123/extra", false, &[])]
#[case("/{slug}/{name}", "/hello_world/mux/123", false, &[])]
#[case("/{slug}/{name}", "/hello_world/mux", true, &[("slug", "hello_world"), ("name", "mux")])]
#[case("/{slug}/", "/hello_world/", true, &[("slug", "hello_world")])]
#[case("/", "/", true, &[])]
#[case("", "", false, &[])]
#[case("/{slug}", "/hello world", true, &[("slug", "hello world")])]
#[case("/{slug}", "/hello/world", false, &[])]
fn test_url_matches_pattern(
	#[case] pattern: &str,
	#[case] path: &str,
	#[case] matches: bool,
	#[case] expected: &[(&str, &str)],
) {
	let mut params = PathParams::new();

	let result = path_matches_pattern(pattern, path, &mut params)
		.unwrap_or_else(|e| panic!("unexpected error for `{pattern}` vs `{path}`: {e}"));

	assert_eq!(result, matches, "pattern `{pattern}` vs path `{path}`");
	let expected: PathParams = expected.iter().copied().collect();
	assert_eq!(params, expected);
}

#[test]
fn test_map_is_reused_across_calls_with_clearing() {
	let mut params = PathParams::new();

	assert!(path_matches_pattern("/{slug}", "/first", &mut params).unwrap());
	assert_eq!(params.get("slug"), Some("first"));

	params.clear();

	assert!(path_matches_pattern("/{slug}", "/second", &mut params).unwrap());
	assert_eq!(params.get("slug"), Some("second"));
	assert_eq!(params.len(), 1);
}

#[test]
fn test_stale_bindings_survive_without_clearing() {
	let mut params = PathParams::new();

	assert!(path_matches_pattern("/{slug}", "/first", &mut params).unwrap());

	// Skipping the clear leaves the previous binding in place alongside
	// the new one
	assert!(path_matches_pattern("/{name}", "/second", &mut params).unwrap());
	assert_eq!(params.get("slug"), Some("first"));
	assert_eq!(params.get("name"), Some("second"));
}

#[test]
fn test_matcher_never_removes_unrelated_keys() {
	let mut params = PathParams::new();
	params.insert("request_id", "abc123");

	assert!(path_matches_pattern("/{slug}", "/value", &mut params).unwrap());
	assert_eq!(params.get("request_id"), Some("abc123"));
	assert_eq!(params.get("slug"), Some("value"));
}

#[test]
fn test_matching_is_idempotent() {
	let mut first = PathParams::new();
	let mut second = PathParams::new();

	let pattern = "/{slug}/{name}";
	let path = "/hello_world/mux";

	let a = path_matches_pattern(pattern, path, &mut first).unwrap();
	let b = path_matches_pattern(pattern, path, &mut second).unwrap();

	assert_eq!(a, b);
	assert_eq!(first, second);
}

#[test]
fn test_malformed_pattern_error_accompanies_would_be_match_only() {
	let mut params = PathParams::new();

	// Would-be match: the error surfaces
	assert!(matches!(
		path_matches_pattern("/a/{}", "/a/value", &mut params),
		Err(PatternError::EmptyPlaceholderName { .. })
	));

	// Non-match: conveyed purely via the boolean, no error
	params.clear();
	assert_eq!(
		path_matches_pattern("/a/{}", "/b/value", &mut params),
		Ok(false)
	);
	assert_eq!(
		path_matches_pattern("/a/{}", "/a/value/extra", &mut params),
		Ok(false)
	);
}
