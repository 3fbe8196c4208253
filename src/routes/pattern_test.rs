use super::*;

fn exact(pattern: &str, path: &str) -> Option<RouteParams> {
    PathPattern::parse(pattern).match_exact(&split(path))
}

// =============================================================
// Normalization
// =============================================================

#[test]
fn normalize_collapses_slashes() {
    assert_eq!(normalize(""), "/");
    assert_eq!(normalize("//"), "/");
    assert_eq!(normalize("profile/"), "/profile");
    assert_eq!(normalize("/a//b/"), "/a/b");
}

#[test]
fn join_relative_and_absolute_children() {
    assert_eq!(join("/", "profile"), "/profile");
    assert_eq!(join("/account", "settings"), "/account/settings");
    assert_eq!(join("/account", "/profile"), "/profile");
    assert_eq!(join("/account", ""), "/account");
}

// =============================================================
// Matching
// =============================================================

#[test]
fn root_matches_only_root() {
    assert!(exact("/", "/").is_some());
    assert!(exact("/", "").is_some());
    assert!(exact("/", "/profile").is_none());
}

#[test]
fn static_match_ignores_trailing_slash() {
    assert!(exact("/profile", "/profile/").is_some());
    assert!(exact("/profile", "/profiles").is_none());
}

#[test]
fn param_captures_segment() {
    let params = exact("/board/:id", "/board/42").unwrap();
    assert_eq!(params.get("id"), Some("42"));
    assert!(exact("/board/:id", "/board").is_none());
}

#[test]
fn named_rest_captures_remaining_segments() {
    let params = exact("/files/*path", "/files/a/b/c").unwrap();
    assert_eq!(params.get("path"), Some("a/b/c"));
    let empty = exact("/files/*path", "/files").unwrap();
    assert_eq!(empty.get("path"), Some(""));
}

#[test]
fn bare_star_matches_anything_without_capture() {
    let params = exact("/*", "/deep/nested/path").unwrap();
    assert!(params.is_empty());
}

#[test]
fn star_before_last_segment_is_static() {
    assert!(exact("/*/x", "/*/x").is_some());
    assert!(exact("/*/x", "/a/x").is_none());
}

#[test]
fn prefix_match_reports_consumed_segments() {
    let pattern = PathPattern::parse("/account");
    let (_, consumed) = pattern.match_prefix(&split("/account/settings")).unwrap();
    assert_eq!(consumed, 1);
    assert!(pattern.match_prefix(&split("/other")).is_none());
}

#[test]
fn root_prefix_claims_every_path() {
    let (_, consumed) = PathPattern::parse("/").match_prefix(&split("/any/thing")).unwrap();
    assert_eq!(consumed, 0);
}
