use super::*;

#[test]
fn set_default_then_get() {
    let defaults = RequestDefaults::new();
    defaults.set_default("Authorization", "Bearer abc");
    assert_eq!(defaults.get("Authorization").as_deref(), Some("Bearer abc"));
}

#[test]
fn lookup_is_case_insensitive() {
    let defaults = RequestDefaults::new();
    defaults.set_default("Authorization", "Bearer abc");
    assert!(defaults.contains("authorization"));
    assert_eq!(defaults.get("AUTHORIZATION").as_deref(), Some("Bearer abc"));
}

#[test]
fn set_default_replaces_previous_value() {
    let defaults = RequestDefaults::new();
    defaults.set_default("Authorization", "Bearer one");
    defaults.set_default("authorization", "Bearer two");
    assert_eq!(defaults.snapshot(), vec![("authorization".to_owned(), "Bearer two".to_owned())]);
}

#[test]
fn remove_default_returns_removed_value() {
    let defaults = RequestDefaults::new();
    defaults.set_default("Authorization", "Bearer abc");
    assert_eq!(defaults.remove_default("Authorization").as_deref(), Some("Bearer abc"));
    assert!(!defaults.contains("Authorization"));
    assert_eq!(defaults.remove_default("Authorization"), None);
}

#[test]
fn clones_share_headers() {
    let defaults = RequestDefaults::new();
    let reader = defaults.clone();
    defaults.set_default("X-Trace", "1");
    assert_eq!(reader.get("x-trace").as_deref(), Some("1"));
}
