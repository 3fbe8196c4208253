use super::*;
use crate::routes::pattern::split;

fn account() -> RouteSpec<&'static str> {
    RouteSpec::guard(
        "/account",
        vec![
            RouteSpec::new("settings", "Settings"),
            RouteSpec::new("/profile", "Profile"),
            RouteSpec::new("orders/:id", "Order"),
        ],
    )
}

#[test]
fn leaf_finds_exact_path() {
    let spec = RouteSpec::new("/about-us", "About Us");
    let (hit, _) = spec.find("/", &split("/about-us")).unwrap();
    assert_eq!(hit.view(), Some(&"About Us"));
    assert!(spec.find("/", &split("/about-us/team")).is_none());
}

#[test]
fn relative_child_resolves_under_group() {
    let spec = account();
    let (hit, _) = spec.find("/", &split("/account/settings")).unwrap();
    assert_eq!(hit.view(), Some(&"Settings"));
}

#[test]
fn absolute_child_keeps_its_own_path() {
    let spec = account();
    let (hit, _) = spec.find("/", &split("/profile")).unwrap();
    assert_eq!(hit.view(), Some(&"Profile"));
}

#[test]
fn child_params_include_group_prefix() {
    let spec = account();
    let (hit, params) = spec.find("/", &split("/account/orders/7")).unwrap();
    assert_eq!(hit.view(), Some(&"Order"));
    assert_eq!(params.get("id"), Some("7"));
}

#[test]
fn viewless_group_without_matching_child_finds_nothing() {
    assert!(account().find("/", &split("/account")).is_none());
    assert!(account().find("/", &split("/account/missing")).is_none());
}

#[test]
fn group_view_renders_for_its_own_path() {
    let spec = RouteSpec::new("/docs", "Docs Index").with_children(vec![RouteSpec::new("intro", "Intro")]);
    let (hit, _) = spec.find("/", &split("/docs")).unwrap();
    assert_eq!(hit.view(), Some(&"Docs Index"));
    let (hit, _) = spec.find("/", &split("/docs/intro")).unwrap();
    assert_eq!(hit.view(), Some(&"Intro"));
}

#[test]
fn first_declared_child_wins() {
    let spec = RouteSpec::guard("/", vec![RouteSpec::new("/dup", "First"), RouteSpec::new("/dup", "Second")]);
    let (hit, _) = spec.find("/", &split("/dup")).unwrap();
    assert_eq!(hit.view(), Some(&"First"));
}

#[test]
fn groups_claim_only_paths_a_descendant_renders() {
    let group = account();
    assert!(group.claims("/", &split("/account/settings")));
    assert!(group.claims("/", &split("/profile")));
    assert!(!group.claims("/", &split("/account/anything")));
    assert!(!group.claims("/", &split("/elsewhere")));
}

#[test]
fn leaves_claim_exact_paths() {
    let leaf = RouteSpec::new("/login", "Login");
    assert!(leaf.claims("/", &split("/login")));
    assert!(!leaf.claims("/", &split("/login/extra")));
}
