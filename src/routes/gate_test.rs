use super::*;

fn subtree() -> RouteSpec<&'static str> {
    RouteSpec::guard(
        "/",
        vec![
            RouteSpec::new("/", "User Home Page"),
            RouteSpec::new("/profile", "User Profile"),
            RouteSpec::new("/logout", "Logout"),
        ],
    )
}

fn token() -> Credential {
    Credential::new("tok123").unwrap()
}

#[test]
fn gate_state_follows_presence() {
    assert_eq!(GateState::from_credential(None), GateState::Unauthenticated);
    assert_eq!(GateState::from_credential(Some(&token())), GateState::Authenticated);
}

#[test]
fn absent_credential_redirects_to_login() {
    let gate = AccessGate::default();
    let root = subtree();
    assert_eq!(gate.evaluate(None, &root, "/profile"), Some(AccessDecision::Redirect("/login".to_owned())));
}

#[test]
fn absent_credential_redirects_even_without_matching_child() {
    let gate = AccessGate::default();
    let root = subtree();
    assert_eq!(gate.evaluate(None, &root, "/nowhere"), Some(AccessDecision::Redirect("/login".to_owned())));
}

#[test]
fn present_credential_renders_matching_child() {
    let gate = AccessGate::default();
    let root = subtree();
    let tok = token();
    match gate.evaluate(Some(&tok), &root, "/profile") {
        Some(AccessDecision::Render { view, .. }) => assert_eq!(*view, "User Profile"),
        other => panic!("expected render, got {other:?}"),
    }
}

#[test]
fn present_credential_without_matching_child_defers() {
    let gate = AccessGate::default();
    let root = subtree();
    assert_eq!(gate.evaluate(Some(&token()), &root, "/nowhere"), None);
}

#[test]
fn custom_login_path_is_normalized() {
    let gate = AccessGate::new("signin/");
    assert_eq!(gate.login_path(), "/signin");
    let root = subtree();
    assert_eq!(gate.evaluate(None, &root, "/"), Some(AccessDecision::Redirect("/signin".to_owned())));
}

#[test]
fn decisions_follow_credential_changes() {
    let gate = AccessGate::default();
    let root = subtree();
    let tok = token();
    assert!(matches!(gate.evaluate(None, &root, "/profile"), Some(AccessDecision::Redirect(_))));
    assert!(matches!(gate.evaluate(Some(&tok), &root, "/profile"), Some(AccessDecision::Render { .. })));
    assert!(matches!(gate.evaluate(None, &root, "/profile"), Some(AccessDecision::Redirect(_))));
}

#[test]
fn evaluate_state_matches_credential_evaluation() {
    let gate = AccessGate::default();
    let root = subtree();
    let tok = token();
    assert_eq!(gate.evaluate_state(GateState::Unauthenticated, &root, "/profile"), gate.evaluate(None, &root, "/profile"));
    assert_eq!(
        gate.evaluate_state(GateState::Authenticated, &root, "/profile"),
        gate.evaluate(Some(&tok), &root, "/profile")
    );
}
