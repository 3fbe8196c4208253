use super::*;
use crate::routes::RouteParams;
use crate::routes::RouteTier;

fn redirect() -> Navigation<'static, &'static str> {
    Navigation::Redirect { to: "/login".to_owned(), replace: true }
}

#[test]
fn no_redirect_before_restore() {
    assert_eq!(pending_redirect(false, &redirect()), None);
}

#[test]
fn redirect_after_restore() {
    assert_eq!(pending_redirect(true, &redirect()).as_deref(), Some("/login"));
}

#[test]
fn render_and_not_found_never_redirect() {
    let view = "User Profile";
    let render: Navigation<'_, &str> =
        Navigation::Render { view: &view, tier: RouteTier::AuthenticatedOnly, params: RouteParams::default() };
    assert_eq!(pending_redirect(true, &render), None);
    assert_eq!(pending_redirect(true, &Navigation::<&str>::NotFound), None);
}
