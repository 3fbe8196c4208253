//! Outlet that renders whatever the navigator decides for the current path.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` mounts this for every path. It re-runs the navigator whenever the
//! location or credential presence changes and turns redirects into replace
//! navigations, so back/forward into a gated page is re-checked too.

#[cfg(test)]
#[path = "gated_outlet_test.rs"]
mod gated_outlet_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::pages::public::NotFoundPage;
use crate::routes::{Navigation, Navigator};
use crate::state::session::Session;

/// View unit stored in the route tables.
pub type ViewFn = fn() -> AnyView;

/// Redirect to perform for `navigation`, if any. Nothing redirects before the
/// stored credential is restored, or a returning user would be bounced to
/// the login page on every reload.
pub fn pending_redirect<V>(restored: bool, navigation: &Navigation<'_, V>) -> Option<String> {
    if !restored {
        return None;
    }
    navigation.redirect_target().map(str::to_owned)
}

#[component]
pub fn GatedOutlet() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigator = expect_context::<StoredValue<Navigator<ViewFn>>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let restored = session.restored();

    Effect::new(move || {
        let path = pathname.get();
        let state = session.gate_state();
        let ready = restored.get();
        let target = navigator.with_value(|nav| pending_redirect(ready, &nav.navigate_state(state, &path)));
        if let Some(target) = target {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || {
        let path = pathname.get();
        let state = session.gate_state();
        navigator.with_value(|nav| match nav.navigate_state(state, &path) {
            Navigation::Render { view: render, .. } => render(),
            // The effect above performs the navigation.
            Navigation::Redirect { .. } => ().into_any(),
            Navigation::NotFound => view! { <NotFoundPage/> }.into_any(),
        })
    }
}
