//! Pages inside the authenticated-only subtree.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{fetch_profile, json_request_headers};
use crate::state::session::Session;

/// Shown at `/` once signed in.
#[component]
pub fn UserHomePage() -> impl IntoView {
    view! {
        <div class="user-home-page">
            <h1>"User Home Page"</h1>
        </div>
    }
}

/// Profile page: fetches the signed-in user through the session's default
/// headers and lists which headers those requests carry.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    // Reading the credential refetches after a token swap.
    let profile = LocalResource::new(move || {
        session.credential();
        let defaults = session.request_defaults();
        async move { fetch_profile(&defaults).await }
    });
    let headers = move || {
        session.credential();
        json_request_headers(&session.request_defaults())
    };

    view! {
        <div class="profile-page">
            <h1>"User Profile"</h1>
            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Ok(summary) => view! { <p class="profile-page__name">{summary.name}</p> }.into_any(),
                            Err(err) => {
                                log::warn!("profile: fetch failed: {err}");
                                view! { <p class="profile-page__error">"Profile unavailable."</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
            <ul class="profile-page__headers">
                {move || {
                    headers()
                        .into_iter()
                        .map(|(name, _)| view! { <li>{name}" attached"</li> })
                        .collect_view()
                }}
            </ul>
            <Show when=move || session.is_degraded()>
                <p class="profile-page__warning">"Storage unavailable; this session ends with the tab."</p>
            </Show>
        </div>
    }
}

#[component]
pub fn LogoutPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <div class="logout-page">
            <h1>"Logout"</h1>
            <button class="btn btn--primary" on:click=on_logout>"Sign out"</button>
        </div>
    }
}
