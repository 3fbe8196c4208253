//! Root application component with route tables and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::gated_outlet::{GatedOutlet, ViewFn};
use crate::components::nav_bar::NavBar;
use crate::config::GateConfig;
use crate::net::headers::RequestDefaults;
use crate::pages::account::{LogoutPage, ProfilePage, UserHomePage};
use crate::pages::login::LoginPage;
use crate::pages::public::{AboutUsPage, HomePage, NotFoundPage, ServicePage};
use crate::routes::{Navigator, RouteClassifier, RouteSpec};
use crate::state::credential::CredentialStore;
use crate::state::session::Session;
use crate::storage::TokenStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// The application's three route tables.
///
/// `/` appears twice: signed out it is the anonymous home page, signed in the
/// unauthenticated table is gone and the guard's `/` child takes over.
pub fn route_tables() -> RouteClassifier<ViewFn> {
    RouteClassifier::new()
        .public(vec![RouteSpec::new("/service", service as ViewFn), RouteSpec::new("/about-us", about_us as ViewFn)])
        .authenticated_only(vec![RouteSpec::guard(
            "/",
            vec![
                RouteSpec::new("/", user_home as ViewFn),
                RouteSpec::new("/profile", profile as ViewFn),
                RouteSpec::new("/logout", logout as ViewFn),
            ],
        )])
        .unauthenticated_only(vec![RouteSpec::new("/", home as ViewFn), RouteSpec::new("/login", login as ViewFn)])
}

/// Root application component.
///
/// Provides the session and navigator, restores the stored credential after
/// mount, and routes every path through `GatedOutlet`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = GateConfig::default();
    // Signed out until mounted, matching the server render.
    let store = CredentialStore::detached(config.clone(), platform_storage(), RequestDefaults::new());
    let session = Session::new(store);
    provide_context(session);
    Effect::new(move || session.restore());
    provide_context(StoredValue::new(Navigator::with_config(route_tables(), &config)));

    view! {
        <Title text="Auth Gate"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=GatedOutlet/>
                <Route path=WildcardSegment("any") view=GatedOutlet/>
            </Routes>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
fn platform_storage() -> impl TokenStorage + 'static {
    crate::storage::BrowserStorage
}

#[cfg(not(feature = "hydrate"))]
fn platform_storage() -> impl TokenStorage + 'static {
    crate::storage::MemoryStorage::new()
}

fn home() -> AnyView {
    view! { <HomePage/> }.into_any()
}

fn about_us() -> AnyView {
    view! { <AboutUsPage/> }.into_any()
}

fn service() -> AnyView {
    view! { <ServicePage/> }.into_any()
}

fn login() -> AnyView {
    view! { <LoginPage/> }.into_any()
}

fn user_home() -> AnyView {
    view! { <UserHomePage/> }.into_any()
}

fn profile() -> AnyView {
    view! { <ProfilePage/> }.into_any()
}

fn logout() -> AnyView {
    view! { <LogoutPage/> }.into_any()
}
