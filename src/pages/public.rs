//! Pages reachable without signing in.

use leptos::prelude::*;

/// Anonymous landing page, shown at `/` while signed out.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Home Page"</h1>
            <p>"Sign in to see your account."</p>
        </div>
    }
}

#[component]
pub fn AboutUsPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About Us"</h1>
        </div>
    }
}

#[component]
pub fn ServicePage() -> impl IntoView {
    view! {
        <div class="service-page">
            <h1>"Service Page"</h1>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <p>"Page not found."</p>
        </div>
    }
}
