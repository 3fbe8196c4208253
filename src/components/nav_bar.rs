//! Top navigation links, switched on credential presence.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::Session;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<Session>();
    let signed_in = session.signed_in();

    view! {
        <nav class="nav-bar">
            <A href="/">"Home"</A>
            <A href="/about-us">"About Us"</A>
            <A href="/service">"Service"</A>
            <Show
                when=move || signed_in.get()
                fallback=|| view! { <A href="/login">"Login"</A> }
            >
                <A href="/profile">"Profile"</A>
                <A href="/logout">"Logout"</A>
            </Show>
        </nav>
    }
}
