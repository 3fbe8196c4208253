//! Login page: accepts a token and stores it as the session credential.
//!
//! Credential acquisition is immediate; there is no server round-trip.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;

/// Trim the token field and require a value without whitespace.
pub fn validate_token_input(raw: &str) -> Result<String, &'static str> {
    let token = raw.trim();
    if token.is_empty() {
        return Err("Enter a token first.");
    }
    if token.chars().any(char::is_whitespace) {
        return Err("Tokens cannot contain spaces.");
    }
    Ok(token.to_owned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let draft = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_token_input(&draft.get()) {
            Ok(token) => {
                error.set(None);
                session.login(&token);
                navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <div class="login-page">
            <h1>"Login Page"</h1>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Access token"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button type="submit" class="login-button">"Sign in"</button>
            </form>
            {move || error.get().map(|message| view! { <p class="login-page__error">{message}</p> })}
        </div>
    }
}
