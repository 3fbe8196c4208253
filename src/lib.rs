//! # authgate
//!
//! Client-side authentication gating for a Leptos single-page application.
//!
//! The crate holds a bearer credential (`state::credential`), classifies
//! routes into public, authenticated-only and unauthenticated-only tables
//! (`routes::classifier`), and guards the authenticated subtree with a
//! two-state gate (`routes::gate`). `routes::navigator` combines them into a
//! render/redirect/not-found decision per path. The engine is
//! framework-free; `app`, `components` and `pages` wire it into Leptos.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod storage;

pub use config::GateConfig;
pub use error::{ConfigError, StorageError};
pub use net::headers::RequestDefaults;
pub use routes::{AccessDecision, AccessGate, Navigation, Navigator, RouteClassifier, RouteSpec, RouteTier};
pub use state::credential::{Credential, CredentialStore};
pub use storage::{MemoryStorage, TokenStorage};

/// Install the browser console logger and panic hook.
#[cfg(feature = "hydrate")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
}

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    init_logging();
    leptos::mount::hydrate_body(app::App);
}
