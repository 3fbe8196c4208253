//! Shared client-side state.
//!
//! DESIGN
//! ======
//! `credential` is framework-free and owns the token. `session` wraps it for
//! the Leptos component tree.

pub mod credential;
pub mod session;
