//! Page components, one per declared route.

pub mod account;
pub mod login;
pub mod public;
