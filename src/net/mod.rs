//! Outbound-request plumbing.
//!
//! DESIGN
//! ======
//! `headers` holds the default-header map the credential store writes to;
//! `api` applies those defaults when building requests.

pub mod api;
pub mod headers;
