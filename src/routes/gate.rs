//! Access gate for the authenticated-only subtree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs on every entry into a guarded subtree, including back/forward
//! navigation and re-evaluation after the credential changes. A decision is
//! built from the credential passed in and is never cached.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use super::pattern::{self, RouteParams};
use super::spec::RouteSpec;
use crate::config::DEFAULT_LOGIN_PATH;
use crate::state::credential::Credential;

/// Gate state, a pure function of credential presence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Authenticated,
    Unauthenticated,
}

impl GateState {
    #[must_use]
    pub fn from_credential(credential: Option<&Credential>) -> Self {
        if credential.is_some() { Self::Authenticated } else { Self::Unauthenticated }
    }
}

/// What to do with a navigation into the guarded subtree.
#[derive(Debug, PartialEq)]
pub enum AccessDecision<'a, V> {
    Render { view: &'a V, params: RouteParams },
    /// Replace the current history entry with this path.
    Redirect(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessGate {
    login_path: String,
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_PATH)
    }
}

impl AccessGate {
    pub fn new(login_path: impl AsRef<str>) -> Self {
        Self { login_path: pattern::normalize(login_path.as_ref()) }
    }

    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Decide entry into `root` for `path`.
    ///
    /// Without a credential the answer is always a redirect to the login
    /// path; the requested path is not remembered. With one, the first
    /// descendant matching `path` renders, and `None` hands the path back to
    /// the host's not-found handling.
    #[must_use]
    pub fn evaluate<'a, V>(
        &self,
        credential: Option<&Credential>,
        root: &'a RouteSpec<V>,
        path: &str,
    ) -> Option<AccessDecision<'a, V>> {
        self.evaluate_state(GateState::from_credential(credential), root, path)
    }

    /// [`AccessGate::evaluate`] keyed on the gate state alone, for callers
    /// that track presence rather than the token itself.
    #[must_use]
    pub fn evaluate_state<'a, V>(
        &self,
        state: GateState,
        root: &'a RouteSpec<V>,
        path: &str,
    ) -> Option<AccessDecision<'a, V>> {
        match state {
            GateState::Unauthenticated => {
                log::debug!("gate: {path} requires a credential, redirecting to {}", self.login_path);
                Some(AccessDecision::Redirect(self.login_path.clone()))
            }
            GateState::Authenticated => {
                let segments = pattern::split(path);
                let (spec, params) = root.find("/", &segments)?;
                spec.view().map(|view| AccessDecision::Render { view, params })
            }
        }
    }
}
