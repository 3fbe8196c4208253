//! Navigation decisions: effective table first, then the access gate.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use super::classifier::{RouteClassifier, RouteMatch};
use super::gate::{AccessDecision, AccessGate, GateState};
use super::pattern::RouteParams;
use super::spec::RouteTier;
use crate::config::GateConfig;
use crate::state::credential::{Credential, CredentialStore};

/// Outcome of one navigation.
#[derive(Debug, PartialEq)]
pub enum Navigation<'a, V> {
    Render { view: &'a V, tier: RouteTier, params: RouteParams },
    /// Client-side navigation to `to`. `replace` drops the gated page from history.
    Redirect { to: String, replace: bool },
    /// Left to the host's not-found handling.
    NotFound,
}

impl<V> Navigation<'_, V> {
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Redirect { to, .. } => Some(to.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn view(&self) -> Option<&V> {
        match self {
            Self::Render { view, .. } => Some(*view),
            _ => None,
        }
    }
}

/// Route tables plus the gate guarding the authenticated-only subtree.
#[derive(Clone, Debug)]
pub struct Navigator<V> {
    routes: RouteClassifier<V>,
    gate: AccessGate,
}

impl<V> Navigator<V> {
    pub fn new(routes: RouteClassifier<V>, gate: AccessGate) -> Self {
        Self { routes, gate }
    }

    /// Navigator whose gate redirects to `config.login_path`.
    pub fn with_config(routes: RouteClassifier<V>, config: &GateConfig) -> Self {
        Self::new(routes, AccessGate::new(&config.login_path))
    }

    #[must_use]
    pub fn routes(&self) -> &RouteClassifier<V> {
        &self.routes
    }

    #[must_use]
    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }

    /// Decide what `path` shows for `credential`. Recomputed on every call.
    #[must_use]
    pub fn navigate(&self, credential: Option<&Credential>, path: &str) -> Navigation<'_, V> {
        self.navigate_state(GateState::from_credential(credential), path)
    }

    /// Decide what `path` shows in `state`. Every outcome depends on
    /// credential presence only, so this agrees with [`Navigator::navigate`].
    #[must_use]
    pub fn navigate_state(&self, state: GateState, path: &str) -> Navigation<'_, V> {
        let table = self.routes.table_for_presence(state == GateState::Authenticated);
        let navigation = match table.resolve(path) {
            Some(RouteMatch::Open { tier, spec, params }) => match spec.view() {
                Some(view) => Navigation::Render { view, tier, params },
                None => Navigation::NotFound,
            },
            Some(RouteMatch::Guarded { root }) => match self.gate.evaluate_state(state, root, path) {
                Some(AccessDecision::Render { view, params }) => {
                    Navigation::Render { view, tier: RouteTier::AuthenticatedOnly, params }
                }
                Some(AccessDecision::Redirect(to)) => Navigation::Redirect { to, replace: true },
                None => Navigation::NotFound,
            },
            None => Navigation::NotFound,
        };
        log::debug!("navigate: {path} -> {}", describe(&navigation));
        navigation
    }

    /// [`Navigator::navigate`] against the store's current credential.
    #[must_use]
    pub fn navigate_with(&self, store: &CredentialStore, path: &str) -> Navigation<'_, V> {
        self.navigate(store.get().as_ref(), path)
    }
}

fn describe<V>(navigation: &Navigation<'_, V>) -> String {
    match navigation {
        Navigation::Render { tier, .. } => format!("render ({tier:?})"),
        Navigation::Redirect { to, .. } => format!("redirect to {to}"),
        Navigation::NotFound => "not found".to_owned(),
    }
}
