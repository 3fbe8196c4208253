//! Three-tier route declarations and the effective-table merge.
//!
//! DESIGN
//! ======
//! The tables are declared once. `effective_table` is a pure function of
//! credential presence: `public ++ (absent ? unauthenticated_only : []) ++
//! authenticated_only`. It is rebuilt from the declarations on every call and
//! never patched from a previous table. Entries are borrowed, so rebuilding
//! allocates one vector of references and no routes.
//!
//! Order is match precedence. A path declared in more than one table resolves
//! to the first table in that order; duplicates are allowed.

#[cfg(test)]
#[path = "classifier_test.rs"]
mod classifier_test;

use super::pattern::{self, RouteParams};
use super::spec::{RouteSpec, RouteTier};
use crate::state::credential::Credential;

/// The statically declared route tables of an application.
#[derive(Clone, Debug)]
pub struct RouteClassifier<V> {
    public: Vec<RouteSpec<V>>,
    authenticated_only: Vec<RouteSpec<V>>,
    unauthenticated_only: Vec<RouteSpec<V>>,
}

impl<V> Default for RouteClassifier<V> {
    fn default() -> Self {
        Self { public: Vec::new(), authenticated_only: Vec::new(), unauthenticated_only: Vec::new() }
    }
}

impl<V> RouteClassifier<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn public(mut self, routes: Vec<RouteSpec<V>>) -> Self {
        self.public = routes;
        self
    }

    #[must_use]
    pub fn authenticated_only(mut self, routes: Vec<RouteSpec<V>>) -> Self {
        self.authenticated_only = routes;
        self
    }

    #[must_use]
    pub fn unauthenticated_only(mut self, routes: Vec<RouteSpec<V>>) -> Self {
        self.unauthenticated_only = routes;
        self
    }

    /// Declared routes of one tier.
    #[must_use]
    pub fn tier(&self, tier: RouteTier) -> &[RouteSpec<V>] {
        match tier {
            RouteTier::Public => &self.public,
            RouteTier::AuthenticatedOnly => &self.authenticated_only,
            RouteTier::UnauthenticatedOnly => &self.unauthenticated_only,
        }
    }

    /// Routes reachable for `credential`, in match order.
    #[must_use]
    pub fn effective_table(&self, credential: Option<&Credential>) -> RouteTable<'_, V> {
        self.table_for_presence(credential.is_some())
    }

    /// Same as [`RouteClassifier::effective_table`], keyed on presence alone.
    #[must_use]
    pub fn table_for_presence(&self, present: bool) -> RouteTable<'_, V> {
        let tiers: &[RouteTier] = if present {
            &[RouteTier::Public, RouteTier::AuthenticatedOnly]
        } else {
            &[RouteTier::Public, RouteTier::UnauthenticatedOnly, RouteTier::AuthenticatedOnly]
        };
        let entries: Vec<TableEntry<'_, V>> = tiers
            .iter()
            .flat_map(|&tier| self.tier(tier).iter().map(move |spec| TableEntry { tier, spec }))
            .collect();
        log::debug!("routes: effective table rebuilt (credential present: {present}, entries: {})", entries.len());
        RouteTable { entries }
    }
}

/// A declared route tagged with its tier.
#[derive(Debug)]
pub struct TableEntry<'a, V> {
    pub tier: RouteTier,
    pub spec: &'a RouteSpec<V>,
}

impl<V> Clone for TableEntry<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for TableEntry<'_, V> {}

/// Result of [`RouteTable::resolve`].
#[derive(Debug)]
pub enum RouteMatch<'a, V> {
    /// A public or unauthenticated-only route; render `spec`'s view directly.
    Open { tier: RouteTier, spec: &'a RouteSpec<V>, params: RouteParams },
    /// A top-level authenticated-only entry claimed the path; the access gate
    /// decides what happens next.
    Guarded { root: &'a RouteSpec<V> },
}

/// Ordered, merged route table for one credential state.
#[derive(Debug)]
pub struct RouteTable<'a, V> {
    entries: Vec<TableEntry<'a, V>>,
}

impl<'a, V> RouteTable<'a, V> {
    #[must_use]
    pub fn entries(&self) -> &[TableEntry<'a, V>] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `spec` (by identity) is part of this table.
    #[must_use]
    pub fn contains(&self, spec: &RouteSpec<V>) -> bool {
        self.entries.iter().any(|entry| std::ptr::eq(entry.spec, spec))
    }

    /// Whether any entry of `tier` is present.
    #[must_use]
    pub fn has_tier(&self, tier: RouteTier) -> bool {
        self.entries.iter().any(|entry| entry.tier == tier)
    }

    /// First entry, in table order, that matches `path`.
    ///
    /// Every entry must match down to a renderable view. An authenticated-only
    /// entry that does is handed to the gate, which decides with the
    /// credential whether that view renders.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'a, V>> {
        let segments = pattern::split(path);
        self.entries.iter().find_map(|entry| match entry.tier {
            RouteTier::AuthenticatedOnly => {
                entry.spec.claims("/", &segments).then_some(RouteMatch::Guarded { root: entry.spec })
            }
            tier => entry
                .spec
                .find("/", &segments)
                .map(|(spec, params)| RouteMatch::Open { tier, spec, params }),
        })
    }
}
