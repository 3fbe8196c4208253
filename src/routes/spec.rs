//! Declared routes: a path, an optional view and nested children.

#[cfg(test)]
#[path = "spec_test.rs"]
mod spec_test;

use super::pattern::{self, PathPattern, RouteParams};

/// Access tier a route table belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteTier {
    /// Reachable unconditionally.
    Public,
    /// Reachable only with a credential; enforced by the access gate.
    AuthenticatedOnly,
    /// Reachable only without a credential; removed from the table otherwise.
    UnauthenticatedOnly,
}

/// One navigable unit.
///
/// A spec with children groups them under its path. Its own view, if any,
/// renders only when the path names the group itself and no child matches.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteSpec<V> {
    path: String,
    view: Option<V>,
    children: Vec<RouteSpec<V>>,
}

impl<V> RouteSpec<V> {
    /// Leaf route rendering `view` at `path`.
    pub fn new(path: impl Into<String>, view: V) -> Self {
        Self { path: path.into(), view: Some(view), children: Vec::new() }
    }

    /// View-less group, e.g. the root of the authenticated subtree.
    pub fn guard(path: impl Into<String>, children: Vec<RouteSpec<V>>) -> Self {
        Self { path: path.into(), view: None, children }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<RouteSpec<V>>) -> Self {
        self.children = children;
        self
    }

    /// Path as declared (relative or absolute).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn view(&self) -> Option<&V> {
        self.view.as_ref()
    }

    #[must_use]
    pub fn children(&self) -> &[RouteSpec<V>] {
        &self.children
    }

    #[must_use]
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Absolute path of this spec when declared under `base`.
    #[must_use]
    pub fn full_path(&self, base: &str) -> String {
        pattern::join(base, &self.path)
    }

    /// Whether this spec lays claim to `segments`: some descendant (or the
    /// spec itself) renders there. Paths nothing renders stay unclaimed so
    /// they reach the host's not-found handling.
    #[must_use]
    pub fn claims(&self, base: &str, segments: &[&str]) -> bool {
        self.find(base, segments).is_some()
    }

    /// Find the renderable spec for `segments`, descending into children in
    /// declaration order. The first match wins.
    #[must_use]
    pub fn find(&self, base: &str, segments: &[&str]) -> Option<(&RouteSpec<V>, RouteParams)> {
        let full = self.full_path(base);
        let pattern = PathPattern::parse(&full);

        if !self.is_group() {
            let params = pattern.match_exact(segments)?;
            return self.view.as_ref().map(|_| (self, params));
        }

        let (params, consumed) = pattern.match_prefix(segments)?;
        if let Some(hit) = self.children.iter().find_map(|child| child.find(&full, segments)) {
            return Some(hit);
        }
        (consumed == segments.len() && self.view.is_some()).then_some((self, params))
    }
}
