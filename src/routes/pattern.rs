//! Path patterns: static segments, `:param` captures and a trailing `*`.
//!
//! Paths are compared segment-wise. Empty segments are dropped, so `/`,
//! `//` and `` all mean the root and trailing slashes are insignificant.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

use std::collections::BTreeMap;

/// Values captured by `:name` and `*name` segments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    /// Matches the remaining segments, possibly none. Unnamed stars capture nothing.
    Rest(Option<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse `raw`. Never fails: anything that is not `:name` or `*name` is static.
    /// A `*` before the last segment is treated as static text.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let parts = split(raw);
        let last = parts.len().saturating_sub(1);
        let segments = parts
            .iter()
            .enumerate()
            .map(|(idx, part)| {
                if let Some(name) = part.strip_prefix(':').filter(|n| !n.is_empty()) {
                    Segment::Param(name.to_owned())
                } else if let Some(name) = part.strip_prefix('*').filter(|_| idx == last) {
                    Segment::Rest((!name.is_empty()).then(|| name.to_owned()))
                } else {
                    Segment::Static((*part).to_owned())
                }
            })
            .collect();
        Self { segments }
    }

    /// Match the whole of `path`.
    #[must_use]
    pub fn match_exact(&self, path: &[&str]) -> Option<RouteParams> {
        let (params, consumed) = self.match_prefix(path)?;
        (consumed == path.len()).then_some(params)
    }

    /// Match a leading run of `path`. Returns the captures and how many
    /// segments were consumed.
    #[must_use]
    pub fn match_prefix(&self, path: &[&str]) -> Option<(RouteParams, usize)> {
        let mut params = BTreeMap::new();
        for (idx, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Rest(name) => {
                    if let Some(name) = name {
                        params.insert(name.clone(), path[idx.min(path.len())..].join("/"));
                    }
                    return Some((RouteParams(params), path.len()));
                }
                Segment::Static(expected) => {
                    if path.get(idx) != Some(&expected.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = path.get(idx)?;
                    params.insert(name.clone(), (*value).to_owned());
                }
            }
        }
        Some((RouteParams(params), self.segments.len()))
    }
}

/// Non-empty segments of `path`.
#[must_use]
pub fn split(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Canonical form of `path`: leading slash, no trailing or doubled slashes.
#[must_use]
pub fn normalize(path: &str) -> String {
    format!("/{}", split(path).join("/"))
}

/// Resolve `child` against `parent`. Absolute children are taken as-is.
#[must_use]
pub fn join(parent: &str, child: &str) -> String {
    if child.starts_with('/') {
        normalize(child)
    } else {
        normalize(&format!("{parent}/{child}"))
    }
}
