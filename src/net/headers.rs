//! Default headers attached to every outbound request.
//!
//! SYSTEM CONTEXT
//! ==============
//! `CredentialStore` sets and deletes the `Authorization` entry here whenever
//! the credential changes; the request builders in `net::api` read it.

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Shared, mutable default-header map.
///
/// Header names compare case-insensitively, as in HTTP; the name passed to
/// the most recent `set_default` is the one reported by `snapshot`.
#[derive(Clone, Debug, Default)]
pub struct RequestDefaults {
    headers: Rc<RefCell<BTreeMap<String, (String, String)>>>,
}

impl RequestDefaults {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `name: value` to all subsequent requests.
    pub fn set_default(&self, name: &str, value: &str) {
        self.headers
            .borrow_mut()
            .insert(name.to_ascii_lowercase(), (name.to_owned(), value.to_owned()));
    }

    /// Stop attaching `name`. Returns the removed value, if any.
    pub fn remove_default(&self, name: &str) -> Option<String> {
        self.headers
            .borrow_mut()
            .remove(&name.to_ascii_lowercase())
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.headers
            .borrow()
            .get(&name.to_ascii_lowercase())
            .map(|(_, value)| value.clone())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.headers.borrow().contains_key(&name.to_ascii_lowercase())
    }

    /// All default headers as `(name, value)` pairs, ordered by lowercase name.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.headers.borrow().values().cloned().collect()
    }
}
