//! Bearer credential state with write-through persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `CredentialStore` exists per application. The navigator reads it on
//! every navigation, the request layer sees it through `RequestDefaults`, and
//! the UI layer mirrors it into a signal via `subscribe`.
//!
//! ORDERING
//! ========
//! `set` updates memory, then storage, then the default header, then runs
//! subscribers, all before returning. Nothing observes a half-applied change.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures never abort a mutation. The store logs a warning, keeps
//! the in-memory value authoritative, and reports `is_degraded()` until a
//! later persistence call succeeds.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::config::GateConfig;
use crate::net::headers::RequestDefaults;
use crate::storage::TokenStorage;

/// Opaque bearer token. Never parsed or validated.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Credential(String);

impl Credential {
    /// Wrap `raw`, treating the empty string as no credential.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens stay out of logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"<redacted>").finish()
    }
}

/// Handle returned by [`CredentialStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(Option<&Credential>)>;

/// Owner of the current credential.
pub struct CredentialStore {
    config: GateConfig,
    storage: Box<dyn TokenStorage>,
    headers: RequestDefaults,
    current: RefCell<Option<Credential>>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: Cell<u64>,
    degraded: Cell<bool>,
}

impl CredentialStore {
    /// Load the persisted credential (if any) and mirror it onto `headers`.
    ///
    /// An unreadable storage starts the store degraded with no credential.
    pub fn new(config: GateConfig, storage: impl TokenStorage + 'static, headers: RequestDefaults) -> Self {
        let store = Self::detached(config, storage, headers);
        store.restore();
        store
    }

    /// Store that starts signed out and leaves storage untouched until
    /// [`CredentialStore::restore`] runs. Hydrated clients use this so the
    /// first render matches the signed-out server HTML.
    pub fn detached(config: GateConfig, storage: impl TokenStorage + 'static, headers: RequestDefaults) -> Self {
        headers.remove_default(&config.header_name);
        Self {
            config,
            storage: Box::new(storage),
            headers,
            current: RefCell::new(None),
            subscribers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
            degraded: Cell::new(false),
        }
    }

    /// Reload the credential from storage, update the default header and
    /// notify subscribers. Storage is read, never written.
    pub fn restore(&self) {
        let loaded = match self.storage.get(&self.config.storage_key) {
            Ok(raw) => {
                self.degraded.set(false);
                raw.and_then(Credential::new)
            }
            Err(err) => {
                log::warn!("credential: storage read failed, starting signed out: {err}");
                self.degraded.set(true);
                None
            }
        };
        *self.current.borrow_mut() = loaded.clone();
        self.apply_header(loaded.as_ref());
        log::debug!("credential: restored (present: {})", loaded.is_some());
        self.notify(loaded.as_ref());
    }

    /// Current credential, if any.
    #[must_use]
    pub fn get(&self) -> Option<Credential> {
        self.current.borrow().clone()
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Replace the credential. `None` and `Some("")` both clear it.
    pub fn set<S: Into<String>>(&self, value: Option<S>) {
        let next = value.and_then(Credential::new);
        *self.current.borrow_mut() = next.clone();

        match &next {
            Some(credential) => {
                self.record_persistence(self.storage.set(&self.config.storage_key, credential.as_str()));
                log::info!("credential: set");
            }
            None => {
                self.record_persistence(self.storage.remove(&self.config.storage_key));
                log::info!("credential: cleared");
            }
        }
        self.apply_header(next.as_ref());

        self.notify(next.as_ref());
    }

    /// Explicit logout.
    pub fn clear(&self) {
        self.set(None::<String>);
    }

    /// Run `callback` after every mutation with the new value.
    pub fn subscribe(&self, callback: impl Fn(Option<&Credential>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    /// `true` while the last persistence call failed and the credential lives
    /// in memory only.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded.get()
    }

    #[must_use]
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    #[must_use]
    pub fn request_defaults(&self) -> &RequestDefaults {
        &self.headers
    }

    fn apply_header(&self, credential: Option<&Credential>) {
        match credential {
            Some(credential) => {
                self.headers
                    .set_default(&self.config.header_name, &self.config.header_value(credential.as_str()));
            }
            None => {
                self.headers.remove_default(&self.config.header_name);
            }
        }
    }

    fn record_persistence(&self, result: Result<(), crate::error::StorageError>) {
        match result {
            Ok(()) => self.degraded.set(false),
            Err(err) => {
                log::warn!("credential: persistence failed, keeping in-memory value: {err}");
                self.degraded.set(true);
            }
        }
    }

    fn notify(&self, value: Option<&Credential>) {
        // Snapshot so callbacks may subscribe, unsubscribe, or read the store.
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in subscribers {
            callback(value);
        }
    }
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("config", &self.config)
            .field("current", &self.current.borrow())
            .field("subscribers", &self.subscribers.borrow().len())
            .field("degraded", &self.degraded.get())
            .finish_non_exhaustive()
    }
}
