//! Reactive session handle for the component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `Session` around a detached `CredentialStore` and provides
//! it as context. The server never sees browser storage, so both sides render
//! signed out first; `restore` runs after mount and loads the stored token.
//! Pages log in and out through the session; `GatedOutlet` and `NavBar` read
//! its signals. The store's subscriber updates the signal before `set`
//! returns, so no component renders against a stale credential.

use leptos::prelude::*;

use super::credential::{Credential, CredentialStore};
use crate::routes::GateState;

#[derive(Clone, Copy)]
pub struct Session {
    credential: RwSignal<Option<Credential>>,
    signed_in: Memo<bool>,
    restored: RwSignal<bool>,
    store: StoredValue<CredentialStore, LocalStorage>,
}

impl Session {
    pub fn new(store: CredentialStore) -> Self {
        let credential = RwSignal::new(store.get());
        store.subscribe(move |value| credential.set(value.cloned()));
        // Presence only changes on login/logout, not on token swaps.
        let signed_in = Memo::new(move |_| credential.with(Option::is_some));
        Self { credential, signed_in, restored: RwSignal::new(false), store: StoredValue::new_local(store) }
    }

    /// Load the persisted credential. Call once, after mount.
    pub fn restore(&self) {
        self.store.with_value(CredentialStore::restore);
        self.restored.set(true);
    }

    /// `false` until `restore` has run; redirects wait for it.
    pub fn restored(&self) -> RwSignal<bool> {
        self.restored
    }

    /// Current credential. Tracked when read inside a reactive scope.
    pub fn credential(&self) -> Option<Credential> {
        self.credential.get()
    }

    pub fn signed_in(&self) -> Memo<bool> {
        self.signed_in
    }

    /// Gate state, tracked through the presence memo only.
    pub fn gate_state(&self) -> GateState {
        if self.signed_in.get() { GateState::Authenticated } else { GateState::Unauthenticated }
    }

    pub fn login(&self, token: &str) {
        self.store.with_value(|store| store.set(Some(token)));
    }

    pub fn logout(&self) {
        self.store.with_value(CredentialStore::clear);
    }

    /// Handle onto the default headers attached to outbound requests.
    pub fn request_defaults(&self) -> crate::net::headers::RequestDefaults {
        self.store.with_value(|store| store.request_defaults().clone())
    }

    /// Whether the credential is held in memory only after a storage failure.
    pub fn is_degraded(&self) -> bool {
        self.store.with_value(CredentialStore::is_degraded)
    }
}
