//! Session context: credential and drawer preference over one store.
//!
//! DESIGN
//! ======
//! `Session` is provided through Leptos context rather than read as ambient
//! global state. Identity is decoded from storage on every call; nothing is
//! cached, so a credential written by login is visible immediately.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use crate::config::{CREDENTIAL_KEY, DRAWER_KEY};
use crate::state::storage::{BrowserStorage, KeyValueStore};
use crate::util::credential::{self, Identity};

/// Persisted session state shared by the shell, pages, and API client.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn KeyValueStore>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.credential().is_some())
            .finish_non_exhaustive()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::browser()
    }
}

impl Session {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Session backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    /// Raw credential, ignoring blank values.
    pub fn credential(&self) -> Option<String> {
        self.store
            .get(CREDENTIAL_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    /// Decode the persisted credential.
    ///
    /// Missing or malformed credentials yield `None`; the failure is logged
    /// and never propagated.
    pub fn identity(&self) -> Option<Identity> {
        let Some(token) = self.credential() else {
            log::debug!("no session credential stored");
            return None;
        };
        match credential::decode(&token) {
            Ok(identity) => Some(identity),
            Err(e) => {
                log::error!("token doesn't exist or invalid: {e}");
                None
            }
        }
    }

    /// Persist a credential issued by login.
    pub fn store_credential(&self, token: &str) {
        self.store.set(CREDENTIAL_KEY, token);
    }

    /// Persist `token` only if it decodes, returning the identity it carries.
    ///
    /// # Errors
    ///
    /// Returns the decode failure; nothing is written in that case.
    pub fn accept_credential(&self, token: &str) -> Result<Identity, credential::CredentialError> {
        let identity = credential::decode(token)?;
        self.store_credential(token);
        Ok(identity)
    }

    /// Delete the persisted credential. Navigation is the caller's job.
    pub fn remove_identity(&self) {
        self.store.remove(CREDENTIAL_KEY);
    }

    /// Restored drawer preference; any non-empty stored value means expanded.
    pub fn drawer_expanded(&self) -> bool {
        self.store
            .get(DRAWER_KEY)
            .is_some_and(|value| !value.is_empty())
    }

    /// Persist the drawer preference as `"true"` or an empty string.
    pub fn set_drawer_expanded(&self, expanded: bool) {
        self.store.set(DRAWER_KEY, if expanded { "true" } else { "" });
    }

    /// Flip and persist the drawer preference, returning the new value.
    pub fn toggle_drawer(&self) -> bool {
        let next = !self.drawer_expanded();
        self.set_drawer_expanded(next);
        next
    }
}
