//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held in an `RwSignal` by the app root. Login, logout, `401` responses, and
//! credential changes from other tabs all call [`AuthState::refreshed`], which
//! re-reads the session and bumps `revision` so the layout, route table, and
//! menu are re-resolved from scratch.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::nav::role::Role;
use crate::state::session::Session;
use crate::util::credential::Identity;

/// Identity snapshot plus a revision counter bumped on every refresh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub identity: Option<Identity>,
    pub revision: u64,
}

impl AuthState {
    /// Initial state read from the session at mount.
    pub fn resolve(session: &Session) -> Self {
        Self {
            identity: session.identity(),
            revision: 0,
        }
    }

    /// Re-read the session after a credential change.
    #[must_use]
    pub fn refreshed(&self, session: &Session) -> Self {
        Self {
            identity: session.identity(),
            revision: self.revision.wrapping_add(1),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Recognized role of the current identity, if any.
    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().and_then(Identity::role)
    }
}
