//! Local UI chrome state (drawer, user menu, alerts, busy overlay).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of auth state so the drawer and
//! toasts can change without re-resolving the route table.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::session::Session;

/// Severity of an alert toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

impl AlertKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A toast message shown in the bottom-right corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }

    /// Upper-cased severity used as the toast heading.
    pub fn title(&self) -> String {
        self.kind.as_str().to_uppercase()
    }
}

/// UI chrome state.
///
/// Fields are plain data; the app root wraps the whole struct in an
/// `RwSignal` provided via context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub drawer_expanded: bool,
    pub user_menu_open: bool,
    pub loading: bool,
    pub alert: Option<Alert>,
    /// Bumped each time an alert is shown.
    pub alert_seq: u64,
}

impl UiState {
    /// Chrome state with the drawer preference restored from `session`.
    pub fn restore(session: &Session) -> Self {
        Self {
            drawer_expanded: session.drawer_expanded(),
            ..Self::default()
        }
    }

    /// Show `alert`, returning the sequence number that identifies it.
    pub fn show_alert(&mut self, alert: Alert) -> u64 {
        self.alert_seq = self.alert_seq.wrapping_add(1);
        self.alert = Some(alert);
        self.alert_seq
    }

    /// Clear the alert only if it is still the one shown as `seq`.
    pub fn dismiss_alert(&mut self, seq: u64) {
        if self.alert_seq == seq {
            self.alert = None;
        }
    }
}
