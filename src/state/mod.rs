//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Persisted state (`storage`, `session`) is separated from reactive view
//! state (`auth`, `ui`, `list`) so identity resolution stays a pure function
//! of the backing store and can be tested without a browser.

pub mod auth;
pub mod list;
pub mod session;
pub mod storage;
pub mod ui;
