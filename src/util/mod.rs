//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold pure parsing/validation logic so pages, components,
//! and state can share it and tests can exercise it without a browser.

pub mod coordinates;
pub mod credential;
pub mod lenient;
pub mod time;
