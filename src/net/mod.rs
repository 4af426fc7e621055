//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues authenticated requests and unwraps the response envelope;
//! `types` defines the JSON schema shared with the backend.

pub mod api;
pub mod types;
