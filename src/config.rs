//! Compile-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle is served as static files, so settings are baked in at build
//! time through environment variables read with `option_env!`.

/// Root of the REST backend. Override with `ADMIN_API_BASE_URL` at build time.
pub const API_BASE_URL: &str = match option_env!("ADMIN_API_BASE_URL") {
    Some(url) => url,
    None => "/api",
};

/// Storage key holding the encoded session credential.
pub const CREDENTIAL_KEY: &str = "token";

/// Storage key holding the drawer preference (`"true"` or empty).
pub const DRAWER_KEY: &str = "drawer";

/// Rows requested per page when a list first mounts.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Page sizes offered by list pagers.
pub const PAGE_SIZE_OPTIONS: [u64; 4] = [2, 5, 10, 25];

/// Brand text shown in the top bar.
pub const APP_TITLE: &str = "DASHBOARD";

/// Milliseconds an alert toast stays on screen.
pub const ALERT_TIMEOUT_MS: u32 = 5_000;
