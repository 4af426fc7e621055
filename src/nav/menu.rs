//! Drawer menu projection of the route grants.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::nav::routes::{Icon, RouteKey, granted_routes};
use crate::util::credential::Identity;

/// One drawer item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub title: &'static str,
    pub link: &'static str,
    pub icon: Icon,
    pub route: RouteKey,
}

impl NavEntry {
    /// Entry for `route`, if it has a menu presentation.
    pub const fn for_route(route: RouteKey) -> Option<Self> {
        match route.menu() {
            Some((title, icon)) => Some(Self {
                title,
                link: route.path(),
                icon,
                route,
            }),
            None => None,
        }
    }

    /// Exact match against the current browser path.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.link == current_path
    }
}

/// Ordered drawer entries visible to `identity`.
///
/// `None` yields an empty menu. Any authenticated identity ends with the
/// Profile entry, even when its role is unrecognized.
pub fn resolve_menu(identity: Option<&Identity>) -> Vec<NavEntry> {
    if identity.is_none() {
        log::debug!("no identity, menu is empty");
    }
    granted_routes(identity)
        .into_iter()
        .filter_map(NavEntry::for_route)
        .collect()
}

/// Highlight flags for `entries` given the current path.
pub fn active_flags(entries: &[NavEntry], current_path: &str) -> Vec<bool> {
    entries
        .iter()
        .map(|entry| entry.is_active(current_path))
        .collect()
}
