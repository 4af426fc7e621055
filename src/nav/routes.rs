//! Route registry and role grants.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell resolves the current identity on every session revision, asks
//! [`resolve_shell`] for the layout and route table, then matches the browser
//! path with [`match_path`]. The drawer menu is derived from the same grants in
//! [`crate::nav::menu`].

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::nav::role::Role;
use crate::util::credential::Identity;

/// Every screen the dashboard can mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteKey {
    Login,
    Dashboard,
    Location,
    Stores,
    StoreCreate,
    StoreEdit,
    Attendance,
    AttendanceHistory,
    Users,
    Admins,
    AdminCreate,
    AdminEdit,
    Profile,
    ProfileEdit,
}

/// Menu icon capability tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Dashboard,
    Location,
    Store,
    Attendance,
    User,
    Admin,
    Profile,
}

impl Icon {
    /// CSS modifier used by the icon font.
    pub const fn class(self) -> &'static str {
        match self {
            Self::Dashboard => "icon--dashboard",
            Self::Location => "icon--location",
            Self::Store => "icon--store",
            Self::Attendance => "icon--attendance",
            Self::User => "icon--user",
            Self::Admin => "icon--admin",
            Self::Profile => "icon--profile",
        }
    }

    /// Text fallback rendered inside the icon element.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Dashboard => "▦",
            Self::Location => "⌖",
            Self::Store => "▤",
            Self::Attendance => "◷",
            Self::User => "☺",
            Self::Admin => "★",
            Self::Profile => "◉",
        }
    }
}

impl RouteKey {
    /// Path pattern; `:name` segments capture parameters.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/",
            Self::Location => "/location",
            Self::Stores => "/stores",
            Self::StoreCreate => "/stores/create",
            Self::StoreEdit => "/stores/edit/:storeId",
            Self::Attendance => "/attendances",
            Self::AttendanceHistory => "/attendances/histories/:attendanceHistoryUserId",
            Self::Users => "/users",
            Self::Admins => "/admins",
            Self::AdminCreate => "/admins/create",
            Self::AdminEdit => "/admins/edit/:adminId",
            Self::Profile => "/my-profile",
            Self::ProfileEdit => "/my-profile/edit/:userId",
        }
    }

    /// Drawer title and icon, for keys that appear in the menu.
    pub const fn menu(self) -> Option<(&'static str, Icon)> {
        match self {
            Self::Dashboard => Some(("Dashboard", Icon::Dashboard)),
            Self::Location => Some(("Location", Icon::Location)),
            Self::Stores => Some(("Stores", Icon::Store)),
            Self::Attendance => Some(("Attendance", Icon::Attendance)),
            Self::Users => Some(("Users", Icon::User)),
            Self::Admins => Some(("Admins", Icon::Admin)),
            Self::Profile => Some(("Profile", Icon::Profile)),
            Self::Login
            | Self::StoreCreate
            | Self::StoreEdit
            | Self::AttendanceHistory
            | Self::AdminCreate
            | Self::AdminEdit
            | Self::ProfileEdit => None,
        }
    }

    /// Concrete link for a parameterized key, e.g. `/stores/edit/12`.
    ///
    /// Keys without a parameter ignore `param` and return their static path.
    pub fn link(self, param: &str) -> String {
        match self.path().split_once("/:") {
            Some((prefix, _)) => format!("{prefix}/{param}"),
            None => self.path().to_owned(),
        }
    }
}

// Grant order is menu order.
const ADMIN_GRANTS: &[RouteKey] = &[
    RouteKey::Dashboard,
    RouteKey::Location,
    RouteKey::Stores,
    RouteKey::StoreCreate,
    RouteKey::StoreEdit,
    RouteKey::Attendance,
    RouteKey::Users,
];

const SUPER_ADMIN_GRANTS: &[RouteKey] = &[
    RouteKey::Dashboard,
    RouteKey::Attendance,
    RouteKey::AttendanceHistory,
    RouteKey::Location,
    RouteKey::Stores,
    RouteKey::StoreCreate,
    RouteKey::StoreEdit,
    RouteKey::Users,
    RouteKey::Admins,
    RouteKey::AdminCreate,
    RouteKey::AdminEdit,
];

/// Granted to every authenticated identity, recognized role or not.
const SELF_SERVICE_GRANTS: &[RouteKey] = &[RouteKey::Profile, RouteKey::ProfileEdit];

const PUBLIC_ROUTES: &[RouteBinding] = &[
    RouteBinding { path: "/", key: RouteKey::Login },
    RouteBinding { path: "/login", key: RouteKey::Login },
];

/// Routes granted to a role, excluding self-service routes.
pub const fn role_grants(role: Option<Role>) -> &'static [RouteKey] {
    match role {
        Some(Role::Admin) => ADMIN_GRANTS,
        Some(Role::SuperAdmin) => SUPER_ADMIN_GRANTS,
        None => &[],
    }
}

/// Ordered keys an identity may visit. Empty when unauthenticated.
pub fn granted_routes(identity: Option<&Identity>) -> Vec<RouteKey> {
    let Some(identity) = identity else {
        return Vec::new();
    };
    role_grants(identity.role())
        .iter()
        .chain(SELF_SERVICE_GRANTS)
        .copied()
        .collect()
}

/// Whether `identity` may visit `key`.
pub fn is_granted(identity: Option<&Identity>, key: RouteKey) -> bool {
    granted_routes(identity).contains(&key)
}

/// A mounted path bound to the screen that renders it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteBinding {
    pub path: &'static str,
    pub key: RouteKey,
}

impl RouteBinding {
    /// Bind a key at its own path pattern.
    pub const fn of(key: RouteKey) -> Self {
        Self { path: key.path(), key }
    }
}

/// Top-level layout mounted around the routed page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Drawer + top bar shell for authenticated users.
    App,
    /// Bare login-only shell.
    Public,
}

/// Layout and route table resolved for one identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellPlan {
    pub layout: Layout,
    pub routes: Vec<RouteBinding>,
}

/// Mounted route table for an identity.
///
/// Unauthenticated visitors get the public login table; authenticated ones get
/// their granted routes, which always include the profile screens.
pub fn resolve_route_table(identity: Option<&Identity>) -> Vec<RouteBinding> {
    match identity {
        None => PUBLIC_ROUTES.to_vec(),
        Some(_) => granted_routes(identity)
            .into_iter()
            .map(RouteBinding::of)
            .collect(),
    }
}

/// Layout and route table for an identity.
pub fn resolve_shell(identity: Option<&Identity>) -> ShellPlan {
    let layout = if identity.is_some() {
        Layout::App
    } else {
        Layout::Public
    };
    ShellPlan {
        layout,
        routes: resolve_route_table(identity),
    }
}

/// Result of matching a browser path against a route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub key: RouteKey,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    /// Captured value for the `:name` segment.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Match `pathname` against `table`; the first matching binding wins.
///
/// Trailing and duplicate slashes are ignored. `:name` pattern segments match
/// any non-empty path segment and are returned as parameters.
pub fn match_path(table: &[RouteBinding], pathname: &str) -> Option<RouteMatch> {
    let actual: Vec<&str> = segments(pathname).collect();
    table.iter().find_map(|binding| {
        let pattern: Vec<&'static str> = segments(binding.path).collect();
        if pattern.len() != actual.len() {
            return None;
        }
        let mut params = Vec::new();
        for (expected, got) in pattern.iter().copied().zip(actual.iter().copied()) {
            if let Some(name) = expected.strip_prefix(':') {
                params.push((name, got.to_owned()));
            } else if expected != got {
                return None;
            }
        }
        Some(RouteMatch {
            key: binding.key,
            params,
        })
    })
}
