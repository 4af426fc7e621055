//! Role-scoped navigation.
//!
//! DESIGN
//! ======
//! `routes` holds the single role -> route grant table. Both the router's
//! mounted route list and the drawer menu are projections of it, so the two
//! can never drift: every menu entry has a route and every granted route with
//! a menu presentation appears in the menu.

pub mod menu;
pub mod role;
pub mod routes;

pub use menu::{NavEntry, active_flags, resolve_menu};
pub use role::Role;
pub use routes::{
    Icon, Layout, RouteBinding, RouteKey, RouteMatch, ShellPlan, match_path, resolve_route_table,
    resolve_shell,
};
