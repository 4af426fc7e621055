use super::*;

// =============================================================
// Helpers
// =============================================================

fn identity(role: &str) -> Identity {
    Identity {
        user_id: "1".to_owned(),
        user_name: "rina".to_owned(),
        user_role: role.to_owned(),
    }
}

fn keys(table: &[RouteBinding]) -> Vec<RouteKey> {
    table.iter().map(|binding| binding.key).collect()
}

// =============================================================
// resolve_route_table
// =============================================================

#[test]
fn unauthenticated_gets_public_login_table() {
    let table = resolve_route_table(None);
    assert_eq!(
        table,
        vec![
            RouteBinding { path: "/", key: RouteKey::Login },
            RouteBinding { path: "/login", key: RouteKey::Login },
        ]
    );
}

#[test]
fn admin_table_matches_grants_plus_profile() {
    let table = resolve_route_table(Some(&identity("admin")));
    assert_eq!(
        keys(&table),
        vec![
            RouteKey::Dashboard,
            RouteKey::Location,
            RouteKey::Stores,
            RouteKey::StoreCreate,
            RouteKey::StoreEdit,
            RouteKey::Attendance,
            RouteKey::Users,
            RouteKey::Profile,
            RouteKey::ProfileEdit,
        ]
    );
}

#[test]
fn admin_cannot_reach_admin_management_or_histories() {
    let admin = identity("ADMIN");
    assert!(!is_granted(Some(&admin), RouteKey::Admins));
    assert!(!is_granted(Some(&admin), RouteKey::AdminEdit));
    assert!(!is_granted(Some(&admin), RouteKey::AttendanceHistory));
}

#[test]
fn super_admin_table_includes_admin_management() {
    let table = resolve_route_table(Some(&identity("superadmin")));
    let keys = keys(&table);
    assert!(keys.contains(&RouteKey::Admins));
    assert!(keys.contains(&RouteKey::AdminCreate));
    assert!(keys.contains(&RouteKey::AdminEdit));
    assert!(keys.contains(&RouteKey::AttendanceHistory));
    assert_eq!(keys.last(), Some(&RouteKey::ProfileEdit));
}

#[test]
fn unknown_role_only_gets_profile_routes() {
    let table = resolve_route_table(Some(&identity("guest")));
    assert_eq!(keys(&table), vec![RouteKey::Profile, RouteKey::ProfileEdit]);
}

#[test]
fn empty_role_only_gets_profile_routes() {
    let table = resolve_route_table(Some(&identity("")));
    assert_eq!(keys(&table), vec![RouteKey::Profile, RouteKey::ProfileEdit]);
}

#[test]
fn bindings_use_key_path() {
    for binding in resolve_route_table(Some(&identity("superadmin"))) {
        assert_eq!(binding.path, binding.key.path());
    }
}

// =============================================================
// resolve_shell
// =============================================================

#[test]
fn shell_layout_follows_identity_presence() {
    assert_eq!(resolve_shell(None).layout, Layout::Public);
    assert_eq!(resolve_shell(Some(&identity("admin"))).layout, Layout::App);
    assert_eq!(resolve_shell(Some(&identity("guest"))).layout, Layout::App);
}

#[test]
fn shell_routes_equal_route_table() {
    let admin = identity("admin");
    assert_eq!(resolve_shell(Some(&admin)).routes, resolve_route_table(Some(&admin)));
}

// =============================================================
// match_path
// =============================================================

#[test]
fn match_path_finds_static_routes() {
    let table = resolve_route_table(Some(&identity("admin")));
    let matched = match_path(&table, "/stores").unwrap();
    assert_eq!(matched.key, RouteKey::Stores);
    assert!(matched.params.is_empty());
    assert_eq!(match_path(&table, "/").unwrap().key, RouteKey::Dashboard);
}

#[test]
fn match_path_prefers_static_create_over_param() {
    let table = resolve_route_table(Some(&identity("admin")));
    assert_eq!(match_path(&table, "/stores/create").unwrap().key, RouteKey::StoreCreate);
}

#[test]
fn match_path_captures_parameters() {
    let table = resolve_route_table(Some(&identity("superadmin")));
    let matched = match_path(&table, "/attendances/histories/42").unwrap();
    assert_eq!(matched.key, RouteKey::AttendanceHistory);
    assert_eq!(matched.param("attendanceHistoryUserId"), Some("42"));
    assert_eq!(matched.param("missing"), None);
}

#[test]
fn match_path_ignores_trailing_slash() {
    let table = resolve_route_table(Some(&identity("admin")));
    assert_eq!(match_path(&table, "/users/").unwrap().key, RouteKey::Users);
}

#[test]
fn match_path_rejects_ungranted_and_unknown_paths() {
    let table = resolve_route_table(Some(&identity("admin")));
    assert_eq!(match_path(&table, "/admins"), None);
    assert_eq!(match_path(&table, "/nowhere"), None);
    assert_eq!(match_path(&table, "/stores/edit"), None);
}

#[test]
fn match_path_public_table_serves_login_at_root() {
    let table = resolve_route_table(None);
    assert_eq!(match_path(&table, "/").unwrap().key, RouteKey::Login);
    assert_eq!(match_path(&table, "/login").unwrap().key, RouteKey::Login);
    assert_eq!(match_path(&table, "/stores"), None);
}

// =============================================================
// RouteKey helpers
// =============================================================

#[test]
fn link_fills_parameter_segment() {
    assert_eq!(RouteKey::StoreEdit.link("12"), "/stores/edit/12");
    assert_eq!(RouteKey::ProfileEdit.link("u-1"), "/my-profile/edit/u-1");
    assert_eq!(RouteKey::Stores.link("ignored"), "/stores");
}

#[test]
fn parameterized_keys_have_no_menu_entry() {
    for key in [
        RouteKey::StoreEdit,
        RouteKey::AdminEdit,
        RouteKey::ProfileEdit,
        RouteKey::AttendanceHistory,
    ] {
        assert!(key.path().contains("/:"));
        assert_eq!(key.menu(), None);
    }
}
