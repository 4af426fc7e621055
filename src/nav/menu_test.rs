use super::*;
use crate::nav::routes::resolve_route_table;

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

fn titles(entries: &[NavEntry]) -> Vec<&'static str> {
    entries.iter().map(|entry| entry.title).collect()
}

// =============================================================
// resolve_menu
// =============================================================

#[test]
fn admin_menu_in_fixed_order() {
    for role in ["admin", "ADMIN", "aDmIn"] {
        let menu = resolve_menu(Some(&identity(role)));
        assert_eq!(
            titles(&menu),
            vec!["Dashboard", "Location", "Stores", "Attendance", "Users", "Profile"]
        );
    }
}

#[test]
fn super_admin_menu_in_fixed_order() {
    for role in ["superadmin", "SuperAdmin", "SUPERADMIN"] {
        let menu = resolve_menu(Some(&identity(role)));
        assert_eq!(
            titles(&menu),
            vec!["Dashboard", "Attendance", "Location", "Stores", "Users", "Admins", "Profile"]
        );
    }
}

#[test]
fn unknown_role_sees_only_profile() {
    for role in ["guest", "", "spg", "root"] {
        let menu = resolve_menu(Some(&identity(role)));
        assert_eq!(titles(&menu), vec!["Profile"]);
        assert_eq!(menu[0].link, "/my-profile");
        assert_eq!(menu[0].icon, Icon::Profile);
    }
}

#[test]
fn no_identity_yields_empty_menu() {
    assert!(resolve_menu(None).is_empty());
}

#[test]
fn resolve_menu_is_idempotent() {
    let admin = identity("superadmin");
    assert_eq!(resolve_menu(Some(&admin)), resolve_menu(Some(&admin)));
}

#[test]
fn menu_links_and_icons() {
    let menu = resolve_menu(Some(&identity("superadmin")));
    let links: Vec<&str> = menu.iter().map(|entry| entry.link).collect();
    assert_eq!(
        links,
        vec!["/", "/attendances", "/location", "/stores", "/users", "/admins", "/my-profile"]
    );
    assert_eq!(menu[5].icon, Icon::Admin);
}

#[test]
fn every_menu_entry_has_a_mounted_route() {
    for role in ["admin", "superadmin", "guest"] {
        let who = identity(role);
        let table = resolve_route_table(Some(&who));
        for entry in resolve_menu(Some(&who)) {
            assert!(
                table.iter().any(|binding| binding.path == entry.link),
                "{role}: {} has no route",
                entry.link
            );
        }
    }
}

#[test]
fn every_menu_capable_route_is_in_the_menu() {
    for role in ["admin", "superadmin", "guest"] {
        let who = identity(role);
        let menu = resolve_menu(Some(&who));
        for binding in resolve_route_table(Some(&who)) {
            if binding.key.menu().is_some() {
                assert!(menu.iter().any(|entry| entry.route == binding.key));
            }
        }
    }
}

// =============================================================
// Active highlighting
// =============================================================

#[test]
fn exactly_the_matching_entry_is_active() {
    let menu = resolve_menu(Some(&identity("admin")));
    let flags = active_flags(&menu, "/stores");
    assert_eq!(flags.iter().filter(|active| **active).count(), 1);
    let index = menu.iter().position(|entry| entry.link == "/stores").unwrap();
    assert!(flags[index]);
}

#[test]
fn nested_paths_do_not_highlight_parent() {
    let menu = resolve_menu(Some(&identity("admin")));
    assert!(active_flags(&menu, "/stores/create").iter().all(|active| !active));
}

#[test]
fn root_only_highlights_dashboard() {
    let menu = resolve_menu(Some(&identity("admin")));
    let flags = active_flags(&menu, "/");
    assert_eq!(flags, vec![true, false, false, false, false, false]);
}

#[test]
fn for_route_skips_keys_without_menu() {
    assert_eq!(NavEntry::for_route(RouteKey::StoreCreate), None);
    assert_eq!(NavEntry::for_route(RouteKey::Login), None);
    let entry = NavEntry::for_route(RouteKey::Users).unwrap();
    assert_eq!(entry.title, "Users");
    assert_eq!(entry.link, "/users");
}
