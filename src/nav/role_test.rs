use super::*;

#[test]
fn parse_is_case_insensitive() {
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("Admin"), Some(Role::Admin));
    assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
    assert_eq!(Role::parse("superAdmin"), Some(Role::SuperAdmin));
    assert_eq!(Role::parse("SUPERADMIN"), Some(Role::SuperAdmin));
}

#[test]
fn parse_rejects_unknown_tags() {
    assert_eq!(Role::parse(""), None);
    assert_eq!(Role::parse("guest"), None);
    assert_eq!(Role::parse("super admin"), None);
    assert_eq!(Role::parse(" admin"), None);
    assert_eq!(Role::parse("spg"), None);
}

#[test]
fn as_str_round_trips_through_parse() {
    for role in [Role::Admin, Role::SuperAdmin] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
        assert_eq!(role.to_string(), role.as_str());
    }
}
