use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::state::storage::MemoryStorage;

// =============================================================
// Helpers
// =============================================================

fn token(role: &str) -> String {
    let payload = serde_json::json!({ "userId": 3, "userName": "dewi", "userRole": role });
    format!(
        "{}.{}.sig",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#),
        URL_SAFE_NO_PAD.encode(payload.to_string())
    )
}

fn session() -> (Session, MemoryStorage) {
    let store = MemoryStorage::new();
    (Session::new(store.clone()), store)
}

// =============================================================
// Identity
// =============================================================

#[test]
fn storage_keys_are_distinct() {
    assert_ne!(CREDENTIAL_KEY, DRAWER_KEY);
}

#[test]
fn identity_absent_without_credential() {
    let (session, _) = session();
    assert_eq!(session.identity(), None);
}

#[test]
fn identity_absent_for_blank_credential() {
    let (session, store) = session();
    store.set(CREDENTIAL_KEY, "");
    assert_eq!(session.identity(), None);
    store.set(CREDENTIAL_KEY, "   ");
    assert_eq!(session.credential(), None);
    assert_eq!(session.identity(), None);
}

#[test]
fn identity_absent_for_malformed_credential() {
    let (session, _) = session();
    session.store_credential("definitely-not-a-jwt");
    assert_eq!(session.identity(), None);
    session.store_credential("a.%%%.c");
    assert_eq!(session.identity(), None);
}

#[test]
fn identity_decodes_stored_credential() {
    let (session, _) = session();
    session.store_credential(&token("admin"));
    let identity = session.identity().unwrap();
    assert_eq!(identity.user_id, "3");
    assert_eq!(identity.user_name, "dewi");
    assert_eq!(identity.user_role, "admin");
}

#[test]
fn identity_is_not_cached_across_login() {
    let (session, _) = session();
    assert_eq!(session.identity(), None);
    session.store_credential(&token("superadmin"));
    assert!(session.identity().is_some());
}

#[test]
fn identity_is_stable_for_same_credential() {
    let (session, _) = session();
    session.store_credential(&token("admin"));
    assert_eq!(session.identity(), session.identity());
}

#[test]
fn accept_credential_stores_decodable_token() {
    let (session, store) = session();
    let identity = session.accept_credential(&token("admin")).unwrap();
    assert_eq!(identity.user_name, "dewi");
    assert_eq!(store.get(CREDENTIAL_KEY), Some(token("admin")));
    assert_eq!(session.identity(), Some(identity));
}

#[test]
fn accept_credential_rejects_undecodable_token_without_writing() {
    let (session, store) = session();
    assert!(session.accept_credential("not-a-jwt").is_err());
    assert_eq!(store.get(CREDENTIAL_KEY), None);
    assert_eq!(session.identity(), None);
}

#[test]
fn remove_identity_logs_out() {
    let (session, store) = session();
    session.store_credential(&token("admin"));
    session.remove_identity();
    assert_eq!(session.identity(), None);
    assert_eq!(store.get(CREDENTIAL_KEY), None);
}

#[test]
fn remove_identity_keeps_drawer_preference() {
    let (session, _) = session();
    session.store_credential(&token("admin"));
    session.set_drawer_expanded(true);
    session.remove_identity();
    assert!(session.drawer_expanded());
}

// =============================================================
// Drawer preference
// =============================================================

#[test]
fn drawer_defaults_to_collapsed() {
    let (session, _) = session();
    assert!(!session.drawer_expanded());
}

#[test]
fn drawer_preference_survives_reload() {
    let (session, store) = session();
    session.set_drawer_expanded(true);
    assert_eq!(store.get(DRAWER_KEY), Some("true".to_owned()));

    let reloaded = Session::new(store.clone());
    assert!(reloaded.drawer_expanded());

    reloaded.set_drawer_expanded(false);
    assert_eq!(store.get(DRAWER_KEY), Some(String::new()));
    assert!(!Session::new(store).drawer_expanded());
}

#[test]
fn drawer_toggle_flips_and_persists() {
    let (session, store) = session();
    assert!(session.toggle_drawer());
    assert_eq!(store.get(DRAWER_KEY), Some("true".to_owned()));
    assert!(!session.toggle_drawer());
    assert_eq!(store.get(DRAWER_KEY), Some(String::new()));
}

#[test]
fn drawer_treats_any_non_empty_value_as_expanded() {
    let (session, store) = session();
    store.set(DRAWER_KEY, "yes");
    assert!(session.drawer_expanded());
}

#[test]
fn drawer_writes_do_not_touch_credential() {
    let (session, _) = session();
    session.store_credential(&token("admin"));
    session.toggle_drawer();
    assert!(session.identity().is_some());
}
