use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::state::storage::MemoryStorage;

fn token(user_id: u64, role: &str) -> String {
    let payload = serde_json::json!({ "userId": user_id, "userName": "adi", "userRole": role });
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload.to_string()))
}

// =============================================================
// route_view_key
// =============================================================

#[test]
fn route_view_key_changes_when_another_user_with_same_role_signs_in() {
    let session = Session::new(MemoryStorage::new());
    session.store_credential(&token(1, "ADMIN"));
    let first = AuthState::resolve(&session);
    let table = resolve_shell(first.identity.as_ref()).routes;

    session.store_credential(&token(2, "ADMIN"));
    let second = first.refreshed(&session);
    assert_eq!(resolve_shell(second.identity.as_ref()).routes, table);

    let before = route_view_key(&first, &table, "/my-profile");
    let after = route_view_key(&second, &table, "/my-profile");
    assert_eq!(before.1, after.1);
    assert_ne!(before, after);
}

#[test]
fn route_view_key_is_stable_for_same_revision_and_path() {
    let session = Session::new(MemoryStorage::new());
    session.store_credential(&token(1, "SUPERADMIN"));
    let auth = AuthState::resolve(&session);
    let table = resolve_shell(auth.identity.as_ref()).routes;
    assert_eq!(
        route_view_key(&auth, &table, "/stores"),
        route_view_key(&auth, &table, "/stores/")
    );
    assert_eq!(route_view_key(&auth, &table, "/stores").1.map(|m| m.key), Some(RouteKey::Stores));
}
