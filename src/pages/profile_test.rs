use super::*;

fn identity(user_id: &str) -> Identity {
    Identity {
        user_id: user_id.to_owned(),
        user_name: "rina".to_owned(),
        user_role: "ADMIN".to_owned(),
    }
}

// =============================================================
// may_edit_profile
// =============================================================

#[test]
fn may_edit_profile_allows_own_id() {
    assert!(may_edit_profile(Some(&identity("7")), "7"));
}

#[test]
fn may_edit_profile_refuses_other_ids() {
    assert!(!may_edit_profile(Some(&identity("7")), "8"));
}

#[test]
fn may_edit_profile_refuses_missing_identity_or_id() {
    assert!(!may_edit_profile(None, "7"));
    assert!(!may_edit_profile(Some(&identity("")), ""));
}

// =============================================================
// profile_payload
// =============================================================

#[test]
fn profile_payload_omits_blank_password() {
    let payload = profile_payload(" rina ", "").expect("valid profile");
    assert_eq!(payload.user_name, "rina");
    assert_eq!(payload.user_password, None);
}

#[test]
fn profile_payload_keeps_new_password() {
    let payload = profile_payload("rina", "n3w").expect("valid profile");
    assert_eq!(payload.user_password.as_deref(), Some("n3w"));
}

#[test]
fn profile_payload_rejects_blank_name() {
    assert!(profile_payload("  ", "pw").is_err());
}
