use super::*;

// =============================================================
// admin_payload
// =============================================================

#[test]
fn admin_payload_create_requires_password() {
    assert_eq!(admin_payload(None, "budi", "ADMIN", "").unwrap_err(), "Enter a password.");
}

#[test]
fn admin_payload_create_normalizes_fields() {
    let payload = admin_payload(None, "  budi ", "superadmin", "s3cret").expect("valid admin");
    assert_eq!(
        payload,
        AdminPayload {
            user_id: None,
            user_name: "budi".to_owned(),
            user_role: "SUPERADMIN".to_owned(),
            user_password: Some("s3cret".to_owned()),
        }
    );
}

#[test]
fn admin_payload_edit_keeps_password_when_blank() {
    let payload = admin_payload(Some(4), "budi", "ADMIN", "").expect("valid edit");
    assert_eq!(payload.user_id, Some(4));
    assert_eq!(payload.user_password, None);
}

#[test]
fn admin_payload_rejects_unknown_role() {
    assert_eq!(admin_payload(Some(4), "budi", "SPG", "").unwrap_err(), "Choose a role.");
}

#[test]
fn admin_payload_rejects_blank_name() {
    assert_eq!(admin_payload(None, " ", "ADMIN", "pw").unwrap_err(), "Enter a name.");
}
