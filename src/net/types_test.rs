use super::*;

// =============================================================
// Envelope + pagination
// =============================================================

#[test]
fn paginated_stores_decode_from_envelope() {
    let raw = serde_json::json!({
        "data": {
            "items": [{
                "storeId": 4,
                "storeName": "Toko A",
                "storeAddress": "Jl. Raya",
                "storeLatitude": "-6.1754",
                "storeLongitude": 106.8272,
                "createdAt": "2024-05-01T08:00:00Z"
            }],
            "totalItems": 31,
            "totalPages": 4
        }
    });
    let envelope: ApiEnvelope<Paginated<Store>> = serde_json::from_value(raw).unwrap();
    let page = envelope.data;
    assert_eq!(page.total_items, 31);
    assert_eq!(page.total_pages, Some(4));
    let store = &page.items[0];
    assert_eq!(store.store_id, 4);
    assert_eq!(store.store_latitude, "-6.1754");
    assert_eq!(store.store_longitude, "106.8272");
    assert_eq!(store.coordinate(), Some((-6.1754, 106.8272)));
}

#[test]
fn paginated_defaults_missing_fields() {
    let page: Paginated<Store> = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 0);
    assert_eq!(page.total_pages, None);
}

#[test]
fn store_with_bad_coordinates_has_no_coordinate() {
    let store = Store {
        store_latitude: "north".to_owned(),
        store_longitude: "10".to_owned(),
        ..Store::default()
    };
    assert_eq!(store.coordinate(), None);
}

// =============================================================
// Attendance
// =============================================================

#[test]
fn schedule_decodes_nested_user_and_store() {
    let raw = serde_json::json!({
        "scheduleId": "9",
        "scheduleStatus": "checkin",
        "scheduleStartDate": "2024-05-01",
        "scheduleEndDate": "2024-05-02",
        "scheduleUserId": 3,
        "user": { "userId": 3, "userName": "dewi" },
        "store": { "storeId": 4, "storeName": "Toko A", "storeAddress": "Jl. Raya" }
    });
    let schedule: Schedule = serde_json::from_value(raw).unwrap();
    assert_eq!(schedule.schedule_id, 9);
    assert_eq!(schedule.schedule_status, ScheduleStatus::Checkin);
    assert_eq!(schedule.user_name(), "dewi");
    assert_eq!(schedule.store_name(), "Toko A");
    assert_eq!(schedule.store_address(), "Jl. Raya");
}

#[test]
fn schedule_without_relations_uses_placeholders() {
    let schedule: Schedule =
        serde_json::from_value(serde_json::json!({ "scheduleId": 1, "scheduleStatus": "paused" }))
            .unwrap();
    assert_eq!(schedule.schedule_status, ScheduleStatus::Unknown);
    assert_eq!(schedule.user_name(), "-");
    assert_eq!(schedule.store_name(), "-");
}

#[test]
fn history_category_decodes_lowercase() {
    let raw = serde_json::json!({
        "attendanceHistoryId": 1,
        "attendanceHistoryUserId": 3,
        "attendanceHistoryTime": "2024-05-01T08:00:00Z",
        "attendanceHistoryCategory": "outside"
    });
    let history: AttendanceHistory = serde_json::from_value(raw).unwrap();
    assert_eq!(history.attendance_history_category, HistoryCategory::Outside);
    assert_eq!(history.attendance_history_category.label(), "outside");
}

#[test]
fn statistic_defaults_missing_counters() {
    let stats: Statistic = serde_json::from_value(serde_json::json!({ "totalStores": 12 })).unwrap();
    assert_eq!(stats.total_stores, 12);
    assert_eq!(stats.total_users, 0);
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn store_payload_omits_id_on_create() {
    let payload = StorePayload {
        store_name: "Toko B".to_owned(),
        store_address: "Jl. Baru".to_owned(),
        store_latitude: "1".to_owned(),
        store_longitude: "2".to_owned(),
        ..StorePayload::default()
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({
            "storeName": "Toko B",
            "storeAddress": "Jl. Baru",
            "storeLatitude": "1",
            "storeLongitude": "2"
        })
    );
}

#[test]
fn store_payload_from_store_keeps_id() {
    let store = Store { store_id: 8, store_name: "Toko C".to_owned(), ..Store::default() };
    let payload = StorePayload::from_store(&store);
    assert_eq!(payload.store_id, Some(8));
    assert_eq!(serde_json::to_value(&payload).unwrap()["storeId"], 8);
}

#[test]
fn admin_payload_skips_blank_password() {
    let payload = AdminPayload {
        user_id: Some(2),
        user_name: "budi".to_owned(),
        user_role: "admin".to_owned(),
        user_password: None,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert!(value.get("userPassword").is_none());
    assert_eq!(value["userRole"], "admin");
}

#[test]
fn login_response_accepts_access_token_alias() {
    let a: LoginResponse = serde_json::from_value(serde_json::json!({ "token": "t1" })).unwrap();
    let b: LoginResponse =
        serde_json::from_value(serde_json::json!({ "accessToken": "t2" })).unwrap();
    assert_eq!(a.token, "t1");
    assert_eq!(b.token, "t2");
}
