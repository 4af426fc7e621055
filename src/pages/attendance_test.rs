use super::*;

// =============================================================
// date_range_filters
// =============================================================

#[test]
fn date_range_filters_pass_both_bounds() {
    let filters = date_range_filters("2024-05-01", "2024-05-31").expect("valid range");
    assert_eq!(
        filters,
        vec![("startDate", "2024-05-01".to_owned()), ("endDate", "2024-05-31".to_owned())]
    );
}

#[test]
fn date_range_filters_allow_open_bounds() {
    let filters = date_range_filters("", " 2024-05-31 ").expect("open start");
    assert_eq!(filters[0].1, "");
    assert_eq!(filters[1].1, "2024-05-31");
}

#[test]
fn date_range_filters_accept_single_day() {
    assert!(date_range_filters("2024-05-01", "2024-05-01").is_ok());
}

#[test]
fn date_range_filters_reject_inverted_range() {
    assert!(date_range_filters("2024-06-01", "2024-05-31").is_err());
}

// =============================================================
// status_badge
// =============================================================

#[test]
fn status_badge_capitalizes_label() {
    assert_eq!(status_badge(ScheduleStatus::Checkin), ("Checkin".to_owned(), "badge--warning"));
    assert_eq!(status_badge(ScheduleStatus::Checkout), ("Checkout".to_owned(), "badge--success"));
    assert_eq!(status_badge(ScheduleStatus::Waiting), ("Waiting".to_owned(), "badge--default"));
}
