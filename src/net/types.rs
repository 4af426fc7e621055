//! Backend JSON DTOs.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase schema. Numeric ids and
//! coordinates go through lenient deserializers because the backend returns
//! them as numbers or strings depending on the endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::util::lenient::{i64_from_any, string_or_number};

/// Standard response wrapper: every payload sits under `data`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// One page of rows from a table endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub total_pages: Option<u64>,
}

/// A store location.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    #[serde(deserialize_with = "i64_from_any")]
    pub store_id: i64,
    #[serde(default)]
    pub store_name: String,
    #[serde(default)]
    pub store_address: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub store_latitude: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub store_longitude: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Store {
    /// Parsed coordinate, when both values are valid.
    pub fn coordinate(&self) -> Option<(f64, f64)> {
        crate::util::coordinates::parse_coordinate(&self.store_latitude, &self.store_longitude)
    }
}

/// A field user or an admin account.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    #[serde(deserialize_with = "i64_from_any")]
    pub user_id: i64,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_role: String,
    #[serde(default)]
    pub user_contact: Option<String>,
    #[serde(default)]
    pub user_device_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Attendance state of a schedule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    #[default]
    Waiting,
    Checkin,
    Checkout,
    #[serde(other)]
    Unknown,
}

impl ScheduleStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Checkin => "checkin",
            Self::Checkout => "checkout",
            Self::Unknown => "unknown",
        }
    }
}

/// A scheduled shift at a store, listed on the attendance page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(deserialize_with = "i64_from_any")]
    pub schedule_id: i64,
    #[serde(default)]
    pub schedule_name: String,
    #[serde(default)]
    pub schedule_status: ScheduleStatus,
    #[serde(default)]
    pub schedule_start_date: String,
    #[serde(default)]
    pub schedule_end_date: String,
    #[serde(default, deserialize_with = "i64_from_any")]
    pub schedule_user_id: i64,
    #[serde(default)]
    pub user: Option<UserAccount>,
    #[serde(default)]
    pub store: Option<Store>,
}

impl Schedule {
    pub fn user_name(&self) -> &str {
        self.user.as_ref().map_or("-", |user| user.user_name.as_str())
    }

    pub fn store_name(&self) -> &str {
        self.store.as_ref().map_or("-", |store| store.store_name.as_str())
    }

    pub fn store_address(&self) -> &str {
        self.store.as_ref().map_or("-", |store| store.store_address.as_str())
    }
}

/// Kind of attendance event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryCategory {
    Checkin,
    Checkout,
    Outside,
    #[serde(other)]
    Unknown,
}

impl HistoryCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Checkin => "checkin",
            Self::Checkout => "checkout",
            Self::Outside => "outside",
            Self::Unknown => "unknown",
        }
    }
}

/// One check-in/check-out event for a user.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceHistory {
    #[serde(deserialize_with = "i64_from_any")]
    pub attendance_history_id: i64,
    #[serde(default, deserialize_with = "i64_from_any")]
    pub attendance_history_user_id: i64,
    #[serde(default)]
    pub attendance_history_time: String,
    pub attendance_history_category: HistoryCategory,
}

/// Dashboard counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistic {
    pub total_users: u64,
    pub total_spg: u64,
    pub total_stores: u64,
    pub total_suppliers: u64,
}

/// Body for creating or updating a store.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<i64>,
    pub store_name: String,
    pub store_address: String,
    pub store_latitude: String,
    pub store_longitude: String,
}

impl StorePayload {
    /// Editable copy of an existing store.
    pub fn from_store(store: &Store) -> Self {
        Self {
            store_id: Some(store.store_id),
            store_name: store.store_name.clone(),
            store_address: store.store_address.clone(),
            store_latitude: store.store_latitude.clone(),
            store_longitude: store.store_longitude.clone(),
        }
    }
}

/// Body for creating or updating an admin account.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub user_name: String,
    pub user_role: String,
    /// Omitted on update unless a new password was entered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_password: Option<String>,
}

/// Body for updating the signed-in user's own profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub user_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_password: Option<String>,
}

/// Login form body.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub user_password: String,
}

/// Login response payload carrying the session credential.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "accessToken")]
    pub token: String,
}
