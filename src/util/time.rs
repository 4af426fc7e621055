//! Display formatting for backend timestamps.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Render an ISO-8601 timestamp as `YYYY-MM-DD HH:MM`.
///
/// Date-only values are returned unchanged; missing values render as `-`.
pub fn display_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return "-".to_owned();
    };
    match raw.split_once(['T', ' ']) {
        Some((date, time)) => {
            let minutes: String = time.chars().take(5).collect();
            format!("{date} {minutes}")
        }
        None => raw.to_owned(),
    }
}
