//! Latitude/longitude input validation for store forms.

#[cfg(test)]
#[path = "coordinates_test.rs"]
mod coordinates_test;

/// Shown when a store form submits out-of-range coordinates.
pub const INVALID_COORDINATE_MESSAGE: &str =
    "Invalid coordinates! Latitude must be between -90 and 90, and Longitude must be between -180 and 180.";

/// Whether `text` is a plain decimal: optional `-`, digits, optional `.digits`.
fn is_plain_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.is_none_or(all_digits)
}

/// Parse trimmed latitude/longitude strings when both are in range.
pub fn parse_coordinate(latitude: &str, longitude: &str) -> Option<(f64, f64)> {
    let (latitude, longitude) = (latitude.trim(), longitude.trim());
    if !is_plain_decimal(latitude) || !is_plain_decimal(longitude) {
        return None;
    }
    let lat: f64 = latitude.parse().ok()?;
    let lng: f64 = longitude.parse().ok()?;
    ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)).then_some((lat, lng))
}

/// Whether the pair is a valid map coordinate.
pub fn is_valid_coordinate(latitude: &str, longitude: &str) -> bool {
    parse_coordinate(latitude, longitude).is_some()
}

/// OpenStreetMap link centred on the coordinate with a marker.
pub fn map_link(lat: f64, lng: f64) -> String {
    format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map=15/{lat}/{lng}")
}
