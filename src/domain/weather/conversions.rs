use chrono::{NaiveDate, NaiveDateTime};

use super::Units;

/// Timestamp layout used by the provider for hourly records and local time.
pub const HOUR_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[must_use]
pub fn convert_temp(celsius: f64, units: Units) -> f64 {
    match units {
        Units::Celsius => celsius,
        Units::Fahrenheit => celsius * 1.8 + 32.0,
    }
}

#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_temp(value: f64) -> i32 {
    value.round() as i32
}

/// Rounded temperature in the requested units, or `None` when unknown.
#[must_use]
pub fn display_temp(celsius: Option<f64>, units: Units) -> Option<i32> {
    celsius.map(|c| round_temp(convert_temp(c, units)))
}

#[must_use]
pub fn format_temp(value: Option<i32>, units: Units) -> String {
    value.map_or_else(|| "--".to_string(), |v| format!("{v}{}", units.symbol()))
}

/// Measurement with its unit, dropping a trailing `.0` the way the provider prints it.
#[must_use]
pub fn format_measure(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if unit.is_empty() => format!("{v}"),
        Some(v) => format!("{v} {unit}"),
        None => "--".to_string(),
    }
}

/// Strict `YYYY-MM-DD HH:MM`: zero-padded fields and exactly one space.
#[must_use]
pub fn parse_hour_time(value: &str) -> Option<NaiveDateTime> {
    if !has_hour_time_shape(value) {
        return None;
    }
    NaiveDateTime::parse_from_str(value, HOUR_TIME_FORMAT).ok()
}

/// Location and observation clocks; the provider does not pad the hour here
/// (`2024-06-01 9:05`).
#[must_use]
pub fn parse_local_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), HOUR_TIME_FORMAT).ok()
}

fn has_hour_time_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 16
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            4 | 7 => *byte == b'-',
            10 => *byte == b' ',
            13 => *byte == b':',
            _ => byte.is_ascii_digit(),
        })
}

#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
