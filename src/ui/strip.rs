use serde::Serialize;

use crate::domain::weather::{HourlyRecord, Units, display_temp};

/// What a rolling hourly widget shows for one slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyStripEntry {
    pub time: String,
    pub label: String,
    pub temperature: Option<i32>,
    pub condition: String,
    pub condition_code: u16,
    pub icon_url: String,
    pub chance_of_rain: u8,
    pub is_day: bool,
}

impl HourlyStripEntry {
    #[must_use]
    pub fn from_record(record: &HourlyRecord, units: Units) -> Self {
        Self {
            time: record.time.clone(),
            label: hour_label(record),
            temperature: display_temp(record.temperature_c, units),
            condition: record.condition.text.clone(),
            condition_code: record.condition.code,
            icon_url: record.condition.icon_url(),
            chance_of_rain: record.chance_of_rain,
            is_day: record.is_day,
        }
    }
}

#[must_use]
pub fn build_strip(records: &[&HourlyRecord], units: Units) -> Vec<HourlyStripEntry> {
    records
        .iter()
        .map(|record| HourlyStripEntry::from_record(record, units))
        .collect()
}

/// `HH:mm`, or the raw text when the timestamp does not parse.
#[must_use]
pub fn hour_label(record: &HourlyRecord) -> String {
    record
        .timestamp()
        .map_or_else(|| record.time.clone(), |t| t.format("%H:%M").to_string())
}
