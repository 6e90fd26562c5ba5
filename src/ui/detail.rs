use serde::Serialize;

use crate::domain::weather::{HourlyRecord, Units, display_temp, format_measure, format_temp};
use crate::ui::strip::hour_label;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

impl DetailRow {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

/// Everything the hourly detail screen shows for one hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyDetailCard {
    pub date_label: String,
    pub time_label: String,
    pub temperature: Option<i32>,
    pub condition: String,
    pub condition_code: u16,
    pub icon_url: String,
    pub is_day: bool,
    pub rows: Vec<DetailRow>,
}

impl HourlyDetailCard {
    #[must_use]
    pub fn from_record(record: &HourlyRecord, units: Units) -> Self {
        let date_label = record
            .timestamp()
            .map(|t| t.format("%a, %-d %b").to_string())
            .unwrap_or_default();

        Self {
            date_label,
            time_label: hour_label(record),
            temperature: display_temp(record.temperature_c, units),
            condition: record.condition.text.clone(),
            condition_code: record.condition.code,
            icon_url: record.condition.icon_url(),
            is_day: record.is_day,
            rows: detail_rows(record, units),
        }
    }
}

#[must_use]
pub fn build_details(records: &[&HourlyRecord], units: Units) -> Vec<HourlyDetailCard> {
    records
        .iter()
        .map(|record| HourlyDetailCard::from_record(record, units))
        .collect()
}

fn detail_rows(record: &HourlyRecord, units: Units) -> Vec<DetailRow> {
    vec![
        DetailRow::new("Rain", format!("{}%", record.chance_of_rain)),
        DetailRow::new("Humidity", format!("{}%", record.humidity)),
        DetailRow::new("Wind", format_measure(record.wind_kph, "km/h")),
        DetailRow::new("Visibility", format_measure(record.visibility_km, "km")),
        DetailRow::new(
            "Precipitation",
            format_measure(record.precipitation_mm, "mm"),
        ),
        DetailRow::new(
            "Dew point",
            format_temp(display_temp(record.dew_point_c, units), units),
        ),
        DetailRow::new("Snow", format_measure(record.snow_cm, "cm")),
        DetailRow::new("Wind direction", wind_direction(&record.wind_direction)),
        DetailRow::new("Cloud cover", format!("{}%", record.cloud)),
        DetailRow::new("UV index", format_measure(record.uv_index, "")),
    ]
}

fn wind_direction(value: &str) -> String {
    if value.is_empty() {
        "--".to_string()
    } else {
        value.to_string()
    }
}
