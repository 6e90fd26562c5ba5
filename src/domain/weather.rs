use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::window::{ForecastWindow, Timestamped};

mod conditions;
mod conversions;

pub use conditions::*;
pub use conversions::*;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Units {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Units {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Units::Celsius => "°C",
            Units::Fahrenheit => "°F",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub name: String,
    pub region: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    /// Wall-clock time at the location when the payload was produced.
    pub local_time: Option<NaiveDateTime>,
}

impl Location {
    #[must_use]
    pub fn display_name(&self) -> String {
        let region = self.region.as_deref().filter(|r| !r.is_empty());
        let country = self.country.as_deref().filter(|c| !c.is_empty());
        match (region, country) {
            (Some(region), Some(country)) => format!("{}, {}, {}", self.name, region, country),
            (None, Some(country)) => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Condition {
    pub code: u16,
    pub text: String,
    /// Icon reference as sent by the provider, often protocol-relative.
    pub icon: String,
}

impl Condition {
    #[must_use]
    pub fn icon_url(&self) -> String {
        normalize_icon_url(&self.icon)
    }

    #[must_use]
    pub fn category(&self) -> WeatherCategory {
        condition_category(self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub feels_like_c: Option<f64>,
    pub condition: Condition,
    pub wind_kph: Option<f64>,
    pub wind_direction: Option<String>,
    pub humidity: u8,
    pub dew_point_c: Option<f64>,
    pub uv_index: Option<f64>,
    pub visibility_km: Option<f64>,
    pub cloud: u8,
    pub pressure_mb: Option<f64>,
    pub precipitation_mm: Option<f64>,
    pub is_day: bool,
    pub last_updated: Option<NaiveDateTime>,
}

/// One forecast point for a calendar hour.
///
/// `time` is kept exactly as received so that a malformed value only drops
/// this record when a window is selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyRecord {
    pub time: String,
    pub temperature_c: Option<f64>,
    pub feels_like_c: Option<f64>,
    pub condition: Condition,
    pub chance_of_rain: u8,
    pub chance_of_snow: u8,
    pub humidity: u8,
    pub cloud: u8,
    pub wind_kph: Option<f64>,
    pub gust_kph: Option<f64>,
    pub wind_direction: String,
    pub visibility_km: Option<f64>,
    pub precipitation_mm: Option<f64>,
    pub uv_index: Option<f64>,
    pub dew_point_c: Option<f64>,
    pub snow_cm: Option<f64>,
    pub pressure_mb: Option<f64>,
    pub is_day: bool,
}

impl HourlyRecord {
    #[must_use]
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_hour_time(&self.time)
    }
}

impl Timestamped for HourlyRecord {
    fn timestamp_text(&self) -> &str {
        &self.time
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct DaySummary {
    pub max_temp_c: Option<f64>,
    pub min_temp_c: Option<f64>,
    pub avg_temp_c: Option<f64>,
    pub total_precip_mm: Option<f64>,
    pub max_wind_kph: Option<f64>,
    pub avg_humidity: u8,
    pub chance_of_rain: u8,
    pub chance_of_snow: u8,
    pub uv_index: Option<f64>,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Astro {
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    pub moonrise: Option<String>,
    pub moonset: Option<String>,
    pub moon_phase: Option<String>,
    pub moon_illumination: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    pub date: Option<NaiveDate>,
    pub summary: DaySummary,
    pub astro: Astro,
    pub hours: Vec<HourlyRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPayload {
    pub location: Location,
    pub current: CurrentConditions,
    pub days: Vec<ForecastDay>,
}

impl ForecastPayload {
    /// All hourly records, day order then hour order.
    pub fn hours(&self) -> impl Iterator<Item = &HourlyRecord> {
        self.days.iter().flat_map(|day| day.hours.iter())
    }

    #[must_use]
    pub fn hour_count(&self) -> usize {
        self.days.iter().map(|day| day.hours.len()).sum()
    }

    #[must_use]
    pub fn source_local_time(&self) -> Option<NaiveDateTime> {
        self.location.local_time
    }

    #[must_use]
    pub fn today(&self) -> Option<&ForecastDay> {
        self.days.first()
    }

    /// Hourly records for the 24 slots following `reference`.
    #[must_use]
    pub fn next_24_hours(&self, reference: NaiveDateTime) -> Vec<&HourlyRecord> {
        ForecastWindow::following(reference)
            .select(self.hours())
            .into_records()
    }
}
