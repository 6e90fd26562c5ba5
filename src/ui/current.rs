use serde::Serialize;

use crate::domain::weather::{
    CurrentConditions, ForecastPayload, Units, convert_temp, display_temp, format_measure,
    format_temp, round_temp,
};
use crate::ui::detail::DetailRow;

/// Headline block shown above the hourly strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentSummary {
    pub location: String,
    pub updated: Option<String>,
    pub temperature: i32,
    pub feels_like: Option<i32>,
    pub high: Option<i32>,
    pub low: Option<i32>,
    pub condition: String,
    pub condition_code: u16,
    pub icon_url: String,
    pub is_day: bool,
    pub wind: String,
    pub tiles: Vec<DetailRow>,
}

impl CurrentSummary {
    #[must_use]
    pub fn from_payload(payload: &ForecastPayload, units: Units) -> Self {
        let current = &payload.current;
        let today = payload.today().map(|day| &day.summary);

        Self {
            location: payload.location.display_name(),
            updated: current
                .last_updated
                .map(|t| t.format("%H:%M").to_string()),
            temperature: round_temp(convert_temp(current.temperature_c, units)),
            feels_like: display_temp(current.feels_like_c, units),
            high: today.and_then(|s| display_temp(s.max_temp_c, units)),
            low: today.and_then(|s| display_temp(s.min_temp_c, units)),
            condition: current.condition.text.clone(),
            condition_code: current.condition.code,
            icon_url: current.condition.icon_url(),
            is_day: current.is_day,
            wind: wind_line(current),
            tiles: tiles(current, units),
        }
    }
}

fn wind_line(current: &CurrentConditions) -> String {
    let speed = format_measure(current.wind_kph, "km/h");
    match current.wind_direction.as_deref().filter(|d| !d.is_empty()) {
        Some(direction) if current.wind_kph.is_some() => format!("{direction}, {speed}"),
        _ => speed,
    }
}

fn tiles(current: &CurrentConditions, units: Units) -> Vec<DetailRow> {
    vec![
        DetailRow {
            label: "Humidity",
            value: format!("{}%", current.humidity),
        },
        DetailRow {
            label: "Dew point",
            value: format_temp(display_temp(current.dew_point_c, units), units),
        },
        DetailRow {
            label: "UV index",
            value: format_measure(current.uv_index, ""),
        },
        DetailRow {
            label: "Visibility",
            value: format_measure(current.visibility_km, "km"),
        },
        DetailRow {
            label: "Cloud cover",
            value: format!("{}%", current.cloud),
        },
        DetailRow {
            label: "Pressure",
            value: format_measure(current.pressure_mb, "mb"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_payload;

    #[test]
    fn summary_from_sample_payload() {
        let summary = CurrentSummary::from_payload(&sample_payload(), Units::Celsius);

        assert_eq!(summary.location, "Bandung, West Java, Indonesia");
        assert_eq!(summary.updated.as_deref(), Some("13:15"));
        assert_eq!(summary.temperature, 26);
        assert_eq!(summary.feels_like, Some(28));
        assert_eq!(summary.high, Some(29));
        assert_eq!(summary.low, Some(20));
        assert_eq!(summary.wind, "WSW, 12.2 km/h");
    }

    #[test]
    fn tiles_follow_display_order() {
        let summary = CurrentSummary::from_payload(&sample_payload(), Units::Celsius);
        let tiles = summary
            .tiles
            .iter()
            .map(|t| (t.label, t.value.as_str()))
            .collect::<Vec<_>>();

        assert_eq!(
            tiles,
            [
                ("Humidity", "70%"),
                ("Dew point", "19°C"),
                ("UV index", "6"),
                ("Visibility", "10 km"),
                ("Cloud cover", "50%"),
                ("Pressure", "1011 mb"),
            ]
        );
    }

    #[test]
    fn fahrenheit_summary_converts_every_temperature() {
        let summary = CurrentSummary::from_payload(&sample_payload(), Units::Fahrenheit);
        assert_eq!(summary.temperature, 80);
        assert_eq!(summary.feels_like, Some(83));
        assert_eq!(summary.high, Some(84));
        assert_eq!(summary.low, Some(67));
    }

    #[test]
    fn wind_without_direction_shows_speed_only() {
        let mut payload = sample_payload();
        payload.current.wind_direction = None;
        assert_eq!(
            CurrentSummary::from_payload(&payload, Units::Celsius).wind,
            "12.2 km/h"
        );

        payload.current.wind_kph = None;
        assert_eq!(CurrentSummary::from_payload(&payload, Units::Celsius).wind, "--");
    }

    #[test]
    fn no_forecast_days_means_no_high_low() {
        let mut payload = sample_payload();
        payload.days.clear();
        let summary = CurrentSummary::from_payload(&payload, Units::Celsius);
        assert_eq!(summary.high, None);
        assert_eq!(summary.low, None);
    }
}
