use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::numeric::{Reading, coerce, coerce_percent};
use crate::domain::weather::{
    Astro, Condition, CurrentConditions, DaySummary, ForecastDay, ForecastPayload, HourlyRecord,
    Location, parse_date, parse_local_time,
};

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("failed to read forecast payload: {0}")]
    Io(#[from] std::io::Error),
    #[error("forecast payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("forecast payload has no usable `{0}`")]
    MissingField(&'static str),
}

/// Decodes a provider `forecast.json` document.
///
/// Numbers that arrive as text are coerced here; hour timestamps are kept
/// verbatim for the window selector.
pub fn parse_payload(json: &str) -> Result<ForecastPayload, PayloadError> {
    let document: PayloadDocument = serde_json::from_str(json)?;
    let payload = ForecastPayload {
        location: parse_location(&document.location),
        current: parse_current(&document.current)?,
        days: document.forecast.forecastday.iter().map(parse_day).collect(),
    };

    tracing::debug!(
        location = %payload.location.name,
        days = payload.days.len(),
        hours = payload.hour_count(),
        "decoded forecast payload"
    );
    Ok(payload)
}

pub fn read_payload(mut reader: impl Read) -> Result<ForecastPayload, PayloadError> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    parse_payload(&json)
}

fn parse_location(block: &LocationBlock) -> Location {
    Location {
        name: block.name.clone(),
        region: block.region.clone(),
        country: block.country.clone(),
        latitude: coerce(block.lat.as_ref()),
        longitude: coerce(block.lon.as_ref()),
        timezone: block.tz_id.clone(),
        local_time: block.localtime.as_deref().and_then(parse_local_time),
    }
}

fn parse_current(block: &CurrentBlock) -> Result<CurrentConditions, PayloadError> {
    let temperature_c =
        coerce(block.temp_c.as_ref()).ok_or(PayloadError::MissingField("current.temp_c"))?;

    Ok(CurrentConditions {
        temperature_c,
        feels_like_c: coerce(block.feelslike_c.as_ref()),
        condition: parse_condition(&block.condition),
        wind_kph: coerce(block.wind_kph.as_ref()),
        wind_direction: block.wind_dir.clone(),
        humidity: coerce_percent(block.humidity.as_ref()),
        dew_point_c: coerce(block.dewpoint_c.as_ref()),
        uv_index: coerce(block.uv.as_ref()),
        visibility_km: coerce(block.vis_km.as_ref()),
        cloud: coerce_percent(block.cloud.as_ref()),
        pressure_mb: coerce(block.pressure_mb.as_ref()),
        precipitation_mm: coerce(block.precip_mm.as_ref()),
        is_day: is_flag_set(block.is_day.as_ref()),
        last_updated: block.last_updated.as_deref().and_then(parse_local_time),
    })
}

fn parse_day(block: &ForecastDayBlock) -> ForecastDay {
    let date = parse_date(&block.date);
    if date.is_none() {
        tracing::warn!(date = %block.date, "forecast day has an unreadable date");
    }

    ForecastDay {
        date,
        summary: parse_summary(&block.day),
        astro: parse_astro(&block.astro),
        hours: block.hour.iter().map(parse_hour).collect(),
    }
}

fn parse_summary(block: &DayBlock) -> DaySummary {
    DaySummary {
        max_temp_c: coerce(block.maxtemp_c.as_ref()),
        min_temp_c: coerce(block.mintemp_c.as_ref()),
        avg_temp_c: coerce(block.avgtemp_c.as_ref()),
        total_precip_mm: coerce(block.totalprecip_mm.as_ref()),
        max_wind_kph: coerce(block.maxwind_kph.as_ref()),
        avg_humidity: coerce_percent(block.avghumidity.as_ref()),
        chance_of_rain: coerce_percent(block.daily_chance_of_rain.as_ref()),
        chance_of_snow: coerce_percent(block.daily_chance_of_snow.as_ref()),
        uv_index: coerce(block.uv.as_ref()),
        condition: parse_condition(&block.condition),
    }
}

fn parse_astro(block: &AstroBlock) -> Astro {
    Astro {
        sunrise: block.sunrise.clone(),
        sunset: block.sunset.clone(),
        moonrise: block.moonrise.clone(),
        moonset: block.moonset.clone(),
        moon_phase: block.moon_phase.clone(),
        moon_illumination: block
            .moon_illumination
            .as_ref()
            .map(|r| coerce_percent(Some(r))),
    }
}

fn parse_hour(block: &HourBlock) -> HourlyRecord {
    HourlyRecord {
        time: block.time.clone(),
        temperature_c: coerce(block.temp_c.as_ref()),
        feels_like_c: coerce(block.feelslike_c.as_ref()),
        condition: parse_condition(&block.condition),
        chance_of_rain: coerce_percent(block.chance_of_rain.as_ref()),
        chance_of_snow: coerce_percent(block.chance_of_snow.as_ref()),
        humidity: coerce_percent(block.humidity.as_ref()),
        cloud: coerce_percent(block.cloud.as_ref()),
        wind_kph: coerce(block.wind_kph.as_ref()),
        gust_kph: coerce(block.gust_kph.as_ref()),
        wind_direction: block.wind_dir.clone().unwrap_or_default(),
        visibility_km: coerce(block.vis_km.as_ref()),
        precipitation_mm: coerce(block.precip_mm.as_ref()),
        uv_index: coerce(block.uv.as_ref()),
        dew_point_c: coerce(block.dewpoint_c.as_ref()),
        snow_cm: coerce(block.snow_cm.as_ref()),
        pressure_mb: coerce(block.pressure_mb.as_ref()),
        is_day: is_flag_set(block.is_day.as_ref()),
    }
}

fn parse_condition(block: &ConditionBlock) -> Condition {
    Condition {
        code: block.code,
        text: block.text.clone(),
        icon: block.icon.clone(),
    }
}

fn is_flag_set(reading: Option<&Reading>) -> bool {
    coerce(reading).is_some_and(|v| v >= 1.0)
}

#[derive(Debug, Deserialize)]
struct PayloadDocument {
    location: LocationBlock,
    current: CurrentBlock,
    #[serde(default)]
    forecast: ForecastBlock,
}

#[derive(Debug, Default, Deserialize)]
struct ForecastBlock {
    #[serde(default)]
    forecastday: Vec<ForecastDayBlock>,
}

#[derive(Debug, Deserialize)]
struct LocationBlock {
    #[serde(default)]
    name: String,
    region: Option<String>,
    country: Option<String>,
    lat: Option<Reading>,
    lon: Option<Reading>,
    tz_id: Option<String>,
    localtime: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConditionBlock {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    text: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    last_updated: Option<String>,
    temp_c: Option<Reading>,
    feelslike_c: Option<Reading>,
    #[serde(default)]
    condition: ConditionBlock,
    wind_kph: Option<Reading>,
    wind_dir: Option<String>,
    humidity: Option<Reading>,
    dewpoint_c: Option<Reading>,
    uv: Option<Reading>,
    vis_km: Option<Reading>,
    cloud: Option<Reading>,
    pressure_mb: Option<Reading>,
    precip_mm: Option<Reading>,
    is_day: Option<Reading>,
}

#[derive(Debug, Deserialize)]
struct ForecastDayBlock {
    #[serde(default)]
    date: String,
    #[serde(default)]
    day: DayBlock,
    #[serde(default)]
    astro: AstroBlock,
    #[serde(default)]
    hour: Vec<HourBlock>,
}

#[derive(Debug, Default, Deserialize)]
struct DayBlock {
    maxtemp_c: Option<Reading>,
    mintemp_c: Option<Reading>,
    avgtemp_c: Option<Reading>,
    totalprecip_mm: Option<Reading>,
    maxwind_kph: Option<Reading>,
    avghumidity: Option<Reading>,
    daily_chance_of_rain: Option<Reading>,
    daily_chance_of_snow: Option<Reading>,
    uv: Option<Reading>,
    #[serde(default)]
    condition: ConditionBlock,
}

#[derive(Debug, Default, Deserialize)]
struct AstroBlock {
    sunrise: Option<String>,
    sunset: Option<String>,
    moonrise: Option<String>,
    moonset: Option<String>,
    moon_phase: Option<String>,
    moon_illumination: Option<Reading>,
}

#[derive(Debug, Deserialize)]
struct HourBlock {
    #[serde(default)]
    time: String,
    temp_c: Option<Reading>,
    feelslike_c: Option<Reading>,
    #[serde(default)]
    condition: ConditionBlock,
    chance_of_rain: Option<Reading>,
    chance_of_snow: Option<Reading>,
    humidity: Option<Reading>,
    cloud: Option<Reading>,
    wind_kph: Option<Reading>,
    gust_kph: Option<Reading>,
    wind_dir: Option<String>,
    vis_km: Option<Reading>,
    precip_mm: Option<Reading>,
    uv: Option<Reading>,
    dewpoint_c: Option<Reading>,
    snow_cm: Option<Reading>,
    pressure_mb: Option<Reading>,
    is_day: Option<Reading>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRING_NUMBERS: &str = r#"{
        "location": {
            "name": "Bandung", "region": "West Java", "country": "Indonesia",
            "lat": "-6.9", "lon": 107.6, "tz_id": "Asia/Jakarta",
            "localtime": "2024-06-01 13:30", "localtime_epoch": 1717223400
        },
        "current": {
            "last_updated": "2024-06-01 13:15",
            "temp_c": "26.4", "feelslike_c": 28.1, "is_day": 1,
            "condition": {"text": "Partly cloudy", "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png", "code": 1003},
            "wind_kph": "12.2", "wind_dir": "WSW", "humidity": 70, "cloud": 50,
            "dewpoint_c": "19", "uv": 6.0, "vis_km": 10, "pressure_mb": 1011,
            "precip_mm": "0", "gust_mph": 9.1
        },
        "forecast": {"forecastday": [
            {
                "date": "2024-06-01",
                "day": {"maxtemp_c": "29", "mintemp_c": 19.5, "daily_chance_of_rain": 87,
                        "condition": {"text": "Patchy rain nearby", "icon": "", "code": 1063}},
                "astro": {"sunrise": "05:41 AM", "sunset": "05:35 PM", "moon_illumination": 28},
                "hour": [
                    {"time": "2024-06-01 00:00", "temp_c": 20.1, "chance_of_rain": 0, "humidity": 90,
                     "condition": {"text": "Clear", "icon": "//cdn/113.png", "code": 1000}, "is_day": 0},
                    {"time": "2024-06-01 01:00", "temp_c": null, "chance_of_rain": "150", "wind_dir": "S"}
                ]
            },
            {
                "date": "2024-06-02",
                "hour": [{"time": "2024-06-02 00:00", "temp_c": "19.8"}]
            }
        ]}
    }"#;

    #[test]
    fn coerces_text_numbers_at_ingestion() {
        let payload = parse_payload(STRING_NUMBERS).expect("payload decodes");

        assert!((payload.current.temperature_c - 26.4).abs() < f64::EPSILON);
        assert_eq!(payload.current.wind_kph, Some(12.2));
        assert_eq!(payload.current.dew_point_c, Some(19.0));
        assert_eq!(payload.current.precipitation_mm, Some(0.0));
        assert!(payload.current.is_day);
        assert_eq!(payload.location.latitude, Some(-6.9));
        assert_eq!(payload.location.longitude, Some(107.6));
        assert_eq!(payload.days[0].summary.max_temp_c, Some(29.0));
        assert_eq!(payload.days[1].hours[0].temperature_c, Some(19.8));
    }

    #[test]
    fn keeps_day_then_hour_order() {
        let payload = parse_payload(STRING_NUMBERS).expect("payload decodes");
        let times = payload.hours().map(|h| h.time.as_str()).collect::<Vec<_>>();
        assert_eq!(
            times,
            ["2024-06-01 00:00", "2024-06-01 01:00", "2024-06-02 00:00"]
        );
    }

    #[test]
    fn hour_fields_tolerate_nulls_and_out_of_range_percentages() {
        let payload = parse_payload(STRING_NUMBERS).expect("payload decodes");
        let second = &payload.days[0].hours[1];

        assert_eq!(second.temperature_c, None);
        assert_eq!(second.chance_of_rain, 100);
        assert_eq!(second.wind_direction, "S");
        assert_eq!(second.condition, Condition::default());
        assert!(!payload.days[0].hours[0].is_day);
    }

    #[test]
    fn decodes_location_time_and_astro() {
        let payload = parse_payload(STRING_NUMBERS).expect("payload decodes");

        assert_eq!(
            payload.source_local_time().map(|t| t.to_string()),
            Some("2024-06-01 13:30:00".to_string())
        );
        assert_eq!(payload.days[0].astro.sunrise.as_deref(), Some("05:41 AM"));
        assert_eq!(payload.days[0].astro.moon_illumination, Some(28));
        assert_eq!(payload.days[1].astro, Astro::default());
    }

    #[test]
    fn missing_current_temperature_is_an_error() {
        let json = r#"{"location": {"name": "X"}, "current": {"temp_c": "n/a"}}"#;
        let err = parse_payload(json).expect_err("temperature is required");
        assert!(matches!(err, PayloadError::MissingField("current.temp_c")));
    }

    #[test]
    fn missing_forecast_block_yields_no_days() {
        let json = r#"{"location": {"name": "X"}, "current": {"temp_c": 1}}"#;
        let payload = parse_payload(json).expect("payload decodes");
        assert!(payload.days.is_empty());
        assert_eq!(payload.hour_count(), 0);
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = parse_payload("{not json").expect_err("invalid json");
        assert!(matches!(err, PayloadError::Json(_)));
        assert!(err.to_string().starts_with("forecast payload is not valid JSON"));
    }

    #[test]
    fn unpadded_location_clock_still_decodes() {
        let json = r#"{
            "location": {"name": "Bandung", "localtime": "2024-06-01 9:05"},
            "current": {"temp_c": 21, "last_updated": "2024-06-01 9:00"}
        }"#;
        let payload = parse_payload(json).expect("payload decodes");

        assert_eq!(
            payload.source_local_time().map(|t| t.to_string()),
            Some("2024-06-01 09:05:00".to_string())
        );
        assert!(payload.current.last_updated.is_some());
    }

    #[test]
    fn reads_from_any_reader() {
        let payload = read_payload(STRING_NUMBERS.as_bytes()).expect("payload decodes");
        assert_eq!(payload.location.name, "Bandung");
    }
}
