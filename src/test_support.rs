use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::domain::weather::{
    Astro, Condition, CurrentConditions, DaySummary, ForecastDay, ForecastPayload,
    HOUR_TIME_FORMAT, HourlyRecord, Location,
};

fn parse_time(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, HOUR_TIME_FORMAT).expect("valid time fixture")
}

pub(crate) fn cloudy() -> Condition {
    Condition {
        code: 1003,
        text: "Partly cloudy".to_string(),
        icon: "//cdn.weatherapi.com/weather/64x64/day/116.png".to_string(),
    }
}

pub(crate) fn hourly_at(time: &str) -> HourlyRecord {
    HourlyRecord {
        time: time.to_string(),
        temperature_c: Some(24.0),
        feels_like_c: Some(25.5),
        condition: cloudy(),
        chance_of_rain: 35,
        chance_of_snow: 0,
        humidity: 72,
        cloud: 40,
        wind_kph: Some(10.8),
        gust_kph: Some(15.1),
        wind_direction: "SW".to_string(),
        visibility_km: Some(10.0),
        precipitation_mm: Some(0.1),
        uv_index: Some(5.0),
        dew_point_c: Some(18.2),
        snow_cm: Some(0.0),
        pressure_mb: Some(1010.0),
        is_day: true,
    }
}

/// `count` consecutive hourly records starting at `start`.
pub(crate) fn hourly_series(start: &str, count: usize) -> Vec<HourlyRecord> {
    let start = parse_time(start);
    (0..count)
        .map(|idx| {
            let time = start + TimeDelta::hours(idx as i64);
            hourly_at(&time.format(HOUR_TIME_FORMAT).to_string())
        })
        .collect()
}

pub(crate) fn bandung_location() -> Location {
    Location {
        name: "Bandung".to_string(),
        region: Some("West Java".to_string()),
        country: Some("Indonesia".to_string()),
        latitude: Some(-6.9),
        longitude: Some(107.6),
        timezone: Some("Asia/Jakarta".to_string()),
        local_time: Some(parse_time("2024-06-01 13:30")),
    }
}

pub(crate) fn sample_current() -> CurrentConditions {
    CurrentConditions {
        temperature_c: 26.4,
        feels_like_c: Some(28.1),
        condition: cloudy(),
        wind_kph: Some(12.2),
        wind_direction: Some("WSW".to_string()),
        humidity: 70,
        dew_point_c: Some(19.0),
        uv_index: Some(6.0),
        visibility_km: Some(10.0),
        cloud: 50,
        pressure_mb: Some(1011.0),
        precipitation_mm: Some(0.0),
        is_day: true,
        last_updated: Some(parse_time("2024-06-01 13:15")),
    }
}

fn sample_day(date: NaiveDate, first_hour: &str) -> ForecastDay {
    ForecastDay {
        date: Some(date),
        summary: DaySummary {
            max_temp_c: Some(29.0),
            min_temp_c: Some(19.5),
            avg_temp_c: Some(23.8),
            total_precip_mm: Some(2.4),
            max_wind_kph: Some(16.9),
            avg_humidity: 78,
            chance_of_rain: 87,
            chance_of_snow: 0,
            uv_index: Some(6.0),
            condition: cloudy(),
        },
        astro: Astro::default(),
        hours: hourly_series(first_hour, 24),
    }
}

/// Two forecast days covering 2024-06-01 00:00 through 2024-06-02 23:00.
pub(crate) fn sample_payload() -> ForecastPayload {
    let day_one = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date fixture");
    let day_two = NaiveDate::from_ymd_opt(2024, 6, 2).expect("valid date fixture");
    ForecastPayload {
        location: bandung_location(),
        current: sample_current(),
        days: vec![
            sample_day(day_one, "2024-06-01 00:00"),
            sample_day(day_two, "2024-06-02 00:00"),
        ],
    }
}
