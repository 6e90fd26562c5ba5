#![allow(dead_code)]

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use chrono::NaiveDateTime;
use forecast_strip::{
    app::settings::RuntimeSettings,
    cli::{IconMode, ViewArg},
    data::payload::read_payload,
    domain::weather::{ForecastPayload, HOUR_TIME_FORMAT, Units},
};

/// Two days of Bandung forecast; `2024-06-02 05:00` carries an unreadable time.
pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("forecast.json")
}

pub fn fixture_payload() -> ForecastPayload {
    let file = File::open(fixture_path()).expect("open fixture");
    read_payload(file).expect("fixture decodes")
}

pub fn at(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, HOUR_TIME_FORMAT).expect("valid reference")
}

pub fn ascii_settings(view: ViewArg) -> RuntimeSettings {
    RuntimeSettings {
        units: Units::Celsius,
        icon_mode: IconMode::Ascii,
        view,
    }
}
