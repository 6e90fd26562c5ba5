//! Provider configuration and request descriptors for the HTTP layer that
//! fetches `forecast.json`. The binary reads payloads from disk and does not
//! use this module.

use std::fmt;

use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";
const DEFAULT_DAYS: u8 = 2;
const MAX_DAYS: u8 = 14;

pub const API_KEY_VAR: &str = "WEATHERAPI_KEY";
pub const BASE_URL_VAR: &str = "WEATHERAPI_BASE_URL";
pub const DAYS_VAR: &str = "WEATHERAPI_DAYS";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingApiKey(&'static str),
    #[error("forecast days must be between 1 and 14, got {0}")]
    InvalidDays(String),
    #[error("invalid coordinates: {lat}, {lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },
    #[error("forecast hour must be between 0 and 23, got {0}")]
    InvalidHour(u8),
}

/// Provider settings supplied by the host environment at startup.
#[derive(Clone, PartialEq)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: String,
    /// Two days keeps a full 24-hour window available late in the evening.
    pub days: u8,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("days", &self.days)
            .finish()
    }
}

impl ProviderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_VAR))?;
        let base_url = lookup(BASE_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let days = match lookup(DAYS_VAR) {
            Some(raw) => parse_days(&raw)?,
            None => DEFAULT_DAYS,
        };

        Ok(Self {
            base_url,
            api_key,
            days,
        })
    }
}

fn parse_days(raw: &str) -> Result<u8, ConfigError> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|days| (1..=MAX_DAYS).contains(days))
        .ok_or_else(|| ConfigError::InvalidDays(raw.to_string()))
}

/// Description of a `forecast.json` call for the HTTP collaborator to send.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    query: String,
    hour: Option<u8>,
}

impl ForecastRequest {
    pub fn for_coords(lat: f64, lon: f64) -> Result<Self, ConfigError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(ConfigError::InvalidCoordinates { lat, lon });
        }
        Ok(Self {
            query: format!("{lat},{lon}"),
            hour: None,
        })
    }

    #[must_use]
    pub fn for_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            hour: None,
        }
    }

    /// Restricts the provider response to a single hour of each day.
    pub fn with_hour(mut self, hour: u8) -> Result<Self, ConfigError> {
        if hour > 23 {
            return Err(ConfigError::InvalidHour(hour));
        }
        self.hour = Some(hour);
        Ok(self)
    }

    #[must_use]
    pub fn url(&self, config: &ProviderConfig) -> String {
        format!("{}/forecast.json", config.base_url)
    }

    #[must_use]
    pub fn query_pairs(&self, config: &ProviderConfig) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("key", config.api_key.clone()),
            ("q", self.query.clone()),
            ("days", config.days.to_string()),
        ];
        if let Some(hour) = self.hour {
            pairs.push(("hour", hour.to_string()));
        }
        pairs
    }
}
