use serde::{Deserialize, Serialize};

/// A wire value that the provider sends either as a JSON number or as text.
///
/// Only used while decoding; [`Reading::as_f64`] is applied once at ingestion
/// and domain types carry plain numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Number(f64),
    Text(String),
}

impl Reading {
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Reading::Number(value) => *value,
            Reading::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

#[must_use]
pub fn coerce(reading: Option<&Reading>) -> Option<f64> {
    reading.and_then(Reading::as_f64)
}

/// Percentage in `0..=100`; absent or unreadable values become 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn coerce_percent(reading: Option<&Reading>) -> u8 {
    coerce(reading).map_or(0, |value| value.round().clamp(0.0, 100.0) as u8)
}
