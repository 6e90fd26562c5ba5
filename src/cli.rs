#![allow(clippy::missing_errors_doc)]

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ViewArg {
    /// Current conditions plus one line per hour
    #[default]
    Strip,
    /// One card per hour with every measurement
    Details,
    /// Machine-readable window report
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum IconMode {
    #[default]
    Unicode,
    Ascii,
    Emoji,
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "forecast-strip",
    version,
    about = "Show the next 24 hours of an hourly weather forecast"
)]
pub struct Cli {
    /// Forecast payload (WeatherAPI forecast.json); reads stdin when omitted or "-"
    pub payload: Option<PathBuf>,

    /// Reference time as "YYYY-MM-DD HH:MM" (default: now)
    #[arg(long, value_parser = parse_reference)]
    pub at: Option<NaiveDateTime>,

    /// Use the forecast location's local time as the reference
    #[arg(long, conflicts_with = "at")]
    pub source_clock: bool,

    /// Temperature units
    #[arg(long, value_enum)]
    pub units: Option<UnitsArg>,

    /// Output layout
    #[arg(long, value_enum)]
    pub view: Option<ViewArg>,

    /// Force ASCII icons
    #[arg(long, conflicts_with = "emoji_icons")]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long)]
    pub emoji_icons: bool,

    /// Neither read nor write saved settings
    #[arg(long)]
    pub no_save: bool,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(path) = self.payload_path()
            && !path.is_file()
        {
            anyhow::bail!("payload file {} does not exist", path.display());
        }
        Ok(())
    }

    /// File to read the payload from; `None` means stdin.
    #[must_use]
    pub fn payload_path(&self) -> Option<&Path> {
        self.payload
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Whether any flag overrides a saved setting.
    #[must_use]
    pub fn overrides_settings(&self) -> bool {
        self.units.is_some() || self.view.is_some() || self.ascii_icons || self.emoji_icons
    }
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(value.trim(), layout).ok())
        .ok_or_else(|| format!("expected \"YYYY-MM-DD HH:MM\", got \"{value}\""))
}
