use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    cli::{Cli, IconMode, UnitsArg, ViewArg},
    domain::weather::Units,
};


pub const CONFIG_DIR_VAR: &str = "FORECAST_STRIP_CONFIG_DIR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuntimeSettings {
    pub units: Units,
    pub icon_mode: IconMode,
    pub view: ViewArg,
}

impl RuntimeSettings {
    #[must_use]
    pub fn from_cli_defaults(cli: &Cli) -> Self {
        let mut settings = Self::default();
        settings.apply_cli_overrides(cli);
        settings
    }

    pub fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(units) = cli.units {
            self.units = units_from_cli(units);
        }
        if let Some(view) = cli.view {
            self.view = view;
        }
        if cli.ascii_icons {
            self.icon_mode = IconMode::Ascii;
        } else if cli.emoji_icons {
            self.icon_mode = IconMode::Emoji;
        }
    }
}

#[must_use]
pub fn units_from_cli(units: UnitsArg) -> Units {
    match units {
        UnitsArg::Celsius => Units::Celsius,
        UnitsArg::Fahrenheit => Units::Fahrenheit,
    }
}

/// Saved settings with CLI flags layered on top.
///
/// A missing or unreadable settings file falls back to defaults.
pub fn load_runtime_settings(cli: &Cli, enable_disk: bool) -> (RuntimeSettings, Option<PathBuf>) {
    if !enable_disk {
        return (RuntimeSettings::from_cli_defaults(cli), None);
    }

    let Some(path) = settings_path() else {
        return (RuntimeSettings::from_cli_defaults(cli), None);
    };

    let mut settings = read_settings_file(&path).unwrap_or_default();
    settings.apply_cli_overrides(cli);
    (settings, Some(path))
}

fn read_settings_file(path: &Path) -> Option<RuntimeSettings> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str::<RuntimeSettings>(&content) {
        Ok(saved) => Some(saved),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring unreadable settings file");
            None
        }
    }
}

pub fn save_runtime_settings(path: &Path, settings: &RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")
}

fn settings_path() -> Option<PathBuf> {
    settings_path_from(std::env::var_os(CONFIG_DIR_VAR), std::env::var_os("HOME"))
}

fn settings_path_from(config_dir: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    if let Some(base) = config_dir {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = home?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("forecast-strip")
            .join("settings.json"),
    )
}
