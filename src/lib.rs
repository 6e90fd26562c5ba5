pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

use std::{
    fs::File,
    io::{self, BufReader, Write},
};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};

pub use app::report::render_report;
use app::settings::{load_runtime_settings, save_runtime_settings};
use cli::Cli;
use data::payload::read_payload;
use domain::{weather::ForecastPayload, window::ForecastWindow};

pub fn run(cli: &Cli) -> Result<()> {
    cli.validate()?;

    let (settings, settings_path) = load_runtime_settings(cli, !cli.no_save);
    let payload = load_payload(cli)?;

    let reference = resolve_reference(cli, &payload);
    let window = ForecastWindow::following(reference);
    let selection = window.select(payload.hours());

    if selection.malformed() > 0 {
        tracing::warn!(
            skipped = selection.malformed(),
            "skipped hourly records with unreadable timestamps"
        );
    }
    if !selection.is_complete() {
        tracing::info!(
            available = selection.len(),
            start = %window.start(),
            "forecast horizon does not cover the full window"
        );
    }

    let report = render_report(&payload, &window, &selection, &settings)?;
    writeln!(io::stdout().lock(), "{report}").context("writing report failed")?;

    if cli.overrides_settings()
        && let Some(path) = settings_path
        && let Err(err) = save_runtime_settings(&path, &settings)
    {
        tracing::warn!(path = %path.display(), "{err:#}");
    }

    Ok(())
}

fn load_payload(cli: &Cli) -> Result<ForecastPayload> {
    match cli.payload_path() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening payload {} failed", path.display()))?;
            read_payload(BufReader::new(file))
                .with_context(|| format!("reading payload {} failed", path.display()))
        }
        None => read_payload(io::stdin().lock()).context("reading payload from stdin failed"),
    }
}

/// `--at` wins, then the payload's own clock when asked for, then local now.
fn resolve_reference(cli: &Cli, payload: &ForecastPayload) -> NaiveDateTime {
    if let Some(at) = cli.at {
        return at;
    }
    if cli.source_clock {
        if let Some(local_time) = payload.source_local_time() {
            return local_time;
        }
        tracing::warn!("payload has no location local time, using the device clock");
    }
    Local::now().naive_local()
}
