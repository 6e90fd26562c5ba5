use serde::Serialize;

use crate::{
    app::settings::RuntimeSettings,
    cli::ViewArg,
    domain::{
        weather::{ForecastPayload, HOUR_TIME_FORMAT, HourlyRecord, Units},
        window::{ForecastWindow, WindowSelection},
    },
    ui::{
        current::CurrentSummary,
        detail::build_details,
        strip::{HourlyStripEntry, build_strip},
        text::{render_current, render_details, render_strip},
    },
};

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    location: &'a str,
    units: Units,
    window_start: Option<String>,
    window_end: Option<String>,
    skipped_records: usize,
    current: &'a CurrentSummary,
    hours: &'a [HourlyStripEntry],
}

/// Renders the selected window in the view chosen by `settings`.
pub fn render_report(
    payload: &ForecastPayload,
    window: &ForecastWindow,
    selection: &WindowSelection<'_, HourlyRecord>,
    settings: &RuntimeSettings,
) -> anyhow::Result<String> {
    let units = settings.units;
    let current = CurrentSummary::from_payload(payload, units);

    let report = match settings.view {
        ViewArg::Strip => {
            let entries = build_strip(selection.records(), units);
            format!(
                "{}\n\n{}",
                render_current(&current, settings.icon_mode, units),
                render_strip(window, &entries, settings.icon_mode, units)
            )
        }
        ViewArg::Details => {
            let cards = build_details(selection.records(), units);
            format!(
                "{}\n\n{}",
                render_current(&current, settings.icon_mode, units),
                render_details(window, &cards, settings.icon_mode, units)
            )
        }
        ViewArg::Json => {
            let entries = build_strip(selection.records(), units);
            let bounds = (!window.is_empty()).then(|| {
                (
                    window.start().format(HOUR_TIME_FORMAT).to_string(),
                    window.end().format(HOUR_TIME_FORMAT).to_string(),
                )
            });
            let (window_start, window_end) = bounds.unzip();
            serde_json::to_string_pretty(&JsonReport {
                location: &current.location,
                units,
                window_start,
                window_end,
                skipped_records: selection.malformed(),
                current: &current,
                hours: &entries,
            })?
        }
    };

    Ok(report)
}
