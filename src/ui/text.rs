//! Plain-text rendering of the view models for terminal output.

use crate::cli::IconMode;
use crate::domain::weather::{HOUR_TIME_FORMAT, Units, condition_glyph, format_temp};
use crate::domain::window::{ForecastWindow, WINDOW_HOURS};
use crate::ui::current::CurrentSummary;
use crate::ui::detail::HourlyDetailCard;
use crate::ui::strip::HourlyStripEntry;

const ROW_LABEL_WIDTH: usize = 16;

#[must_use]
pub fn render_current(summary: &CurrentSummary, mode: IconMode, units: Units) -> String {
    let mut lines = Vec::with_capacity(4);

    lines.push(match &summary.updated {
        Some(updated) => format!("{}  (updated {updated})", summary.location),
        None => summary.location.clone(),
    });
    lines.push(format!(
        "{}  {}  {}",
        format_temp(Some(summary.temperature), units),
        condition_glyph(summary.condition_code, mode, summary.is_day),
        summary.condition
    ));

    let mut facts = vec![format!(
        "Feels like {}",
        format_temp(summary.feels_like, units)
    )];
    if summary.high.is_some() || summary.low.is_some() {
        facts.push(format!(
            "H {}  L {}",
            format_temp(summary.high, units),
            format_temp(summary.low, units)
        ));
    }
    facts.push(format!("Wind {}", summary.wind));
    lines.push(facts.join(" | "));

    lines.push(
        summary
            .tiles
            .iter()
            .map(|tile| format!("{} {}", tile.label, tile.value))
            .collect::<Vec<_>>()
            .join(" | "),
    );

    lines.join("\n")
}

#[must_use]
pub fn render_strip(
    window: &ForecastWindow,
    entries: &[HourlyStripEntry],
    mode: IconMode,
    units: Units,
) -> String {
    let mut lines = vec![window_heading(window)];

    if entries.is_empty() {
        lines.push("No hourly forecast available for this window.".to_string());
        return lines.join("\n");
    }

    lines.extend(entries.iter().map(|entry| {
        format!(
            "{}  {:>5}  {}  {:>4}  {}",
            entry.label,
            format_temp(entry.temperature, units),
            condition_glyph(entry.condition_code, mode, entry.is_day),
            format!("{}%", entry.chance_of_rain),
            entry.condition
        )
    }));

    if entries.len() < WINDOW_HOURS {
        lines.push(coverage_note(entries.len()));
    }

    lines.join("\n")
}

#[must_use]
pub fn render_details(
    window: &ForecastWindow,
    cards: &[HourlyDetailCard],
    mode: IconMode,
    units: Units,
) -> String {
    let mut blocks = vec![window_heading(window)];

    if cards.is_empty() {
        blocks.push("No hourly forecast available for this window.".to_string());
        return blocks.join("\n");
    }

    for card in cards {
        let mut block = vec![format!(
            "{} {}  {}  {}  {}",
            card.date_label,
            card.time_label,
            format_temp(card.temperature, units),
            condition_glyph(card.condition_code, mode, card.is_day),
            card.condition
        )];
        block.extend(card.rows.iter().map(|row| {
            format!(
                "  {:<width$}{}",
                row.label,
                row.value,
                width = ROW_LABEL_WIDTH
            )
        }));
        blocks.push(block.join("\n"));
    }

    if cards.len() < WINDOW_HOURS {
        blocks.push(coverage_note(cards.len()));
    }

    blocks.join("\n\n")
}

fn window_heading(window: &ForecastWindow) -> String {
    if window.is_empty() {
        return "Next 24 hours (no representable window)".to_string();
    }
    format!(
        "Next 24 hours ({} to {})",
        window.start().format(HOUR_TIME_FORMAT),
        window.end().format(HOUR_TIME_FORMAT)
    )
}

fn coverage_note(available: usize) -> String {
    format!("Forecast covers {available} of {WINDOW_HOURS} hours.")
}
