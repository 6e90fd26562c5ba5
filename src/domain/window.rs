//! Selection of the rolling "next 24 hours" forecast window.
//!
//! The window starts at the top of the hour following a reference time and
//! spans 24 hourly slots, both ends inclusive. Records are matched by parsing
//! their provider timestamp (`YYYY-MM-DD HH:mm`); records that do not parse
//! are skipped and counted, never treated as a failure. Input order is kept
//! as-is, so callers are expected to pass records in chronological order.

use std::collections::BTreeSet;

use chrono::{Local, NaiveDateTime, TimeDelta, Timelike};

use crate::domain::weather::parse_hour_time;


/// Number of hourly slots in a complete window.
pub const WINDOW_HOURS: usize = 24;

/// Anything that carries a provider-formatted hour timestamp.
pub trait Timestamped {
    fn timestamp_text(&self) -> &str;
}

impl Timestamped for str {
    fn timestamp_text(&self) -> &str {
        self
    }
}

impl Timestamped for String {
    fn timestamp_text(&self) -> &str {
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl ForecastWindow {
    /// Window beginning at the next full hour after `reference`.
    ///
    /// Any reference inside the same clock hour yields the same window. When
    /// no next hour is representable the window is empty.
    #[must_use]
    pub fn following(reference: NaiveDateTime) -> Self {
        let hour_start = truncate_to_hour(reference);
        let Some(start) = hour_start.checked_add_signed(TimeDelta::hours(1)) else {
            return Self {
                start: NaiveDateTime::MAX,
                end: hour_start,
            };
        };
        let span = TimeDelta::hours(WINDOW_HOURS as i64 - 1);
        let end = start
            .checked_add_signed(span)
            .unwrap_or(NaiveDateTime::MAX);
        Self { start, end }
    }

    /// Window following the current local wall-clock time.
    #[must_use]
    pub fn from_now() -> Self {
        Self::following(Local::now().naive_local())
    }

    #[must_use]
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Last eligible slot (inclusive).
    #[must_use]
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    #[must_use]
    pub fn contains(&self, time: NaiveDateTime) -> bool {
        self.start <= time && time <= self.end
    }

    /// Filters `records` down to those inside the window, keeping input order.
    pub fn select<'a, T, I>(&self, records: I) -> WindowSelection<'a, T>
    where
        T: Timestamped + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut selection = WindowSelection {
            records: Vec::new(),
            malformed: 0,
            covered_hours: 0,
        };
        let mut slots = BTreeSet::new();

        for record in records {
            match parse_hour_time(record.timestamp_text()) {
                Some(time) if self.contains(time) => {
                    selection.records.push(record);
                    if time.minute() == 0 {
                        slots.insert(time);
                    }
                }
                Some(_) => {}
                None => selection.malformed += 1,
            }
        }

        selection.covered_hours = slots.len();
        selection
    }
}

/// Records picked for a window plus the number skipped for bad timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSelection<'a, T: ?Sized> {
    records: Vec<&'a T>,
    malformed: usize,
    covered_hours: usize,
}

impl<'a, T: ?Sized> WindowSelection<'a, T> {
    #[must_use]
    pub fn records(&self) -> &[&'a T] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<&'a T> {
        self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn malformed(&self) -> usize {
        self.malformed
    }

    /// Distinct on-the-hour slots present; duplicates count once.
    #[must_use]
    pub fn covered_hours(&self) -> usize {
        self.covered_hours
    }

    /// Whether every slot of the window has at least one record.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.covered_hours >= WINDOW_HOURS
    }
}

/// Records for the next 24 hours after `reference`, or after now when `None`.
pub fn select_next_24_hours<'a, T, I>(records: I, reference: Option<NaiveDateTime>) -> Vec<&'a T>
where
    T: Timestamped + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let window = reference.map_or_else(ForecastWindow::from_now, ForecastWindow::following);
    window.select(records).into_records()
}

fn truncate_to_hour(value: NaiveDateTime) -> NaiveDateTime {
    value
        .date()
        .and_hms_opt(value.hour(), 0, 0)
        .unwrap_or(value)
}
