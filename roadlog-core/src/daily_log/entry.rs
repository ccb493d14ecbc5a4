//! Log entries, per-status totals and the daily log they make up.

use chrono::{NaiveDate, NaiveDateTime};

use crate::DutyStatus;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// One contiguous span of a single duty status.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    /// Status logged for the span.
    pub status: DutyStatus,
    /// Wall-clock start.
    pub start: NaiveDateTime,
    /// Wall-clock end, after `start`.
    pub end: NaiveDateTime,
    /// Location label for the span.
    pub location: String,
}

impl LogEntry {
    /// Length of the entry in hours.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "converts whole milliseconds within a day to fractional hours"
    )]
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / MILLIS_PER_HOUR
    }
}

/// Hours per duty status.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusTotals {
    /// Hours driving.
    pub driving: f64,
    /// Hours on duty, not driving.
    pub on_duty: f64,
    /// Hours off duty.
    pub off_duty: f64,
    /// Hours in the sleeper berth.
    pub sleeper_berth: f64,
}

impl StatusTotals {
    /// Sum entry durations grouped by status.
    #[must_use]
    pub fn from_entries(entries: &[LogEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut totals, entry| {
            totals.add(entry.status, entry.duration_hours());
            totals
        })
    }

    /// Hours recorded for `status`.
    #[must_use]
    pub const fn get(&self, status: DutyStatus) -> f64 {
        match status {
            DutyStatus::Driving => self.driving,
            DutyStatus::OnDuty => self.on_duty,
            DutyStatus::OffDuty => self.off_duty,
            DutyStatus::SleeperBerth => self.sleeper_berth,
        }
    }

    /// Hours across every status.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "sums per-status hours")]
    pub fn sum(&self) -> f64 {
        self.driving + self.on_duty + self.off_duty + self.sleeper_berth
    }

    #[expect(clippy::float_arithmetic, reason = "accumulates entry hours")]
    fn add(&mut self, status: DutyStatus, hours: f64) {
        let slot = match status {
            DutyStatus::Driving => &mut self.driving,
            DutyStatus::OnDuty => &mut self.on_duty,
            DutyStatus::OffDuty => &mut self.off_duty,
            DutyStatus::SleeperBerth => &mut self.sleeper_berth,
        };
        *slot += hours;
    }
}

/// One calendar day of duty entries.
///
/// Entries are chronological and contiguous. A day that carries any trip
/// activity covers the full 24 hours; days past the end of the trip are empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyLog {
    /// Calendar date of the day's first instant.
    pub date: NaiveDate,
    /// Entries in chronological order.
    pub entries: Vec<LogEntry>,
    /// Per-status hour totals for `entries`.
    pub totals: StatusTotals,
}

impl DailyLog {
    pub(crate) fn new(date: NaiveDate, entries: Vec<LogEntry>) -> Self {
        let totals = StatusTotals::from_entries(&entries);
        Self {
            date,
            entries,
            totals,
        }
    }

    /// Whether the day has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether each entry ends exactly where the next begins.
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        self.entries
            .windows(2)
            .all(|pair| matches!(pair, [first, second] if first.end == second.start))
    }
}
