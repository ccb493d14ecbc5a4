//! Partition a trip plan into per-day duty logs.
//!
//! Day `n` covers elapsed trip hours `[24n, 24n + 24)` and starts at the trip
//! anchor advanced by `n` days. Segments that cross a day boundary are split,
//! so each day's entries cover the full 24 hours once trip activity begins.
//! The remainder of the final day is padded off duty.
//!
//! Elapsed hours are converted to wall-clock time once per boundary, rounded
//! to the millisecond, so consecutive entries share timestamps exactly.

mod entry;
mod error;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use log::debug;

use crate::plan::{MILLIS_PER_DAY, hours_to_millis};
use crate::{DutyStatus, TripPlan, classify};

pub use entry::{DailyLog, LogEntry, StatusTotals};
pub use error::LogError;

/// Hour of day at which trips start unless the caller chooses otherwise.
pub const DEFAULT_START_HOUR: u32 = 1;

/// Wall-clock instant for elapsed hour zero: `hour:00` on `date`.
///
/// Returns `None` when `hour` is not a valid hour of day.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use roadlog_core::trip_start_anchor;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let anchor = trip_start_anchor(date, 1).unwrap();
/// assert_eq!(anchor.to_string(), "2025-03-01 01:00:00");
/// assert!(trip_start_anchor(date, 24).is_none());
/// ```
#[must_use]
pub fn trip_start_anchor(date: NaiveDate, hour: u32) -> Option<NaiveDateTime> {
    NaiveTime::from_hms_opt(hour, 0, 0).map(|time| date.and_time(time))
}

/// Build the duty log for day `day_index` of `plan`.
///
/// Days at or past [`TripPlan::day_count`] come back empty.
///
/// # Errors
/// Returns [`LogError::InvalidSegment`] when any segment has a non-positive or
/// non-finite duration, and [`LogError::TimestampOverflow`] when the day falls
/// outside chrono's calendar.
#[expect(clippy::float_arithmetic, reason = "accumulates elapsed segment hours")]
pub fn build_daily_log(
    plan: &TripPlan,
    day_index: u32,
    anchor: NaiveDateTime,
) -> Result<DailyLog, LogError> {
    check_segments(plan)?;
    let overflow = LogError::TimestampOverflow { day_index };
    let day_start = TimeDelta::try_days(i64::from(day_index))
        .and_then(|offset| anchor.checked_add_signed(offset))
        .ok_or_else(|| overflow.clone())?;
    let day_end = day_start
        .checked_add_signed(TimeDelta::hours(24))
        .ok_or(overflow)?;

    let window_start = i64::from(day_index) * MILLIS_PER_DAY;
    let window_end = window_start + MILLIS_PER_DAY;
    let stamp = |millis: i64| day_start + TimeDelta::milliseconds(millis - window_start);

    let mut entries: Vec<LogEntry> = Vec::new();
    let mut elapsed = 0.0;
    for segment in plan.segments() {
        let segment_start = hours_to_millis(elapsed);
        elapsed += segment.duration_hours();
        let segment_end = hours_to_millis(elapsed);
        if segment_end <= window_start {
            continue;
        }
        if segment_start >= window_end {
            break;
        }
        let start = stamp(segment_start.max(window_start));
        let end = stamp(segment_end.min(window_end));
        if end > start {
            entries.push(LogEntry {
                status: classify(segment.kind()),
                start,
                end,
                location: segment.origin().label().to_owned(),
            });
        }
    }

    if let Some(last) = entries.last()
        && last.end < day_end
    {
        let padding = LogEntry {
            status: DutyStatus::OffDuty,
            start: last.end,
            end: day_end,
            location: last.location.clone(),
        };
        entries.push(padding);
    }

    debug!("day {day_index}: {} log entries", entries.len());
    Ok(DailyLog::new(day_start.date(), entries))
}

/// Build the logs for every day the plan spans, in order.
///
/// # Errors
/// See [`build_daily_log`].
pub fn build_trip_logs(plan: &TripPlan, anchor: NaiveDateTime) -> Result<Vec<DailyLog>, LogError> {
    (0..plan.day_count())
        .map(|day_index| build_daily_log(plan, day_index, anchor))
        .collect()
}

fn check_segments(plan: &TripPlan) -> Result<(), LogError> {
    match plan.segments().iter().position(|segment| {
        let hours = segment.duration_hours();
        !hours.is_finite() || hours <= 0.0
    }) {
        Some(index) => Err(LogError::InvalidSegment { index }),
        None => Ok(()),
    }
}
