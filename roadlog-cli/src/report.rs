//! Plain-text trip report.
//!
//! A header summarising the trip is followed by one table per day listing
//! each duty entry and the day's per-status totals.

use std::fmt;

use roadlog_core::{DailyLog, DutyStatus, TripPlan};

/// Borrowed view of a planned trip, rendered through [`fmt::Display`].
pub(crate) struct TripReport<'a> {
    pub(crate) from: &'a str,
    pub(crate) to: &'a str,
    pub(crate) plan: &'a TripPlan,
    pub(crate) logs: &'a [DailyLog],
}

impl fmt::Display for TripReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trip Report")?;
        if let Some(first) = self.logs.first() {
            writeln!(f, "Date: {}", first.date.format("%b %d, %Y"))?;
        }
        writeln!(f, "From: {}", self.from)?;
        writeln!(f, "To: {}", self.to)?;
        writeln!(f, "Distance: {:.0} miles", self.plan.total_distance_miles())?;
        writeln!(f, "Duration: {:.0} hours", self.plan.total_duration_hours())?;
        writeln!(
            f,
            "Breaks: {}  Rests: {}",
            self.plan.required_breaks(),
            self.plan.required_rests()
        )?;
        for log in self.logs {
            writeln!(f)?;
            write_day(f, log)?;
        }
        Ok(())
    }
}

fn write_day(f: &mut fmt::Formatter<'_>, log: &DailyLog) -> fmt::Result {
    writeln!(f, "Daily Log - {}", log.date.format("%b %d, %Y"))?;
    writeln!(f, "{:<7}{:<7}{:<10}Location", "Start", "End", "Status")?;
    for entry in &log.entries {
        writeln!(
            f,
            "{:<7}{:<7}{:<10}{}",
            entry.start.format("%H:%M").to_string(),
            entry.end.format("%H:%M").to_string(),
            entry.status.to_string(),
            entry.location
        )?;
    }
    write!(f, "Total Hours:")?;
    for status in DutyStatus::ALL {
        write!(f, "  {status}: {:.1}h", log.totals.get(status))?;
    }
    writeln!(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadlog_core::test_support::{fixed_anchor, fixed_trip};
    use roadlog_core::{Location, build_trip_logs, plan_trip};
    use rstest::rstest;

    #[rstest]
    fn report_lists_header_entries_and_totals() {
        let (current, pickup, dropoff) = fixed_trip(500.0);
        let plan = plan_trip(&current, &pickup, &dropoff, 0.0).expect("plan");
        let logs = build_trip_logs(&plan, fixed_anchor()).expect("logs");
        let report = TripReport {
            from: pickup.label(),
            to: dropoff.label(),
            plan: &plan,
            logs: &logs,
        }
        .to_string();

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.first(), Some(&"Trip Report"));
        assert!(report.contains("Date: Mar 01, 2025"));
        assert!(report.contains("From: Pickup Dock"));
        assert!(report.contains("To: Dropoff Yard"));
        assert!(report.contains("Distance: 500 miles"));
        assert!(report.contains("Duration: 12 hours"));
        assert!(report.contains("Breaks: 1  Rests: 0"));
        assert!(report.contains("Daily Log - Mar 01, 2025"));
        assert!(report.contains("01:00  02:00  On Duty   Pickup Dock"));
        assert!(report.contains(
            "Total Hours:  Off Duty: 12.9h  Sleeper: 0.0h  Driving: 9.1h  On Duty: 2.0h"
        ));
    }

    #[rstest]
    fn blank_addresses_read_as_unknown() {
        let nowhere = Location::unlabelled(0.0, 0.0).expect("location");
        let plan = plan_trip(&nowhere, &nowhere, &nowhere, 0.0).expect("plan");
        let logs = build_trip_logs(&plan, fixed_anchor()).expect("logs");
        let report = TripReport {
            from: nowhere.label(),
            to: nowhere.label(),
            plan: &plan,
            logs: &logs,
        }
        .to_string();
        assert!(report.contains("From: Unknown location"));
        assert!(report.contains("On Duty   Unknown location"));
    }
}
