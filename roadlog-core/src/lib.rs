//! Hours-of-service trip planning for commercial drivers.
//!
//! [`TripPlanner`] turns a current location, a pickup and a dropoff into a
//! [`TripPlan`]: an ordered itinerary of driving, loading, breaks, fuel stops
//! and rests that respects the 70-hour/8-day property-carrier rules.
//! [`build_daily_log`] slices that plan into 24-hour duty logs anchored at a
//! wall-clock start instant.
//!
//! The crate is pure computation. It performs no I/O, reads no clock and
//! installs no logger; diagnostics go through the `log` facade.
//!
//! # Examples
//! ```
//! use roadlog_core::{Location, build_trip_logs, plan_trip, trip_start_anchor};
//! use chrono::NaiveDate;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let current = Location::new(41.88, -87.63, "Chicago, IL")?;
//! let pickup = Location::new(41.88, -87.63, "Chicago, IL")?;
//! let dropoff = Location::new(39.77, -86.16, "Indianapolis, IN")?;
//!
//! let plan = plan_trip(&current, &pickup, &dropoff, 0.0)?;
//! let date = NaiveDate::from_ymd_opt(2025, 3, 1).ok_or("bad date")?;
//! let anchor = trip_start_anchor(date, 1).ok_or("bad hour")?;
//! let logs = build_trip_logs(&plan, anchor)?;
//! assert_eq!(logs.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod daily_log;
mod location;
mod plan;
mod planner;
mod policy;
mod request;
mod segment;
mod status;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use daily_log::{
    DEFAULT_START_HOUR, DailyLog, LogEntry, LogError, StatusTotals, build_daily_log,
    build_trip_logs, trip_start_anchor,
};
pub use location::{
    EARTH_RADIUS_MILES, Location, LocationError, UNKNOWN_LOCATION_LABEL, estimate_distance,
};
pub use plan::{HOURS_PER_DAY, TripPlan};
pub use planner::{InvalidInputError, LocationRole, PlanError, TripPlanner, plan_trip};
pub use policy::HosPolicy;
pub use request::TripRequest;
pub use segment::{Segment, SegmentKind};
pub use status::{DutyStatus, classify};
