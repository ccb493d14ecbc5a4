//! Facade crate for the roadlog trip planner.
//!
//! This crate re-exports the planning engine, the duty status classifier and
//! the daily log partitioner. Serde support is enabled by the default `serde`
//! feature.

#![forbid(unsafe_code)]

pub use roadlog_core::{
    DEFAULT_START_HOUR, DailyLog, DutyStatus, EARTH_RADIUS_MILES, HOURS_PER_DAY, HosPolicy,
    InvalidInputError, Location, LocationError, LocationRole, LogEntry, LogError, PlanError,
    Segment, SegmentKind, StatusTotals, TripPlan, TripPlanner, TripRequest,
    UNKNOWN_LOCATION_LABEL, build_daily_log, build_trip_logs, classify, estimate_distance,
    plan_trip, trip_start_anchor,
};
