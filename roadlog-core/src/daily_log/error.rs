use thiserror::Error;

/// Errors returned while partitioning a plan into daily logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
    /// A segment's duration was not a positive, finite number of hours.
    ///
    /// Plans built by the planner never trip this; decoded plans can.
    #[error("segment {index} has a non-positive or non-finite duration")]
    InvalidSegment {
        /// Position of the segment in the plan.
        index: usize,
    },
    /// The day's timestamps fell outside the representable calendar.
    #[error("timestamps for day {day_index} overflow the calendar")]
    TimestampOverflow {
        /// Requested day index.
        day_index: u32,
    },
}
