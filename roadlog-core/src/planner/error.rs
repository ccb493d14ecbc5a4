use std::fmt;

use thiserror::Error;

use crate::LocationError;

/// Which trip endpoint an input error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationRole {
    /// Where the driver is now.
    Current,
    /// Where the freight is collected.
    Pickup,
    /// Where the freight is delivered.
    Dropoff,
}

impl fmt::Display for LocationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Current => "current location",
            Self::Pickup => "pickup location",
            Self::Dropoff => "dropoff location",
        })
    }
}

/// Trip inputs the planner refuses to simulate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    /// A location was not supplied.
    #[error("{role} is missing")]
    MissingLocation {
        /// The absent endpoint.
        role: LocationRole,
    },
    /// A location had unusable coordinates.
    #[error("{role} is invalid: {source}")]
    InvalidLocation {
        /// The offending endpoint.
        role: LocationRole,
        /// Why the coordinates were rejected.
        #[source]
        source: LocationError,
    },
    /// Cycle hours were not within `0..=max`.
    #[error("cycle hours used {value} must be between 0 and {max}")]
    CycleHoursOutOfRange {
        /// Hours supplied by the caller.
        value: f64,
        /// Policy cycle limit.
        max: f64,
    },
    /// The hours-of-service policy cannot drive a simulation.
    #[error("invalid hours-of-service policy: {reason}")]
    InvalidPolicy {
        /// First rule the policy broke.
        reason: &'static str,
    },
}

/// Errors returned by [`TripPlanner::plan`](crate::TripPlanner::plan).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// The request was rejected before simulation.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    /// A driving increment made no progress while distance remained.
    #[error(
        "simulation stalled with {remaining_miles} miles remaining \
         (drive increment {drive_hours} h)"
    )]
    SimulationStalled {
        /// Miles still to cover when progress stopped.
        remaining_miles: f64,
        /// The non-positive increment that was computed.
        drive_hours: f64,
    },
}
