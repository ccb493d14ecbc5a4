//! Planning requests as they arrive from forms and files.
//!
//! Locations may be unset; [`TripRequest::validate`] reports which one before
//! the planner is invoked.

use crate::planner::check_location;
use crate::{InvalidInputError, Location, LocationRole, PlanError, TripPlan, TripPlanner};

/// A trip request whose locations may not all be filled in yet.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripRequest {
    /// Where the driver is now.
    pub current_location: Option<Location>,
    /// Where the load is collected.
    pub pickup_location: Option<Location>,
    /// Where the load is delivered.
    pub dropoff_location: Option<Location>,
    /// On-duty hours already used in the current cycle.
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_cycle_hours: f64,
}

impl TripRequest {
    /// Request with every location set.
    #[must_use]
    pub const fn new(
        current: Location,
        pickup: Location,
        dropoff: Location,
        current_cycle_hours: f64,
    ) -> Self {
        Self {
            current_location: Some(current),
            pickup_location: Some(pickup),
            dropoff_location: Some(dropoff),
            current_cycle_hours,
        }
    }

    /// Check that every location is present and in range.
    ///
    /// # Errors
    /// Returns [`InvalidInputError::MissingLocation`] for the first unset
    /// location, or [`InvalidInputError::InvalidLocation`] when one is out of
    /// range.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        self.locations().map(|_| ())
    }

    /// Plan the trip under the default policy.
    ///
    /// # Errors
    /// See [`TripPlanner::plan`].
    pub fn plan(&self) -> Result<TripPlan, PlanError> {
        self.plan_with(&TripPlanner::new())
    }

    /// Plan the trip with `planner`.
    ///
    /// # Errors
    /// See [`TripPlanner::plan`].
    pub fn plan_with(&self, planner: &TripPlanner) -> Result<TripPlan, PlanError> {
        let (current, pickup, dropoff) = self.locations()?;
        planner.plan(current, pickup, dropoff, self.current_cycle_hours)
    }

    fn locations(&self) -> Result<(&Location, &Location, &Location), InvalidInputError> {
        let current = required(self.current_location.as_ref(), LocationRole::Current)?;
        let pickup = required(self.pickup_location.as_ref(), LocationRole::Pickup)?;
        let dropoff = required(self.dropoff_location.as_ref(), LocationRole::Dropoff)?;
        Ok((current, pickup, dropoff))
    }
}

fn required(
    location: Option<&Location>,
    role: LocationRole,
) -> Result<&Location, InvalidInputError> {
    let location = location.ok_or(InvalidInputError::MissingLocation { role })?;
    check_location(location, role)?;
    Ok(location)
}
