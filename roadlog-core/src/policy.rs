//! Hours-of-service policy parameters consumed by the trip planner.

use crate::InvalidInputError;

/// Regulatory limits and fixed stop durations.
///
/// The defaults model a single property-carrying driver on the 70-hour/8-day
/// cycle. Durations and limits are in hours, distances in miles.
///
/// # Examples
/// ```
/// use roadlog_core::HosPolicy;
///
/// let policy = HosPolicy::default();
/// assert_eq!(policy.average_speed_mph, 55.0);
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HosPolicy {
    /// Straight-line speed used to turn distance into driving time.
    pub average_speed_mph: f64,
    /// Time spent loading at the pickup.
    pub loading_hours: f64,
    /// Time spent unloading at the dropoff.
    pub unloading_hours: f64,
    /// Continuous driving allowed before a break is due.
    pub max_driving_before_break_hours: f64,
    /// Driving allowed between rests.
    pub max_driving_hours: f64,
    /// On-duty time allowed between rests.
    pub max_on_duty_hours: f64,
    /// Length of a mandatory break.
    pub break_hours: f64,
    /// Length of a mandatory rest.
    pub rest_hours: f64,
    /// Driven miles between fuel stops.
    pub fuel_interval_miles: f64,
    /// Length of a fuel stop.
    pub fuel_stop_hours: f64,
    /// On-duty hours allowed in the rolling cycle.
    pub max_cycle_hours: f64,
}

impl Default for HosPolicy {
    fn default() -> Self {
        Self {
            average_speed_mph: 55.0,
            loading_hours: 1.0,
            unloading_hours: 1.0,
            max_driving_before_break_hours: 8.0,
            max_driving_hours: 11.0,
            max_on_duty_hours: 14.0,
            break_hours: 0.5,
            rest_hours: 10.0,
            fuel_interval_miles: 1000.0,
            fuel_stop_hours: 0.25,
            max_cycle_hours: 70.0,
        }
    }
}

impl HosPolicy {
    /// Check that every parameter is usable by the planner.
    ///
    /// Speed and stop durations must be finite and positive; limits must be
    /// finite and non-negative. A zero driving limit is accepted here and
    /// surfaces later as a stalled simulation.
    ///
    /// # Errors
    /// Returns [`InvalidInputError::InvalidPolicy`] naming the first bad field.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        let positive = [
            (self.average_speed_mph, "average_speed_mph must be positive"),
            (self.loading_hours, "loading_hours must be positive"),
            (self.unloading_hours, "unloading_hours must be positive"),
            (self.break_hours, "break_hours must be positive"),
            (self.rest_hours, "rest_hours must be positive"),
            (self.fuel_stop_hours, "fuel_stop_hours must be positive"),
        ];
        let non_negative = [
            (
                self.max_driving_before_break_hours,
                "max_driving_before_break_hours must not be negative",
            ),
            (self.max_driving_hours, "max_driving_hours must not be negative"),
            (self.max_on_duty_hours, "max_on_duty_hours must not be negative"),
            (self.fuel_interval_miles, "fuel_interval_miles must not be negative"),
            (self.max_cycle_hours, "max_cycle_hours must not be negative"),
        ];

        if let Some(&(_, reason)) = positive
            .iter()
            .find(|(value, _)| !value.is_finite() || *value <= 0.0)
        {
            return Err(InvalidInputError::InvalidPolicy { reason });
        }
        if let Some(&(_, reason)) = non_negative
            .iter()
            .find(|(value, _)| !value.is_finite() || *value < 0.0)
        {
            return Err(InvalidInputError::InvalidPolicy { reason });
        }
        Ok(())
    }
}
