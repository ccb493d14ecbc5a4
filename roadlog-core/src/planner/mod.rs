//! Hours-of-service trip simulation.
//!
//! The planner walks a trip from pickup to dropoff in driving increments,
//! inserting fuel stops, breaks and rests whenever a counter in the duty clock
//! reaches its policy limit. The result is a [`TripPlan`] whose segments can be
//! partitioned into daily logs.
//!
//! Routing is a straight line: every drive segment references the pickup and
//! dropoff endpoints, and every stop after loading is placed at the dropoff.

mod clock;
mod error;

use log::{debug, warn};

use crate::{HosPolicy, Location, Segment, SegmentKind, TripPlan, estimate_distance};

use clock::{DutyClock, reached};
pub use error::{InvalidInputError, LocationRole, PlanError};

/// Plans trips under a fixed [`HosPolicy`].
///
/// # Examples
/// ```
/// use roadlog_core::{HosPolicy, Location, TripPlanner};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let yard = Location::new(0.0, 0.0, "Yard")?;
/// let pickup = Location::new(0.0, 0.5, "Mill")?;
/// let dropoff = Location::new(0.0, 2.0, "Port")?;
/// let planner = TripPlanner::with_policy(HosPolicy::default());
/// let plan = planner.plan(&yard, &pickup, &dropoff, 12.0)?;
/// assert!(plan.total_distance_miles() > 100.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TripPlanner {
    policy: HosPolicy,
}

impl TripPlanner {
    /// Planner using the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Planner using `policy`.
    #[must_use]
    pub const fn with_policy(policy: HosPolicy) -> Self {
        Self { policy }
    }

    /// Policy this planner enforces.
    #[must_use]
    pub const fn policy(&self) -> &HosPolicy {
        &self.policy
    }

    /// Simulate a trip and return its itinerary.
    ///
    /// `cycle_hours_used` are on-duty hours already consumed in the current
    /// cycle; they seed the on-duty counter. An exhausted cycle forces a rest
    /// at `current` before loading.
    ///
    /// # Errors
    /// Returns [`PlanError::InvalidInput`] for bad coordinates, cycle hours
    /// outside `0..=max_cycle_hours` or an unusable policy, and
    /// [`PlanError::SimulationStalled`] if driving stops making progress.
    pub fn plan(
        &self,
        current: &Location,
        pickup: &Location,
        dropoff: &Location,
        cycle_hours_used: f64,
    ) -> Result<TripPlan, PlanError> {
        self.policy.validate()?;
        check_location(current, LocationRole::Current)?;
        check_location(pickup, LocationRole::Pickup)?;
        check_location(dropoff, LocationRole::Dropoff)?;
        let max = self.policy.max_cycle_hours;
        if !cycle_hours_used.is_finite() || !(0.0..=max).contains(&cycle_hours_used) {
            return Err(InvalidInputError::CycleHoursOutOfRange {
                value: cycle_hours_used,
                max,
            }
            .into());
        }

        let total_distance = estimate_distance(pickup, dropoff);
        let mut simulation = Simulation::new(&self.policy, cycle_hours_used);
        if reached(cycle_hours_used, max) {
            debug!("cycle exhausted at {cycle_hours_used} h; resting before pickup");
            simulation.rest(current);
        }
        simulation.work(SegmentKind::Load, pickup, self.policy.loading_hours);
        simulation.drive(pickup, dropoff, total_distance)?;
        simulation.work(SegmentKind::Unload, dropoff, self.policy.unloading_hours);
        Ok(simulation.finish(total_distance))
    }
}

/// Plan a trip under the default [`HosPolicy`].
///
/// # Errors
/// See [`TripPlanner::plan`].
pub fn plan_trip(
    current: &Location,
    pickup: &Location,
    dropoff: &Location,
    cycle_hours_used: f64,
) -> Result<TripPlan, PlanError> {
    TripPlanner::new().plan(current, pickup, dropoff, cycle_hours_used)
}

pub(crate) fn check_location(
    location: &Location,
    role: LocationRole,
) -> Result<(), InvalidInputError> {
    location
        .validate()
        .map_err(|source| InvalidInputError::InvalidLocation { role, source })
}

struct Simulation<'p> {
    policy: &'p HosPolicy,
    clock: DutyClock,
    segments: Vec<Segment>,
    total_duration: f64,
    required_breaks: u32,
    required_rests: u32,
}

#[expect(
    clippy::float_arithmetic,
    reason = "the simulation accumulates fractional hours and miles"
)]
impl<'p> Simulation<'p> {
    const fn new(policy: &'p HosPolicy, cycle_hours_used: f64) -> Self {
        Self {
            policy,
            clock: DutyClock::new(cycle_hours_used),
            segments: Vec::new(),
            total_duration: 0.0,
            required_breaks: 0,
            required_rests: 0,
        }
    }

    fn push(&mut self, segment: Segment) {
        self.total_duration += segment.duration_hours();
        self.segments.push(segment);
    }

    fn work(&mut self, kind: SegmentKind, at: &Location, hours: f64) {
        self.clock.record_work(hours);
        self.push(Segment::stop(kind, at, hours));
    }

    fn rest(&mut self, at: &Location) {
        self.push(Segment::stop(SegmentKind::Rest, at, self.policy.rest_hours));
        self.required_rests = self.required_rests.saturating_add(1);
        self.clock.take_rest();
    }

    fn take_break(&mut self, at: &Location) {
        self.push(Segment::stop(SegmentKind::Break, at, self.policy.break_hours));
        self.required_breaks = self.required_breaks.saturating_add(1);
        self.clock.take_break();
    }

    fn refuel(&mut self, at: &Location) {
        self.push(Segment::stop(SegmentKind::Fuel, at, self.policy.fuel_stop_hours));
        self.clock.refuel(self.policy);
    }

    fn drive(
        &mut self,
        pickup: &Location,
        dropoff: &Location,
        distance: f64,
    ) -> Result<(), PlanError> {
        let speed = self.policy.average_speed_mph;
        let mut remaining = distance;
        while remaining > 0.0 {
            let hours_to_go = remaining / speed;
            let available = self.clock.available_drive_hours(self.policy);
            let (hours, miles) = if hours_to_go <= available {
                (hours_to_go, remaining)
            } else {
                (available, available * speed)
            };
            if hours <= 0.0 || miles <= 0.0 {
                warn!("drive increment {hours} h made no progress with {remaining} mi left");
                return Err(PlanError::SimulationStalled {
                    remaining_miles: remaining,
                    drive_hours: hours,
                });
            }

            self.push(Segment::drive(pickup, dropoff, hours, miles));
            self.clock.record_drive(hours, miles);
            remaining = if miles >= remaining {
                0.0
            } else {
                remaining - miles
            };

            // Each rule appends its own stop; several may fire together.
            while self.clock.fuel_due(self.policy) {
                debug!("fuel stop after {:.1} mi", self.clock.fuel_miles);
                self.refuel(dropoff);
            }
            if self.clock.break_due(self.policy) {
                debug!("break after {:.2} h of driving", self.clock.driving_since_break);
                self.take_break(dropoff);
            }
            if self.clock.driving_rest_due(self.policy) {
                debug!("rest after {:.2} h of driving", self.clock.driving_since_rest);
                self.rest(dropoff);
            }
            if self.clock.on_duty_rest_due(self.policy) {
                debug!("rest after {:.2} h on duty", self.clock.on_duty);
                self.rest(dropoff);
            }
        }
        Ok(())
    }

    fn finish(self, total_distance: f64) -> TripPlan {
        debug!(
            "planned {} segments over {total_distance:.1} mi and {:.2} h",
            self.segments.len(),
            self.total_duration
        );
        TripPlan::new(
            self.segments,
            total_distance,
            self.total_duration,
            self.required_breaks,
            self.required_rests,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixed_trip, location_east_of};
    use rstest::rstest;

    fn kinds(plan: &TripPlan) -> Vec<SegmentKind> {
        plan.segments().iter().map(Segment::kind).collect()
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "compares floating hours and miles")]
    fn short_trip_needs_no_stops() {
        let (current, pickup, dropoff) = fixed_trip(110.0);
        let plan = plan_trip(&current, &pickup, &dropoff, 0.0).expect("plan");
        assert_eq!(
            kinds(&plan),
            vec![SegmentKind::Load, SegmentKind::Drive, SegmentKind::Unload]
        );
        assert!((plan.total_duration_hours() - 4.0).abs() < 1e-9);
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "compares floating hours and miles")]
    fn long_day_triggers_driving_rest_after_eleven_hours() {
        // 11 h of driving is 605 mi; push a little further.
        let (current, pickup, dropoff) = fixed_trip(700.0);
        let plan = plan_trip(&current, &pickup, &dropoff, 0.0).expect("plan");
        assert_eq!(
            kinds(&plan),
            vec![
                SegmentKind::Load,
                SegmentKind::Drive,
                SegmentKind::Break,
                SegmentKind::Drive,
                SegmentKind::Rest,
                SegmentKind::Drive,
                SegmentKind::Unload,
            ]
        );
        let drives: Vec<f64> = plan
            .segments()
            .iter()
            .filter(|segment| segment.is_drive())
            .map(Segment::duration_hours)
            .collect();
        assert!((drives[0] - 8.0).abs() < 1e-9);
        assert!((drives[1] - 3.0).abs() < 1e-9);
    }

    #[rstest]
    fn seeded_cycle_hours_trigger_on_duty_rest() {
        let (current, pickup, dropoff) = fixed_trip(200.0);
        let plan = plan_trip(&current, &pickup, &dropoff, 12.0).expect("plan");
        // 12 h used + 1 h loading + 3.6 h driving passes the 14 h window.
        assert_eq!(
            kinds(&plan),
            vec![
                SegmentKind::Load,
                SegmentKind::Drive,
                SegmentKind::Rest,
                SegmentKind::Unload,
            ]
        );
        assert_eq!(plan.required_rests(), 1);
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "compares floating hours and miles")]
    fn fuel_stop_follows_the_thousandth_mile() {
        let (current, pickup, dropoff) = fixed_trip(1200.0);
        let plan = plan_trip(&current, &pickup, &dropoff, 0.0).expect("plan");
        let fuel_stops = plan
            .segments()
            .iter()
            .filter(|segment| segment.kind() == SegmentKind::Fuel)
            .count();
        assert_eq!(fuel_stops, 1);
        let miles_before_fuel: f64 = plan
            .segments()
            .iter()
            .take_while(|segment| segment.kind() != SegmentKind::Fuel)
            .map(Segment::distance_miles)
            .sum();
        assert!(miles_before_fuel >= 1000.0 - 1e-6);
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "accumulates leg miles")]
    fn fuel_overshoot_counts_toward_the_next_fill() {
        // Legs alternate 440 and 165 mi. Carrying 45 mi past the first fill
        // and 255 mi past the second brings the third fill forward to 3025 mi.
        let (current, pickup, dropoff) = fixed_trip(3_100.0);
        let plan = plan_trip(&current, &pickup, &dropoff, 0.0).expect("plan");
        let mut driven = 0.0;
        let mut fills = Vec::new();
        for segment in plan.segments() {
            driven += segment.distance_miles();
            if segment.kind() == SegmentKind::Fuel {
                fills.push(driven);
            }
        }
        let expected = [1045.0, 2255.0, 3025.0];
        assert_eq!(fills.len(), expected.len(), "fills at {fills:?}");
        for (fill, mile) in fills.iter().zip(expected) {
            assert!((fill - mile).abs() < 1e-6, "fill at {fill}, expected {mile}");
        }
    }

    #[rstest]
    fn rejects_cycle_hours_above_limit() {
        let (current, pickup, dropoff) = fixed_trip(100.0);
        let err = plan_trip(&current, &pickup, &dropoff, 70.5).expect_err("out of range");
        assert!(matches!(
            err,
            PlanError::InvalidInput(InvalidInputError::CycleHoursOutOfRange { .. })
        ));
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    fn rejects_invalid_cycle_hours(#[case] hours: f64) {
        let (current, pickup, dropoff) = fixed_trip(100.0);
        assert!(plan_trip(&current, &pickup, &dropoff, hours).is_err());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn rejects_decoded_location_out_of_range() {
        let (current, pickup, _) = fixed_trip(100.0);
        let dropoff: Location =
            serde_json::from_str(r#"{"lat": 95.0, "lng": 0.0, "address": "Nowhere"}"#)
                .expect("decode location");
        let err = plan_trip(&current, &pickup, &dropoff, 0.0).expect_err("invalid dropoff");
        assert!(matches!(
            err,
            PlanError::InvalidInput(InvalidInputError::InvalidLocation {
                role: LocationRole::Dropoff,
                ..
            })
        ));
    }

    #[rstest]
    #[expect(clippy::float_arithmetic, reason = "compares floating hours and miles")]
    fn zero_driving_limit_stalls_instead_of_truncating() {
        let policy = HosPolicy {
            max_driving_before_break_hours: 0.0,
            ..HosPolicy::default()
        };
        let (current, pickup, dropoff) = fixed_trip(100.0);
        let err = TripPlanner::with_policy(policy)
            .plan(&current, &pickup, &dropoff, 0.0)
            .expect_err("stalled simulation");
        match err {
            PlanError::SimulationStalled {
                remaining_miles,
                drive_hours,
            } => {
                assert!((remaining_miles - 100.0).abs() < 1e-6);
                assert!(drive_hours <= 0.0);
            }
            other => panic!("expected SimulationStalled, found {other:?}"),
        }
    }

    #[rstest]
    fn drive_segments_reference_trip_endpoints() {
        let (current, pickup, _) = fixed_trip(0.0);
        let dropoff = location_east_of(&pickup, 900.0, "Dropoff");
        let plan = plan_trip(&current, &pickup, &dropoff, 0.0).expect("plan");
        for segment in plan.segments().iter().filter(|segment| segment.is_drive()) {
            assert_eq!(segment.origin(), &pickup);
            assert_eq!(segment.destination(), &dropoff);
        }
    }
}
