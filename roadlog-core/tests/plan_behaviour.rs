#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
#![expect(clippy::float_arithmetic, reason = "assertions compare hours and miles")]

//! Behavioural tests for the trip planner using rstest-bdd.
//!
//! Trips are laid out along the equator so the requested haul length is the
//! great-circle distance between pickup and dropoff.

use std::cell::{Cell, RefCell};

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use roadlog_core::test_support::fixed_trip;
use roadlog_core::{HosPolicy, PlanError, SegmentKind, TripPlan, TripPlanner};

const TOLERANCE: f64 = 1e-6;

/// World state for planning scenarios.
#[derive(Debug, Default)]
struct PlanWorld {
    miles: Cell<f64>,
    cycle_hours: Cell<f64>,
    policy: RefCell<HosPolicy>,
    outcome: RefCell<Option<Result<TripPlan, PlanError>>>,
}

impl PlanWorld {
    fn plan(&self) -> TripPlan {
        self.outcome
            .borrow()
            .as_ref()
            .expect("trip should have been planned")
            .clone()
            .expect("planning should succeed")
    }

    fn error(&self) -> PlanError {
        self.outcome
            .borrow()
            .as_ref()
            .expect("trip should have been planned")
            .clone()
            .expect_err("planning should fail")
    }
}

#[fixture]
fn world() -> PlanWorld {
    PlanWorld::default()
}

#[given("a haul of {miles:f64} miles")]
fn given_haul(world: &PlanWorld, miles: f64) {
    world.miles.set(miles);
}

#[given("{hours:f64} cycle hours already used")]
fn given_cycle_hours(world: &PlanWorld, hours: f64) {
    world.cycle_hours.set(hours);
}

#[given("a policy allowing no driving before a break")]
fn given_no_driving_policy(world: &PlanWorld) {
    world.policy.borrow_mut().max_driving_before_break_hours = 0.0;
}

#[when("the trip is planned")]
fn when_planned(world: &PlanWorld) {
    let (current, pickup, dropoff) = fixed_trip(world.miles.get());
    let planner = TripPlanner::with_policy(*world.policy.borrow());
    let outcome = planner.plan(&current, &pickup, &dropoff, world.cycle_hours.get());
    world.outcome.replace(Some(outcome));
}

#[then("the segments are {kinds}")]
fn then_segments_are(world: &PlanWorld, kinds: String) {
    let expected: Vec<SegmentKind> = kinds.split(',').map(|kind| kind.trim().into()).collect();
    let actual: Vec<SegmentKind> = world.plan().segments().iter().map(|s| s.kind()).collect();
    assert_eq!(actual, expected);
}

#[then("the plan requires {breaks:u32} breaks and {rests:u32} rests")]
fn then_requires(world: &PlanWorld, breaks: u32, rests: u32) {
    let plan = world.plan();
    assert_eq!(plan.required_breaks(), breaks);
    assert_eq!(plan.required_rests(), rests);
}

#[then("the plan requires at least {rests:u32} rests")]
fn then_requires_rests(world: &PlanWorld, rests: u32) {
    assert!(world.plan().required_rests() >= rests);
}

#[then("the total distance is {miles:f64} miles")]
fn then_total_distance(world: &PlanWorld, miles: f64) {
    let plan = world.plan();
    assert!(
        (plan.total_distance_miles() - miles).abs() < TOLERANCE,
        "total distance {} != {miles}",
        plan.total_distance_miles()
    );
}

#[then("the total duration is about {hours:f64} hours")]
fn then_total_duration(world: &PlanWorld, hours: f64) {
    let plan = world.plan();
    assert!(
        (plan.total_duration_hours() - hours).abs() < 0.01,
        "total duration {} is not about {hours}",
        plan.total_duration_hours()
    );
}

#[then("the plan starts with a rest of {hours:f64} hours followed by loading")]
fn then_starts_with_rest(world: &PlanWorld, hours: f64) {
    let plan = world.plan();
    let [first, second, ..] = plan.segments() else {
        panic!("plan should have at least two segments");
    };
    assert_eq!(first.kind(), SegmentKind::Rest);
    assert!((first.duration_hours() - hours).abs() < TOLERANCE);
    assert_eq!(second.kind(), SegmentKind::Load);
}

#[then("the request is rejected as invalid input")]
fn then_rejected(world: &PlanWorld) {
    assert!(matches!(world.error(), PlanError::InvalidInput(_)));
}

#[then("planning stalls with {miles:f64} miles remaining")]
fn then_stalls(world: &PlanWorld, miles: f64) {
    match world.error() {
        PlanError::SimulationStalled {
            remaining_miles, ..
        } => assert!((remaining_miles - miles).abs() < TOLERANCE),
        other => panic!("expected a stall, got {other:?}"),
    }
}

#[scenario(path = "tests/features/trip_plan.feature", index = 0)]
fn mid_length_haul(world: PlanWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/trip_plan.feature", index = 1)]
fn exhausted_cycle(world: PlanWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/trip_plan.feature", index = 2)]
fn zero_distance(world: PlanWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/trip_plan.feature", index = 3)]
fn cycle_hours_over_limit(world: PlanWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/trip_plan.feature", index = 4)]
fn stalled_policy(world: PlanWorld) {
    let _ = world;
}
