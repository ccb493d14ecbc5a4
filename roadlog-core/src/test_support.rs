//! Deterministic trip fixtures shared by unit, behaviour and property tests.
//!
//! Points are laid out along the equator, where the haversine distance is
//! exactly the arc length, so a requested mileage is reproduced to within
//! floating-point noise.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{EARTH_RADIUS_MILES, Location, trip_start_anchor};

/// Location `miles` due east of `origin` along its parallel.
///
/// Exact only for origins on the equator.
///
/// # Panics
/// Panics when the resulting longitude is outside `-180..=180`.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "converts arc length to degrees")]
#[expect(clippy::expect_used, reason = "fixtures fail fast on bad input")]
pub fn location_east_of(origin: &Location, miles: f64, address: &str) -> Location {
    let delta = (miles / EARTH_RADIUS_MILES).to_degrees();
    Location::new(origin.lat(), origin.lng() + delta, address)
        .expect("fixture location should stay within range")
}

/// Current, pickup and dropoff locations with `miles` between pickup and
/// dropoff.
///
/// # Panics
/// Panics when `miles` is too long to fit along the equator.
#[must_use]
#[expect(clippy::expect_used, reason = "fixtures fail fast on bad input")]
pub fn fixed_trip(miles: f64) -> (Location, Location, Location) {
    let current = Location::new(0.0, -10.0, "Home Terminal").expect("valid fixture");
    let pickup = Location::new(0.0, -5.0, "Pickup Dock").expect("valid fixture");
    let dropoff = location_east_of(&pickup, miles, "Dropoff Yard");
    (current, pickup, dropoff)
}

/// Fixed trip-start anchor: 1 March 2025 at 01:00.
///
/// # Panics
/// Never; the date is a constant.
#[must_use]
#[expect(clippy::expect_used, reason = "constant date is always valid")]
pub fn fixed_anchor() -> NaiveDateTime {
    let date = NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date");
    trip_start_anchor(date, crate::DEFAULT_START_HOUR).expect("valid start hour")
}
