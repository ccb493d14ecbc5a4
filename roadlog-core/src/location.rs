//! Geographic positions and straight-line distance estimation.
//!
//! A [`Location`] pairs WGS84 decimal degrees with a free-text address label
//! supplied by the geocoder. Distances are great-circle estimates in miles;
//! they stand in for road distance and are never routed.

use std::fmt;

use geo::Coord;
use thiserror::Error;

/// Earth radius used by [`estimate_distance`], in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Label used in logs when a location has no address.
pub const UNKNOWN_LOCATION_LABEL: &str = "Unknown location";

/// A geocoded position with an optional address label.
///
/// # Examples
/// ```
/// use roadlog_core::Location;
///
/// # fn main() -> Result<(), roadlog_core::LocationError> {
/// let depot = Location::new(41.88, -87.63, "Chicago, IL")?;
/// assert_eq!(depot.address(), "Chicago, IL");
/// assert_eq!(depot.coord().x, -87.63);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    lat: f64,
    lng: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    address: String,
}

/// Errors returned when a coordinate cannot describe a point on Earth.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LocationError {
    /// Latitude or longitude was NaN or infinite.
    #[error("coordinates must be finite")]
    NonFiniteCoordinate,
    /// Latitude fell outside `-90.0..=90.0`.
    #[error("latitude {0} is outside -90..=90")]
    LatitudeOutOfRange(f64),
    /// Longitude fell outside `-180.0..=180.0`.
    #[error("longitude {0} is outside -180..=180")]
    LongitudeOutOfRange(f64),
}

impl Location {
    /// Validate and construct a [`Location`].
    ///
    /// # Errors
    /// Returns [`LocationError`] when either coordinate is not finite or lies
    /// outside its valid range.
    pub fn new(lat: f64, lng: f64, address: impl Into<String>) -> Result<Self, LocationError> {
        let location = Self {
            lat,
            lng,
            address: address.into(),
        };
        location.validate()?;
        Ok(location)
    }

    /// Construct a [`Location`] without an address label.
    ///
    /// # Errors
    /// See [`Location::new`].
    pub fn unlabelled(lat: f64, lng: f64) -> Result<Self, LocationError> {
        Self::new(lat, lng, String::new())
    }

    /// Check the coordinate ranges.
    ///
    /// Values decoded from JSON skip the constructor, so planners call this at
    /// their boundary.
    ///
    /// # Errors
    /// See [`Location::new`].
    pub fn validate(&self) -> Result<(), LocationError> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(LocationError::NonFiniteCoordinate);
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(LocationError::LatitudeOutOfRange(self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(LocationError::LongitudeOutOfRange(self.lng));
        }
        Ok(())
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }

    /// Free-text address, possibly empty.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Address for display, falling back to [`UNKNOWN_LOCATION_LABEL`].
    #[must_use]
    pub fn label(&self) -> &str {
        if self.address.trim().is_empty() {
            UNKNOWN_LOCATION_LABEL
        } else {
            &self.address
        }
    }

    /// Position as a `geo` coordinate with `x = longitude` and `y = latitude`.
    #[must_use]
    pub const fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.5}, {:.5})", self.label(), self.lat, self.lng)
    }
}

/// Great-circle distance between two locations in miles.
///
/// Uses the haversine formula with [`EARTH_RADIUS_MILES`]. Identical points
/// yield `0.0`. Inputs are not range-checked here.
///
/// # Examples
/// ```
/// use roadlog_core::{Location, estimate_distance};
///
/// let a = Location::unlabelled(0.0, 0.0).unwrap();
/// assert_eq!(estimate_distance(&a, &a), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "haversine distance is trigonometric float arithmetic"
)]
pub fn estimate_distance(origin: &Location, destination: &Location) -> f64 {
    let lat1 = origin.lat.to_radians();
    let lat2 = destination.lat.to_radians();
    let d_lat = (destination.lat - origin.lat).to_radians();
    let d_lng = (destination.lng - origin.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1.0 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_MILES * c
}
