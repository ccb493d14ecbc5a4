//! Itinerary segments: the atomic steps of a planned trip.

use std::fmt;

use crate::Location;

/// What a driver is doing during a [`Segment`].
///
/// Serialised kinds are lower-case (`"drive"`, `"load"`, ...). Unknown kinds
/// decode to [`SegmentKind::Other`] rather than failing, so plans written by
/// newer producers still partition into logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase", from = "String")
)]
pub enum SegmentKind {
    /// Moving the truck towards the dropoff.
    Drive,
    /// Loading freight at the pickup.
    Load,
    /// Unloading freight at the dropoff.
    Unload,
    /// Mandatory short break.
    Break,
    /// Mandatory rest period.
    Rest,
    /// Refuelling stop.
    Fuel,
    /// A kind this version does not recognise.
    Other,
}

impl SegmentKind {
    /// Lower-case wire name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Drive => "drive",
            Self::Load => "load",
            Self::Unload => "unload",
            Self::Break => "break",
            Self::Rest => "rest",
            Self::Fuel => "fuel",
            Self::Other => "other",
        }
    }
}

impl From<&str> for SegmentKind {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "drive" => Self::Drive,
            "load" => Self::Load,
            "unload" => Self::Unload,
            "break" => Self::Break,
            "rest" => Self::Rest,
            "fuel" => Self::Fuel,
            _ => Self::Other,
        }
    }
}

impl From<String> for SegmentKind {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of a trip itinerary.
///
/// Only [`SegmentKind::Drive`] segments cover distance; every other kind is a
/// stop at a single location.
///
/// # Examples
/// ```
/// use roadlog_core::{Location, Segment, SegmentKind};
///
/// let yard = Location::new(0.0, 0.0, "Yard").unwrap();
/// let stop = Segment::stop(SegmentKind::Break, &yard, 0.5);
/// assert_eq!(stop.distance_miles(), 0.0);
/// assert_eq!(stop.origin(), stop.destination());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    origin: Location,
    destination: Location,
    distance_miles: f64,
    duration_hours: f64,
    kind: SegmentKind,
}

impl Segment {
    /// A driving segment covering `distance_miles` in `duration_hours`.
    #[must_use]
    pub fn drive(
        origin: &Location,
        destination: &Location,
        duration_hours: f64,
        distance_miles: f64,
    ) -> Self {
        Self {
            origin: origin.clone(),
            destination: destination.clone(),
            distance_miles,
            duration_hours,
            kind: SegmentKind::Drive,
        }
    }

    /// A zero-distance stop of `kind` at `at`.
    #[must_use]
    pub fn stop(kind: SegmentKind, at: &Location, duration_hours: f64) -> Self {
        Self {
            origin: at.clone(),
            destination: at.clone(),
            distance_miles: 0.0,
            duration_hours,
            kind,
        }
    }

    /// Where the segment starts.
    #[must_use]
    pub const fn origin(&self) -> &Location {
        &self.origin
    }

    /// Where the segment ends.
    #[must_use]
    pub const fn destination(&self) -> &Location {
        &self.destination
    }

    /// Miles covered; zero for stops.
    #[must_use]
    pub const fn distance_miles(&self) -> f64 {
        self.distance_miles
    }

    /// Length of the segment in hours.
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Activity performed during the segment.
    #[must_use]
    pub const fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Whether this is a driving segment.
    #[must_use]
    pub fn is_drive(&self) -> bool {
        self.kind == SegmentKind::Drive
    }
}
