//! The ordered itinerary produced by the trip planner.

use geo::{BoundingRect, Coord, LineString, Rect};

use crate::{Segment, SegmentKind};

/// Hours in one calendar day of logs.
pub const HOURS_PER_DAY: f64 = 24.0;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Milliseconds in one calendar day of logs.
pub(crate) const MILLIS_PER_DAY: i64 = 86_400_000;

/// Elapsed trip hours on the whole-millisecond timeline logs are stamped on.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    reason = "elapsed hours round to whole milliseconds; out-of-range values saturate"
)]
pub(crate) fn hours_to_millis(hours: f64) -> i64 {
    (hours * MILLIS_PER_HOUR).round() as i64
}

/// An immutable, ordered itinerary with summary counters.
///
/// Plans come from [`TripPlanner`](crate::TripPlanner) or from
/// [`TripPlan::from_segments`], which derives every counter from the segments
/// so the totals always agree with them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripPlan {
    segments: Vec<Segment>,
    total_distance_miles: f64,
    total_duration_hours: f64,
    required_breaks: u32,
    required_rests: u32,
}

impl TripPlan {
    pub(crate) const fn new(
        segments: Vec<Segment>,
        total_distance_miles: f64,
        total_duration_hours: f64,
        required_breaks: u32,
        required_rests: u32,
    ) -> Self {
        Self {
            segments,
            total_distance_miles,
            total_duration_hours,
            required_breaks,
            required_rests,
        }
    }

    /// Build a plan from segments, summing distance and duration and counting
    /// breaks and rests.
    ///
    /// # Examples
    /// ```
    /// use roadlog_core::{Location, Segment, SegmentKind, TripPlan};
    ///
    /// let dock = Location::new(0.0, 0.0, "Dock 4").unwrap();
    /// let plan = TripPlan::from_segments(vec![
    ///     Segment::stop(SegmentKind::Load, &dock, 1.0),
    ///     Segment::stop(SegmentKind::Rest, &dock, 10.0),
    /// ]);
    /// assert_eq!(plan.total_duration_hours(), 11.0);
    /// assert_eq!(plan.required_rests(), 1);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "plan totals are sums of segment hours and miles"
    )]
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        let total_distance_miles = segments
            .iter()
            .filter(|segment| segment.is_drive())
            .map(Segment::distance_miles)
            .sum();
        let total_duration_hours = segments.iter().map(Segment::duration_hours).sum();
        let required_breaks = count_kind(&segments, SegmentKind::Break);
        let required_rests = count_kind(&segments, SegmentKind::Rest);
        Self::new(
            segments,
            total_distance_miles,
            total_duration_hours,
            required_breaks,
            required_rests,
        )
    }

    /// Segments in itinerary order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Great-circle miles from pickup to dropoff.
    #[must_use]
    pub const fn total_distance_miles(&self) -> f64 {
        self.total_distance_miles
    }

    /// Sum of all segment durations in hours.
    #[must_use]
    pub const fn total_duration_hours(&self) -> f64 {
        self.total_duration_hours
    }

    /// Number of break segments.
    #[must_use]
    pub const fn required_breaks(&self) -> u32 {
        self.required_breaks
    }

    /// Number of rest segments.
    #[must_use]
    pub const fn required_rests(&self) -> u32 {
        self.required_rests
    }

    /// Hours spent driving.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "sums drive segment hours")]
    pub fn driving_hours(&self) -> f64 {
        self.segments
            .iter()
            .filter(|segment| segment.is_drive())
            .map(Segment::duration_hours)
            .sum()
    }

    /// Number of calendar days of logs the plan spans.
    ///
    /// Measured on the millisecond timeline the daily logs use, so a tail
    /// shorter than half a millisecond never opens an empty day.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "accumulates segment hours")]
    pub fn day_count(&self) -> u32 {
        let elapsed = self
            .segments
            .iter()
            .fold(0.0, |elapsed, segment| elapsed + segment.duration_hours());
        if !elapsed.is_finite() || elapsed <= 0.0 {
            return 0;
        }
        let millis = u64::try_from(hours_to_millis(elapsed)).unwrap_or(0);
        let per_day = MILLIS_PER_DAY.unsigned_abs();
        u32::try_from(millis.div_ceil(per_day)).unwrap_or(u32::MAX)
    }

    /// Ordered endpoints of the itinerary for map rendering.
    ///
    /// Consecutive duplicate points are collapsed, so stops do not add
    /// vertices.
    #[must_use]
    pub fn waypoints(&self) -> LineString<f64> {
        let mut points: Vec<Coord<f64>> = Vec::with_capacity(self.segments.len() + 1);
        for segment in &self.segments {
            for coord in [segment.origin().coord(), segment.destination().coord()] {
                if points.last() != Some(&coord) {
                    points.push(coord);
                }
            }
        }
        LineString::new(points)
    }

    /// Bounding box of every point the itinerary touches.
    #[must_use]
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        self.waypoints().bounding_rect()
    }
}

fn count_kind(segments: &[Segment], kind: SegmentKind) -> u32 {
    let count = segments.iter().filter(|segment| segment.kind() == kind).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}
