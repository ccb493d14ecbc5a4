//! Duty counters carried across the simulation loop.

use crate::HosPolicy;

/// Slack allowed when comparing an accumulated counter against its limit.
const THRESHOLD_TOLERANCE: f64 = 1e-9;

/// `true` once `value` has reached `limit`, ignoring rounding noise.
#[expect(clippy::float_arithmetic, reason = "tolerance comparison")]
pub(super) fn reached(value: f64, limit: f64) -> bool {
    value >= limit - THRESHOLD_TOLERANCE
}

/// Running totals that decide when the next stop is due.
///
/// `driving_since_break` is cleared by breaks and rests; `driving_since_rest`
/// and `on_duty` only by rests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct DutyClock {
    pub(super) driving_since_break: f64,
    pub(super) driving_since_rest: f64,
    pub(super) on_duty: f64,
    pub(super) fuel_miles: f64,
}

#[expect(
    clippy::float_arithmetic,
    reason = "duty counters accumulate fractional hours and miles"
)]
impl DutyClock {
    pub(super) const fn new(cycle_hours_used: f64) -> Self {
        Self {
            driving_since_break: 0.0,
            driving_since_rest: 0.0,
            on_duty: cycle_hours_used,
            fuel_miles: 0.0,
        }
    }

    /// Hours the driver may still drive before a break or rest is forced.
    pub(super) fn available_drive_hours(&self, policy: &HosPolicy) -> f64 {
        let before_break = policy.max_driving_before_break_hours - self.driving_since_break;
        let before_rest = policy.max_driving_hours - self.driving_since_rest;
        before_break.min(before_rest)
    }

    pub(super) fn record_work(&mut self, hours: f64) {
        self.on_duty += hours;
    }

    pub(super) fn record_drive(&mut self, hours: f64, miles: f64) {
        self.driving_since_break += hours;
        self.driving_since_rest += hours;
        self.on_duty += hours;
        self.fuel_miles += miles;
    }

    pub(super) fn fuel_due(&self, policy: &HosPolicy) -> bool {
        reached(self.fuel_miles, policy.fuel_interval_miles)
    }

    pub(super) fn break_due(&self, policy: &HosPolicy) -> bool {
        reached(self.driving_since_break, policy.max_driving_before_break_hours)
    }

    pub(super) fn driving_rest_due(&self, policy: &HosPolicy) -> bool {
        reached(self.driving_since_rest, policy.max_driving_hours)
    }

    pub(super) fn on_duty_rest_due(&self, policy: &HosPolicy) -> bool {
        reached(self.on_duty, policy.max_on_duty_hours)
    }

    /// Miles past the interval count toward the next fill.
    pub(super) fn refuel(&mut self, policy: &HosPolicy) {
        self.fuel_miles = (self.fuel_miles - policy.fuel_interval_miles).max(0.0);
    }

    pub(super) const fn take_break(&mut self) {
        self.driving_since_break = 0.0;
    }

    /// A rest starts a fresh duty period.
    pub(super) const fn take_rest(&mut self) {
        self.driving_since_break = 0.0;
        self.driving_since_rest = 0.0;
        self.on_duty = 0.0;
    }
}
