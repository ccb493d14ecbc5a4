//! Duty statuses recorded in a driver's log.

use std::fmt;

use crate::SegmentKind;

/// The category assigned to a span of time in a daily log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum DutyStatus {
    /// Behind the wheel.
    Driving,
    /// Working but not driving (loading, unloading).
    OnDuty,
    /// Relieved of all duty.
    OffDuty,
    /// Resting in the sleeper berth.
    #[cfg_attr(feature = "serde", serde(rename = "sleeper"))]
    SleeperBerth,
}

impl DutyStatus {
    /// Every status, in log-grid order.
    pub const ALL: [Self; 4] = [Self::OffDuty, Self::SleeperBerth, Self::Driving, Self::OnDuty];
}

impl fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Driving => "Driving",
            Self::OnDuty => "On Duty",
            Self::OffDuty => "Off Duty",
            Self::SleeperBerth => "Sleeper",
        })
    }
}

/// Map a segment kind to the duty status it is logged under.
///
/// Fuel stops have no dedicated status and are logged off duty, as is any
/// unrecognised kind.
#[must_use]
pub const fn classify(kind: SegmentKind) -> DutyStatus {
    match kind {
        SegmentKind::Drive => DutyStatus::Driving,
        SegmentKind::Load | SegmentKind::Unload => DutyStatus::OnDuty,
        SegmentKind::Rest => DutyStatus::SleeperBerth,
        SegmentKind::Break | SegmentKind::Fuel | SegmentKind::Other => DutyStatus::OffDuty,
    }
}

impl From<SegmentKind> for DutyStatus {
    fn from(kind: SegmentKind) -> Self {
        classify(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SegmentKind::Drive, DutyStatus::Driving)]
    #[case(SegmentKind::Load, DutyStatus::OnDuty)]
    #[case(SegmentKind::Unload, DutyStatus::OnDuty)]
    #[case(SegmentKind::Break, DutyStatus::OffDuty)]
    #[case(SegmentKind::Rest, DutyStatus::SleeperBerth)]
    #[case(SegmentKind::Fuel, DutyStatus::OffDuty)]
    #[case(SegmentKind::Other, DutyStatus::OffDuty)]
    fn classifies_every_kind(#[case] kind: SegmentKind, #[case] expected: DutyStatus) {
        assert_eq!(classify(kind), expected);
        assert_eq!(DutyStatus::from(kind), expected);
    }

    #[rstest]
    fn grid_order_lists_each_status_once() {
        let kinds = [
            SegmentKind::Break,
            SegmentKind::Rest,
            SegmentKind::Drive,
            SegmentKind::Load,
        ];
        assert_eq!(DutyStatus::ALL, kinds.map(classify));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(DutyStatus::Driving, "\"driving\"")]
    #[case(DutyStatus::OnDuty, "\"on-duty\"")]
    #[case(DutyStatus::OffDuty, "\"off-duty\"")]
    #[case(DutyStatus::SleeperBerth, "\"sleeper\"")]
    fn serialises_log_wire_names(#[case] status: DutyStatus, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&status).expect("encode"), expected);
    }
}
