//! Classification Error Types

use crate::age::AgeGroup;
use crate::bands::VitalKind;
use thiserror::Error;

/// Errors during vital classification.
///
/// These are data problems: the caller logs them, leaves the affected band
/// undefined and keeps processing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// Non-positive reading, treated as a sensor fault
    #[error("{kind} reading {value} is not a positive number")]
    InvalidReading { kind: VitalKind, value: i64 },

    /// Negative ages cannot be grouped
    #[error("Age {0} is negative and cannot be grouped")]
    NegativeAge(i64),

    /// Reading above the top cut-point of a vital whose scale is closed
    #[error("{kind} reading {value} is above the {group} rule range")]
    AboveRuleRange {
        kind: VitalKind,
        value: i64,
        group: AgeGroup,
    },
}

/// Errors validating a threshold table. These are configuration defects and
/// abort the run at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThresholdError {
    /// Cut-points must satisfy low < moderate < high
    #[error("{kind} cut-points for {group} are not strictly increasing: {low}/{moderate}/{high}")]
    NotIncreasing {
        kind: VitalKind,
        group: AgeGroup,
        low: i64,
        moderate: i64,
        high: i64,
    },

    /// The lowest cut-point must be positive
    #[error("{kind} cut-points for {group} must be positive, got low {low}")]
    NonPositive {
        kind: VitalKind,
        group: AgeGroup,
        low: i64,
    },
}
