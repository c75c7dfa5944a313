//! Threshold tables conditioning bands on age group

use crate::age::AgeGroup;
use crate::bands::VitalKind;
use crate::error::ThresholdError;
use serde::{Deserialize, Serialize};

/// The three cut-points bounding a vital's bands.
///
/// Bands are half-open: the lowest band covers (0, low), the middle bands
/// [low, moderate) and [moderate, high), and the top band starts at high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutPoints {
    pub low: i64,
    pub moderate: i64,
    pub high: i64,
}

impl CutPoints {
    /// Create cut-points
    pub const fn new(low: i64, moderate: i64, high: i64) -> Self {
        Self {
            low,
            moderate,
            high,
        }
    }

    fn validate(&self, kind: VitalKind, group: AgeGroup) -> Result<(), ThresholdError> {
        if self.low <= 0 {
            return Err(ThresholdError::NonPositive {
                kind,
                group,
                low: self.low,
            });
        }
        if self.low >= self.moderate || self.moderate >= self.high {
            return Err(ThresholdError::NotIncreasing {
                kind,
                group,
                low: self.low,
                moderate: self.moderate,
                high: self.high,
            });
        }
        Ok(())
    }
}

/// Per-age-group cut-points for one vital
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalThresholds {
    pub young: CutPoints,
    pub adult: CutPoints,
    pub old: CutPoints,
}

impl VitalThresholds {
    /// Cut-points for an age group
    pub fn for_group(&self, group: AgeGroup) -> CutPoints {
        match group {
            AgeGroup::Young => self.young,
            AgeGroup::Adult => self.adult,
            AgeGroup::Old => self.old,
        }
    }

    fn validate(&self, kind: VitalKind) -> Result<(), ThresholdError> {
        self.young.validate(kind, AgeGroup::Young)?;
        self.adult.validate(kind, AgeGroup::Adult)?;
        self.old.validate(kind, AgeGroup::Old)
    }
}

/// Complete threshold table: one row per vital, one column per age group.
///
/// The table is complete by construction; `Default` carries the built-in
/// clinical cut-points and a settings file may override any subset of them.
/// Immutable once validated, shared across engines via `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdTable {
    pub hr: VitalThresholds,
    pub hrv: VitalThresholds,
    pub rr: VitalThresholds,
    pub spo2: VitalThresholds,
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self {
            hr: VitalThresholds {
                young: CutPoints::new(60, 70, 120),
                adult: CutPoints::new(50, 60, 110),
                old: CutPoints::new(50, 60, 100),
            },
            hrv: VitalThresholds {
                young: CutPoints::new(40, 60, 100),
                adult: CutPoints::new(30, 50, 100),
                old: CutPoints::new(20, 35, 60),
            },
            rr: VitalThresholds {
                young: CutPoints::new(10, 15, 25),
                adult: CutPoints::new(8, 12, 20),
                old: CutPoints::new(10, 12, 24),
            },
            spo2: VitalThresholds {
                young: CutPoints::new(90, 95, 100),
                adult: CutPoints::new(90, 95, 100),
                old: CutPoints::new(88, 93, 100),
            },
        }
    }
}

impl ThresholdTable {
    /// Thresholds for one vital
    pub fn for_kind(&self, kind: VitalKind) -> &VitalThresholds {
        match kind {
            VitalKind::Hr => &self.hr,
            VitalKind::Hrv => &self.hrv,
            VitalKind::Rr => &self.rr,
            VitalKind::Spo2 => &self.spo2,
        }
    }

    /// Cut-points for a (vital, age group) pair
    pub fn cut_points(&self, kind: VitalKind, group: AgeGroup) -> CutPoints {
        self.for_kind(kind).for_group(group)
    }

    /// Validate every row. A malformed table is a startup defect and the
    /// run must not proceed with it.
    pub fn validate(&self) -> Result<(), ThresholdError> {
        self.hr.validate(VitalKind::Hr)?;
        self.hrv.validate(VitalKind::Hrv)?;
        self.rr.validate(VitalKind::Rr)?;
        self.spo2.validate(VitalKind::Spo2)
    }
}
