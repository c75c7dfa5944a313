//! Band classifier over an age-conditioned threshold table

use crate::age::AgeGroup;
use crate::bands::{HrBand, HrvBand, RrBand, Spo2Band, VitalKind};
use crate::error::ClassifyError;
use crate::thresholds::ThresholdTable;
use std::sync::Arc;
use tracing::warn;

/// Classifies raw vital readings into bands using age-conditioned
/// cut-points.
///
/// Cheap to clone; the table is shared immutably, so any number of engines
/// can classify against the same cut-points.
#[derive(Debug, Clone)]
pub struct BandClassifier {
    table: Arc<ThresholdTable>,
}

impl BandClassifier {
    /// Create a classifier over a validated threshold table
    pub fn new(table: Arc<ThresholdTable>) -> Self {
        Self { table }
    }

    fn invalid_reading(kind: VitalKind, value: i64) -> ClassifyError {
        let err = ClassifyError::InvalidReading { kind, value };
        warn!("{}", err);
        err
    }

    /// Band a heart rate reading
    pub fn classify_hr(&self, value: i64, group: AgeGroup) -> Result<HrBand, ClassifyError> {
        if value <= 0 {
            return Err(Self::invalid_reading(VitalKind::Hr, value));
        }
        let cuts = self.table.cut_points(VitalKind::Hr, group);
        Ok(if value < cuts.low {
            HrBand::Low
        } else if value < cuts.moderate {
            HrBand::SlightlyLow
        } else if value < cuts.high {
            HrBand::Moderate
        } else {
            HrBand::High
        })
    }

    /// Band a heart rate variability reading
    pub fn classify_hrv(&self, value: i64, group: AgeGroup) -> Result<HrvBand, ClassifyError> {
        if value <= 0 {
            return Err(Self::invalid_reading(VitalKind::Hrv, value));
        }
        let cuts = self.table.cut_points(VitalKind::Hrv, group);
        Ok(if value < cuts.low {
            HrvBand::VeryLow
        } else if value < cuts.moderate {
            HrvBand::Low
        } else if value < cuts.high {
            HrvBand::Moderate
        } else {
            HrvBand::High
        })
    }

    /// Band a respiratory rate reading
    pub fn classify_rr(&self, value: i64, group: AgeGroup) -> Result<RrBand, ClassifyError> {
        if value <= 0 {
            return Err(Self::invalid_reading(VitalKind::Rr, value));
        }
        let cuts = self.table.cut_points(VitalKind::Rr, group);
        Ok(if value < cuts.low {
            RrBand::VeryLow
        } else if value < cuts.moderate {
            RrBand::Low
        } else if value < cuts.high {
            RrBand::Moderate
        } else {
            RrBand::High
        })
    }

    /// Band an oxygen saturation reading.
    ///
    /// Unlike the other vitals, Normal is closed at the top cut-point.
    /// Readings above it have no band in the rule set and are reported
    /// rather than silently folded into Normal.
    pub fn classify_spo2(&self, value: i64, group: AgeGroup) -> Result<Spo2Band, ClassifyError> {
        if value <= 0 {
            return Err(Self::invalid_reading(VitalKind::Spo2, value));
        }
        let cuts = self.table.cut_points(VitalKind::Spo2, group);
        if value > cuts.high {
            let err = ClassifyError::AboveRuleRange {
                kind: VitalKind::Spo2,
                value,
                group,
            };
            warn!("{}", err);
            return Err(err);
        }
        Ok(if value < cuts.low {
            Spo2Band::Critical
        } else if value < cuts.moderate {
            Spo2Band::Low
        } else {
            Spo2Band::Normal
        })
    }
}

impl Default for BandClassifier {
    fn default() -> Self {
        Self::new(Arc::new(ThresholdTable::default()))
    }
}
