//! Vital band taxonomies

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four classified vital signs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VitalKind {
    /// Heart rate (bpm)
    Hr,
    /// Heart rate variability (ms)
    Hrv,
    /// Respiratory rate (breaths/min)
    Rr,
    /// Blood oxygen saturation (%)
    Spo2,
}

impl VitalKind {
    /// Short name used in logs and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            VitalKind::Hr => "HR",
            VitalKind::Hrv => "HRV",
            VitalKind::Rr => "RR",
            VitalKind::Spo2 => "SpO2",
        }
    }
}

impl fmt::Display for VitalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heart rate bands, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HrBand {
    Low,
    SlightlyLow,
    Moderate,
    High,
}

/// Heart rate variability bands, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HrvBand {
    VeryLow,
    Low,
    Moderate,
    High,
}

/// Respiratory rate bands, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RrBand {
    VeryLow,
    Low,
    Moderate,
    High,
}

/// Oxygen saturation bands, lowest to highest. The scale is closed at the
/// top cut-point; readings above it fall outside the rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Spo2Band {
    Critical,
    Low,
    Normal,
}
