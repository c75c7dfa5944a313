//! Vitals Classification
//!
//! Age-conditioned threshold banding for occupant vital signs (heart rate,
//! heart rate variability, respiratory rate, blood oxygen saturation) plus
//! the age-independent drowsiness scale. Cut-points live in a threshold
//! table validated once at startup and shared immutably afterwards.

mod age;
mod bands;
mod classifier;
mod drowsiness;
mod error;
mod thresholds;

pub use age::AgeGroup;
pub use bands::{HrBand, HrvBand, RrBand, Spo2Band, VitalKind};
pub use classifier::BandClassifier;
pub use drowsiness::{classify_drowsiness, KssLevel};
pub use error::{ClassifyError, ThresholdError};
pub use thresholds::{CutPoints, ThresholdTable, VitalThresholds};
