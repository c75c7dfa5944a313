//! Observation record and lenient field parsing

use serde::{Deserialize, Serialize};

/// A single occupant observation, one per input row.
///
/// Every field except `index` is optional. `None` is the absence marker: it
/// propagates through classification as an undefined value and must never be
/// coerced to zero. An observation is immutable once produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Zero-based row index, also used to name the emitted label artifact
    pub index: u64,
    /// Heart rate (bpm)
    pub hr: Option<i64>,
    /// Heart rate variability (ms)
    pub hrv: Option<i64>,
    /// Respiratory rate (breaths/min)
    pub rr: Option<i64>,
    /// Blood oxygen saturation (%)
    pub spo2: Option<i64>,
    /// Raw drowsiness score on the KSS-derived 1-4 scale
    pub drowsiness: Option<i64>,
    /// Age in years
    pub age: Option<i64>,
    /// Reported sex
    pub sex: Option<String>,
    /// Demographic descriptor
    pub demographic: Option<String>,
    /// Worn accessories (glasses, scarf, ...)
    pub accessories: Option<String>,
    /// Facial characteristics (beard, hair style, ...)
    pub face_characteristics: Option<String>,
}

impl Observation {
    /// Create an empty observation for the given row index
    pub fn new(index: u64) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    /// Names of the fields that are absent on this observation
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.hr.is_none() {
            missing.push("hr");
        }
        if self.hrv.is_none() {
            missing.push("hrv");
        }
        if self.rr.is_none() {
            missing.push("rr");
        }
        if self.spo2.is_none() {
            missing.push("spo2");
        }
        if self.drowsiness.is_none() {
            missing.push("drowsiness");
        }
        if self.age.is_none() {
            missing.push("age");
        }
        if self.sex.is_none() {
            missing.push("sex");
        }
        if self.demographic.is_none() {
            missing.push("demographic");
        }
        if self.accessories.is_none() {
            missing.push("accessories");
        }
        if self.face_characteristics.is_none() {
            missing.push("face_characteristics");
        }
        missing
    }
}

/// Parse a numeric cell leniently.
///
/// Integer text parses directly; real-valued text is truncated toward zero
/// (upstream recordings carry fractional drowsiness scores); anything else
/// is treated as absent.
pub(crate) fn parse_int_lenient(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value.trunc() as i64),
        _ => None,
    }
}

/// Parse a text cell, treating empty and whitespace-only values as absent
pub(crate) fn parse_text_lenient(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_text() {
        assert_eq!(parse_int_lenient("72"), Some(72));
        assert_eq!(parse_int_lenient(" 18 "), Some(18));
        assert_eq!(parse_int_lenient("-3"), Some(-3));
    }

    #[test]
    fn test_parse_fractional_truncates_toward_zero() {
        assert_eq!(parse_int_lenient("2.5"), Some(2));
        assert_eq!(parse_int_lenient("0.9"), Some(0));
        assert_eq!(parse_int_lenient("-1.7"), Some(-1));
    }

    #[test]
    fn test_parse_junk_is_absent() {
        assert_eq!(parse_int_lenient(""), None);
        assert_eq!(parse_int_lenient("   "), None);
        assert_eq!(parse_int_lenient("n/a"), None);
        assert_eq!(parse_int_lenient("NaN"), None);
        assert_eq!(parse_int_lenient("inf"), None);
    }

    #[test]
    fn test_parse_text_trims_and_rejects_empty() {
        assert_eq!(parse_text_lenient(" Woman "), Some("Woman".to_string()));
        assert_eq!(parse_text_lenient(""), None);
        assert_eq!(parse_text_lenient("   "), None);
    }

    #[test]
    fn test_missing_fields_reported_per_field() {
        let mut obs = Observation::new(0);
        obs.hr = Some(70);
        obs.sex = Some("Woman".to_string());
        let missing = obs.missing_fields();
        assert!(!missing.contains(&"hr"));
        assert!(!missing.contains(&"sex"));
        assert!(missing.contains(&"spo2"));
        assert!(missing.contains(&"demographic"));
    }

    #[test]
    fn test_fresh_observation_is_all_absent() {
        let obs = Observation::new(4);
        assert_eq!(obs.index, 4);
        assert_eq!(obs.missing_fields().len(), 10);
    }
}
