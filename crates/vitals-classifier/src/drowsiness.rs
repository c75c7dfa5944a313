//! Drowsiness scale classification

use serde::{Deserialize, Serialize};

/// Drowsiness level on the KSS-derived scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum KssLevel {
    Level3,
    Level5,
    Level7,
    Level9,
}

impl KssLevel {
    /// Short name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            KssLevel::Level3 => "Level3",
            KssLevel::Level5 => "Level5",
            KssLevel::Level7 => "Level7",
            KssLevel::Level9 => "Level9",
        }
    }
}

/// Classify a raw drowsiness score.
///
/// The scale is age-independent and banded half-open over (0, 4]: scores in
/// (0,1] map to Level3, (1,2] to Level5, (2,3] to Level7 and (3,4] to
/// Level9. Anything outside the scale is undefined. Fractional raw scores
/// are truncated toward zero at the parsing boundary, so a recorded 2.5
/// arrives here as 2.
pub fn classify_drowsiness(score: i64) -> Option<KssLevel> {
    if score <= 0 || score > 4 {
        return None;
    }
    Some(match score {
        1 => KssLevel::Level3,
        2 => KssLevel::Level5,
        3 => KssLevel::Level7,
        _ => KssLevel::Level9,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_bands() {
        assert_eq!(classify_drowsiness(1), Some(KssLevel::Level3));
        assert_eq!(classify_drowsiness(2), Some(KssLevel::Level5));
        assert_eq!(classify_drowsiness(3), Some(KssLevel::Level7));
        assert_eq!(classify_drowsiness(4), Some(KssLevel::Level9));
    }

    #[test]
    fn test_out_of_scale_is_undefined() {
        assert_eq!(classify_drowsiness(0), None);
        assert_eq!(classify_drowsiness(-2), None);
        assert_eq!(classify_drowsiness(5), None);
        assert_eq!(classify_drowsiness(100), None);
    }
}
