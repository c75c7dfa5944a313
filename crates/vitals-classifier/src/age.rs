//! Age grouping

use crate::error::ClassifyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Age group conditioning every vital's cut-points
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    /// 18 years and younger
    Young,
    /// 19 through 65
    Adult,
    /// Over 65
    Old,
}

impl AgeGroup {
    /// Group an age in years.
    ///
    /// The boundary at 18 is closed on the young side: 18 is Young, 65 is
    /// Adult. Negative ages are rejected and leave the observation
    /// unclassifiable for every age-dependent vital.
    pub fn from_age(age: i64) -> Result<Self, ClassifyError> {
        if age < 0 {
            let err = ClassifyError::NegativeAge(age);
            warn!("{}", err);
            return Err(err);
        }
        Ok(if age <= 18 {
            AgeGroup::Young
        } else if age > 65 {
            AgeGroup::Old
        } else {
            AgeGroup::Adult
        })
    }

    /// Short name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Young => "young",
            AgeGroup::Adult => "adult",
            AgeGroup::Old => "old",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_group_boundaries() {
        assert_eq!(AgeGroup::from_age(0).unwrap(), AgeGroup::Young);
        assert_eq!(AgeGroup::from_age(18).unwrap(), AgeGroup::Young);
        assert_eq!(AgeGroup::from_age(19).unwrap(), AgeGroup::Adult);
        assert_eq!(AgeGroup::from_age(40).unwrap(), AgeGroup::Adult);
        assert_eq!(AgeGroup::from_age(65).unwrap(), AgeGroup::Adult);
        assert_eq!(AgeGroup::from_age(66).unwrap(), AgeGroup::Old);
    }

    #[test]
    fn test_negative_age_rejected() {
        assert_eq!(AgeGroup::from_age(-1), Err(ClassifyError::NegativeAge(-1)));
        assert_eq!(
            AgeGroup::from_age(-40),
            Err(ClassifyError::NegativeAge(-40))
        );
    }

    proptest! {
        #[test]
        fn test_grouping_is_total_over_nonnegative_ages(age in 0i64..150) {
            prop_assert!(AgeGroup::from_age(age).is_ok());
        }

        #[test]
        fn test_grouping_is_monotone_in_age(age in 0i64..149) {
            let younger = AgeGroup::from_age(age).unwrap();
            let older = AgeGroup::from_age(age + 1).unwrap();
            prop_assert!(younger <= older);
        }
    }
}
