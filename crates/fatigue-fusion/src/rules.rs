//! Ordered fatigue decision table

use crate::state::FatigueState;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vitals_classifier::{HrBand, HrvBand, KssLevel, RrBand, Spo2Band};

/// Classified bands for one observation. `None` marks a band the
/// classification stage could not determine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalProfile {
    pub hr: Option<HrBand>,
    pub hrv: Option<HrvBand>,
    pub rr: Option<RrBand>,
    pub spo2: Option<Spo2Band>,
    pub kss: Option<KssLevel>,
}

impl VitalProfile {
    /// True when no band has been determined
    pub fn is_empty(&self) -> bool {
        self.hr.is_none()
            && self.hrv.is_none()
            && self.rr.is_none()
            && self.spo2.is_none()
            && self.kss.is_none()
    }
}

/// One row of the decision table.
///
/// A `None` field matches any profile value; a specified field matches only
/// that exact band and therefore never matches a profile field that is
/// still undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FatigueRule {
    pub hr: Option<HrBand>,
    pub hrv: Option<HrvBand>,
    pub rr: Option<RrBand>,
    pub spo2: Option<Spo2Band>,
    pub kss: Option<KssLevel>,
    pub outcome: FatigueState,
}

impl FatigueRule {
    /// Whether this rule matches the profile
    pub fn matches(&self, profile: &VitalProfile) -> bool {
        field_matches(self.hr, profile.hr)
            && field_matches(self.hrv, profile.hrv)
            && field_matches(self.rr, profile.rr)
            && field_matches(self.spo2, profile.spo2)
            && field_matches(self.kss, profile.kss)
    }
}

fn field_matches<T: PartialEq + Copy>(pattern: Option<T>, value: Option<T>) -> bool {
    match pattern {
        None => true,
        Some(wanted) => value == Some(wanted),
    }
}

/// The baseline decision table.
///
/// Order is part of the contract: rules are tried top to bottom and the
/// first match wins, so reordering changes behavior for any profile that
/// matches more than one row.
pub const FATIGUE_RULES: [FatigueRule; 8] = [
    FatigueRule {
        hr: Some(HrBand::Low),
        hrv: Some(HrvBand::Low),
        rr: Some(RrBand::Low),
        spo2: Some(Spo2Band::Low),
        kss: Some(KssLevel::Level7),
        outcome: FatigueState::Sleep,
    },
    FatigueRule {
        hr: Some(HrBand::High),
        hrv: Some(HrvBand::Low),
        rr: Some(RrBand::High),
        spo2: Some(Spo2Band::Low),
        kss: Some(KssLevel::Level7),
        outcome: FatigueState::Sleep,
    },
    FatigueRule {
        hr: Some(HrBand::High),
        hrv: Some(HrvBand::Low),
        rr: Some(RrBand::Low),
        spo2: Some(Spo2Band::Low),
        kss: Some(KssLevel::Level7),
        outcome: FatigueState::Sleep,
    },
    FatigueRule {
        hr: Some(HrBand::Low),
        hrv: Some(HrvBand::Low),
        rr: Some(RrBand::High),
        spo2: Some(Spo2Band::Low),
        kss: Some(KssLevel::Level7),
        outcome: FatigueState::Sleep,
    },
    FatigueRule {
        hr: Some(HrBand::Moderate),
        hrv: Some(HrvBand::Moderate),
        rr: Some(RrBand::Moderate),
        spo2: Some(Spo2Band::Normal),
        kss: Some(KssLevel::Level3),
        outcome: FatigueState::Awake,
    },
    FatigueRule {
        hr: Some(HrBand::Moderate),
        hrv: Some(HrvBand::High),
        rr: Some(RrBand::Moderate),
        spo2: Some(Spo2Band::Normal),
        kss: Some(KssLevel::Level3),
        outcome: FatigueState::DrowsinessSuspected,
    },
    FatigueRule {
        hr: Some(HrBand::High),
        hrv: Some(HrvBand::Low),
        rr: Some(RrBand::High),
        spo2: Some(Spo2Band::Normal),
        kss: Some(KssLevel::Level3),
        outcome: FatigueState::Awake,
    },
    FatigueRule {
        hr: Some(HrBand::Moderate),
        hrv: Some(HrvBand::Low),
        rr: Some(RrBand::High),
        spo2: Some(Spo2Band::Normal),
        kss: Some(KssLevel::Level3),
        outcome: FatigueState::Awake,
    },
];

/// First rule in `rules` matching the profile
pub fn first_match<'a>(
    rules: &'a [FatigueRule],
    profile: &VitalProfile,
) -> Option<&'a FatigueRule> {
    rules.iter().find(|rule| rule.matches(profile))
}

/// Fuse a profile into a fatigue state using the baseline table.
///
/// Profiles matched by no rule resolve to `Undefined`.
pub fn combine(profile: &VitalProfile) -> FatigueState {
    match first_match(&FATIGUE_RULES, profile) {
        Some(rule) => {
            debug!("Fatigue rule matched with outcome {}", rule.outcome.as_str());
            rule.outcome
        }
        None => FatigueState::Undefined,
    }
}
