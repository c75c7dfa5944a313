//! Fatigue and eye state taxonomies

use serde::{Deserialize, Serialize};

/// Composite fatigue state of the occupant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FatigueState {
    Awake,
    Sleep,
    DrowsinessSuspected,
    /// Declared for custom rule sets; no baseline rule produces it
    Microsleep,
    #[default]
    Undefined,
}

impl FatigueState {
    /// Short name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            FatigueState::Awake => "Awake",
            FatigueState::Sleep => "Sleep",
            FatigueState::DrowsinessSuspected => "DrowsinessSuspected",
            FatigueState::Microsleep => "Microsleep",
            FatigueState::Undefined => "Undefined",
        }
    }
}

/// Eye state implied by the fatigue state, carried into the label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EyeState {
    Blinking,
    Sleeping,
    MicroSleeping,
    SlowClosure,
    #[default]
    Undefined,
}

impl EyeState {
    /// Short name used in logs and labels
    pub fn as_str(&self) -> &'static str {
        match self {
            EyeState::Blinking => "Blinking",
            EyeState::Sleeping => "Sleeping",
            EyeState::MicroSleeping => "MicroSleeping",
            EyeState::SlowClosure => "SlowClosure",
            EyeState::Undefined => "Undefined",
        }
    }
}

/// Derive the eye state implied by a fatigue state. Total and pure.
pub fn derive_eye_state(fatigue: FatigueState) -> EyeState {
    match fatigue {
        FatigueState::Awake => EyeState::Blinking,
        FatigueState::Sleep => EyeState::Sleeping,
        FatigueState::Microsleep => EyeState::MicroSleeping,
        FatigueState::DrowsinessSuspected => EyeState::SlowClosure,
        FatigueState::Undefined => EyeState::Undefined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eye_state_mapping_is_total() {
        assert_eq!(derive_eye_state(FatigueState::Awake), EyeState::Blinking);
        assert_eq!(derive_eye_state(FatigueState::Sleep), EyeState::Sleeping);
        assert_eq!(
            derive_eye_state(FatigueState::Microsleep),
            EyeState::MicroSleeping
        );
        assert_eq!(
            derive_eye_state(FatigueState::DrowsinessSuspected),
            EyeState::SlowClosure
        );
        assert_eq!(derive_eye_state(FatigueState::Undefined), EyeState::Undefined);
    }

    #[test]
    fn test_defaults_are_undefined() {
        assert_eq!(FatigueState::default(), FatigueState::Undefined);
        assert_eq!(EyeState::default(), EyeState::Undefined);
    }
}
