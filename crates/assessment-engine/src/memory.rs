//! Working memory shared by the engine stages

use fatigue_fusion::{EyeState, FatigueState, VitalProfile};
use observation::Observation;
use vitals_classifier::AgeGroup;

/// Demographic and appearance attributes copied from the observation,
/// plus the eye state derived from the fatigue outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorSlot {
    pub age: Option<i64>,
    pub sex: Option<String>,
    pub demographic: Option<String>,
    pub accessories: Option<String>,
    pub face_characteristics: Option<String>,
    pub eye_state: EyeState,
}

impl ActorSlot {
    pub fn clear(&mut self) {
        *self = ActorSlot::default();
    }

    pub fn is_clear(&self) -> bool {
        *self == ActorSlot::default()
    }
}

/// Raw age and its resolved group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeSlot {
    pub value: Option<i64>,
    pub group: Option<AgeGroup>,
}

impl AgeSlot {
    pub fn clear(&mut self) {
        *self = AgeSlot::default();
    }
}

/// Fused fatigue outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FatigueSlot {
    pub state: FatigueState,
}

impl FatigueSlot {
    pub fn clear(&mut self) {
        *self = FatigueSlot::default();
    }
}

/// Everything the engine derives from a single observation.
///
/// `reset()` returns every slot to its default so no value from one
/// observation can leak into the next pass.
#[derive(Debug, Clone, Default)]
pub struct WorkingMemory {
    pub observation: Option<Observation>,
    pub missing_fields: Vec<&'static str>,
    pub profile: VitalProfile,
    pub actor: ActorSlot,
    pub age: AgeSlot,
    pub fatigue: FatigueSlot,
}

impl WorkingMemory {
    pub fn reset(&mut self) {
        self.observation = None;
        self.missing_fields.clear();
        self.profile = VitalProfile::default();
        self.actor.clear();
        self.age.clear();
        self.fatigue.clear();
    }

    pub fn is_clear(&self) -> bool {
        self.observation.is_none()
            && self.missing_fields.is_empty()
            && self.profile.is_empty()
            && self.actor.is_clear()
            && self.age == AgeSlot::default()
            && self.fatigue == FatigueSlot::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitals_classifier::HrBand;

    #[test]
    fn test_fresh_memory_is_clear() {
        let memory = WorkingMemory::default();
        assert!(memory.is_clear());
    }

    #[test]
    fn test_reset_clears_every_slot() {
        let mut memory = WorkingMemory::default();
        memory.observation = Some(Observation::new(3));
        memory.missing_fields.push("spo2");
        memory.profile.hr = Some(HrBand::High);
        memory.actor.sex = Some("Woman".to_string());
        memory.actor.eye_state = EyeState::Blinking;
        memory.age.value = Some(40);
        memory.age.group = Some(AgeGroup::Adult);
        memory.fatigue.state = FatigueState::Awake;
        assert!(!memory.is_clear());

        memory.reset();
        assert!(memory.is_clear());
        assert_eq!(memory.actor.eye_state, EyeState::Undefined);
        assert_eq!(memory.fatigue.state, FatigueState::Undefined);
    }
}
