//! Builds labels from classified working memory

use crate::label::{ActorLabel, Label, PromptDetails};
use crate::LabelError;
use assessment_engine::WorkingMemory;
use tracing::debug;
use uuid::Uuid;

/// Placeholder for geometry this pipeline does not track
const UNTRACKED_GEOMETRY: &str = "...";

/// Assembles one label per classified working memory
#[derive(Debug, Default)]
pub struct LabelEmitter;

impl LabelEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Assemble a label from the working memory.
    ///
    /// Actor attributes are required; an absent one fails this label
    /// only. Every label gets a fresh actor id and fresh provenance. An
    /// undefined eye state is a valid outcome and labels normally.
    pub fn emit(&self, memory: &WorkingMemory) -> Result<Label, LabelError> {
        let index = match &memory.observation {
            Some(obs) => obs.index,
            None => {
                return Err(LabelError::MissingAttribute {
                    index: 0,
                    field: "observation",
                })
            }
        };

        let actor = ActorLabel {
            actor_id: Uuid::new_v4(),
            eye_state: memory.actor.eye_state,
            age: required(index, "age", memory.actor.age)?,
            face_characteristics: required(
                index,
                "face_characteristics",
                memory.actor.face_characteristics.clone(),
            )?,
            sex: required(index, "sex", memory.actor.sex.clone())?,
            demographic: required(index, "demographic", memory.actor.demographic.clone())?,
            accessories: required(index, "accessories", memory.actor.accessories.clone())?,
            bounding_box: UNTRACKED_GEOMETRY.to_string(),
            bounding_polygon: UNTRACKED_GEOMETRY.to_string(),
        };
        debug!("Observation {}: labeled actor {}", index, actor.actor_id);

        Ok(Label {
            prompt_details: PromptDetails::randomized(),
            actor,
        })
    }
}

fn required<T>(index: u64, field: &'static str, value: Option<T>) -> Result<T, LabelError> {
    value.ok_or(LabelError::MissingAttribute { index, field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fatigue_fusion::{EyeState, FatigueState};
    use observation::Observation;

    fn classified_memory(index: u64) -> WorkingMemory {
        let mut memory = WorkingMemory::default();
        memory.observation = Some(Observation::new(index));
        memory.actor.age = Some(40);
        memory.actor.sex = Some("Woman".to_string());
        memory.actor.demographic = Some("European_descent".to_string());
        memory.actor.accessories = Some("Glasses".to_string());
        memory.actor.face_characteristics = Some("Long_hair".to_string());
        memory.actor.eye_state = EyeState::Blinking;
        memory.fatigue.state = FatigueState::Awake;
        memory
    }

    #[test]
    fn test_emit_populates_every_label_field() {
        let label = LabelEmitter::new().emit(&classified_memory(0)).unwrap();
        assert_eq!(label.actor.age, 40);
        assert_eq!(label.actor.sex, "Woman");
        assert_eq!(label.actor.demographic, "European_descent");
        assert_eq!(label.actor.accessories, "Glasses");
        assert_eq!(label.actor.face_characteristics, "Long_hair");
        assert_eq!(label.actor.eye_state, EyeState::Blinking);
        assert_eq!(label.actor.bounding_box, "...");
        assert_eq!(label.actor.bounding_polygon, "...");
        assert!((1..=1_000_000).contains(&label.prompt_details.seed));
        assert!((1..=100).contains(&label.prompt_details.steps));
    }

    #[test]
    fn test_each_label_gets_a_fresh_actor_id() {
        let emitter = LabelEmitter::new();
        let first = emitter.emit(&classified_memory(0)).unwrap();
        let second = emitter.emit(&classified_memory(1)).unwrap();
        assert_ne!(first.actor.actor_id, second.actor.actor_id);
    }

    #[test]
    fn test_missing_demographic_fails_the_label() {
        let mut memory = classified_memory(5);
        memory.actor.demographic = None;
        let err = LabelEmitter::new().emit(&memory).unwrap_err();
        match err {
            LabelError::MissingAttribute { index, field } => {
                assert_eq!(index, 5);
                assert_eq!(field, "demographic");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_undefined_eye_state_still_labels() {
        let mut memory = classified_memory(2);
        memory.actor.eye_state = EyeState::Undefined;
        memory.fatigue.state = FatigueState::Undefined;
        let label = LabelEmitter::new().emit(&memory).unwrap();
        assert_eq!(label.actor.eye_state, EyeState::Undefined);
    }
}
