//! Engine lifecycle and the classification pass

use crate::memory::WorkingMemory;
use crate::EngineError;
use fatigue_fusion::{combine, derive_eye_state};
use observation::Observation;
use tracing::{debug, warn};
use vitals_classifier::{classify_drowsiness, AgeGroup, BandClassifier};

/// Lifecycle position of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Loaded,
    Classified,
    Emitted,
}

/// Runs the load -> classify -> emit -> reset cycle for one observation
/// at a time.
#[derive(Debug)]
pub struct AssessmentEngine {
    classifier: BandClassifier,
    memory: WorkingMemory,
    state: EngineState,
    passes: u64,
}

impl AssessmentEngine {
    pub fn new(classifier: BandClassifier) -> Self {
        Self {
            classifier,
            memory: WorkingMemory::default(),
            state: EngineState::Idle,
            passes: 0,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Read access to the working memory
    pub fn memory(&self) -> &WorkingMemory {
        &self.memory
    }

    /// Completed load/classify/emit/reset cycles
    pub fn passes(&self) -> u64 {
        self.passes
    }

    fn expect_state(
        &self,
        operation: &'static str,
        expected: EngineState,
    ) -> Result<(), EngineError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(EngineError::InvalidTransition {
                operation,
                expected,
                actual: self.state,
            })
        }
    }

    /// Place an observation into working memory.
    ///
    /// Only legal from `Idle`. Absent fields are recorded but do not
    /// block the pass; downstream slots for them stay undefined.
    pub fn load(&mut self, observation: Observation) -> Result<(), EngineError> {
        self.expect_state("load", EngineState::Idle)?;
        assert!(
            self.memory.is_clear(),
            "working memory must be clear before load; reset() was skipped or incomplete"
        );
        let missing = observation.missing_fields();
        if !missing.is_empty() {
            debug!(
                "Observation {} missing fields: {:?}",
                observation.index, missing
            );
        }
        self.memory.missing_fields = missing;
        self.memory.observation = Some(observation);
        self.state = EngineState::Loaded;
        Ok(())
    }

    /// Derive every working-memory slot from the loaded observation.
    ///
    /// Age resolves first because every vital band is conditioned on the
    /// age group; without a usable age the vitals stay unclassified. The
    /// drowsiness score and demographic attributes do not depend on age
    /// and are always processed.
    pub fn classify(&mut self) -> Result<(), EngineError> {
        self.expect_state("classify", EngineState::Loaded)?;
        let obs = self
            .memory
            .observation
            .as_ref()
            .expect("Loaded state always carries an observation");

        self.memory.age.value = obs.age;
        if let Some(age) = obs.age {
            match AgeGroup::from_age(age) {
                Ok(group) => self.memory.age.group = Some(group),
                Err(err) => debug!("Observation {}: {}", obs.index, err),
            }
        }

        self.memory.actor.age = obs.age;
        self.memory.actor.sex = obs.sex.clone();
        self.memory.actor.demographic = obs.demographic.clone();
        self.memory.actor.accessories = obs.accessories.clone();
        self.memory.actor.face_characteristics = obs.face_characteristics.clone();

        if let Some(group) = self.memory.age.group {
            if let Some(hr) = obs.hr {
                match self.classifier.classify_hr(hr, group) {
                    Ok(band) => self.memory.profile.hr = Some(band),
                    Err(err) => debug!("Observation {}: {}", obs.index, err),
                }
            }
            if let Some(hrv) = obs.hrv {
                match self.classifier.classify_hrv(hrv, group) {
                    Ok(band) => self.memory.profile.hrv = Some(band),
                    Err(err) => debug!("Observation {}: {}", obs.index, err),
                }
            }
            if let Some(rr) = obs.rr {
                match self.classifier.classify_rr(rr, group) {
                    Ok(band) => self.memory.profile.rr = Some(band),
                    Err(err) => debug!("Observation {}: {}", obs.index, err),
                }
            }
            if let Some(spo2) = obs.spo2 {
                match self.classifier.classify_spo2(spo2, group) {
                    Ok(band) => self.memory.profile.spo2 = Some(band),
                    Err(err) => debug!("Observation {}: {}", obs.index, err),
                }
            }
        }

        if let Some(score) = obs.drowsiness {
            self.memory.profile.kss = classify_drowsiness(score);
            if self.memory.profile.kss.is_none() {
                warn!(
                    "Observation {}: drowsiness score {} is outside the 1-4 scale",
                    obs.index, score
                );
            }
        }

        self.memory.fatigue.state = combine(&self.memory.profile);
        self.memory.actor.eye_state = derive_eye_state(self.memory.fatigue.state);
        debug!(
            "Observation {}: fatigue {}, eye state {}",
            obs.index,
            self.memory.fatigue.state.as_str(),
            self.memory.actor.eye_state.as_str()
        );

        self.state = EngineState::Classified;
        Ok(())
    }

    /// Hand the classified working memory to the caller
    pub fn emit(&mut self) -> Result<&WorkingMemory, EngineError> {
        self.expect_state("emit", EngineState::Classified)?;
        self.state = EngineState::Emitted;
        Ok(&self.memory)
    }

    /// Clear working memory and return to `Idle` for the next observation
    pub fn reset(&mut self) -> Result<(), EngineError> {
        self.expect_state("reset", EngineState::Emitted)?;
        self.memory.reset();
        self.state = EngineState::Idle;
        self.passes += 1;
        Ok(())
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new(BandClassifier::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fatigue_fusion::{EyeState, FatigueState, VitalProfile};
    use vitals_classifier::{HrBand, HrvBand, KssLevel, RrBand, Spo2Band};

    fn observation(index: u64) -> Observation {
        let mut obs = Observation::new(index);
        obs.hr = Some(105);
        obs.hrv = Some(50);
        obs.rr = Some(18);
        obs.spo2 = Some(96);
        obs.drowsiness = Some(1);
        obs.age = Some(40);
        obs.sex = Some("Woman".to_string());
        obs.demographic = Some("European_descent".to_string());
        obs.accessories = Some("Glasses".to_string());
        obs.face_characteristics = Some("Long_hair".to_string());
        obs
    }

    #[test]
    fn test_calm_vitals_classify_to_awake() {
        let mut engine = AssessmentEngine::default();
        engine.load(observation(0)).unwrap();
        engine.classify().unwrap();

        let memory = engine.memory();
        assert!(memory.missing_fields.is_empty());
        assert_eq!(memory.profile.hr, Some(HrBand::Moderate));
        assert_eq!(memory.profile.hrv, Some(HrvBand::Moderate));
        assert_eq!(memory.profile.rr, Some(RrBand::Moderate));
        assert_eq!(memory.profile.spo2, Some(Spo2Band::Normal));
        assert_eq!(memory.profile.kss, Some(KssLevel::Level3));
        assert_eq!(memory.fatigue.state, FatigueState::Awake);
        assert_eq!(memory.actor.eye_state, EyeState::Blinking);
        assert_eq!(memory.actor.age, Some(40));
        assert_eq!(memory.actor.sex.as_deref(), Some("Woman"));
        assert_eq!(memory.actor.demographic.as_deref(), Some("European_descent"));
    }

    #[test]
    fn test_elevated_vitals_resolve_undefined() {
        let mut obs = observation(7);
        obs.hr = Some(160);
        obs.hrv = Some(40);
        obs.rr = Some(22);
        obs.spo2 = Some(91);
        obs.drowsiness = Some(2);

        let mut engine = AssessmentEngine::default();
        engine.load(obs).unwrap();
        engine.classify().unwrap();

        let memory = engine.memory();
        assert_eq!(memory.profile.hr, Some(HrBand::High));
        assert_eq!(memory.profile.hrv, Some(HrvBand::Low));
        assert_eq!(memory.profile.rr, Some(RrBand::High));
        assert_eq!(memory.profile.spo2, Some(Spo2Band::Low));
        assert_eq!(memory.profile.kss, Some(KssLevel::Level5));
        assert_eq!(memory.fatigue.state, FatigueState::Undefined);
        assert_eq!(memory.actor.eye_state, EyeState::Undefined);
    }

    #[test]
    fn test_missing_spo2_leaves_band_undefined() {
        let mut obs = observation(2);
        obs.spo2 = None;

        let mut engine = AssessmentEngine::default();
        engine.load(obs).unwrap();
        engine.classify().unwrap();

        let memory = engine.memory();
        assert!(memory.missing_fields.contains(&"spo2"));
        assert_eq!(memory.profile.spo2, None);
        assert_eq!(memory.profile.hr, Some(HrBand::Moderate));
        assert_eq!(memory.fatigue.state, FatigueState::Undefined);
    }

    #[test]
    fn test_no_leakage_between_passes() {
        let mut engine = AssessmentEngine::default();
        engine.load(observation(0)).unwrap();
        engine.classify().unwrap();
        engine.emit().unwrap();
        engine.reset().unwrap();

        engine.load(Observation::new(1)).unwrap();
        engine.classify().unwrap();

        let memory = engine.memory();
        assert_eq!(memory.profile, VitalProfile::default());
        assert_eq!(memory.actor.sex, None);
        assert_eq!(memory.fatigue.state, FatigueState::Undefined);
    }

    #[test]
    fn test_operations_must_run_in_order() {
        let mut engine = AssessmentEngine::default();
        assert!(engine.classify().is_err());
        assert!(engine.emit().is_err());
        assert!(engine.reset().is_err());

        engine.load(observation(0)).unwrap();
        assert!(engine.load(observation(1)).is_err());
        engine.classify().unwrap();
        assert!(engine.classify().is_err());
        engine.emit().unwrap();
        assert!(engine.emit().is_err());
        engine.reset().unwrap();

        assert_eq!(engine.state(), EngineState::Idle);
        assert_eq!(engine.passes(), 1);
    }

    #[test]
    fn test_load_requires_reset_after_emit() {
        let mut engine = AssessmentEngine::default();
        engine.load(observation(0)).unwrap();
        engine.classify().unwrap();
        engine.emit().unwrap();

        let err = engine.load(observation(1)).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidTransition {
                operation: "load",
                expected: EngineState::Idle,
                actual: EngineState::Emitted,
            }
        );
    }

    #[test]
    fn test_negative_age_skips_vital_classification() {
        let mut obs = observation(4);
        obs.age = Some(-5);

        let mut engine = AssessmentEngine::default();
        engine.load(obs).unwrap();
        engine.classify().unwrap();

        let memory = engine.memory();
        assert_eq!(memory.age.value, Some(-5));
        assert_eq!(memory.age.group, None);
        assert_eq!(memory.profile.hr, None);
        assert_eq!(memory.profile.spo2, None);
        assert_eq!(memory.profile.kss, Some(KssLevel::Level3));
        assert_eq!(memory.actor.age, Some(-5));
        assert_eq!(memory.fatigue.state, FatigueState::Undefined);
    }
}
