//! Fatigue Fusion
//!
//! Combines independently classified vital bands and the drowsiness level
//! into a composite fatigue state through a fixed, ordered decision table,
//! and derives the eye state implied by the result. The rule topology is
//! compiled in; only the numeric cut-points feeding the bands are
//! configurable data.

mod rules;
mod state;

pub use rules::{combine, first_match, FatigueRule, VitalProfile, FATIGUE_RULES};
pub use state::{derive_eye_state, EyeState, FatigueState};
