//! Assessment Engine
//!
//! Drives one observation at a time through a fixed load -> classify ->
//! emit -> reset cycle over a working memory. Each stage is only legal
//! from the state the previous stage left behind, so a skipped or
//! repeated call surfaces as an error instead of stale data.

mod engine;
mod memory;

pub use engine::{AssessmentEngine, EngineState};
pub use memory::{ActorSlot, AgeSlot, FatigueSlot, WorkingMemory};

use thiserror::Error;

/// Errors raised by engine lifecycle violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("{operation}() requires state {expected:?}, engine is {actual:?}")]
    InvalidTransition {
        operation: &'static str,
        expected: EngineState,
        actual: EngineState,
    },
}
