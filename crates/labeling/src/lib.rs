//! Labeling
//!
//! Assembles one JSON label per classified observation and writes it to a
//! sink. A label that cannot be assembled (a required actor attribute is
//! absent) fails on its own; it never poisons the engine or later rows.

mod emitter;
mod label;
mod sink;

pub use emitter::LabelEmitter;
pub use label::{ActorLabel, Label, PromptDetails};
pub use sink::{JsonDirSink, LabelSink, MemorySink};

use thiserror::Error;

/// Errors raised while assembling or persisting a label
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("observation {index} is missing required attribute '{field}'")]
    MissingAttribute { index: u64, field: &'static str },

    #[error("failed to serialize label: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("label I/O error: {0}")]
    Io(#[from] std::io::Error),
}
