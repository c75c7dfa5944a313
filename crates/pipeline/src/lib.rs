//! Occupant Health Pipeline
//!
//! Wires the observation source, assessment engine, label emitter, and
//! label sink into a sequential run over a recording. Each observation
//! completes the full load -> classify -> emit -> reset cycle before the
//! next one is read, so no derived state survives between rows.

mod settings;

pub use settings::{Settings, SettingsError};

use assessment_engine::{AssessmentEngine, EngineError};
use fatigue_fusion::FatigueState;
use labeling::{LabelEmitter, LabelSink};
use observation::{RecordSource, SourceError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use vitals_classifier::BandClassifier;

/// Errors that abort a run outright. Label failures are counted per row
/// instead; see [`RunSummary`].
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("observation source error: {0}")]
    Source(#[from] SourceError),

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Counters describing one completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub observations: u64,
    pub labels_written: u64,
    pub label_failures: u64,
    pub undefined_fatigue: u64,
    pub aborted: bool,
}

/// Sequential observation-to-label pipeline
pub struct Pipeline {
    engine: AssessmentEngine,
    emitter: LabelEmitter,
    sink: Box<dyn LabelSink>,
    cancel: Arc<AtomicBool>,
    max_rows: Option<u64>,
}

impl Pipeline {
    pub fn new(classifier: BandClassifier, sink: Box<dyn LabelSink>) -> Self {
        Self {
            engine: AssessmentEngine::new(classifier),
            emitter: LabelEmitter::new(),
            sink,
            cancel: Arc::new(AtomicBool::new(false)),
            max_rows: None,
        }
    }

    /// Stop after this many observations
    pub fn with_max_rows(mut self, max_rows: Option<u64>) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Flag that stops the run before the next observation when set
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Drain the source, labeling each observation in row order.
    ///
    /// A label that cannot be assembled or persisted is counted and the
    /// run moves on; source and engine errors abort the run.
    pub fn run<S: RecordSource>(&mut self, source: &mut S) -> Result<RunSummary, PipelineError> {
        let mut summary = RunSummary::default();

        loop {
            if self.cancel.load(Ordering::SeqCst) {
                warn!("Cancellation requested, stopping run");
                summary.aborted = true;
                break;
            }
            if let Some(cap) = self.max_rows {
                if summary.observations >= cap {
                    info!("Row cap of {} reached", cap);
                    break;
                }
            }
            let Some(obs) = source.next_observation()? else {
                break;
            };
            let index = obs.index;
            summary.observations += 1;

            self.engine.load(obs)?;
            self.engine.classify()?;
            let memory = self.engine.emit()?;
            if memory.fatigue.state == FatigueState::Undefined {
                summary.undefined_fatigue += 1;
            }
            match self
                .emitter
                .emit(memory)
                .and_then(|label| self.sink.write(index, &label))
            {
                Ok(()) => {
                    summary.labels_written += 1;
                    debug!("Observation {}: label written", index);
                }
                Err(err) => {
                    summary.label_failures += 1;
                    warn!("Observation {}: label skipped: {}", index, err);
                }
            }
            self.engine.reset()?;
        }

        info!(
            "Run complete: {} observations, {} labels written, {} failed, {} undefined fatigue",
            summary.observations,
            summary.labels_written,
            summary.label_failures,
            summary.undefined_fatigue
        );
        Ok(summary)
    }
}

/// Initialize the tracing subscriber
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
