//! Label destinations

use crate::label::Label;
use crate::LabelError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::info;

/// Destination for emitted labels. Sinks take `&self` so one sink can be
/// shared while the pipeline drives it from a blocking task.
pub trait LabelSink: Send {
    fn write(&self, index: u64, label: &Label) -> Result<(), LabelError>;
}

impl<S: LabelSink + Sync> LabelSink for Arc<S> {
    fn write(&self, index: u64, label: &Label) -> Result<(), LabelError> {
        (**self).write(index, label)
    }
}

/// Writes one pretty-printed `label_{index}.json` per observation
#[derive(Debug)]
pub struct JsonDirSink {
    dir: PathBuf,
}

impl JsonDirSink {
    /// Create the output directory if needed
    pub fn create<P: AsRef<Path>>(dir: P) -> Result<Self, LabelError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        info!("Writing labels to {}", dir.display());
        Ok(Self { dir })
    }

    fn label_path(&self, index: u64) -> PathBuf {
        self.dir.join(format!("label_{index}.json"))
    }
}

impl LabelSink for JsonDirSink {
    fn write(&self, index: u64, label: &Label) -> Result<(), LabelError> {
        let file = File::create(self.label_path(index))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, label)?;
        writer.flush()?;
        Ok(())
    }
}

/// Collects labels in memory for tests and dry runs
#[derive(Debug, Default)]
pub struct MemorySink {
    labels: Mutex<Vec<(u64, Label)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of collected labels in write order
    pub fn labels(&self) -> Vec<(u64, Label)> {
        match self.labels.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self.labels.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LabelSink for MemorySink {
    fn write(&self, index: u64, label: &Label) -> Result<(), LabelError> {
        let mut guard = self.labels.lock().map_err(|_| {
            LabelError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "label store lock poisoned",
            ))
        })?;
        guard.push((index, label.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{ActorLabel, PromptDetails};
    use fatigue_fusion::EyeState;
    use uuid::Uuid;

    fn sample_label() -> Label {
        Label {
            prompt_details: PromptDetails::default(),
            actor: ActorLabel {
                actor_id: Uuid::new_v4(),
                eye_state: EyeState::Sleeping,
                age: 68,
                face_characteristics: "Beard".to_string(),
                sex: "Man".to_string(),
                demographic: "African_descent".to_string(),
                accessories: "Hat".to_string(),
                bounding_box: "...".to_string(),
                bounding_polygon: "...".to_string(),
            },
        }
    }

    #[test]
    fn test_dir_sink_writes_a_parseable_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonDirSink::create(dir.path().join("labels")).unwrap();
        let label = sample_label();
        sink.write(3, &label).unwrap();

        let path = dir.path().join("labels").join("label_3.json");
        let contents = std::fs::read_to_string(path).unwrap();
        let parsed: Label = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, label);
    }

    #[test]
    fn test_dir_sink_reuses_an_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        JsonDirSink::create(dir.path()).unwrap();
        let sink = JsonDirSink::create(dir.path()).unwrap();
        sink.write(0, &sample_label()).unwrap();
        assert!(dir.path().join("label_0.json").exists());
    }

    #[test]
    fn test_memory_sink_collects_in_write_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());
        sink.write(0, &sample_label()).unwrap();
        sink.write(1, &sample_label()).unwrap();

        let stored = sink.labels();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].0, 0);
        assert_eq!(stored[1].0, 1);
        assert_eq!(sink.len(), 2);
    }
}
