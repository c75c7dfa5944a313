//! Layered runtime settings

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use vitals_classifier::{ThresholdError, ThresholdTable};

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid threshold table: {0}")]
    Thresholds(#[from] ThresholdError),
}

/// Runtime settings.
///
/// Layering order is defaults, then an optional file, then `CABIN_*`
/// environment variables (nested keys separated by `__`, for example
/// `CABIN_THRESHOLDS__HR__ADULT__HIGH=115`). The threshold table is
/// validated after layering so a bad override fails at startup instead
/// of mid-run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub labels_dir: PathBuf,
    pub max_rows: Option<u64>,
    pub verbose: bool,
    pub thresholds: ThresholdTable,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            labels_dir: PathBuf::from("labels"),
            max_rows: None,
            verbose: false,
            thresholds: ThresholdTable::default(),
        }
    }
}

impl Settings {
    /// Load settings from defaults, an optional file, and the environment
    pub fn load(file: Option<&Path>) -> Result<Self, SettingsError> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?);
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path.to_path_buf()));
        }
        let settings: Settings = builder
            .add_source(
                config::Environment::with_prefix("CABIN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.thresholds.validate()?;
        Ok(settings)
    }
}
