//! Occupant Health Pipeline - Main Entry Point

use anyhow::Context;
use clap::Parser;
use labeling::JsonDirSink;
use observation::CsvReader;
use pipeline::{init_logging, Pipeline, Settings};
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};
use vitals_classifier::BandClassifier;

/// Classify an occupant recording into per-observation health labels
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV recording with one observation per row
    input: PathBuf,

    /// Settings file (TOML); defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for label_<index>.json artifacts
    #[arg(short, long)]
    labels_dir: Option<PathBuf>,

    /// Stop after this many observations
    #[arg(long)]
    max_rows: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref()).context("loading settings")?;
    if let Some(dir) = args.labels_dir {
        settings.labels_dir = dir;
    }
    if args.max_rows.is_some() {
        settings.max_rows = args.max_rows;
    }

    init_logging(args.verbose || settings.verbose);
    info!("=== Occupant Health Pipeline v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Input: {}", args.input.display());
    info!("Labels: {}", settings.labels_dir.display());

    let source = CsvReader::open(&args.input)
        .with_context(|| format!("opening recording {}", args.input.display()))?;
    let sink = JsonDirSink::create(&settings.labels_dir)
        .with_context(|| format!("creating label directory {}", settings.labels_dir.display()))?;

    let classifier = BandClassifier::new(Arc::new(settings.thresholds));
    let runner = Pipeline::new(classifier, Box::new(sink)).with_max_rows(settings.max_rows);

    let cancel = runner.cancel_flag();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Ctrl-C received, stopping after the current observation");
            cancel.store(true, Ordering::SeqCst);
        }
    });

    let summary = tokio::task::spawn_blocking(move || {
        let mut runner = runner;
        let mut source = source;
        runner.run(&mut source)
    })
    .await??;

    if summary.label_failures > 0 {
        warn!("{} observations could not be labeled", summary.label_failures);
    }
    info!(
        "Done: {}/{} observations labeled",
        summary.labels_written, summary.observations
    );
    Ok(())
}
