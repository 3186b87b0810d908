//! Pipeline execution engine.
//!
//! Runs the loader, transformer and writer in order and returns a
//! [`RunReport`]. A failure in any stage stops the run and comes back as a
//! [`StageFailure`] that names the stage.

use crate::config::PipelineConfig;
use crate::error::PrepError;
use crate::preprocess::{LabelMapping, TransformSummary, load_raw_table, preprocess_df, save_processed};
use polars::prelude::DataFrame;
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Pipeline stage, used to tag failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Transform,
    Write,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Load => "load",
            Self::Transform => "transform",
            Self::Write => "write",
        }
    }
}

/// A stage-level error. `Display` renders the one-line console message.
#[derive(Debug)]
pub struct StageFailure {
    pub stage: Stage,
    pub error: PrepError,
}

impl StageFailure {
    fn new(stage: Stage, error: PrepError) -> Self {
        tracing::error!("Stage '{}' failed: {}", stage.as_str(), error);
        Self { stage, error }
    }
}

impl fmt::Display for StageFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stage {
            Stage::Load => write!(f, "Error: {}", self.error),
            Stage::Transform => write!(f, "Preprocessing failed: {}", self.error),
            Stage::Write => write!(f, "Failed to save file: {}", self.error),
        }
    }
}

impl std::error::Error for StageFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Report generated after a successful run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub label_mapping: LabelMapping,
    pub summary: TransformSummary,

    /// First rows of the processed table
    pub preview: DataFrame,

    pub duration: Duration,
}

impl RunReport {
    /// One-line description of the run
    pub fn summary(&self) -> String {
        format!(
            "Preprocessed {} rows ({} duplicates removed), {} features kept, {} dropped, {} classes, {:.2}s",
            self.summary.rows_after_dedup,
            self.summary.duplicates_removed(),
            self.summary.features.len(),
            self.summary.dropped_columns.len(),
            self.label_mapping.len(),
            self.duration.as_secs_f64()
        )
    }
}

/// Execute loader → transformer → writer for one dataset.
pub fn run_pipeline(config: &PipelineConfig) -> Result<RunReport, StageFailure> {
    let start = Instant::now();

    tracing::info!("Loading {}", config.input_path.display());
    let raw = load_raw_table(&config.input_path).map_err(|e| StageFailure::new(Stage::Load, e))?;

    tracing::info!("Preprocessing {} rows", raw.height());
    let outcome =
        preprocess_df(&raw, &config.roles).map_err(|e| StageFailure::new(Stage::Transform, e))?;

    let mut processed = outcome.processed;
    let output_path = save_processed(&mut processed, &config.output_dir, &config.output_file_name)
        .map_err(|e| StageFailure::new(Stage::Write, e))?;

    let report = RunReport {
        input_path: config.input_path.clone(),
        output_path,
        label_mapping: outcome.label_mapping,
        summary: outcome.summary,
        preview: processed.head(Some(config.preview_rows)),
        duration: start.elapsed(),
    };
    tracing::info!("{}", report.summary());
    Ok(report)
}
