use anyhow::{Context as _, Result};
use clap::Parser;
use drizzle::config::PipelineConfig;
use drizzle::pipeline::{RunReport, run_pipeline};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "drizzle",
    about = "Automated preprocessing for the Seattle weather dataset"
)]
pub struct Cli {
    /// Raw dataset (CSV). Defaults to ../Weather_datasets_raw/seattle-weather.csv next to the executable.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Folder for the processed dataset. Defaults to weather_preprocessing.
    #[arg(long, visible_alias = "output_dir")]
    pub output_dir: Option<PathBuf>,

    /// Path to a JSON run configuration. Flags override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Name of the categorical target column
    #[arg(long)]
    pub target_column: Option<String>,

    /// Name of the date column excluded from the features
    #[arg(long)]
    pub date_column: Option<String>,

    /// Number of processed rows to preview
    #[arg(long)]
    pub preview_rows: Option<usize>,

    /// Also write logs to this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Also write logs to the platform data directory
    #[arg(long)]
    pub log_file: bool,
}

impl Cli {
    /// Directory for file logging, if any was requested.
    pub fn log_dir(&self) -> Result<Option<PathBuf>> {
        match (&self.log_dir, self.log_file) {
            (Some(dir), _) => Ok(Some(dir.clone())),
            (None, true) => drizzle::logging::default_log_dir().map(Some),
            (None, false) => Ok(None),
        }
    }

    /// Merge the config file (if any) with command-line overrides.
    pub fn resolve_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => PipelineConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(target) = &self.target_column {
            config.roles.target = target.clone();
        }
        if let Some(date) = &self.date_column {
            config.roles.date = date.clone();
        }
        if let Some(rows) = self.preview_rows {
            config.preview_rows = rows;
        }
        Ok(config)
    }
}

/// Run the pipeline and print the outcome. Returns whether it succeeded.
pub fn run(config: &PipelineConfig) -> bool {
    match run_pipeline(config) {
        Ok(report) => {
            print_report(&report, &config.roles.target);
            true
        }
        Err(failure) => {
            println!("{failure}");
            false
        }
    }
}

fn print_report(report: &RunReport, target: &str) {
    println!("Preprocessing complete");
    println!("Input      : {}", report.input_path.display());
    println!("Output file: {}", report.output_path.display());
    println!("{}", mapping_heading(target));
    for (class, code) in report.label_mapping.iter() {
        println!("  - {class}: {code}");
    }
    if !report.summary.dropped_columns.is_empty() {
        println!(
            "Dropped non-numeric columns: {}",
            report.summary.dropped_columns.join(", ")
        );
    }
    println!("\nPreview output:");
    println!("{}", report.preview);
}

fn mapping_heading(target: &str) -> String {
    format!("Label mapping ({target} -> encoded):")
}
