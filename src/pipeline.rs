//! End-to-end preprocessing run.
//!
//! # Example
//!
//! ```no_run
//! use drizzle::config::PipelineConfig;
//! use drizzle::pipeline::run_pipeline;
//! use std::path::PathBuf;
//!
//! let config = PipelineConfig {
//!     input_path: PathBuf::from("seattle-weather.csv"),
//!     output_dir: PathBuf::from("weather_preprocessing"),
//!     ..Default::default()
//! };
//!
//! match run_pipeline(&config) {
//!     Ok(report) => println!("{}", report.summary()),
//!     Err(failure) => println!("{failure}"),
//! }
//! ```

pub mod executor;

pub use executor::{RunReport, Stage, StageFailure, run_pipeline};
