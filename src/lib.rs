//! # Drizzle - Weather Dataset Preprocessing
//!
//! Drizzle turns the raw Seattle weather CSV into a model-ready table:
//! duplicate rows removed, the `weather` label encoded as an integer, and
//! every usable numeric feature imputed and standardized.
//!
//! ## Quick Start
//!
//! ```no_run
//! use drizzle::config::ColumnRoles;
//! use drizzle::preprocess::{load_raw_table, preprocess_df, save_processed};
//! use std::path::Path;
//!
//! # fn example() -> drizzle::error::Result<()> {
//! let raw = load_raw_table(Path::new("seattle-weather.csv"))?;
//! let mut outcome = preprocess_df(&raw, &ColumnRoles::default())?;
//!
//! for (class, code) in outcome.label_mapping.iter() {
//!     println!("{class}: {code}");
//! }
//! save_processed(&mut outcome.processed, Path::new("out"), "processed.csv")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`preprocess`]: loader, transformer and writer
//! - [`pipeline`]: runs the three stages in order and reports the result
//! - [`config`]: explicit run configuration
//! - [`error`]: error types
//! - [`logging`]: tracing subscriber setup

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod preprocess;
