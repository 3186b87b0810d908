//! # Drizzle command-line entry point
//!
//! ```text
//! main()
//!   │
//!   ├─> Parse CLI arguments (clap)
//!   ├─> Initialize logging (tracing)
//!   ├─> Resolve the run configuration (config file + flags)
//!   └─> Load → Preprocess → Save, then print the report
//! ```
//!
//! ```bash
//! drizzle --input data/seattle-weather.csv --output-dir weather_preprocessing
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)]

mod cli;

use anyhow::Result;
use clap::Parser as _;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();

    drizzle::logging::init(cli.log_dir()?.as_deref())?;

    let config = cli.resolve_config()?;
    if cli::run(&config) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
