//! Centralized error handling for drizzle.
//!
//! Every stage of the pipeline returns [`Result`], whose error side is the
//! [`PrepError`] enum. Callers can match on the variant to tell a missing
//! input file apart from a schema problem or a failed write:
//!
//! ```
//! use drizzle::error::PrepError;
//!
//! fn describe(err: &PrepError) -> &'static str {
//!     match err {
//!         PrepError::NotFound(_) => "input missing",
//!         PrepError::Schema { .. } => "bad columns",
//!         PrepError::NoUsableFeatures { .. } => "nothing to scale",
//!         _ => "other",
//!     }
//! }
//! ```
//!
//! `From` impls let `?` lift I/O, Polars and JSON errors into `PrepError`.

use std::fmt;
use std::path::PathBuf;

/// Main error type for drizzle operations.
#[derive(Debug)]
pub enum PrepError {
    /// Input path does not exist
    NotFound(PathBuf),

    /// Required columns absent from the raw table (sorted by name)
    Schema { missing: Vec<String> },

    /// Every candidate feature column was unusable after numeric coercion
    NoUsableFeatures { dropped: Vec<String> },

    /// Target column contains empty cells
    MissingTarget { rows: usize },

    /// I/O errors (reading, writing, creating directories)
    Io(std::io::Error),

    /// Polars errors while parsing or reshaping the table
    DataProcessing(String),

    /// Configuration file errors
    Config(String),
}

impl fmt::Display for PrepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Dataset file not found: {}", path.display()),
            Self::Schema { missing } => write!(
                f,
                "Dataset is missing required columns: {}",
                quoted(missing)
            ),
            Self::NoUsableFeatures { dropped } => write!(
                f,
                "No numeric columns left to standardize (dropped: {})",
                quoted(dropped)
            ),
            Self::MissingTarget { rows } => {
                write!(f, "Target column has {rows} row(s) without a value")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

fn quoted(names: &[String]) -> String {
    let names: Vec<_> = names.iter().map(|c| format!("'{c}'")).collect();
    format!("[{}]", names.join(", "))
}

impl std::error::Error for PrepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PrepError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<polars::error::PolarsError> for PrepError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

impl From<serde_json::Error> for PrepError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

/// Result type alias for drizzle operations.
pub type Result<T> = std::result::Result<T, PrepError>;
