//! Loader, transformer and writer for the weather dataset.
//!
//! - [`io`]: read the raw CSV, write the processed CSV
//! - [`transform`]: de-duplicate, validate, encode, coerce, impute and scale
//! - [`encoding`]: target label mapping
//! - [`scaling`]: mean imputation and standardization expressions

pub mod encoding;
pub mod io;
pub mod scaling;
pub mod transform;
pub mod types;

pub use encoding::LabelMapping;
pub use io::{load_raw_table, save_processed};
pub use scaling::{impute_mean, standardize};
pub use transform::preprocess_df;
pub use types::{FeatureStats, PreprocessOutcome, TransformSummary};
