use super::encoding::LabelMapping;
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

/// Transformer output: the processed table plus what was learned on the way.
#[derive(Debug, Clone)]
pub struct PreprocessOutcome {
    pub processed: DataFrame,
    pub label_mapping: LabelMapping,
    pub summary: TransformSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformSummary {
    pub rows_in: usize,
    pub rows_after_dedup: usize,
    /// Feature columns that survived pruning, in table order
    pub features: Vec<FeatureStats>,
    /// Columns dropped because no value parsed as a number
    pub dropped_columns: Vec<String>,
    /// True when there were no feature columns or no rows
    pub degenerate: bool,
    /// Non-fatal conditions, also emitted as `warn` events
    pub warnings: Vec<String>,
}

impl TransformSummary {
    pub fn duplicates_removed(&self) -> usize {
        self.rows_in.saturating_sub(self.rows_after_dedup)
    }
}

/// Statistics for one retained feature, taken after imputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureStats {
    pub name: String,
    pub mean: f64,
    pub std: f64,
    /// Cells that were missing or unparseable and got the column mean
    pub imputed: usize,
}
