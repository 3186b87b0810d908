//! The preprocessing core: raw table in, model-ready table out.
//!
//! [`preprocess_df`] runs the steps below in order. Each step is also public
//! so it can be tested on its own.
//!
//! ```text
//! drop_duplicate_rows ─> validate_schema ─> split_features ─> encode_target
//!                                                 │
//!                (no features or no rows) <───────┤
//!                                                 ▼
//!     coerce_numeric ─> prune_empty_columns ─> impute_mean ─> standardize ─> assemble
//! ```

use super::encoding::LabelMapping;
use super::scaling::{impute_mean, standardize};
use super::types::{FeatureStats, PreprocessOutcome, TransformSummary};
use crate::config::{ColumnRoles, OUTPUT_TARGET_COLUMN};
use crate::error::{PrepError, Result};
use polars::prelude::*;

/// Run the full transformer on a raw table.
///
/// # Errors
///
/// - [`PrepError::Schema`] when the target or date column is absent
/// - [`PrepError::MissingTarget`] when a target cell is empty
/// - [`PrepError::NoUsableFeatures`] when no feature column holds a number
pub fn preprocess_df(raw: &DataFrame, roles: &ColumnRoles) -> Result<PreprocessOutcome> {
    let rows_in = raw.height();
    let df = drop_duplicate_rows(raw)?;
    tracing::info!("De-duplicated {} rows down to {}", rows_in, df.height());

    validate_schema(&df, roles)?;
    let feature_names = split_features(&df, roles);
    let (label_mapping, codes) = encode_target(&df, &roles.target)?;

    let mut summary = TransformSummary {
        rows_in,
        rows_after_dedup: df.height(),
        ..Default::default()
    };

    if feature_names.is_empty() || df.height() == 0 {
        let warning = if feature_names.is_empty() {
            format!(
                "No numeric features found after excluding '{}' and '{}'; output holds only the target",
                roles.target, roles.date
            )
        } else {
            "Dataset has no rows; output holds only the target".to_owned()
        };
        tracing::warn!("{warning}");
        summary.warnings.push(warning);
        summary.degenerate = true;

        let processed = assemble(DataFrame::empty(), codes)?;
        return Ok(PreprocessOutcome {
            processed,
            label_mapping,
            summary,
        });
    }

    let coerced = coerce_numeric(&df, &feature_names)?;
    let (kept, dropped) = prune_empty_columns(&coerced);
    if !dropped.is_empty() {
        let warning = format!("Dropping non-numeric columns that could not be converted: {dropped:?}");
        tracing::warn!("{warning}");
        summary.warnings.push(warning);
    }
    if kept.is_empty() {
        return Err(PrepError::NoUsableFeatures { dropped });
    }
    summary.dropped_columns = dropped;

    let imputed = coerced
        .clone()
        .lazy()
        .select(kept.iter().map(|name| impute_mean(name)).collect::<Vec<_>>())
        .collect()?;

    let stats = imputed
        .clone()
        .lazy()
        .select(
            kept.iter()
                .flat_map(|name| {
                    [
                        col(name.as_str()).mean().alias(format!("{name}:mean")),
                        col(name.as_str()).std(0).alias(format!("{name}:std")),
                    ]
                })
                .collect::<Vec<_>>(),
        )
        .collect()?;

    for name in &kept {
        let feature = FeatureStats {
            name: name.clone(),
            mean: scalar(&stats, &format!("{name}:mean"))?,
            std: scalar(&stats, &format!("{name}:std"))?,
            imputed: coerced.column(name)?.null_count(),
        };
        tracing::debug!(
            column = %feature.name,
            mean = feature.mean,
            std = feature.std,
            imputed = feature.imputed,
            "Standardized feature"
        );
        summary.features.push(feature);
    }

    let scaled = imputed
        .lazy()
        .select(
            kept.iter()
                .map(|name| standardize(col(name.as_str())).alias(name.as_str()))
                .collect::<Vec<_>>(),
        )
        .collect()?;

    let processed = assemble(scaled, codes)?;
    Ok(PreprocessOutcome {
        processed,
        label_mapping,
        summary,
    })
}

/// Remove rows identical to an earlier row in every column, keeping the first.
pub fn drop_duplicate_rows(df: &DataFrame) -> Result<DataFrame> {
    if df.width() == 0 {
        return Ok(df.clone());
    }
    Ok(df.unique_stable(None, UniqueKeepStrategy::First, None)?)
}

/// Fail with the sorted names of any missing target/date column.
pub fn validate_schema(df: &DataFrame, roles: &ColumnRoles) -> Result<()> {
    let mut missing: Vec<String> = [roles.target.as_str(), roles.date.as_str()]
        .into_iter()
        .filter(|name| df.get_column_index(name).is_none())
        .map(str::to_owned)
        .collect();

    if missing.is_empty() {
        return Ok(());
    }
    missing.sort();
    missing.dedup();
    Err(PrepError::Schema { missing })
}

/// Candidate feature columns: everything except target and date, in table order.
pub fn split_features(df: &DataFrame, roles: &ColumnRoles) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .filter(|name| !roles.is_reserved(name))
        .collect()
}

/// Fit the label mapping on the target column and encode every row.
pub fn encode_target(df: &DataFrame, target: &str) -> Result<(LabelMapping, Vec<u32>)> {
    let series = df
        .column(target)?
        .as_materialized_series()
        .cast(&DataType::String)?;
    let values = series.str()?;

    let rows = values.null_count();
    if rows > 0 {
        return Err(PrepError::MissingTarget { rows });
    }

    let mapping = LabelMapping::fit(values.into_no_null_iter());
    let codes = values
        .into_no_null_iter()
        .map(|v| {
            mapping.encode(v).ok_or_else(|| {
                PrepError::DataProcessing(format!("Label '{v}' missing from fitted mapping"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((mapping, codes))
}

/// Cast the named columns to `Float64`. Text cells that do not parse, and
/// `NaN`, become nulls (the missing marker).
pub fn coerce_numeric(df: &DataFrame, names: &[String]) -> Result<DataFrame> {
    let exprs = names
        .iter()
        .map(|name| -> Result<Expr> {
            let dtype = df.column(name)?.dtype();
            let numeric = if dtype.is_primitive_numeric() || dtype.is_bool() {
                col(name.as_str()).cast(DataType::Float64)
            } else {
                col(name.as_str())
                    .cast(DataType::String)
                    .str()
                    .strip_chars(lit(NULL))
                    .cast(DataType::Float64)
            };
            Ok(when(numeric.clone().is_nan())
                .then(lit(NULL))
                .otherwise(numeric)
                .alias(name.as_str()))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(df.clone().lazy().select(exprs).collect()?)
}

/// Split columns into those with at least one number and the names of the
/// all-null rest. Both keep table order.
pub fn prune_empty_columns(coerced: &DataFrame) -> (Vec<String>, Vec<String>) {
    let height = coerced.height();
    let (dropped, kept): (Vec<_>, Vec<_>) = coerced
        .get_columns()
        .iter()
        .partition(|column| column.null_count() == height);

    let names = |columns: Vec<&Column>| -> Vec<String> {
        columns.iter().map(|c| c.name().to_string()).collect()
    };
    (names(kept), names(dropped))
}

fn scalar(stats: &DataFrame, name: &str) -> Result<f64> {
    stats
        .column(name)?
        .as_materialized_series()
        .f64()?
        .get(0)
        .ok_or_else(|| PrepError::DataProcessing(format!("No value for '{name}'")))
}

/// Append the encoded target as the last column, always named `weather`.
fn assemble(mut features: DataFrame, codes: Vec<u32>) -> Result<DataFrame> {
    let target = Column::from(Series::new(OUTPUT_TARGET_COLUMN.into(), codes));
    if features.width() == 0 {
        return Ok(DataFrame::new(vec![target])?);
    }
    features.with_column(target)?;
    Ok(features)
}
