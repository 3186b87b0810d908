//! Mean imputation and z-score standardization as polars expressions.
//!
//! ```text
//! filled = x.fill_null(mean(x))
//! scaled = (filled - mean) / std        std = sqrt(sum((x - mean)^2) / n)
//! ```
//!
//! A column whose values are all equal is centred on its own value with a
//! scale of 1, so it maps to exact zeros instead of dividing by zero.
//! Nothing is fitted or kept beyond the expression itself.

use polars::prelude::*;

/// Missing cells of `name` replaced with the mean of its present values.
pub fn impute_mean(name: &str) -> Expr {
    col(name).fill_null(col(name).mean()).alias(name)
}

/// Population z-score of `values` (ddof 0).
pub fn standardize(values: Expr) -> Expr {
    let constant = values.clone().max().eq(values.clone().min());
    let center = when(constant.clone())
        .then(values.clone().first())
        .otherwise(values.clone().mean());
    let scale = when(constant)
        .then(lit(1.0))
        .otherwise(values.clone().std(0));
    (values - center) / scale
}
