//! Descriptive statistics over caller-supplied tabular data.
//!
//! Covers the two analyses students run before training (class-distribution
//! balance and IQR outlier screening) plus a per-column numeric summary.
//! Quantiles use linear interpolation between closest ranks so results agree
//! with the usual dataframe-library definitions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::dataset::Dataset;
use crate::error::StatsError;

/// Round `value` to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Linear-interpolation quantile of `values`, with `q` in `[0, 1]`.
///
/// NaN values are excluded before ranking. The rank position is
/// `pos = q * (n - 1)`; the result interpolates between the values at
/// `floor(pos)` and `ceil(pos)`:
///
/// `x[lo] + (x[hi] - x[lo]) * (pos - lo)`
///
/// Returns `None` when no finite values remain.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    assert!((0.0..=1.0).contains(&q), "quantile requires q in [0, 1]");

    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());

    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64))
}

/// Frequency profile of a classification target.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ClassDistribution {
    /// Distinct labels in descending-count order (ties keep first-seen order).
    pub classes: Vec<String>,
    /// Counts parallel to `classes`.
    pub counts: Vec<usize>,
    /// Per-label share of the total, rounded to 4 decimal places.
    pub proportions: HashMap<String, f64>,
    /// True when `imbalance_ratio` is below 1.5.
    pub is_balanced: bool,
    /// Most frequent count divided by least frequent count.
    pub imbalance_ratio: f64,
}

/// Analyze the class distribution of a classification target.
///
/// Labels are compared by their string form. An empty target is rejected with
/// [`StatsError::EmptyTarget`] rather than producing a zero-division ratio.
pub fn analyze_class_distribution<T: ToString>(y: &[T]) -> Result<ClassDistribution, StatsError> {
    if y.is_empty() {
        return Err(StatsError::EmptyTarget);
    }

    // Count labels, remembering first-seen order so ties sort stably.
    let mut order: Vec<String> = Vec::new();
    let mut counts_by_label: HashMap<String, usize> = HashMap::new();
    for label in y {
        let key = label.to_string();
        let entry = counts_by_label.entry(key.clone()).or_insert(0);
        if *entry == 0 {
            order.push(key);
        }
        *entry += 1;
    }

    let mut pairs: Vec<(String, usize)> = order
        .into_iter()
        .map(|label| {
            let count = counts_by_label[&label];
            (label, count)
        })
        .collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1));

    let total = y.len() as f64;
    let max_count = pairs.first().map(|(_, c)| *c).unwrap_or(0);
    let min_count = pairs.last().map(|(_, c)| *c).unwrap_or(0);
    let imbalance_ratio = max_count as f64 / min_count as f64;

    let proportions = pairs
        .iter()
        .map(|(label, count)| (label.clone(), round_to(*count as f64 / total, 4)))
        .collect();

    let (classes, counts) = pairs.into_iter().unzip();
    Ok(ClassDistribution {
        classes,
        counts,
        proportions,
        is_balanced: imbalance_ratio < 1.5,
        imbalance_ratio,
    })
}

/// Count IQR outliers for the named numeric features of `dataset`.
///
/// For each feature the bounds are `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]` and values
/// strictly outside them are counted. Categorical columns named in `features`
/// are silently skipped (absent from the result). Naming a column the dataset
/// does not have is an error. NaN values neither influence the quartiles nor
/// count as outliers.
pub fn identify_outliers_iqr(
    dataset: &Dataset,
    features: &[&str],
) -> Result<HashMap<String, usize>, StatsError> {
    let mut outliers = HashMap::new();

    for &name in features {
        let column = dataset
            .column(name)
            .ok_or_else(|| StatsError::UnknownColumn(name.to_string()))?;
        let Some(values) = column.as_f64() else {
            log::debug!("Skipping non-numeric column '{}' in outlier scan", name);
            continue;
        };

        let count = match (quantile(&values, 0.25), quantile(&values, 0.75)) {
            (Some(q1), Some(q3)) => {
                let iqr = q3 - q1;
                let lower = q1 - 1.5 * iqr;
                let upper = q3 + 1.5 * iqr;
                values.iter().filter(|&&v| v < lower || v > upper).count()
            }
            // No finite values: nothing to flag.
            _ => 0,
        };
        outliers.insert(name.to_string(), count);
    }

    Ok(outliers)
}

/// Five-number-plus-moments summary of one numeric column.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NumericSummary {
    /// Number of finite values the summary is computed over.
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Summarize a numeric column of `dataset` by name.
///
/// NaN values are dropped before computing. Errors if the column is missing,
/// not numeric, or has no finite values.
pub fn summarize_numeric(dataset: &Dataset, feature: &str) -> Result<NumericSummary, StatsError> {
    let column = dataset
        .column(feature)
        .ok_or_else(|| StatsError::UnknownColumn(feature.to_string()))?;
    let values = column
        .as_f64()
        .ok_or_else(|| StatsError::NotNumeric(feature.to_string()))?;

    let finite: Vec<f64> = values.into_iter().filter(|v| !v.is_nan()).collect();
    if finite.is_empty() {
        return Err(StatsError::EmptyTarget);
    }

    // quantile() cannot return None here: `finite` is non-empty.
    let q1 = quantile(&finite, 0.25).ok_or(StatsError::EmptyTarget)?;
    let median = quantile(&finite, 0.5).ok_or(StatsError::EmptyTarget)?;
    let q3 = quantile(&finite, 0.75).ok_or(StatsError::EmptyTarget)?;

    Ok(NumericSummary {
        count: finite.len(),
        mean: Statistics::mean(&finite),
        std: Statistics::std_dev(&finite),
        min: Statistics::min(&finite),
        q1,
        median,
        q3,
        max: Statistics::max(&finite),
    })
}
