//! In-memory tabular data and column validation.
//!
//! `Dataset` is the input boundary of the crate: a small ordered collection of
//! named columns built directly by the caller. Loading data from files or any
//! other storage is deliberately left to the caller.

use std::fmt;

/// A single column of caller-supplied data.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Floating-point values. May contain NaN; the statistics utilities
    /// exclude NaN from quantile computation.
    Numeric(Vec<f64>),
    /// Integer values, treated as numeric by the statistics utilities.
    Integer(Vec<i64>),
    /// String labels. Skipped by numeric analyses.
    Categorical(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Integer(v) => v.len(),
            Column::Categorical(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True for `Numeric` and `Integer` columns.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Numeric(_) | Column::Integer(_))
    }

    /// Values of a numeric or integer column widened to f64.
    /// Returns `None` for categorical columns.
    pub fn as_f64(&self) -> Option<Vec<f64>> {
        match self {
            Column::Numeric(v) => Some(v.clone()),
            Column::Integer(v) => Some(v.iter().map(|&x| x as f64).collect()),
            Column::Categorical(_) => None,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Numeric(v) => write!(f, "numeric({} rows)", v.len()),
            Column::Integer(v) => write!(f, "integer({} rows)", v.len()),
            Column::Categorical(v) => write!(f, "categorical({} rows)", v.len()),
        }
    }
}

/// An ordered set of named columns.
///
/// Column order is preserved as inserted; nothing in this crate requires the
/// columns to share a length, although callers normally supply rectangular
/// data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<(String, Column)>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column, replacing any existing column with the same name.
    pub fn insert_column(&mut self, name: &str, column: Column) {
        if let Some(existing) = self.columns.iter_mut().find(|(n, _)| n == name) {
            log::debug!("Replacing existing column '{}'", name);
            existing.1 = column;
        } else {
            self.columns.push((name.to_string(), column));
        }
    }

    /// Builder-style variant of [`insert_column`](Self::insert_column).
    pub fn with_column(mut self, name: &str, column: Column) -> Self {
        self.insert_column(name, column);
        self
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Check that every required feature is present among the columns.
    ///
    /// Returns `(is_valid, missing)` where `missing` lists the absent names
    /// in the same order they were requested. Column types and values are
    /// not inspected.
    pub fn validate_features(&self, required_features: &[&str]) -> (bool, Vec<String>) {
        let missing: Vec<String> = required_features
            .iter()
            .filter(|f| self.column(f).is_none())
            .map(|f| f.to_string())
            .collect();
        (missing.is_empty(), missing)
    }
}
