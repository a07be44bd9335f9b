use std::error::Error;
use std::fmt;

/// Error for task-type lookups against the knowledge base.
///
/// Carries the offending string so callers can surface it in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTypeError(pub String);

impl fmt::Display for TaskTypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown task type: {}", self.0)
    }
}

impl Error for TaskTypeError {}

/// Errors from the descriptive-statistics utilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// The target column had zero rows; no distribution can be computed.
    EmptyTarget,
    /// A requested feature is not a column of the dataset.
    UnknownColumn(String),
    /// A numeric analysis was requested on a categorical column.
    NotNumeric(String),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatsError::EmptyTarget => {
                write!(f, "Cannot analyze class distribution of an empty target")
            }
            StatsError::UnknownColumn(name) => {
                write!(f, "Column '{}' not found in dataset", name)
            }
            StatsError::NotNumeric(name) => {
                write!(f, "Column '{}' is not numeric", name)
            }
        }
    }
}

impl Error for StatsError {}
