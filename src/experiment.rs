//! In-memory experiment tracking.
//!
//! `ExperimentLog` is an append-only, copy-on-append collection: logging an
//! experiment returns a new log and leaves the receiver untouched, so callers
//! holding an older log never see it change underneath them.

use serde::{Deserialize, Serialize};

use crate::report;
use crate::stats::round_to;

/// Column names of the log, in display order.
pub const LOG_COLUMNS: [&str; 8] = [
    "experiment_id",
    "model_name",
    "hyperparameters",
    "cv_score_mean",
    "cv_score_std",
    "test_score",
    "training_time_seconds",
    "notes",
];

/// One logged evaluation of a model configuration.
///
/// Scores are stored rounded to 4 decimal places and the training time to 2,
/// exactly as they are displayed. Records are never mutated after creation.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ExperimentRecord {
    pub experiment_id: i64,
    pub model_name: String,
    /// JSON text of the hyper-parameter mapping supplied at logging time.
    pub hyperparameters: String,
    pub cv_score_mean: f64,
    pub cv_score_std: f64,
    pub test_score: f64,
    pub training_time_seconds: f64,
    pub notes: String,
}

/// Ordered collection of experiment records.
///
/// Insertion order is preserved and duplicate experiment ids are permitted;
/// no validation is applied to the numeric inputs.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ExperimentLog {
    records: Vec<ExperimentRecord>,
}

impl ExperimentLog {
    /// Create an empty log with the fixed column schema.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ExperimentRecord] {
        &self.records
    }

    /// Append one experiment and return the grown log.
    ///
    /// The receiver is not modified; callers must use the returned value.
    /// `hyperparams` is serialized to its JSON text form for storage. Scores
    /// and time are rounded as described on [`ExperimentRecord`]; out-of-range
    /// or negative values are stored as given.
    #[allow(clippy::too_many_arguments)]
    pub fn log_experiment(
        &self,
        experiment_id: i64,
        model_name: &str,
        hyperparams: &serde_json::Value,
        cv_mean: f64,
        cv_std: f64,
        test_score: f64,
        train_time: f64,
        notes: &str,
    ) -> ExperimentLog {
        let record = ExperimentRecord {
            experiment_id,
            model_name: model_name.to_string(),
            hyperparameters: hyperparams.to_string(),
            cv_score_mean: round_to(cv_mean, 4),
            cv_score_std: round_to(cv_std, 4),
            test_score: round_to(test_score, 4),
            training_time_seconds: round_to(train_time, 2),
            notes: notes.to_string(),
        };
        log::debug!(
            "Logging experiment {} ({}) with test score {:.4}",
            record.experiment_id,
            record.model_name,
            record.test_score
        );

        let mut records = self.records.clone();
        records.push(record);
        ExperimentLog { records }
    }

    /// The record with the highest test score, first occurrence winning ties.
    /// `None` when the log is empty.
    pub fn best_record(&self) -> Option<&ExperimentRecord> {
        let mut best: Option<&ExperimentRecord> = None;
        for record in &self.records {
            match best {
                Some(current) if record.test_score <= current.test_score => {}
                _ => best = Some(record),
            }
        }
        best
    }

    /// Print a formatted summary of all experiments to stdout.
    ///
    /// An empty log prints a fixed notice. Otherwise the full log is rendered
    /// as a table followed by the best-performing record's model name, test
    /// score, and hyperparameters.
    pub fn display_experiment_summary(&self) {
        print!("{}", report::render_experiment_summary(self));
    }
}
