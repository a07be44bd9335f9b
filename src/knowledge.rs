//! Static task knowledge base.
//!
//! Two fixed tables: evaluation metrics per task type, and suggested model
//! names per (task type, difficulty tier). Both are initialized once and
//! read-only afterwards.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::TaskTypeError;

/// Recommended evaluation metrics for one task type.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MetricSet {
    /// Metrics a submission is graded on, in display order.
    pub primary: Vec<String>,
    /// Diagnostic extras worth reporting alongside the primary metrics.
    pub secondary: Vec<String>,
    /// The single scoring string to hand to cross-validation.
    pub cv_metric: String,
}

impl MetricSet {
    fn new(primary: &[&str], secondary: &[&str], cv_metric: &str) -> Self {
        Self {
            primary: primary.iter().map(|s| s.to_string()).collect(),
            secondary: secondary.iter().map(|s| s.to_string()).collect(),
            cv_metric: cv_metric.to_string(),
        }
    }
}

static CLASSIFICATION_METRICS: OnceLock<MetricSet> = OnceLock::new();
static REGRESSION_METRICS: OnceLock<MetricSet> = OnceLock::new();

/// Model names per difficulty tier.
pub type SuggestionTable = BTreeMap<String, Vec<String>>;

static MODEL_SUGGESTIONS: OnceLock<BTreeMap<&'static str, SuggestionTable>> = OnceLock::new();

fn model_suggestions() -> &'static BTreeMap<&'static str, SuggestionTable> {
    MODEL_SUGGESTIONS.get_or_init(|| {
        let tier = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        let mut classification = SuggestionTable::new();
        classification.insert(
            "beginner".to_string(),
            tier(&["LogisticRegression", "DecisionTreeClassifier"]),
        );
        classification.insert(
            "intermediate".to_string(),
            tier(&[
                "RandomForestClassifier",
                "GradientBoostingClassifier",
                "SVC",
            ]),
        );
        classification.insert(
            "advanced".to_string(),
            tier(&[
                "XGBClassifier",
                "LGBMClassifier",
                "VotingClassifier",
                "StackingClassifier",
            ]),
        );

        let mut regression = SuggestionTable::new();
        regression.insert(
            "beginner".to_string(),
            tier(&["LinearRegression", "Ridge", "Lasso"]),
        );
        regression.insert(
            "intermediate".to_string(),
            tier(&[
                "RandomForestRegressor",
                "GradientBoostingRegressor",
                "SVR",
            ]),
        );
        regression.insert(
            "advanced".to_string(),
            tier(&[
                "XGBRegressor",
                "LGBMRegressor",
                "VotingRegressor",
                "StackingRegressor",
            ]),
        );

        let mut table = BTreeMap::new();
        table.insert("classification", classification);
        table.insert("regression", regression);
        table
    })
}

/// Get the evaluation metrics appropriate for `task_type`.
///
/// The match is case-insensitive ("Classification" and "classification" are
/// equivalent). Anything other than classification or regression fails with a
/// [`TaskTypeError`] carrying the offending string.
pub fn get_task_metrics(task_type: &str) -> Result<MetricSet, TaskTypeError> {
    match task_type.to_lowercase().as_str() {
        "classification" => Ok(CLASSIFICATION_METRICS
            .get_or_init(|| {
                MetricSet::new(
                    &["accuracy", "f1_score", "precision", "recall"],
                    &["roc_auc", "confusion_matrix", "classification_report"],
                    "f1_weighted",
                )
            })
            .clone()),
        "regression" => Ok(REGRESSION_METRICS
            .get_or_init(|| {
                MetricSet::new(
                    &["mse", "rmse", "mae", "r2_score"],
                    &["residuals", "actual_vs_predicted"],
                    "r2",
                )
            })
            .clone()),
        _ => Err(TaskTypeError(task_type.to_string())),
    }
}

/// Get the suggested model names for `task_type`, grouped by difficulty tier.
///
/// Unlike [`get_task_metrics`], the task type is matched case-sensitively and
/// must be exactly "classification" or "regression".
///
/// The `difficulty` argument is accepted for call-site compatibility but does
/// not filter the result: the full per-tier table is returned regardless of
/// its value, and unknown difficulty strings are simply a lookup miss on the
/// returned map. Callers index the map themselves.
pub fn suggest_models(
    task_type: &str,
    difficulty: &str,
) -> Result<SuggestionTable, TaskTypeError> {
    let _ = difficulty;
    model_suggestions()
        .get(task_type)
        .cloned()
        .ok_or_else(|| TaskTypeError(task_type.to_string()))
}
