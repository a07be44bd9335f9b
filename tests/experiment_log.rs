//! Integration tests for the copy-on-append experiment log and its summary
//! rendering.

use serde_json::json;

use mlcoursekit::experiment::{ExperimentLog, LOG_COLUMNS};
use mlcoursekit::report::render_experiment_summary;

#[test]
fn new_log_is_empty_with_fixed_schema() {
    let log = ExperimentLog::new();
    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
    assert_eq!(LOG_COLUMNS[0], "experiment_id");
    assert_eq!(LOG_COLUMNS[7], "notes");
}

#[test]
fn logging_appends_without_mutating_the_input() {
    let empty = ExperimentLog::new();
    let one = empty.log_experiment(
        1,
        "LinearRegression",
        &json!({"alpha": 1.0}),
        0.85,
        0.02,
        0.83,
        12.5,
        "",
    );

    assert!(empty.is_empty(), "original log must stay unchanged");
    assert_eq!(one.len(), 1);

    let record = &one.records()[0];
    assert_eq!(record.experiment_id, 1);
    assert_eq!(record.model_name, "LinearRegression");
    assert_eq!(record.hyperparameters, "{\"alpha\":1.0}");
    assert_eq!(record.test_score, 0.83);
    assert_eq!(record.notes, "");
}

#[test]
fn scores_and_time_are_rounded_on_entry() {
    let log = ExperimentLog::new().log_experiment(
        7,
        "Ridge",
        &json!({"alpha": 0.5}),
        0.856789,
        0.021234,
        0.834567,
        12.456,
        "rounding check",
    );
    let record = &log.records()[0];
    assert_eq!(record.cv_score_mean, 0.8568);
    assert_eq!(record.cv_score_std, 0.0212);
    assert_eq!(record.test_score, 0.8346);
    assert_eq!(record.training_time_seconds, 12.46);
}

#[test]
fn out_of_range_values_are_stored_as_given() {
    // No validation of score ranges or time positivity.
    let log = ExperimentLog::new().log_experiment(
        -3,
        "SVC",
        &json!({}),
        -2.0,
        0.0,
        1.7,
        -5.0,
        "",
    );
    let record = &log.records()[0];
    assert_eq!(record.experiment_id, -3);
    assert_eq!(record.cv_score_mean, -2.0);
    assert_eq!(record.test_score, 1.7);
    assert_eq!(record.training_time_seconds, -5.0);
}

#[test]
fn duplicate_experiment_ids_are_permitted() {
    let log = ExperimentLog::new()
        .log_experiment(1, "A", &json!({}), 0.1, 0.0, 0.1, 1.0, "")
        .log_experiment(1, "B", &json!({}), 0.2, 0.0, 0.2, 1.0, "");
    assert_eq!(log.len(), 2);
    assert_eq!(log.records()[0].experiment_id, 1);
    assert_eq!(log.records()[1].experiment_id, 1);
}

#[test]
fn best_record_takes_max_test_score() {
    let log = ExperimentLog::new()
        .log_experiment(1, "LogisticRegression", &json!({"C": 1.0}), 0.81, 0.01, 0.80, 2.0, "")
        .log_experiment(2, "RandomForestClassifier", &json!({"n_estimators": 100}), 0.90, 0.02, 0.92, 9.0, "");

    let best = log.best_record().unwrap();
    assert_eq!(best.model_name, "RandomForestClassifier");
    assert_eq!(best.test_score, 0.92);
}

#[test]
fn best_record_ties_break_by_insertion_order() {
    let log = ExperimentLog::new()
        .log_experiment(1, "first", &json!({}), 0.5, 0.0, 0.9, 1.0, "")
        .log_experiment(2, "second", &json!({}), 0.5, 0.0, 0.9, 1.0, "");
    assert_eq!(log.best_record().unwrap().model_name, "first");
}

#[test]
fn best_record_of_empty_log_is_none() {
    assert!(ExperimentLog::new().best_record().is_none());
}

// ---------------------------------------------------------------------------
// Summary rendering
// ---------------------------------------------------------------------------

#[test]
fn empty_log_renders_fixed_notice() {
    let text = render_experiment_summary(&ExperimentLog::new());
    assert_eq!(text, "No experiments logged yet.\n");
}

#[test]
fn summary_shows_table_and_best_record() {
    let log = ExperimentLog::new()
        .log_experiment(1, "LogisticRegression", &json!({"C": 1.0}), 0.81, 0.01, 0.80, 2.0, "baseline")
        .log_experiment(2, "RandomForestClassifier", &json!({"n_estimators": 100}), 0.90, 0.02, 0.92, 9.0, "");

    let text = render_experiment_summary(&log);
    assert!(text.contains("EXPERIMENT SUMMARY"));
    assert!(text.contains("experiment_id"));
    assert!(text.contains("LogisticRegression"));
    assert!(text.contains("Best Performing Model: RandomForestClassifier"));
    assert!(text.contains("Test Score: 0.9200"));
    assert!(text.contains("Hyperparameters: {\"n_estimators\":100}"));
}

#[test]
fn log_round_trips_json() {
    let log = ExperimentLog::new().log_experiment(
        1,
        "Lasso",
        &json!({"alpha": 0.1}),
        0.7,
        0.05,
        0.68,
        4.0,
        "sparse",
    );
    let json = serde_json::to_string(&log).unwrap();
    let back: ExperimentLog = serde_json::from_str(&json).unwrap();
    assert_eq!(back, log);
}
