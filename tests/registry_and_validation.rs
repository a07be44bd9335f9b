//! Integration tests for the assignment registry and feature validation.

use mlcoursekit::config::{AssignmentConfig, Difficulty, TaskType};
use mlcoursekit::experiment::ExperimentLog;
use mlcoursekit::dataset::{Column, Dataset};
use mlcoursekit::registry::{default_assignment, generate_assignment, print_assignment_details};
use mlcoursekit::report::render_assignment_details;

// ---------------------------------------------------------------------------
// Registry lookups
// ---------------------------------------------------------------------------

#[test]
fn registered_student_gets_their_assignment() {
    let assignment = generate_assignment("r2222222");
    assert_eq!(assignment.dataset_name, "house_prices.csv");
    assert_eq!(assignment.target_name, "price");
    assert_eq!(assignment.task_type, TaskType::Regression);
    assert_eq!(assignment.difficulty, Difficulty::Intermediate);
    assert_eq!(assignment.required_features.len(), 5);
}

#[test]
fn unknown_student_falls_back_to_default() {
    let assignment = generate_assignment("unknown123");
    assert_eq!(assignment.dataset_name, "iris.csv");
    assert_eq!(assignment.target_name, "species");
    assert_eq!(assignment.task_type, TaskType::Classification);
    assert_eq!(assignment.difficulty, Difficulty::Beginner);
    assert_eq!(assignment.required_features.len(), 4);
    assert_eq!(&assignment, default_assignment());
}

#[test]
fn lookups_return_independent_copies() {
    let mut first = generate_assignment("r1111111");
    first.required_features.clear();
    first.dataset_name = "tampered.csv".to_string();

    let second = generate_assignment("r1111111");
    assert_eq!(second.dataset_name, "iris.csv");
    assert_eq!(second.required_features.len(), 4);
}

#[test]
fn print_assignment_details_returns_resolved_config() {
    let printed = print_assignment_details("r4444444");
    let looked_up = generate_assignment("r4444444");
    assert_eq!(printed, looked_up);
}

#[test]
fn assignment_block_has_fixed_format() {
    let assignment = generate_assignment("r1111111");
    let text = render_assignment_details("r1111111", &assignment);

    assert!(text.contains("PERSONALIZED ASSIGNMENT DETAILS"));
    assert!(text.contains("Student ID: r1111111"));
    assert!(text.contains("Dataset: iris.csv"));
    assert!(text.contains("Task Type: CLASSIFICATION"));
    assert!(text.contains("Difficulty Level: BEGINNER"));
    assert!(text.contains("Target Variable: species"));
    assert!(text.contains("Required Features (4 total):"));
    assert!(text.contains("  1. sepal_length"));
    assert!(text.contains("  4. petal_width"));
}

#[test]
fn assignment_config_round_trips_json() {
    let assignment = generate_assignment("r5555555");
    let json = serde_json::to_string(&assignment).unwrap();
    assert!(json.contains("\"task_type\":\"classification\""));
    assert!(json.contains("\"difficulty\":\"advanced\""));

    let back: AssignmentConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, assignment);
}

#[test]
fn task_type_parses_case_insensitively() {
    assert_eq!("Classification".parse::<TaskType>().unwrap(), TaskType::Classification);
    assert_eq!("REGRESSION".parse::<TaskType>().unwrap(), TaskType::Regression);
    let err = "ranking".parse::<TaskType>().unwrap_err();
    assert_eq!(err.0, "ranking");
}

#[test]
fn enums_display_lowercase() {
    assert_eq!(TaskType::Regression.to_string(), "regression");
    assert_eq!(Difficulty::Advanced.to_string(), "advanced");
}

#[test]
fn session_report_combines_assignment_and_summary() {
    let assignment = generate_assignment("r3333333");
    let log = ExperimentLog::new();
    let text = mlcoursekit::report::render_session_report("r3333333", &assignment, &log);
    assert!(text.contains("Session report generated "));
    assert!(text.contains("Dataset: customer_churn.csv"));
    assert!(text.contains("No experiments logged yet."));
}

// ---------------------------------------------------------------------------
// Feature validation
// ---------------------------------------------------------------------------

fn two_column_dataset() -> Dataset {
    Dataset::new()
        .with_column("a", Column::Numeric(vec![1.0, 2.0]))
        .with_column("c", Column::Categorical(vec!["x".into(), "y".into()]))
}

#[test]
fn validation_reports_missing_columns_in_request_order() {
    let df = two_column_dataset();
    let (is_valid, missing) = df.validate_features(&["a", "b"]);
    assert!(!is_valid);
    assert_eq!(missing, vec!["b".to_string()]);

    let (is_valid, missing) = df.validate_features(&["z", "a", "b"]);
    assert!(!is_valid);
    assert_eq!(missing, vec!["z".to_string(), "b".to_string()]);
}

#[test]
fn validation_passes_when_all_columns_present() {
    let df = two_column_dataset().with_column("b", Column::Integer(vec![1, 2]));
    let (is_valid, missing) = df.validate_features(&["a", "b", "c"]);
    assert!(is_valid);
    assert!(missing.is_empty());
}

#[test]
fn validation_ignores_column_types() {
    let df = two_column_dataset();
    // "c" is categorical but still counts as present.
    let (is_valid, _) = df.validate_features(&["c"]);
    assert!(is_valid);
}

#[test]
fn inserting_existing_column_replaces_it() {
    let mut df = two_column_dataset();
    assert_eq!(df.ncols(), 2);
    df.insert_column("a", Column::Integer(vec![7]));
    assert_eq!(df.ncols(), 2);
    assert_eq!(df.column("a"), Some(&Column::Integer(vec![7])));
}
