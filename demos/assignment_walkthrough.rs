//! End-to-end walkthrough: resolve two assignments, sanity-check a dataset,
//! log a couple of experiments, and print the summary.
//!
//! Run with `cargo run --example assignment_walkthrough`.

use anyhow::Result;
use serde_json::json;

use mlcoursekit::dataset::{Column, Dataset};
use mlcoursekit::experiment::ExperimentLog;
use mlcoursekit::knowledge::{get_task_metrics, suggest_models};
use mlcoursekit::registry::print_assignment_details;
use mlcoursekit::stats::{analyze_class_distribution, identify_outliers_iqr};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .parse_env(env_logger::Env::default().filter_or("MLCOURSEKIT_LOG", "info"))
        .init();

    let assignment = print_assignment_details("r1111111");
    print_assignment_details("r2222222");

    // A toy stand-in for the iris data, built in memory the way callers
    // normally would after loading their file.
    let df = Dataset::new()
        .with_column(
            "sepal_length",
            Column::Numeric(vec![5.1, 4.9, 4.7, 5.0, 6.4, 15.0]),
        )
        .with_column(
            "sepal_width",
            Column::Numeric(vec![3.5, 3.0, 3.2, 3.6, 2.9, 3.1]),
        )
        .with_column(
            "petal_length",
            Column::Numeric(vec![1.4, 1.4, 1.3, 1.5, 4.3, 1.4]),
        )
        .with_column(
            "petal_width",
            Column::Numeric(vec![0.2, 0.2, 0.2, 0.2, 1.3, 0.2]),
        )
        .with_column(
            "species",
            Column::Categorical(
                ["setosa", "setosa", "setosa", "setosa", "versicolor", "setosa"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
        );

    let required: Vec<&str> = assignment
        .required_features
        .iter()
        .map(|s| s.as_str())
        .collect();
    let (is_valid, missing) = df.validate_features(&required);
    println!("Dataset valid: {} (missing: {:?})", is_valid, missing);

    let metrics = get_task_metrics(assignment.task_type.as_str())?;
    println!("CV metric: {}", metrics.cv_metric);

    let suggestions = suggest_models(assignment.task_type.as_str(), assignment.difficulty.as_str())?;
    if let Some(models) = suggestions.get(assignment.difficulty.as_str()) {
        println!("Suggested models: {}", models.join(", "));
    }

    let labels = ["setosa", "setosa", "setosa", "setosa", "versicolor", "setosa"];
    let distribution = analyze_class_distribution(&labels)?;
    println!(
        "Classes: {:?}, imbalance ratio: {:.2}, balanced: {}",
        distribution.classes, distribution.imbalance_ratio, distribution.is_balanced
    );

    let outliers = identify_outliers_iqr(&df, &required)?;
    println!("Outlier counts: {:?}", outliers);

    let log = ExperimentLog::new();
    let log = log.log_experiment(
        1,
        "LogisticRegression",
        &json!({"C": 1.0, "max_iter": 200}),
        0.95,
        0.02,
        0.94,
        3.2,
        "baseline",
    );
    let log = log.log_experiment(
        2,
        "DecisionTreeClassifier",
        &json!({"max_depth": 4}),
        0.93,
        0.03,
        0.96,
        1.1,
        "",
    );
    log.display_experiment_summary();

    Ok(())
}
