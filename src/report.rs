//! Plain-text rendering of assignments and experiment summaries.
//!
//! Every renderer returns a `String` so output can be asserted in tests; the
//! printing wrappers live next to the types they display.

use std::fmt::Write;

use crate::config::AssignmentConfig;
use crate::experiment::{ExperimentLog, ExperimentRecord, LOG_COLUMNS};

const ASSIGNMENT_RULE_WIDTH: usize = 80;
const SUMMARY_RULE_WIDTH: usize = 100;

fn rule(width: usize) -> String {
    "=".repeat(width)
}

/// Render the fixed-format assignment block shown to a student.
pub fn render_assignment_details(student_id: &str, assignment: &AssignmentConfig) -> String {
    let mut out = String::new();
    let bar = rule(ASSIGNMENT_RULE_WIDTH);

    writeln!(out, "{}", bar).unwrap();
    writeln!(out, "PERSONALIZED ASSIGNMENT DETAILS").unwrap();
    writeln!(out, "{}", bar).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "Student ID: {}", student_id).unwrap();
    writeln!(out, "Dataset: {}", assignment.dataset_name).unwrap();
    writeln!(
        out,
        "Task Type: {}",
        assignment.task_type.as_str().to_uppercase()
    )
    .unwrap();
    writeln!(
        out,
        "Difficulty Level: {}",
        assignment.difficulty.as_str().to_uppercase()
    )
    .unwrap();
    writeln!(out).unwrap();
    writeln!(out, "Target Variable: {}", assignment.target_name).unwrap();
    writeln!(out).unwrap();
    writeln!(
        out,
        "Required Features ({} total):",
        assignment.required_features.len()
    )
    .unwrap();
    for (i, feature) in assignment.required_features.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, feature).unwrap();
    }
    writeln!(out).unwrap();
    writeln!(out, "{}", bar).unwrap();
    writeln!(out).unwrap();

    out
}

fn record_cells(record: &ExperimentRecord) -> Vec<String> {
    vec![
        record.experiment_id.to_string(),
        record.model_name.clone(),
        record.hyperparameters.clone(),
        format!("{:.4}", record.cv_score_mean),
        format!("{:.4}", record.cv_score_std),
        format!("{:.4}", record.test_score),
        format!("{:.2}", record.training_time_seconds),
        record.notes.clone(),
    ]
}

/// Render the full log as a fixed-width table, one row per record.
fn render_log_table(log: &ExperimentLog) -> String {
    let rows: Vec<Vec<String>> = log.records().iter().map(record_cells).collect();

    let mut widths: Vec<usize> = LOG_COLUMNS.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    let header = LOG_COLUMNS
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{:>width$}", h, width = w))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", header).unwrap();
    for row in &rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:>width$}", cell, width = w))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(out, "{}", line).unwrap();
    }
    out
}

/// Render the experiment summary: the full log table followed by the
/// best-performing record. An empty log renders the fixed notice only.
pub fn render_experiment_summary(log: &ExperimentLog) -> String {
    if log.is_empty() {
        return "No experiments logged yet.\n".to_string();
    }

    let bar = rule(SUMMARY_RULE_WIDTH);
    let mut out = String::new();

    writeln!(out).unwrap();
    writeln!(out, "{}", bar).unwrap();
    writeln!(out, "EXPERIMENT SUMMARY").unwrap();
    writeln!(out, "{}", bar).unwrap();
    out.push_str(&render_log_table(log));
    writeln!(out, "{}", bar).unwrap();
    writeln!(out).unwrap();

    // A non-empty log always has a best record.
    if let Some(best) = log.best_record() {
        writeln!(out, "Best Performing Model: {}", best.model_name).unwrap();
        writeln!(out, "Test Score: {:.4}", best.test_score).unwrap();
        writeln!(out, "Hyperparameters: {}", best.hyperparameters).unwrap();
        writeln!(out).unwrap();
    }

    out
}

/// Render a combined session report: a timestamp header, the assignment
/// block, and the experiment summary.
pub fn render_session_report(
    student_id: &str,
    assignment: &AssignmentConfig,
    log: &ExperimentLog,
) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "Session report generated {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )
    .unwrap();
    writeln!(out).unwrap();
    out.push_str(&render_assignment_details(student_id, assignment));
    out.push_str(&render_experiment_summary(log));
    out
}
