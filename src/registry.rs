//! Static assignment registry.
//!
//! Maps student identifiers to their `AssignmentConfig`. The table is fixed
//! at first use and never mutated; lookups hand out owned clones so callers
//! can freely modify what they receive.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::config::{AssignmentConfig, Difficulty, TaskType};
use crate::report;

static ASSIGNMENT_DATABASE: OnceLock<HashMap<&'static str, AssignmentConfig>> = OnceLock::new();
static DEFAULT_ASSIGNMENT: OnceLock<AssignmentConfig> = OnceLock::new();

fn assignment_database() -> &'static HashMap<&'static str, AssignmentConfig> {
    ASSIGNMENT_DATABASE.get_or_init(|| {
        let mut db = HashMap::new();
        db.insert(
            "r1111111",
            AssignmentConfig::new(
                "iris.csv",
                &["sepal_length", "sepal_width", "petal_length", "petal_width"],
                "species",
                TaskType::Classification,
                Difficulty::Beginner,
            ),
        );
        db.insert(
            "r2222222",
            AssignmentConfig::new(
                "house_prices.csv",
                &[
                    "square_feet",
                    "bedrooms",
                    "bathrooms",
                    "age",
                    "location_score",
                ],
                "price",
                TaskType::Regression,
                Difficulty::Intermediate,
            ),
        );
        db.insert(
            "r3333333",
            AssignmentConfig::new(
                "customer_churn.csv",
                &[
                    "age",
                    "tenure",
                    "monthly_charges",
                    "total_charges",
                    "contract_type",
                ],
                "churn",
                TaskType::Classification,
                Difficulty::Intermediate,
            ),
        );
        db.insert(
            "r4444444",
            AssignmentConfig::new(
                "student_performance.csv",
                &[
                    "study_hours",
                    "attendance",
                    "previous_gpa",
                    "assignments_completed",
                ],
                "final_grade",
                TaskType::Regression,
                Difficulty::Beginner,
            ),
        );
        db.insert(
            "r5555555",
            AssignmentConfig::new(
                "credit_card_fraud.csv",
                &[
                    "amount",
                    "merchant_category",
                    "transaction_hour",
                    "days_since_last_transaction",
                    "mcc",
                ],
                "is_fraud",
                TaskType::Classification,
                Difficulty::Advanced,
            ),
        );
        db
    })
}

/// The assignment handed to students whose id is not in the table.
pub fn default_assignment() -> &'static AssignmentConfig {
    DEFAULT_ASSIGNMENT.get_or_init(|| {
        AssignmentConfig::new(
            "iris.csv",
            &["sepal_length", "sepal_width", "petal_length", "petal_width"],
            "species",
            TaskType::Classification,
            Difficulty::Beginner,
        )
    })
}

/// Look up the assignment for `student_id`.
///
/// Unknown ids are not an error: they resolve to a clone of the default
/// beginner assignment. Every call returns an independent owned config.
pub fn generate_assignment(student_id: &str) -> AssignmentConfig {
    match assignment_database().get(student_id) {
        Some(config) => config.clone(),
        None => {
            log::debug!(
                "Student id '{}' not registered, falling back to default assignment",
                student_id
            );
            default_assignment().clone()
        }
    }
}

/// Resolve and print the assignment for `student_id`, returning the config
/// for programmatic use. Writes to stdout only.
pub fn print_assignment_details(student_id: &str) -> AssignmentConfig {
    let assignment = generate_assignment(student_id);
    print!("{}", report::render_assignment_details(student_id, &assignment));
    assignment
}
