use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TaskTypeError;

/// The two kinds of supervised problems handed out to students.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Classification,
    Regression,
}

impl TaskType {
    /// Canonical lowercase form, matching the strings stored in the
    /// knowledge-base tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Classification => "classification",
            TaskType::Regression => "regression",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = TaskTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "classification" => Ok(TaskType::Classification),
            "regression" => Ok(TaskType::Regression),
            _ => Err(TaskTypeError(s.to_string())),
        }
    }
}

/// Difficulty tier of an assignment.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One student's assignment: the dataset to work on, the columns the
/// submission must use, and the prediction target.
///
/// Configs are defined once in the registry and handed to callers as owned
/// clones, so mutating a returned value never affects the registry entry.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AssignmentConfig {
    pub dataset_name: String,
    /// Feature columns the submission must use, in display order.
    pub required_features: Vec<String>,
    pub target_name: String,
    pub task_type: TaskType,
    pub difficulty: Difficulty,
}

impl AssignmentConfig {
    pub fn new(
        dataset_name: &str,
        required_features: &[&str],
        target_name: &str,
        task_type: TaskType,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            dataset_name: dataset_name.to_string(),
            required_features: required_features.iter().map(|s| s.to_string()).collect(),
            target_name: target_name.to_string(),
            task_type,
            difficulty,
        }
    }
}
