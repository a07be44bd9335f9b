//! mlcoursekit: assignment and experiment-tracking helpers for ML coursework.
//!
//! This crate backs a classroom workflow: each student id resolves to a fixed
//! dataset/task assignment, datasets are validated against the assignment's
//! required columns, the knowledge base recommends metrics and candidate
//! models per task type, and an in-memory experiment log collects results for
//! summary reporting. Two descriptive-statistics utilities (class-distribution
//! analysis and IQR outlier screening) support the pre-training checks.
//!
//! The design favors small, testable modules: lookups return owned values,
//! the experiment log is copy-on-append, and all console formatting is built
//! from pure `String` renderers in [`report`].
pub mod config;
pub mod dataset;
pub mod error;
pub mod experiment;
pub mod knowledge;
pub mod registry;
pub mod report;
pub mod stats;
