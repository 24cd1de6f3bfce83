//! Input validation for activity selection.
//!
//! Checks numeric integrity of the task set before selection. Detects:
//! - Reversed windows (finish before start)
//! - Non-finite start or finish times
//! - Non-finite profits
//!
//! Empty input is not an error, and duplicate task IDs are tolerated:
//! the selector works on positions, not identifiers.

use crate::models::Task;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A task finishes before it starts.
    InvalidInterval,
    /// A start or finish time is NaN or infinite.
    NonFiniteTime,
    /// A profit is NaN or infinite.
    NonFiniteProfit,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a task set for selection.
///
/// Checks, per task:
/// 1. Start and finish times are finite
/// 2. The window is not reversed (`finish_time >= start_time`)
/// 3. Profit is finite
///
/// A non-finite window would make the finish-time sort order and the
/// start-vs-finish comparisons of the sweep meaningless, and a reversed
/// window would let the greedy pass produce a nonsense selection, so
/// both reject the whole input.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();

    for (position, task) in tasks.iter().enumerate() {
        if !task.start_time.is_finite() || !task.finish_time.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteTime,
                format!(
                    "Task {} (position {}) has a non-finite window [{}, {})",
                    task.id, position, task.start_time, task.finish_time
                ),
            ));
        } else if task.finish_time < task.start_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidInterval,
                format!(
                    "Task {} (position {}) finishes at {} before it starts at {}",
                    task.id, position, task.finish_time, task.start_time
                ),
            ));
        }

        if !task.profit.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteProfit,
                format!(
                    "Task {} (position {}) has non-finite profit {}",
                    task.id, position, task.profit
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
