//! Selection quality metrics.
//!
//! Computes summary indicators from a completed selection and its input
//! tasks.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Selected / Rejected | Chosen vs. passed-over candidates |
//! | Total Profit | Sum of profit over chosen tasks |
//! | Busy Time | Sum of chosen window lengths |
//! | Span | Earliest chosen start to latest chosen finish |
//! | Utilization | Busy time / span |
//! | Selection Rate | Chosen / candidates |

use crate::models::{Priority, Selection, Task};

/// Summary indicators for a selection.
///
/// Profit figures are descriptive: the selector maximizes count, not
/// profit, so `total_profit` reports what the chosen subset happens to be
/// worth.
#[derive(Debug, Clone)]
pub struct SelectionMetrics {
    /// Number of chosen tasks.
    pub selected_count: usize,
    /// Number of candidate tasks offered to the selector.
    pub candidate_count: usize,
    /// Candidates passed over.
    pub rejected_count: usize,
    /// Sum of profit over chosen tasks.
    pub total_profit: f64,
    /// Mean profit per chosen task.
    pub avg_profit: f64,
    /// Mean window length per chosen task.
    pub avg_duration: f64,
    /// Sum of chosen window lengths.
    pub busy_time: f64,
    /// Earliest chosen start to latest chosen finish.
    pub span: f64,
    /// `busy_time / span`, 0.0 when the span is zero.
    pub utilization: f64,
    /// Chosen tasks with [`Priority::High`].
    pub high_priority_count: usize,
    /// `selected_count / candidate_count`, 1.0 for empty input.
    pub selection_rate: f64,
}

impl SelectionMetrics {
    /// Computes metrics from a selection and the tasks it was made from.
    ///
    /// The selection must have been produced from this same task slice:
    /// choice indices are resolved against it.
    pub fn calculate(selection: &Selection, tasks: &[Task]) -> Self {
        let selected_count = selection.selected_count();
        let candidate_count = tasks.len();

        let mut total_profit = 0.0;
        let mut busy_time = 0.0;
        let mut high_priority_count = 0;

        for choice in &selection.choices {
            let task = &tasks[choice.index];
            total_profit += task.profit;
            busy_time += task.duration();
            if task.priority == Priority::High {
                high_priority_count += 1;
            }
        }

        let span = selection.span();
        let utilization = if span > 0.0 { busy_time / span } else { 0.0 };

        let (avg_profit, avg_duration) = if selected_count == 0 {
            (0.0, 0.0)
        } else {
            (
                total_profit / selected_count as f64,
                busy_time / selected_count as f64,
            )
        };

        let selection_rate = if candidate_count == 0 {
            1.0
        } else {
            selected_count as f64 / candidate_count as f64
        };

        Self {
            selected_count,
            candidate_count,
            rejected_count: candidate_count - selected_count,
            total_profit,
            avg_profit,
            avg_duration,
            busy_time,
            span,
            utilization,
            high_priority_count,
            selection_rate,
        }
    }
}
