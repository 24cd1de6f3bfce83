//! Plain-text rendering of a selection.
//!
//! Formatting only: no algorithmic contract lives here.

use std::fmt;

use crate::models::{Selection, Task};

/// Table view of a selection over its input tasks.
///
/// Implements [`fmt::Display`]: the rendered form is a header with the
/// selected count, one row per chosen task (ID, name, window, profit,
/// priority), and a total-profit footer.
///
/// The selection must have been produced from this same task slice:
/// choice indices are resolved against it.
pub struct SelectionReport<'a> {
    tasks: &'a [Task],
    selection: &'a Selection,
}

impl<'a> SelectionReport<'a> {
    /// Creates a report over a task set and its selection.
    pub fn new(tasks: &'a [Task], selection: &'a Selection) -> Self {
        Self { tasks, selection }
    }
}

impl fmt::Display for SelectionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Activity Selection Results ===")?;
        writeln!(f, "Total Selected Tasks: {}", self.selection.selected_count())?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<5} {:<20} {:<10} {:<10} {:<10} {:<10}",
            "ID", "Name", "Start", "Finish", "Profit", "Priority"
        )?;
        writeln!(f, "{}", "-".repeat(72))?;

        let mut total_profit = 0.0;
        for choice in &self.selection.choices {
            let task = &self.tasks[choice.index];
            writeln!(
                f,
                "{:<5} {:<20} {:<10.2} {:<10.2} {:<10.2} {:<10}",
                task.id, task.name, task.start_time, task.finish_time, task.profit, task.priority
            )?;
            total_profit += task.profit;
        }

        writeln!(f)?;
        write!(f, "Total Profit: {total_profit:.2}")
    }
}
