//! Interval task model.
//!
//! A task is a half-open time interval `[start_time, finish_time)` with
//! descriptive metadata. Touching endpoints do not overlap: a task may
//! start at the exact instant another finishes.
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1

use serde::{Deserialize, Serialize};

use super::Priority;

/// A candidate task for activity selection.
///
/// Only `start_time` and `finish_time` influence selection. `profit` is
/// carried through to the report and metrics but never consulted by the
/// selection criterion, which maximizes count, not profit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier. Unique by convention; uniqueness is not enforced.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
    /// Interval start.
    pub start_time: f64,
    /// Interval finish. Expected `>= start_time`; checked by validation.
    pub finish_time: f64,
    /// Economic value, reported but not optimized for.
    pub profit: f64,
    /// Descriptive priority.
    pub priority: Priority,
}

impl Task {
    /// Creates a task with the given ID and a zero-length window at t=0.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            start_time: 0.0,
            finish_time: 0.0,
            profit: 0.0,
            priority: Priority::default(),
        }
    }

    /// Sets the task name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the time window.
    pub fn with_window(mut self, start_time: f64, finish_time: f64) -> Self {
        self.start_time = start_time;
        self.finish_time = finish_time;
        self
    }

    /// Sets the profit.
    pub fn with_profit(mut self, profit: f64) -> Self {
        self.profit = profit;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Window length (finish - start).
    pub fn duration(&self) -> f64 {
        self.finish_time - self.start_time
    }

    /// Whether the windows of `self` and `other` overlap.
    ///
    /// Half-open semantics: two tasks do NOT overlap when one's start is
    /// `>=` the other's finish, so touching endpoints coexist.
    pub fn overlaps(&self, other: &Task) -> bool {
        !(self.start_time >= other.finish_time || other.start_time >= self.finish_time)
    }
}

/// The six-task demo set shipped with the original scheduler.
///
/// Used by the demo binary when no input file is given, and as the shared
/// fixture for tests.
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new(1)
            .with_name("Task A")
            .with_window(0.0, 3.0)
            .with_profit(50.0)
            .with_priority(Priority::High),
        Task::new(2)
            .with_name("Task B")
            .with_window(1.0, 4.0)
            .with_profit(60.0)
            .with_priority(Priority::Medium),
        Task::new(3)
            .with_name("Task C")
            .with_window(3.0, 6.0)
            .with_profit(70.0)
            .with_priority(Priority::High),
        Task::new(4)
            .with_name("Task D")
            .with_window(5.0, 8.0)
            .with_profit(80.0)
            .with_priority(Priority::Low),
        Task::new(5)
            .with_name("Task E")
            .with_window(6.0, 9.0)
            .with_profit(90.0)
            .with_priority(Priority::Medium),
        Task::new(6)
            .with_name("Task F")
            .with_window(8.0, 10.0)
            .with_profit(100.0)
            .with_priority(Priority::High),
    ]
}
