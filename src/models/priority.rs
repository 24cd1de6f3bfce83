//! Task priority classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority label attached to a task.
///
/// Purely descriptive: the selection criterion never consults it.
/// It is carried through to the report and counted by the metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Must-do work.
    High,
    /// Normal work.
    #[default]
    Medium,
    /// Deferrable work.
    Low,
}

impl Priority {
    /// Label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
