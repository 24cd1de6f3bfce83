//! Greedy selection engine and metrics.
//!
//! # Algorithm
//!
//! [`GreedySelector`] implements the earliest-finish-time greedy sweep,
//! which is optimal for maximizing the number of mutually non-overlapping
//! tasks. It validates its input and never mutates the caller's slice.
//!
//! # Metrics
//!
//! [`SelectionMetrics`] summarizes a completed selection: counts, profit
//! totals, busy time, span, and utilization.
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.1

mod greedy;
mod metrics;

pub use greedy::GreedySelector;
pub use metrics::SelectionMetrics;
