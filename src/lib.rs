//! Activity selection for interval tasks.
//!
//! Given tasks with start and finish times, selects a maximum-cardinality
//! subset of mutually non-overlapping tasks with the earliest-finish-time
//! greedy sweep, then summarizes and reports the outcome. The computation
//! is deterministic, synchronous, and in-memory; each selection call is
//! independent.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Priority`, `Selection`, `Choice`
//! - **`validation`**: Input integrity checks (reversed windows, non-finite numbers)
//! - **`selector`**: The greedy engine and selection metrics
//! - **`report`**: Plain-text table rendering of a selection
//!
//! # Example
//!
//! ```
//! use interval_select::models::sample_tasks;
//! use interval_select::selector::GreedySelector;
//!
//! let tasks = sample_tasks();
//! let selection = GreedySelector::new().select(&tasks).unwrap();
//! assert_eq!(selection.selected_count(), 3);
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.1

pub mod models;
pub mod report;
pub mod selector;
pub mod validation;
