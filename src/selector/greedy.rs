//! Earliest-finish-time greedy selection.
//!
//! # Algorithm
//!
//! 1. Sort an index permutation of the input by finish time ascending,
//!    ties by start time ascending. The start tie-break keeps the sweep
//!    optimal when a zero-length task sits exactly at another window's
//!    finish; the sort is stable, so fully tied tasks keep their original
//!    input order.
//! 2. Sweep once in sorted order, choosing every task whose start is not
//!    earlier than the finish of the last chosen task.
//!
//! The chosen subset has maximum cardinality among all pairwise
//! non-overlapping subsets.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the sweep.
//!
//! # Reference
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.1

use crate::models::{Choice, Selection, Task};
use crate::validation::{validate_tasks, ValidationError};

/// Earliest-finish-time greedy selector.
///
/// Stateless: every call to [`select`](Self::select) is independent, sorts
/// its own index permutation, and never reorders the caller's slice. One
/// selector may serve concurrent callers on disjoint inputs.
///
/// # Example
///
/// ```
/// use interval_select::models::Task;
/// use interval_select::selector::GreedySelector;
///
/// let tasks = vec![
///     Task::new(1).with_window(0.0, 3.0),
///     Task::new(2).with_window(1.0, 4.0),
///     Task::new(3).with_window(3.0, 6.0),
/// ];
///
/// let selection = GreedySelector::new().select(&tasks).unwrap();
/// assert_eq!(selection.indices(), vec![0, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySelector;

impl GreedySelector {
    /// Creates a new selector.
    pub fn new() -> Self {
        Self
    }

    /// Selects a maximum set of mutually non-overlapping tasks.
    ///
    /// Input order does not matter. The returned choices are in selection
    /// order, which equals ascending finish-time order; each
    /// [`Choice::index`] points into `tasks` as given. Equal finish times
    /// are broken by earlier start, then by original input order, so the
    /// result is deterministic.
    ///
    /// Two tasks are compatible when the later one's start is `>=` the
    /// earlier one's finish (half-open windows: touching endpoints
    /// coexist, and zero-duration tasks behave like any other interval).
    ///
    /// # Errors
    /// Rejects the whole input, with every issue collected, when any task
    /// has a reversed window or a non-finite time or profit.
    pub fn select(&self, tasks: &[Task]) -> Result<Selection, Vec<ValidationError>> {
        validate_tasks(tasks)?;

        let mut order: Vec<usize> = (0..tasks.len()).collect();
        order.sort_by(|&a, &b| {
            let (ta, tb) = (&tasks[a], &tasks[b]);
            ta.finish_time
                .partial_cmp(&tb.finish_time)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(
                    ta.start_time
                        .partial_cmp(&tb.start_time)
                        .unwrap_or(std::cmp::Ordering::Equal),
                )
        });

        let mut selection = Selection::new();
        let mut last_finish = f64::NEG_INFINITY;

        for &index in &order {
            let task = &tasks[index];
            if task.start_time >= last_finish {
                selection.push(Choice::new(index, task.id, task.start_time, task.finish_time));
                last_finish = task.finish_time;
            }
        }

        Ok(selection)
    }

    /// Like [`select`](Self::select), but returns cloned task records
    /// instead of indices.
    pub fn select_tasks(&self, tasks: &[Task]) -> Result<Vec<Task>, Vec<ValidationError>> {
        let selection = self.select(tasks)?;
        Ok(selection
            .choices
            .iter()
            .map(|c| tasks[c.index].clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_tasks;
    use crate::validation::ValidationErrorKind;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn make_task(id: u32, start: f64, finish: f64) -> Task {
        Task::new(id).with_window(start, finish)
    }

    /// Maximum non-overlapping subset size by exhaustive subset search.
    fn brute_force_max(tasks: &[Task]) -> usize {
        let n = tasks.len();
        let mut best = 0;
        for mask in 0u32..(1 << n) {
            let members: Vec<&Task> = (0..n)
                .filter(|&i| mask & (1 << i) != 0)
                .map(|i| &tasks[i])
                .collect();
            let feasible = members
                .iter()
                .enumerate()
                .all(|(i, a)| members[i + 1..].iter().all(|b| !a.overlaps(b)));
            if feasible {
                best = best.max(members.len());
            }
        }
        best
    }

    #[test]
    fn test_sample_scenario() {
        // Finish times 3,4,6,8,9,10 → chosen finish times 3,6,9 → IDs 1,3,5
        let tasks = sample_tasks();
        let selection = GreedySelector::new().select(&tasks).unwrap();

        assert_eq!(selection.selected_count(), 3);
        let ids: Vec<u32> = selection.choices.iter().map(|c| c.task_id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn test_single_task() {
        let tasks = vec![make_task(1, 0.0, 5.0)];
        let selection = GreedySelector::new().select(&tasks).unwrap();
        assert_eq!(selection.indices(), vec![0]);
    }

    #[test]
    fn test_all_identical() {
        let tasks: Vec<Task> = (1..=5).map(|id| make_task(id, 0.0, 1.0)).collect();
        let selection = GreedySelector::new().select(&tasks).unwrap();
        assert_eq!(selection.selected_count(), 1);
        // Stable tie-break: the first in input order wins
        assert_eq!(selection.choices[0].index, 0);
    }

    #[test]
    fn test_zero_duration_does_not_block() {
        let tasks = vec![
            make_task(1, 0.0, 2.0),
            make_task(2, 2.0, 2.0),
            make_task(3, 2.0, 5.0),
        ];
        let selection = GreedySelector::new().select(&tasks).unwrap();
        assert_eq!(selection.selected_count(), 3);
        assert!(selection.contains_index(1));
    }

    #[test]
    fn test_zero_duration_at_shared_finish() {
        // (5,5) listed first must not displace (0,5): both fit
        let tasks = vec![make_task(1, 5.0, 5.0), make_task(2, 0.0, 5.0)];
        let selection = GreedySelector::new().select(&tasks).unwrap();
        assert_eq!(selection.selected_count(), 2);
        let ids: Vec<u32> = selection.choices.iter().map(|c| c.task_id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_empty_input() {
        let selection = GreedySelector::new().select(&[]).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_unsorted_input() {
        // Same set as the sample, shuffled; indices must follow the shuffle
        let tasks = vec![
            make_task(6, 8.0, 10.0),
            make_task(3, 3.0, 6.0),
            make_task(1, 0.0, 3.0),
            make_task(5, 6.0, 9.0),
            make_task(2, 1.0, 4.0),
            make_task(4, 5.0, 8.0),
        ];
        let selection = GreedySelector::new().select(&tasks).unwrap();
        let ids: Vec<u32> = selection.choices.iter().map(|c| c.task_id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
        assert_eq!(selection.indices(), vec![2, 1, 3]);
    }

    #[test]
    fn test_all_overlapping_picks_earliest_finish() {
        let tasks = vec![
            make_task(1, 0.0, 9.0),
            make_task(2, 1.0, 4.0),
            make_task(3, 2.0, 7.0),
        ];
        let selection = GreedySelector::new().select(&tasks).unwrap();
        assert_eq!(selection.selected_count(), 1);
        assert_eq!(selection.choices[0].task_id, 2);
    }

    #[test]
    fn test_result_is_non_overlapping_and_ordered() {
        let tasks = sample_tasks();
        let selection = GreedySelector::new().select(&tasks).unwrap();

        assert!(selection.is_non_overlapping());
        let finishes: Vec<f64> = selection.choices.iter().map(|c| c.finish_time).collect();
        let mut sorted = finishes.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(finishes, sorted);
    }

    #[test]
    fn test_idempotent() {
        let tasks = sample_tasks();
        let selector = GreedySelector::new();
        let first = selector.select(&tasks).unwrap();
        let second = selector.select(&tasks).unwrap();
        assert_eq!(first.indices(), second.indices());
    }

    #[test]
    fn test_does_not_reorder_input() {
        let tasks = vec![make_task(2, 4.0, 6.0), make_task(1, 0.0, 3.0)];
        let before: Vec<u32> = tasks.iter().map(|t| t.id).collect();
        let _ = GreedySelector::new().select(&tasks).unwrap();
        let after: Vec<u32> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_select_tasks_clones() {
        let tasks = sample_tasks();
        let chosen = GreedySelector::new().select_tasks(&tasks).unwrap();
        let ids: Vec<u32> = chosen.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
        assert_eq!(chosen[0].name, "Task A");
    }

    #[test]
    fn test_invalid_input_rejected() {
        let tasks = vec![make_task(1, 5.0, 3.0), make_task(2, 0.0, f64::NAN)];
        let errors = GreedySelector::new().select(&tasks).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidInterval));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonFiniteTime));
    }

    #[test]
    fn test_optimality_against_brute_force() {
        let mut rng = SmallRng::seed_from_u64(0x5EED);
        let selector = GreedySelector::new();

        for _ in 0..200 {
            let n = rng.random_range(0..=12);
            let tasks: Vec<Task> = (0..n)
                .map(|i| {
                    // Integer grid produces ties and zero-duration windows
                    let start = rng.random_range(0..20) as f64;
                    let duration = rng.random_range(0..=5) as f64;
                    make_task(i as u32 + 1, start, start + duration)
                })
                .collect();

            let selection = selector.select(&tasks).unwrap();
            assert!(selection.is_non_overlapping());
            assert_eq!(
                selection.selected_count(),
                brute_force_max(&tasks),
                "suboptimal on {tasks:?}"
            );
        }
    }
}
