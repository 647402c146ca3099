//! Filtered/sorted task lists.
//!
//! Order of operations: status filter, subject filter, stable sort by due
//! date, then (upcoming only) truncation. Truncating before sorting would
//! pick the wrong tasks.

use crate::domain::Task;
use crate::store::FiltersState;

/// Tasks matching both criteria, in their original order.
pub fn filter_tasks<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    filters: &FiltersState,
) -> Vec<&'a Task> {
    tasks
        .into_iter()
        .filter(|task| filters.status_filter.matches(task))
        .filter(|task| filters.subject_filter.matches(task))
        .collect()
}

/// Stable ascending sort by due date. Equal dates keep their relative order.
pub fn sort_by_due_date(tasks: &mut [&Task]) {
    tasks.sort_by(|a, b| a.due_date.cmp_chronological(&b.due_date));
}

/// Full filtered and sorted list (Tasks screen).
pub fn filtered_sorted_tasks<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    filters: &FiltersState,
) -> Vec<&'a Task> {
    let mut result = filter_tasks(tasks, filters);
    sort_by_due_date(&mut result);
    result
}

/// First `limit` entries of the filtered and sorted list (dashboard "upcoming").
pub fn upcoming_tasks<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    filters: &FiltersState,
    limit: usize,
) -> Vec<&'a Task> {
    let mut result = filtered_sorted_tasks(tasks, filters);
    result.truncate(limit);
    result
}
