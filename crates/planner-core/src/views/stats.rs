//! Stats aggregate for the dashboard.

use serde::{Deserialize, Serialize};

use crate::domain::{Task, TaskStatus};

/// Task counts by status. `total` is always the sum of the other three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn count(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
        }
    }
}

pub fn task_stats<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> TaskStats {
    let mut stats = TaskStats::default();
    for task in tasks {
        stats.total += 1;
        match task.status {
            TaskStatus::Pending => stats.pending += 1,
            TaskStatus::InProgress => stats.in_progress += 1,
            TaskStatus::Completed => stats.completed += 1,
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_is_all_zero() {
        assert_eq!(task_stats(&Vec::<Task>::new()), TaskStats::default());
    }

    #[test]
    fn counts_each_status() {
        let tasks = vec![
            Task::new("t1", "s1", "a", "2025-01-01"),
            Task::new("t2", "s1", "b", "2025-01-01").with_status(TaskStatus::InProgress),
            Task::new("t3", "s1", "c", "2025-01-01").with_status(TaskStatus::Completed),
            Task::new("t4", "s2", "d", "2025-01-01").with_status(TaskStatus::Completed),
        ];
        let stats = task_stats(&tasks);

        assert_eq!(
            stats,
            TaskStats {
                total: 4,
                pending: 1,
                in_progress: 1,
                completed: 2
            }
        );
        assert_eq!(
            TaskStatus::ALL.iter().map(|s| stats.count(*s)).sum::<usize>(),
            stats.total
        );
    }
}
