//! Tasks store: the task collection.
//!
//! State rules:
//! - New tasks always enter as `Pending`.
//! - `update_status` is a general setter: any target status is accepted.
//!   The quick-action cycle lives in `TaskStatus::next` and `Store::advance_task_status`.

use std::sync::Arc;

use tracing::warn;

use super::duplicate_ids;
use crate::domain::{StoreError, Task, TaskId, TaskStatus};

/// Task collection in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TasksState {
    tasks: Arc<Vec<Task>>,
}

impl TasksState {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self::default().replace_all(tasks)
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// First task with `id`.
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == *id)
    }

    /// Replace the whole collection. Statuses are taken as given.
    pub fn replace_all(&self, tasks: Vec<Task>) -> Self {
        let duplicates = duplicate_ids(tasks.iter().map(|task| &task.id));
        if !duplicates.is_empty() {
            warn!(?duplicates, "bulk task replace contains duplicate ids");
        }
        Self {
            tasks: Arc::new(tasks),
        }
    }

    /// Append one task with its status forced to `Pending`.
    ///
    /// # Errors
    /// - `EmptyTaskId`, `EmptyTaskTitle`, `MissingSubject`, `EmptyDueDate` for blank fields
    /// - `DuplicateTaskId` when the id is already present
    pub fn add(&self, mut task: Task) -> Result<Self, StoreError> {
        if task.id.is_blank() {
            return Err(StoreError::EmptyTaskId);
        }
        if task.title.trim().is_empty() {
            return Err(StoreError::EmptyTaskTitle);
        }
        if task.subject_id.is_blank() {
            return Err(StoreError::MissingSubject);
        }
        if task.due_date.is_blank() {
            return Err(StoreError::EmptyDueDate);
        }
        if self.get(&task.id).is_some() {
            return Err(StoreError::DuplicateTaskId(task.id));
        }

        task.status = TaskStatus::Pending;
        let mut tasks = Vec::with_capacity(self.tasks.len() + 1);
        tasks.extend_from_slice(&self.tasks);
        tasks.push(task);
        Ok(Self {
            tasks: Arc::new(tasks),
        })
    }

    /// Set the status of every task with `id`.
    ///
    /// Returns `None` when nothing changes: the id is unknown, or the task
    /// already has `status`. Never creates a task.
    pub fn update_status(&self, id: &TaskId, status: TaskStatus) -> Option<Self> {
        let changed = self
            .tasks
            .iter()
            .any(|task| task.id == *id && task.status != status);
        if !changed {
            return None;
        }

        let tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == *id {
                    Task {
                        status,
                        ..task.clone()
                    }
                } else {
                    task.clone()
                }
            })
            .collect();
        Some(Self {
            tasks: Arc::new(tasks),
        })
    }
}
