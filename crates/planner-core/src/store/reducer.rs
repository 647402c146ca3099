//! Root reducer.
//!
//! `reduce` is pure: it reads the current snapshot and returns the next one.
//! Slices the action does not touch are cloned as `Arc`s, so consecutive
//! snapshots share them.

use super::{Action, AppState, FiltersState};
use crate::domain::StoreError;

/// Apply `action` to `state`.
///
/// Returns `Ok(None)` when the action is valid but changes nothing.
pub fn reduce(state: &AppState, action: Action) -> Result<Option<AppState>, StoreError> {
    let next = match action {
        Action::AddSubject(subject) => AppState {
            subjects: state.subjects.add(subject)?,
            ..state.clone()
        },
        Action::ReplaceSubjects(subjects) => AppState {
            subjects: state.subjects.replace_all(subjects),
            ..state.clone()
        },
        Action::AddTask(task) => AppState {
            tasks: state.tasks.add(task)?,
            ..state.clone()
        },
        Action::ReplaceTasks(tasks) => AppState {
            tasks: state.tasks.replace_all(tasks),
            ..state.clone()
        },
        Action::UpdateTaskStatus { id, status } => {
            let Some(tasks) = state.tasks.update_status(&id, status) else {
                return Ok(None);
            };
            AppState {
                tasks,
                ..state.clone()
            }
        }
        Action::SetStatusFilter(status_filter) => {
            let filters = state.filters.set_status_filter(status_filter);
            return Ok(with_filters(state, filters));
        }
        Action::SetSubjectFilter(subject_filter) => {
            let filters = state.filters.set_subject_filter(subject_filter);
            return Ok(with_filters(state, filters));
        }
    };
    Ok(Some(next))
}

// Re-selecting the active filter is a no-op.
fn with_filters(state: &AppState, filters: FiltersState) -> Option<AppState> {
    (filters != state.filters).then(|| AppState {
        filters,
        ..state.clone()
    })
}
