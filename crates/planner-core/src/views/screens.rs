//! Screen projections.
//!
//! Each view borrows from one `AppState` snapshot and is rebuilt after every
//! transition. Controls such as filter chips read their selection from the
//! snapshot; nothing here keeps a copy of store state.

use serde::Serialize;

use super::stats::{TaskStats, task_stats};
use super::subjects::{SubjectSummary, subject_for_task, subject_summaries};
use super::tasks::{filtered_sorted_tasks, upcoming_tasks};
use crate::domain::{StatusFilter, Subject, SubjectFilter, Task, TaskStatus};
use crate::preferences::{DefaultView, TaskViewMode};
use crate::session::Session;
use crate::store::AppState;

/// What a task row shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCard<'a> {
    pub task: &'a Task,
    /// `None` when the task points at a subject that does not exist.
    pub subject: Option<&'a Subject>,
    pub status_label: &'static str,
    pub status_color: &'static str,
    /// Status the quick-action button moves to.
    pub next_status: TaskStatus,
    /// Formatted date, or the raw string when it cannot be parsed.
    pub due_label: String,
}

impl<'a> TaskCard<'a> {
    pub fn new(task: &'a Task, subjects: &'a [Subject]) -> Self {
        Self {
            task,
            subject: subject_for_task(subjects, &task.subject_id),
            status_label: task.status.label(),
            status_color: task.status.color(),
            next_status: task.status.next(),
            due_label: task.due_date.display(),
        }
    }
}

/// One status filter chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterChip {
    pub filter: StatusFilter,
    pub label: &'static str,
    pub selected: bool,
}

pub fn filter_chips(active: StatusFilter) -> Vec<FilterChip> {
    StatusFilter::OPTIONS
        .into_iter()
        .map(|filter| FilterChip {
            filter,
            label: filter.label(),
            selected: filter == active,
        })
        .collect()
}

fn cards<'a>(tasks: Vec<&'a Task>, subjects: &'a [Subject]) -> Vec<TaskCard<'a>> {
    tasks
        .into_iter()
        .map(|task| TaskCard::new(task, subjects))
        .collect()
}

/// Dashboard: greeting, stats, status chips, upcoming tasks, subject list.
///
/// The upcoming list uses the active status filter only; the subject filter
/// belongs to the Tasks screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView<'a> {
    pub greeting_name: &'a str,
    pub stats: TaskStats,
    pub chips: Vec<FilterChip>,
    pub upcoming: Vec<TaskCard<'a>>,
    pub subjects: &'a [Subject],
}

impl<'a> DashboardView<'a> {
    pub fn build(state: &'a AppState, session: &'a Session, upcoming_limit: usize) -> Self {
        let tasks = state.tasks.all();
        let subjects = state.subjects.all();
        let filters = state.filters.status_only();
        Self {
            greeting_name: session.display_name(),
            stats: task_stats(tasks),
            chips: filter_chips(state.filters.status_filter),
            upcoming: cards(upcoming_tasks(tasks, &filters, upcoming_limit), subjects),
            subjects,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty()
    }
}

/// Tasks screen: both filters and the full sorted list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TasksView<'a> {
    pub chips: Vec<FilterChip>,
    pub subject_filter: &'a SubjectFilter,
    /// Subjects offered by the subject filter and the new-task form.
    pub subject_options: &'a [Subject],
    pub cards: Vec<TaskCard<'a>>,
    pub visible_count: usize,
    /// Every task in the store, filters ignored.
    pub total_count: usize,
    /// Header line, e.g. `2 of 5 tasks`.
    pub count_label: String,
}

impl<'a> TasksView<'a> {
    pub fn build(state: &'a AppState) -> Self {
        let subjects = state.subjects.all();
        let cards = cards(filtered_sorted_tasks(state.tasks.all(), &state.filters), subjects);
        let visible_count = cards.len();
        let total_count = state.tasks.len();
        let noun = if total_count == 1 { "task" } else { "tasks" };
        Self {
            chips: filter_chips(state.filters.status_filter),
            subject_filter: &state.filters.subject_filter,
            subject_options: subjects,
            cards,
            visible_count,
            total_count,
            count_label: format!("{visible_count} of {total_count} {noun}"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Subjects screen: every subject with its task count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectsView<'a> {
    pub summaries: Vec<SubjectSummary<'a>>,
    pub count_label: String,
}

impl<'a> SubjectsView<'a> {
    pub fn build(state: &'a AppState) -> Self {
        let count = state.subjects.len();
        let noun = if count == 1 { "subject" } else { "subjects" };
        Self {
            summaries: subject_summaries(state.subjects.all(), state.tasks.all()),
            count_label: format!("{count} {noun} registered"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

/// One selectable preference on the Settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreferenceOption<T> {
    pub value: T,
    pub label: &'static str,
    pub selected: bool,
}

fn preference_options<T: Copy + PartialEq>(
    options: impl IntoIterator<Item = T>,
    label: impl Fn(T) -> &'static str,
    active: T,
) -> Vec<PreferenceOption<T>> {
    options
        .into_iter()
        .map(|value| PreferenceOption {
            value,
            label: label(value),
            selected: value == active,
        })
        .collect()
}

/// Settings screen: the session's name, avatar initial and preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView<'a> {
    pub display_name: &'a str,
    pub initial: Option<char>,
    pub default_view_options: Vec<PreferenceOption<DefaultView>>,
    pub task_view_mode_options: Vec<PreferenceOption<TaskViewMode>>,
}

impl<'a> SettingsView<'a> {
    pub fn build(session: &'a Session) -> Self {
        let prefs = session.preferences();
        Self {
            display_name: session.display_name(),
            initial: session.initial(),
            default_view_options: preference_options(
                DefaultView::OPTIONS,
                DefaultView::label,
                prefs.default_view,
            ),
            task_view_mode_options: preference_options(
                TaskViewMode::OPTIONS,
                TaskViewMode::label,
                prefs.task_view_mode,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SubjectId, TaskId};
    use crate::store::{Action, reduce};

    fn state() -> AppState {
        AppState::new(
            vec![
                Subject::new("s1", "Math", "#000"),
                Subject::new("s2", "Art", "#ec4899"),
            ],
            vec![
                Task::new("t1", "s1", "HW", "2025-01-10"),
                Task::new("t2", "s1", "Quiz", "2025-01-05").with_status(TaskStatus::Completed),
                Task::new("t3", "missing", "Orphan", "someday"),
                Task::new("t4", "s2", "Sketch", "2025-01-07"),
                Task::new("t5", "s2", "Paint", "2025-01-01").with_status(TaskStatus::InProgress),
            ],
        )
    }

    fn apply(state: &AppState, action: Action) -> AppState {
        reduce(state, action).unwrap().unwrap()
    }

    #[test]
    fn card_handles_orphaned_subject() {
        let state = state();
        let task = state.tasks.get(&TaskId::new("t3")).unwrap();
        let card = TaskCard::new(task, state.subjects.all());

        assert!(card.subject.is_none());
        assert_eq!(card.due_label, "someday");
        assert_eq!(card.status_label, "Pending");
        assert_eq!(card.next_status, TaskStatus::InProgress);
    }

    #[test]
    fn dashboard_ignores_subject_filter() {
        let state = apply(
            &state(),
            Action::SetSubjectFilter(SubjectFilter::Only(SubjectId::new("s1"))),
        );
        let session = Session::new("Ana");
        let view = DashboardView::build(&state, &session, 3);

        let ids: Vec<_> = view.upcoming.iter().map(|c| c.task.id.as_str()).collect();
        assert_eq!(ids, vec!["t5", "t2", "t4"]);
        assert_eq!(view.stats.total, 5);
        assert_eq!(view.greeting_name, "Ana");
    }

    #[test]
    fn dashboard_chips_mirror_store_selection() {
        let state = apply(
            &state(),
            Action::SetStatusFilter(StatusFilter::Only(TaskStatus::Completed)),
        );
        let session = Session::new("Ana");
        let view = DashboardView::build(&state, &session, 3);

        let selected: Vec<_> = view.chips.iter().filter(|c| c.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].filter, StatusFilter::Only(TaskStatus::Completed));
        assert_eq!(view.upcoming.len(), 1);
        assert_eq!(view.upcoming[0].task.id.as_str(), "t2");
    }

    #[test]
    fn tasks_view_applies_both_filters() {
        let state = apply(
            &apply(
                &state(),
                Action::SetSubjectFilter(SubjectFilter::Only(SubjectId::new("s2"))),
            ),
            Action::SetStatusFilter(StatusFilter::Only(TaskStatus::Pending)),
        );
        let view = TasksView::build(&state);

        let ids: Vec<_> = view.cards.iter().map(|c| c.task.id.as_str()).collect();
        assert_eq!(ids, vec!["t4"]);
        assert_eq!(view.subject_options.len(), 2);
        assert_eq!(view.visible_count, 1);
        assert_eq!(view.total_count, 5);
        assert_eq!(view.count_label, "1 of 5 tasks");
    }

    #[test]
    fn tasks_view_counts_without_filters() {
        let st = state();
        let view = TasksView::build(&st);
        assert_eq!((view.visible_count, view.total_count), (5, 5));
        assert_eq!(view.count_label, "5 of 5 tasks");

        let single = AppState::new(vec![], vec![Task::new("t1", "s1", "HW", "2025-01-10")]);
        assert_eq!(TasksView::build(&single).count_label, "1 of 1 task");
    }

    #[test]
    fn empty_views_are_not_errors() {
        let state = apply(
            &state(),
            Action::SetSubjectFilter(SubjectFilter::Only(SubjectId::new("nobody"))),
        );
        assert!(TasksView::build(&state).is_empty());
        assert!(SubjectsView::build(&AppState::default()).is_empty());
    }

    #[test]
    fn subjects_view_counts_and_label() {
        let state = state();
        let view = SubjectsView::build(&state);

        assert_eq!(view.count_label, "2 subjects registered");
        assert_eq!(view.summaries[0].task_count, 2);
        assert_eq!(view.summaries[1].task_count, 2);

        let single = AppState::new(vec![Subject::new("s1", "Math", "#000")], vec![]);
        assert_eq!(SubjectsView::build(&single).count_label, "1 subject registered");
    }

    #[test]
    fn settings_view_reads_session() {
        let session = Session::new("ana");
        let view = SettingsView::build(&session);
        assert_eq!(view.display_name, "ana");
        assert_eq!(view.initial, Some('A'));

        let selected: Vec<_> = view
            .default_view_options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value)
            .collect();
        assert_eq!(selected, vec![DefaultView::Dashboard]);
        let labels: Vec<_> = view.task_view_mode_options.iter().map(|o| o.label).collect();
        assert_eq!(labels, vec!["By date", "By subject", "By status"]);
        assert!(view.task_view_mode_options[0].selected);
    }

    #[test]
    fn settings_view_follows_changed_preferences() {
        let mut session = Session::new("ana");
        session.set_default_view(DefaultView::Tasks);
        session.set_task_view_mode(TaskViewMode::Status);
        let view = SettingsView::build(&session);

        let default_view: Vec<_> = view.default_view_options.iter().map(|o| o.selected).collect();
        assert_eq!(default_view, vec![false, true]);
        let mode: Vec<_> = view.task_view_mode_options.iter().map(|o| o.selected).collect();
        assert_eq!(mode, vec![false, false, true]);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["defaultViewOptions"][1]["value"], "tasks");
        assert_eq!(json["taskViewModeOptions"][2]["label"], "By status");
    }

    #[test]
    fn views_serialize() {
        let state = state();
        let json = serde_json::to_value(TasksView::build(&state)).unwrap();
        assert_eq!(json["cards"][0]["task"]["id"], "t5");
        assert_eq!(json["cards"][0]["statusLabel"], "In progress");
        assert_eq!(json["subjectFilter"], "all");
    }
}
