//! Subject lookups that tolerate orphaned references.

use serde::Serialize;

use crate::domain::{Subject, SubjectId, Task};

/// The subject a task points at, or `None` when it does not exist.
pub fn subject_for_task<'a>(subjects: &'a [Subject], subject_id: &SubjectId) -> Option<&'a Subject> {
    subjects.iter().find(|subject| subject.id == *subject_id)
}

/// Number of tasks whose `subject_id` is `subject_id`. Works for unknown ids too.
pub fn task_count_for_subject<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    subject_id: &SubjectId,
) -> usize {
    tasks
        .into_iter()
        .filter(|task| task.subject_id == *subject_id)
        .count()
}

/// A subject with its task count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectSummary<'a> {
    pub subject: &'a Subject,
    pub task_count: usize,
}

/// One summary per subject, in subject order.
pub fn subject_summaries<'a>(subjects: &'a [Subject], tasks: &[Task]) -> Vec<SubjectSummary<'a>> {
    subjects
        .iter()
        .map(|subject| SubjectSummary {
            subject,
            task_count: task_count_for_subject(tasks, &subject.id),
        })
        .collect()
}
