//! Filter criteria.
//!
//! `All` is a sentinel, not a member of the domain: matching against it
//! short-circuits to `true` without looking at the task.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ParseError;
use super::{SubjectId, Task, TaskStatus};

const ALL: &str = "all";

/// Status criterion: `"all"` or one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(TaskStatus),
}

impl StatusFilter {
    /// Every selectable option, in chip order.
    pub const OPTIONS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(TaskStatus::Pending),
        StatusFilter::Only(TaskStatus::InProgress),
        StatusFilter::Only(TaskStatus::Completed),
    ];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => task.status == *status,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, StatusFilter::All)
    }

    /// Chip label.
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.label(),
        }
    }
}

impl From<TaskStatus> for StatusFilter {
    fn from(status: TaskStatus) -> Self {
        StatusFilter::Only(status)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str(ALL),
            StatusFilter::Only(status) => fmt::Display::fmt(status, f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL {
            return Ok(StatusFilter::All);
        }
        s.parse::<TaskStatus>()
            .map(StatusFilter::Only)
            .map_err(|_| ParseError::UnknownStatusFilter(s.to_string()))
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        filter.to_string()
    }
}

/// Subject criterion: `"all"` or one subject id.
///
/// The id is not checked against the subjects store; an id nobody uses
/// simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SubjectFilter {
    #[default]
    All,
    Only(SubjectId),
}

impl SubjectFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            SubjectFilter::All => true,
            SubjectFilter::Only(subject_id) => task.subject_id == *subject_id,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SubjectFilter::All)
    }
}

impl From<SubjectId> for SubjectFilter {
    fn from(subject_id: SubjectId) -> Self {
        SubjectFilter::Only(subject_id)
    }
}

impl fmt::Display for SubjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectFilter::All => f.write_str(ALL),
            SubjectFilter::Only(subject_id) => fmt::Display::fmt(subject_id, f),
        }
    }
}

impl FromStr for SubjectFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ALL => Ok(SubjectFilter::All),
            "" => Err(ParseError::EmptySubjectFilter),
            id => Ok(SubjectFilter::Only(SubjectId::new(id))),
        }
    }
}

impl TryFrom<String> for SubjectFilter {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SubjectFilter> for String {
    fn from(filter: SubjectFilter) -> Self {
        filter.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn task(subject: &str, status: TaskStatus) -> Task {
        Task::new("t", subject, "title", "2025-01-01").with_status(status)
    }

    #[rstest]
    #[case::all(StatusFilter::All, TaskStatus::Completed, true)]
    #[case::same(StatusFilter::Only(TaskStatus::Pending), TaskStatus::Pending, true)]
    #[case::different(StatusFilter::Only(TaskStatus::Pending), TaskStatus::InProgress, false)]
    fn status_filter_matches(
        #[case] filter: StatusFilter,
        #[case] status: TaskStatus,
        #[case] expected: bool,
    ) {
        assert_eq!(filter.matches(&task("s1", status)), expected);
    }

    #[test]
    fn subject_filter_matches_by_id() {
        let t = task("s1", TaskStatus::Pending);
        assert!(SubjectFilter::All.matches(&t));
        assert!(SubjectFilter::Only(SubjectId::new("s1")).matches(&t));
        assert!(!SubjectFilter::Only(SubjectId::new("s2")).matches(&t));
    }

    #[rstest]
    #[case("all", StatusFilter::All)]
    #[case("pending", StatusFilter::Only(TaskStatus::Pending))]
    #[case("inProgress", StatusFilter::Only(TaskStatus::InProgress))]
    #[case("completed", StatusFilter::Only(TaskStatus::Completed))]
    fn status_filter_tokens(#[case] token: &str, #[case] expected: StatusFilter) {
        assert_eq!(token.parse::<StatusFilter>().unwrap(), expected);
        assert_eq!(expected.to_string(), token);
    }

    #[test]
    fn unknown_status_filter_is_rejected() {
        assert_eq!(
            "done".parse::<StatusFilter>(),
            Err(ParseError::UnknownStatusFilter("done".to_string()))
        );
    }

    #[test]
    fn subject_filter_serializes_as_string() {
        let json = serde_json::to_string(&SubjectFilter::Only(SubjectId::new("s1"))).unwrap();
        assert_eq!(json, "\"s1\"");

        let all: SubjectFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(all, SubjectFilter::All);
        assert!(serde_json::from_str::<SubjectFilter>("\"\"").is_err());
    }
}
