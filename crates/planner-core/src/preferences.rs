//! Settings preferences: start screen and task view mode.
//!
//! Held by the `Session` for as long as it lives. Nothing here is written to
//! disk, and the task list ordering is still by due date whatever mode is
//! selected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::ParseError;

/// Screen shown after login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DefaultView {
    #[default]
    Dashboard,
    Tasks,
}

impl DefaultView {
    pub const OPTIONS: [DefaultView; 2] = [DefaultView::Dashboard, DefaultView::Tasks];

    pub fn as_str(self) -> &'static str {
        match self {
            DefaultView::Dashboard => "dashboard",
            DefaultView::Tasks => "tasks",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DefaultView::Dashboard => "Dashboard",
            DefaultView::Tasks => "Tasks",
        }
    }
}

impl fmt::Display for DefaultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefaultView {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DefaultView::OPTIONS
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| ParseError::UnknownDefaultView(s.to_string()))
    }
}

/// How the user prefers to browse tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskViewMode {
    #[default]
    Date,
    Subject,
    Status,
}

impl TaskViewMode {
    pub const OPTIONS: [TaskViewMode; 3] = [
        TaskViewMode::Date,
        TaskViewMode::Subject,
        TaskViewMode::Status,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskViewMode::Date => "date",
            TaskViewMode::Subject => "subject",
            TaskViewMode::Status => "status",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskViewMode::Date => "By date",
            TaskViewMode::Subject => "By subject",
            TaskViewMode::Status => "By status",
        }
    }
}

impl fmt::Display for TaskViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskViewMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskViewMode::OPTIONS
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseError::UnknownTaskViewMode(s.to_string()))
    }
}

/// Both preferences together. Defaults: Dashboard, by date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPreferences {
    pub default_view: DefaultView,
    pub task_view_mode: TaskViewMode,
}

impl SettingsPreferences {
    pub fn with_default_view(self, default_view: DefaultView) -> Self {
        Self {
            default_view,
            ..self
        }
    }

    pub fn with_task_view_mode(self, task_view_mode: TaskViewMode) -> Self {
        Self {
            task_view_mode,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_match_first_options() {
        let prefs = SettingsPreferences::default();
        assert_eq!(prefs.default_view, DefaultView::OPTIONS[0]);
        assert_eq!(prefs.task_view_mode, TaskViewMode::OPTIONS[0]);
    }

    #[rstest]
    #[case("dashboard", DefaultView::Dashboard, "Dashboard")]
    #[case("tasks", DefaultView::Tasks, "Tasks")]
    fn default_view_tokens(#[case] token: &str, #[case] view: DefaultView, #[case] label: &str) {
        assert_eq!(token.parse::<DefaultView>(), Ok(view));
        assert_eq!(view.to_string(), token);
        assert_eq!(view.label(), label);
    }

    #[rstest]
    #[case("date", TaskViewMode::Date, "By date")]
    #[case("subject", TaskViewMode::Subject, "By subject")]
    #[case("status", TaskViewMode::Status, "By status")]
    fn task_view_mode_tokens(
        #[case] token: &str,
        #[case] mode: TaskViewMode,
        #[case] label: &str,
    ) {
        assert_eq!(token.parse::<TaskViewMode>(), Ok(mode));
        assert_eq!(mode.to_string(), token);
        assert_eq!(mode.label(), label);
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert_eq!(
            "settings".parse::<DefaultView>(),
            Err(ParseError::UnknownDefaultView("settings".to_string()))
        );
        assert_eq!(
            "Date".parse::<TaskViewMode>(),
            Err(ParseError::UnknownTaskViewMode("Date".to_string()))
        );
    }

    #[test]
    fn with_methods_change_one_field() {
        let prefs = SettingsPreferences::default()
            .with_task_view_mode(TaskViewMode::Status)
            .with_default_view(DefaultView::Tasks);
        assert_eq!(prefs.default_view, DefaultView::Tasks);
        assert_eq!(prefs.task_view_mode, TaskViewMode::Status);
    }

    #[test]
    fn serde_uses_camel_case_and_defaults() {
        let prefs = SettingsPreferences::default().with_default_view(DefaultView::Tasks);
        let json = serde_json::to_value(prefs).unwrap();
        assert_eq!(json["defaultView"], "tasks");
        assert_eq!(json["taskViewMode"], "date");

        let partial: SettingsPreferences =
            serde_json::from_str(r#"{"taskViewMode": "subject"}"#).unwrap();
        assert_eq!(partial.default_view, DefaultView::Dashboard);
        assert_eq!(partial.task_view_mode, TaskViewMode::Subject);
    }
}
