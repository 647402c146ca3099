//! Session identity: the display name typed at login, plus the Settings
//! preferences picked during this session.
//!
//! Free text, no validation, not stored anywhere. Only the Settings view reads it.

use serde::{Deserialize, Serialize};

use crate::preferences::{DefaultView, SettingsPreferences, TaskViewMode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    display_name: String,
    #[serde(default)]
    preferences: SettingsPreferences,
}

impl Session {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            preferences: SettingsPreferences::default(),
        }
    }

    pub fn preferences(&self) -> SettingsPreferences {
        self.preferences
    }

    pub fn set_default_view(&mut self, default_view: DefaultView) {
        self.preferences = self.preferences.with_default_view(default_view);
    }

    pub fn set_task_view_mode(&mut self, task_view_mode: TaskViewMode) {
        self.preferences = self.preferences.with_task_view_mode(task_view_mode);
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Uppercased first character, used as an avatar.
    pub fn initial(&self) -> Option<char> {
        self.display_name
            .trim_start()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_uppercased() {
        assert_eq!(Session::new("ana").initial(), Some('A'));
        assert_eq!(Session::new("  émile").initial(), Some('É'));
        assert_eq!(Session::new("").initial(), None);
    }

    #[test]
    fn preferences_start_at_defaults_and_change_in_place() {
        let mut session = Session::new("ana");
        assert_eq!(session.preferences(), SettingsPreferences::default());

        session.set_default_view(DefaultView::Tasks);
        session.set_task_view_mode(TaskViewMode::Subject);
        assert_eq!(session.preferences().default_view, DefaultView::Tasks);
        assert_eq!(session.preferences().task_view_mode, TaskViewMode::Subject);
        assert_eq!(session.display_name(), "ana");
    }

    #[test]
    fn name_is_kept_verbatim() {
        assert_eq!(Session::new(" Ana María ").display_name(), " Ana María ");
    }
}
