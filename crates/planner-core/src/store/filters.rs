//! Filters store: the two active criteria.

use serde::{Deserialize, Serialize};

use crate::domain::{StatusFilter, SubjectFilter};

/// Active filter criteria. The two fields are independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersState {
    pub status_filter: StatusFilter,
    pub subject_filter: SubjectFilter,
}

impl FiltersState {
    pub fn new(status_filter: StatusFilter, subject_filter: SubjectFilter) -> Self {
        Self {
            status_filter,
            subject_filter,
        }
    }

    pub fn set_status_filter(&self, status_filter: StatusFilter) -> Self {
        Self {
            status_filter,
            ..self.clone()
        }
    }

    pub fn set_subject_filter(&self, subject_filter: SubjectFilter) -> Self {
        Self {
            subject_filter,
            ..self.clone()
        }
    }

    /// Same status criterion, subject criterion reset to `All`.
    pub fn status_only(&self) -> Self {
        self.set_subject_filter(SubjectFilter::All)
    }
}
