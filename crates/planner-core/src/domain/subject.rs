use serde::{Deserialize, Serialize};

use super::SubjectId;

/// A named, coloured category that tasks belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,

    /// Display colour token (e.g. `#4f46e5`).
    pub color: String,
}

impl Subject {
    pub fn new(id: impl Into<SubjectId>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}
