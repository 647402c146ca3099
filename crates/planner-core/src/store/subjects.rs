//! Subjects store: the subject collection.

use std::sync::Arc;

use tracing::warn;

use super::duplicate_ids;
use crate::domain::{StoreError, Subject, SubjectId};

/// Subject collection in insertion order.
///
/// Every mutation returns a new state; the `Arc` is shared with older
/// snapshots and never written through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectsState {
    subjects: Arc<Vec<Subject>>,
}

impl SubjectsState {
    pub fn new(subjects: Vec<Subject>) -> Self {
        Self::default().replace_all(subjects)
    }

    pub fn all(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// First subject with `id`.
    pub fn get(&self, id: &SubjectId) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.id == *id)
    }

    pub fn contains(&self, id: &SubjectId) -> bool {
        self.get(id).is_some()
    }

    /// Replace the whole collection.
    ///
    /// Only the structural shape is checked. Duplicate ids are admitted and logged.
    pub fn replace_all(&self, subjects: Vec<Subject>) -> Self {
        let duplicates = duplicate_ids(subjects.iter().map(|subject| &subject.id));
        if !duplicates.is_empty() {
            warn!(?duplicates, "bulk subject replace contains duplicate ids");
        }
        Self {
            subjects: Arc::new(subjects),
        }
    }

    /// Append one subject.
    ///
    /// # Errors
    /// - `EmptySubjectId` / `EmptySubjectName` for blank fields
    /// - `DuplicateSubjectId` when the id is already present
    pub fn add(&self, subject: Subject) -> Result<Self, StoreError> {
        if subject.id.is_blank() {
            return Err(StoreError::EmptySubjectId);
        }
        if subject.name.trim().is_empty() {
            return Err(StoreError::EmptySubjectName);
        }
        if self.contains(&subject.id) {
            return Err(StoreError::DuplicateSubjectId(subject.id));
        }

        let mut subjects = Vec::with_capacity(self.subjects.len() + 1);
        subjects.extend_from_slice(&self.subjects);
        subjects.push(subject);
        Ok(Self {
            subjects: Arc::new(subjects),
        })
    }
}
