//! Store module: slices, reducer, dispatch and subscriptions.
//!
//! Design intent:
//! - `AppState` is an immutable snapshot. Dispatch swaps the whole `Arc` in one
//!   step, so a reader holds either the old snapshot or the new one.
//! - Each slice is mutated only through its own methods, which return a new slice.
//! - Subscribers get one `Transition` per applied action, in dispatch order.

mod action;
mod builder;
mod filters;
mod reducer;
mod subjects;
mod subscription;
mod tasks;

pub use action::{Action, ActionKind};
pub use builder::{BuildError, StoreBuilder};
pub use filters::FiltersState;
pub use reducer::reduce;
pub use subjects::SubjectsState;
pub use subscription::{Subscription, Transition};
pub use tasks::TasksState;

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::config::PlannerConfig;
use crate::domain::{NewSubject, NewTask, StoreError, Subject, SubjectId, Task, TaskId, TaskStatus};
use crate::ports::{IdGenerator, SystemClock, UlidGenerator};

/// Snapshot of all three slices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub subjects: SubjectsState,
    pub tasks: TasksState,
    pub filters: FiltersState,
}

impl AppState {
    pub fn new(subjects: Vec<Subject>, tasks: Vec<Task>) -> Self {
        Self {
            subjects: SubjectsState::new(subjects),
            tasks: TasksState::new(tasks),
            filters: FiltersState::default(),
        }
    }
}

/// Result of a dispatch that was not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// State changed; subscribers were notified with this sequence number.
    Applied { sequence: u64 },

    /// Valid action that changed nothing (e.g. status update for an unknown id).
    Unchanged,
}

impl Dispatch {
    pub fn is_applied(self) -> bool {
        matches!(self, Dispatch::Applied { .. })
    }
}

/// In-process state store.
///
/// Single-threaded: every method runs to completion before the next one starts.
pub struct Store {
    state: Arc<AppState>,
    sequence: u64,
    subscribers: Vec<UnboundedSender<Transition>>,
    id_gen: Box<dyn IdGenerator>,
    config: PlannerConfig,
}

impl Store {
    /// Empty store with default config and ULID ids on the system clock.
    pub fn new() -> Self {
        Self::with_parts(
            AppState::default(),
            Box::new(UlidGenerator::new(SystemClock)),
            PlannerConfig::default(),
        )
    }

    pub(crate) fn with_parts(
        state: AppState,
        id_gen: Box<dyn IdGenerator>,
        config: PlannerConfig,
    ) -> Self {
        Self {
            state: Arc::new(state),
            sequence: 0,
            subscribers: Vec::new(),
            id_gen,
            config,
        }
    }

    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    /// Current snapshot. It stays valid after later dispatches.
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Number of applied actions so far.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Register a subscriber. It sees every transition applied after this call.
    pub fn subscribe(&mut self) -> Subscription {
        let (tx, subscription) = Subscription::channel();
        self.subscribers.push(tx);
        subscription
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Apply one action.
    ///
    /// # Errors
    /// Returns the slice's `StoreError` when the action is rejected; the state is
    /// left as it was and nobody is notified.
    pub fn dispatch(&mut self, action: Action) -> Result<Dispatch, StoreError> {
        let kind = action.kind();
        match reduce(&self.state, action) {
            Err(err) => {
                warn!(action = %kind, error = %err, "rejected action");
                Err(err)
            }
            Ok(None) => {
                debug!(action = %kind, "action left state unchanged");
                Ok(Dispatch::Unchanged)
            }
            Ok(Some(next)) => {
                self.sequence += 1;
                self.state = Arc::new(next);
                self.notify(kind);
                debug!(action = %kind, sequence = self.sequence, "applied action");
                Ok(Dispatch::Applied {
                    sequence: self.sequence,
                })
            }
        }
    }

    fn notify(&mut self, action: ActionKind) {
        let transition = Transition {
            sequence: self.sequence,
            action,
            state: Arc::clone(&self.state),
        };
        // Closed receivers are dropped from the list here.
        self.subscribers
            .retain(|tx| tx.send(transition.clone()).is_ok());
    }

    /// Validate a subject form, give it a fresh id and add it.
    pub fn create_subject(&mut self, draft: NewSubject) -> Result<SubjectId, StoreError> {
        let subject = draft.into_subject(self.id_gen.generate_subject_id())?;
        let id = subject.id.clone();
        self.dispatch(Action::AddSubject(subject))?;
        Ok(id)
    }

    /// Validate a task form, give it a fresh id and add it as pending.
    pub fn create_task(&mut self, draft: NewTask) -> Result<TaskId, StoreError> {
        let task = draft.into_task(self.id_gen.generate_task_id())?;
        let id = task.id.clone();
        self.dispatch(Action::AddTask(task))?;
        Ok(id)
    }

    /// Quick action: move a task one step along the status cycle.
    ///
    /// Built on the general `UpdateTaskStatus` setter. Unknown ids are a no-op.
    pub fn advance_task_status(&mut self, id: &TaskId) -> Result<Dispatch, StoreError> {
        let Some(current) = self.state.tasks.get(id).map(|task| task.status) else {
            debug!(%id, "advance requested for unknown task");
            return Ok(Dispatch::Unchanged);
        };
        self.set_task_status(id, current.next())
    }

    /// General setter: any target status.
    pub fn set_task_status(
        &mut self,
        id: &TaskId,
        status: TaskStatus,
    ) -> Result<Dispatch, StoreError> {
        self.dispatch(Action::UpdateTaskStatus {
            id: id.clone(),
            status,
        })
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Ids that occur more than once, each reported once, in first-repeat order.
pub(crate) fn duplicate_ids<'a, K, I>(ids: I) -> Vec<&'a K>
where
    K: Eq + Hash + 'a,
    I: IntoIterator<Item = &'a K>,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    ids.into_iter()
        .filter(|id| !seen.insert(*id) && reported.insert(*id))
        .collect()
}
