//! Outbound task callbacks.
//!
//! # Responsibility
//! - Bundle the fixed set of named callbacks a list hands to every item.
//! - Provide a recording variant for previews and tests.
//!
//! # Invariants
//! - Both callbacks are required; there is no partially wired `TaskActions`.
//! - Dispatch is synchronous and fire-and-forget.

use crate::model::task::TaskId;
use log::debug;
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Mutex, PoisonError};

/// Callback signature shared by pin and archive.
pub type TaskCallback = Arc<dyn Fn(&TaskId) + Send + Sync>;

/// A state change requested by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaskIntent {
    Pin(TaskId),
    Archive(TaskId),
}

impl TaskIntent {
    /// Stable intent name used in logs and FFI envelopes.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pin(_) => "pin",
            Self::Archive(_) => "archive",
        }
    }

    pub fn task_id(&self) -> &TaskId {
        match self {
            Self::Pin(id) | Self::Archive(id) => id,
        }
    }
}

/// Named callbacks supplied once by the list's caller.
///
/// Cloning is cheap and every clone invokes the same underlying callbacks.
#[derive(Clone)]
pub struct TaskActions {
    on_pin: TaskCallback,
    on_archive: TaskCallback,
}

impl TaskActions {
    pub fn new(
        on_pin: impl Fn(&TaskId) + Send + Sync + 'static,
        on_archive: impl Fn(&TaskId) + Send + Sync + 'static,
    ) -> Self {
        Self {
            on_pin: Arc::new(on_pin),
            on_archive: Arc::new(on_archive),
        }
    }

    /// No-op callbacks for static previews.
    pub fn noop() -> Self {
        Self::new(|_| {}, |_| {})
    }

    /// Callbacks that append every intent to the returned log.
    pub fn recording() -> (Self, ActionLog) {
        let log = ActionLog::default();
        let pin_log = log.clone();
        let archive_log = log.clone();
        let actions = Self::new(
            move |id| pin_log.push(TaskIntent::Pin(id.clone())),
            move |id| archive_log.push(TaskIntent::Archive(id.clone())),
        );
        (actions, log)
    }

    pub fn pin(&self, id: &TaskId) {
        self.dispatch(&TaskIntent::Pin(id.clone()));
    }

    pub fn archive(&self, id: &TaskId) {
        self.dispatch(&TaskIntent::Archive(id.clone()));
    }

    /// Invokes the callback matching `intent`.
    pub fn dispatch(&self, intent: &TaskIntent) {
        debug!(
            "event=task_intent module=view intent={} task_id={}",
            intent.name(),
            intent.task_id()
        );
        match intent {
            TaskIntent::Pin(id) => (self.on_pin)(id),
            TaskIntent::Archive(id) => (self.on_archive)(id),
        }
    }

    /// Whether two handles share the same callbacks.
    pub fn same_callbacks(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.on_pin, &other.on_pin) && Arc::ptr_eq(&self.on_archive, &other.on_archive)
    }
}

impl Debug for TaskActions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskActions").finish_non_exhaustive()
    }
}

/// Ordered record of dispatched intents.
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    entries: Arc<Mutex<Vec<TaskIntent>>>,
}

impl ActionLog {
    fn push(&self, intent: TaskIntent) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(intent);
    }

    /// Snapshot of recorded intents in dispatch order.
    pub fn entries(&self) -> Vec<TaskIntent> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskActions, TaskIntent};
    use crate::model::task::TaskId;

    #[test]
    fn recording_actions_keep_dispatch_order() {
        let (actions, log) = TaskActions::recording();
        let first = TaskId::new("1").expect("id");
        let second = TaskId::new("2").expect("id");

        actions.pin(&first);
        actions.archive(&second);
        actions.clone().pin(&second);

        assert_eq!(
            log.entries(),
            vec![
                TaskIntent::Pin(first),
                TaskIntent::Archive(second.clone()),
                TaskIntent::Pin(second),
            ]
        );
    }

    #[test]
    fn clones_share_callbacks() {
        let actions = TaskActions::noop();
        assert!(actions.same_callbacks(&actions.clone()));
        assert!(!actions.same_callbacks(&TaskActions::noop()));
    }

    #[test]
    fn intent_names_are_stable() {
        let id = TaskId::new("7").expect("id");
        assert_eq!(TaskIntent::Pin(id.clone()).name(), "pin");
        assert_eq!(TaskIntent::Archive(id).name(), "archive");
    }
}
