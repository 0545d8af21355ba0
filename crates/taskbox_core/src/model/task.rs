//! Task record and lifecycle state.
//!
//! # Responsibility
//! - Define the read-only record rendered by task item and task list views.
//! - Own the wire vocabulary for task states.
//!
//! # Invariants
//! - `TaskId` is non-empty after trimming; deserialization enforces this.
//! - Unknown state strings are rejected, never mapped to a default.
//! - Nothing in this crate mutates a `Task` after construction; state
//!   changes are requested through callbacks and applied by the caller.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wire value for inbox state.
pub const TASK_STATE_INBOX: &str = "INBOX";
/// Wire value for pinned state.
pub const TASK_STATE_PINNED: &str = "PINNED";
/// Wire value for archived state.
pub const TASK_STATE_ARCHIVED: &str = "ARCHIVED";

const LEGACY_TASK_STATE_INBOX: &str = "TASK_INBOX";
const LEGACY_TASK_STATE_PINNED: &str = "TASK_PINNED";
const LEGACY_TASK_STATE_ARCHIVED: &str = "TASK_ARCHIVED";

/// Stable caller-provided task identity.
///
/// Used as the render key for list rows and as the callback argument.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(String);

impl TaskId {
    /// Creates a task ID, rejecting blank values.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        Ok(Self(value))
    }

    /// Builds an ID from a literal known to be non-empty.
    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(!value.trim().is_empty());
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskId {
    type Error = TaskValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for TaskId {
    type Error = TaskValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskId> for String {
    fn from(value: TaskId) -> Self {
        value.0
    }
}

/// Lifecycle state of a task.
///
/// Serde goes through `parse_task_state`, so every string boundary accepts
/// the same vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum TaskState {
    /// Default state; rendered after pinned tasks.
    Inbox,
    /// Placed ahead of every non-pinned task in list order.
    Pinned,
    /// Checked in the item view; hides the pin affordance.
    Archived,
}

impl TaskState {
    /// Stable wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => TASK_STATE_INBOX,
            Self::Pinned => TASK_STATE_PINNED,
            Self::Archived => TASK_STATE_ARCHIVED,
        }
    }
}

impl Display for TaskState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for TaskState {
    type Error = TaskStateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_task_state(&value)
    }
}

impl From<TaskState> for &'static str {
    fn from(value: TaskState) -> Self {
        value.as_str()
    }
}

impl std::str::FromStr for TaskState {
    type Err = TaskStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_task_state(s)
    }
}

/// Parses one task state from its wire string.
///
/// Accepts `INBOX|PINNED|ARCHIVED` and the `TASK_`-prefixed forms.
/// Matching is exact-case after trimming surrounding whitespace.
///
/// # Errors
/// - `EmptyState` for blank input.
/// - `UnsupportedState` for anything else outside the fixed set.
pub fn parse_task_state(value: &str) -> Result<TaskState, TaskStateError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(TaskStateError::EmptyState);
    }

    match normalized {
        TASK_STATE_INBOX | LEGACY_TASK_STATE_INBOX => Ok(TaskState::Inbox),
        TASK_STATE_PINNED | LEGACY_TASK_STATE_PINNED => Ok(TaskState::Pinned),
        TASK_STATE_ARCHIVED | LEGACY_TASK_STATE_ARCHIVED => Ok(TaskState::Archived),
        other => Err(TaskStateError::UnsupportedState(other.to_string())),
    }
}

/// Task state parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStateError {
    EmptyState,
    UnsupportedState(String),
}

impl Display for TaskStateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyState => write!(f, "task state must not be empty"),
            Self::UnsupportedState(value) => write!(
                f,
                "task state is unsupported: {value}; expected INBOX|PINNED|ARCHIVED"
            ),
        }
    }
}

impl Error for TaskStateError {}

/// Task construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "task id must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// A single task as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub state: TaskState,
}

impl Task {
    /// Creates an inbox task.
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            state: TaskState::Inbox,
        }
    }

    /// Builder-style state override.
    pub fn with_state(mut self, state: TaskState) -> Self {
        self.state = state;
        self
    }

    pub fn is_pinned(&self) -> bool {
        self.state == TaskState::Pinned
    }

    pub fn is_archived(&self) -> bool {
        self.state == TaskState::Archived
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_task_state, TaskId, TaskState, TaskStateError, TaskValidationError};

    #[test]
    fn parses_plain_and_prefixed_states() {
        assert_eq!(parse_task_state("INBOX").expect("inbox"), TaskState::Inbox);
        assert_eq!(
            parse_task_state("TASK_PINNED").expect("legacy pinned"),
            TaskState::Pinned
        );
        assert_eq!(
            parse_task_state(" ARCHIVED ").expect("trimmed archived"),
            TaskState::Archived
        );
    }

    #[test]
    fn rejects_empty_state() {
        let err = parse_task_state("  ").expect_err("blank state must fail");
        assert_eq!(err, TaskStateError::EmptyState);
    }

    #[test]
    fn rejects_unknown_and_wrong_case_states() {
        let err = parse_task_state("DONE").expect_err("unknown state must fail");
        assert_eq!(err, TaskStateError::UnsupportedState("DONE".to_string()));

        let err = parse_task_state("pinned").expect_err("lowercase must fail");
        assert_eq!(err, TaskStateError::UnsupportedState("pinned".to_string()));
    }

    #[test]
    fn state_round_trips_through_as_str() {
        for state in [TaskState::Inbox, TaskState::Pinned, TaskState::Archived] {
            assert_eq!(parse_task_state(state.as_str()).expect("parse"), state);
        }
    }

    #[test]
    fn task_id_rejects_blank_values() {
        assert_eq!(TaskId::new(" \t").unwrap_err(), TaskValidationError::EmptyId);
        assert_eq!(TaskId::new("1").expect("id").as_str(), "1");
    }
}
