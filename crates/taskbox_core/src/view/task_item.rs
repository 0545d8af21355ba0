//! Single task row view.
//!
//! # Responsibility
//! - Project one task into checkbox, read-only title and affordances.
//! - Wire affordances to the caller's `TaskActions`.
//!
//! # Invariants
//! - `checked` mirrors `state == Archived` and carries no callback.
//! - The title is always read-only.
//! - The pin affordance exists iff the task is not archived.
//! - Activating an affordance never propagates to the enclosing list.

use crate::model::task::{Task, TaskId, TaskState};
use crate::view::actions::{TaskActions, TaskIntent};

/// Label shown on the pin affordance.
pub const PIN_LABEL: &str = "Pin";
/// Archive affordance label for non-archived tasks.
pub const ARCHIVE_LABEL: &str = "Archive";
/// Archive affordance label for archived tasks.
pub const UNARCHIVE_LABEL: &str = "Unarchive";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffordanceKind {
    Pin,
    Archive,
}

/// What the enclosing view should do with an activation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stopped,
}

/// An interactive control bound to one task intent.
#[derive(Debug, Clone)]
pub struct Affordance {
    kind: AffordanceKind,
    label: &'static str,
    intent: TaskIntent,
    actions: TaskActions,
}

impl Affordance {
    fn new(
        kind: AffordanceKind,
        label: &'static str,
        intent: TaskIntent,
        actions: &TaskActions,
    ) -> Self {
        Self {
            kind,
            label,
            intent,
            actions: actions.clone(),
        }
    }

    pub fn kind(&self) -> AffordanceKind {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Intent dispatched on activation.
    pub fn intent(&self) -> &TaskIntent {
        &self.intent
    }

    /// Fires the bound callback and contains the event.
    pub fn activate(&self) -> Propagation {
        self.actions.dispatch(&self.intent);
        Propagation::Stopped
    }
}

impl PartialEq for Affordance {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.label == other.label
            && self.intent == other.intent
            && self.actions.same_callbacks(&other.actions)
    }
}

/// Rendered task row.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskItemView {
    /// Render key.
    pub id: TaskId,
    pub title: String,
    pub state: TaskState,
    /// Checkbox state; display only.
    pub checked: bool,
    pub title_read_only: bool,
    /// Explicit archive toggle, distinct from pin.
    pub archive: Affordance,
    pub pin: Option<Affordance>,
}

impl TaskItemView {
    /// Returns the affordance of `kind`, if rendered.
    pub fn affordance(&self, kind: AffordanceKind) -> Option<&Affordance> {
        match kind {
            AffordanceKind::Archive => Some(&self.archive),
            AffordanceKind::Pin => self.pin.as_ref(),
        }
    }
}

/// Renders one task row.
pub fn render_task_item(task: &Task, actions: &TaskActions) -> TaskItemView {
    let archived = task.is_archived();
    let archive_label = if archived {
        UNARCHIVE_LABEL
    } else {
        ARCHIVE_LABEL
    };
    let archive = Affordance::new(
        AffordanceKind::Archive,
        archive_label,
        TaskIntent::Archive(task.id.clone()),
        actions,
    );
    let pin = (!archived).then(|| {
        Affordance::new(
            AffordanceKind::Pin,
            PIN_LABEL,
            TaskIntent::Pin(task.id.clone()),
            actions,
        )
    });

    TaskItemView {
        id: task.id.clone(),
        title: task.title.clone(),
        state: task.state,
        checked: archived,
        title_read_only: true,
        archive,
        pin,
    }
}
