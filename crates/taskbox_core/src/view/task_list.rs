//! Task list view with loading, empty and listing modes.
//!
//! # Responsibility
//! - Select exactly one render mode per call.
//! - Derive display order and delegate rows to the task item view.
//!
//! # Invariants
//! - Precedence is strict: loading, then empty, then listing.
//! - While loading, `tasks` is never inspected.
//! - Display order is a stable partition: pinned tasks first, each group
//!   keeps its input order.
//! - Every row receives the same `TaskActions` handle.
//!
//! Duplicate task IDs are not detected; row identity is then undefined.

use crate::model::task::Task;
use crate::view::actions::TaskActions;
use crate::view::task_item::{render_task_item, TaskItemView};
use log::trace;

/// Number of placeholder rows shown while loading.
pub const LOADING_ROW_COUNT: usize = 6;
/// Placeholder words shown in each loading row.
pub const LOADING_ROW_TEXT: [&str; 3] = ["Loading", "cool", "state"];
/// Icon name for the empty placeholder.
pub const EMPTY_ICON: &str = "check";
pub const EMPTY_TITLE: &str = "You have no tasks";
pub const EMPTY_SUBTITLE: &str = "Sit back and relax";

/// Input contract for the task list.
#[derive(Debug, Clone)]
pub struct TaskListProps<'a> {
    pub loading: bool,
    pub tasks: &'a [Task],
    pub actions: TaskActions,
}

impl<'a> TaskListProps<'a> {
    pub fn new(tasks: &'a [Task], actions: TaskActions) -> Self {
        Self {
            loading: false,
            tasks,
            actions,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

/// Dataless skeleton row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingRow;

impl LoadingRow {
    pub fn text(&self) -> [&'static str; 3] {
        LOADING_ROW_TEXT
    }
}

/// Static placeholder for an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            icon: EMPTY_ICON,
            title: EMPTY_TITLE,
            subtitle: EMPTY_SUBTITLE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Loading,
    Empty,
    Listing,
}

impl RenderMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Empty => "empty",
            Self::Listing => "listing",
        }
    }
}

/// Rendered task list.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskListView {
    Loading(Vec<LoadingRow>),
    Empty(EmptyState),
    /// Rows in display order, keyed by task ID.
    Listing(Vec<TaskItemView>),
}

impl TaskListView {
    pub fn mode(&self) -> RenderMode {
        match self {
            Self::Loading(_) => RenderMode::Loading,
            Self::Empty(_) => RenderMode::Empty,
            Self::Listing(_) => RenderMode::Listing,
        }
    }

    /// Task rows; empty for placeholder modes.
    pub fn items(&self) -> &[TaskItemView] {
        match self {
            Self::Listing(items) => items,
            Self::Loading(_) | Self::Empty(_) => &[],
        }
    }
}

/// Orders tasks for display: pinned first, then the rest.
///
/// Relative input order is preserved inside both groups.
pub fn order_for_display(tasks: &[Task]) -> Vec<&Task> {
    let (mut ordered, rest): (Vec<&Task>, Vec<&Task>) =
        tasks.iter().partition(|task| task.is_pinned());
    ordered.extend(rest);
    ordered
}

/// Renders the list in the mode selected by `props`.
pub fn render_task_list(props: &TaskListProps<'_>) -> TaskListView {
    let view = if props.loading {
        TaskListView::Loading(vec![LoadingRow; LOADING_ROW_COUNT])
    } else if props.tasks.is_empty() {
        TaskListView::Empty(EmptyState::default())
    } else {
        TaskListView::Listing(
            order_for_display(props.tasks)
                .into_iter()
                .map(|task| render_task_item(task, &props.actions))
                .collect(),
        )
    };

    trace!(
        "event=task_list_render module=view mode={} rows={}",
        view.mode().as_str(),
        view.items().len()
    );
    view
}

#[cfg(test)]
mod tests {
    use super::{order_for_display, render_task_list, RenderMode, TaskListProps};
    use crate::model::task::{Task, TaskId, TaskState};
    use crate::view::actions::TaskActions;

    fn task(id: &str, state: TaskState) -> Task {
        Task::new(TaskId::new(id).expect("id"), format!("Task {id}")).with_state(state)
    }

    #[test]
    fn order_for_display_on_empty_input_is_empty() {
        assert!(order_for_display(&[]).is_empty());
    }

    #[test]
    fn archived_tasks_stay_in_the_trailing_group() {
        let tasks = vec![
            task("1", TaskState::Archived),
            task("2", TaskState::Inbox),
            task("3", TaskState::Pinned),
        ];
        let ids = order_for_display(&tasks)
            .into_iter()
            .map(|task| task.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn every_row_forwards_to_the_callers_actions() {
        let tasks = vec![task("1", TaskState::Inbox), task("2", TaskState::Pinned)];
        let (actions, log) = TaskActions::recording();
        let view = render_task_list(&TaskListProps::new(&tasks, actions));

        assert_eq!(view.mode(), RenderMode::Listing);
        for item in view.items() {
            item.pin.as_ref().expect("pin rendered").activate();
        }
        let pinned = log
            .entries()
            .iter()
            .map(|intent| intent.task_id().as_str().to_string())
            .collect::<Vec<_>>();
        assert_eq!(pinned, vec!["2", "1"]);
    }
}
