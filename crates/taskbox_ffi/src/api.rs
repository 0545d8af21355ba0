//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose task item/list rendering to Dart via FRB as plain data.
//! - Report intents as data; Dart dispatches them to its own store.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Task states are parsed at this boundary and rejected when invalid.
//! - While `loading` is set, task inputs are not parsed at all.

use log::warn;
use taskbox_core::stories::{story_input, StoryInput};
use taskbox_core::{
    all_stories, core_version as core_version_inner, init_logging as init_logging_inner,
    parse_story_id, parse_task_state, ping as ping_inner, render_task_item, render_task_list,
    Affordance, LoggingConfig, Task, TaskActions, TaskId, TaskItemView, TaskListProps,
    TaskListView,
};

const LOG_DIR_ENV: &str = "TASKBOX_LOG_DIR";

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written;
///   blank falls back to `$TASKBOX_LOG_DIR`.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let log_dir = resolve_log_dir(log_dir, std::env::var(LOG_DIR_ENV).ok());
    match init_logging_inner(&LoggingConfig::new(level, log_dir)) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Task record as supplied by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInput {
    pub id: String,
    pub title: String,
    /// `INBOX|PINNED|ARCHIVED` (or `TASK_`-prefixed).
    pub state: String,
}

/// One interactive control on a task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskAffordance {
    /// `pin|archive`.
    pub intent: String,
    pub label: String,
    pub task_id: String,
}

/// Rendered task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub state: String,
    pub checked: bool,
    pub title_read_only: bool,
    pub archive: TaskAffordance,
    pub pin: Option<TaskAffordance>,
}

/// Response envelope for a single task item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItemResponse {
    pub ok: bool,
    pub message: String,
    pub item: Option<TaskRow>,
}

/// Response envelope for a task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListResponse {
    pub ok: bool,
    pub message: String,
    /// `loading|empty|listing`; empty string on failure.
    pub mode: String,
    /// Placeholder row count; non-zero only in loading mode.
    pub loading_rows: u32,
    /// `(icon, title, subtitle)` in empty mode.
    pub empty_icon: Option<String>,
    pub empty_title: Option<String>,
    pub empty_subtitle: Option<String>,
    /// Rows in display order; listing mode only.
    pub items: Vec<TaskRow>,
}

impl TaskListResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            mode: String::new(),
            loading_rows: 0,
            empty_icon: None,
            empty_title: None,
            empty_subtitle: None,
            items: Vec::new(),
        }
    }
}

/// Example inputs for one catalog story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryInputResponse {
    pub ok: bool,
    pub message: String,
    /// `task|task-list`.
    pub component: String,
    pub loading: bool,
    pub tasks: Vec<TaskInput>,
}

/// Renders one task row.
///
/// # FFI contract
/// - Sync call, pure.
/// - Invalid id or state yields `ok=false` and no item.
#[flutter_rust_bridge::frb(sync)]
pub fn task_item_view(task: TaskInput) -> TaskItemResponse {
    match to_task(task) {
        Ok(task) => TaskItemResponse {
            ok: true,
            message: String::new(),
            item: Some(to_task_row(render_task_item(&task, &TaskActions::noop()))),
        },
        Err(err) => {
            warn!("event=task_item_view module=ffi status=error reason=invalid_input");
            TaskItemResponse {
                ok: false,
                message: format!("task_item_view failed: {err}"),
                item: None,
            }
        }
    }
}

/// Renders a task list in loading, empty or listing mode.
///
/// # FFI contract
/// - Sync call, pure.
/// - `loading=true` always yields loading mode, even for invalid tasks.
/// - Otherwise the first invalid task fails the whole call.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list_view(loading: bool, tasks: Vec<TaskInput>) -> TaskListResponse {
    let parsed = if loading {
        Vec::new()
    } else {
        match tasks.into_iter().map(to_task).collect::<Result<Vec<_>, _>>() {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!("event=task_list_view module=ffi status=error reason=invalid_input");
                return TaskListResponse::failure(format!("task_list_view failed: {err}"));
            }
        }
    };

    let props = TaskListProps::new(&parsed, TaskActions::noop()).loading(loading);
    to_task_list_response(render_task_list(&props))
}

/// Lists catalog story IDs in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn story_ids() -> Vec<String> {
    all_stories().iter().map(ToString::to_string).collect()
}

/// Returns the fixed example inputs for `story_id`.
#[flutter_rust_bridge::frb(sync)]
pub fn story_inputs(story_id: String) -> StoryInputResponse {
    let story = match parse_story_id(&story_id) {
        Ok(story) => story,
        Err(err) => {
            return StoryInputResponse {
                ok: false,
                message: format!("story_inputs failed: {err}"),
                component: String::new(),
                loading: false,
                tasks: Vec::new(),
            };
        }
    };

    let (loading, tasks) = match story_input(story) {
        StoryInput::Task(task) => (false, vec![task]),
        StoryInput::TaskList { loading, tasks } => (loading, tasks),
    };
    StoryInputResponse {
        ok: true,
        message: String::new(),
        component: story.component().to_string(),
        loading,
        tasks: tasks.into_iter().map(to_task_input).collect(),
    }
}

fn resolve_log_dir(log_dir: String, env_dir: Option<String>) -> String {
    if !log_dir.trim().is_empty() {
        return log_dir;
    }
    env_dir
        .map(|raw| raw.trim().to_string())
        .filter(|dir| !dir.is_empty())
        .unwrap_or(log_dir)
}

fn to_task(input: TaskInput) -> Result<Task, String> {
    let id = TaskId::new(input.id).map_err(|err| err.to_string())?;
    let state = parse_task_state(&input.state).map_err(|err| format!("task {id}: {err}"))?;
    Ok(Task::new(id, input.title).with_state(state))
}

fn to_task_input(task: Task) -> TaskInput {
    TaskInput {
        id: task.id.into(),
        title: task.title,
        state: task.state.as_str().to_string(),
    }
}

fn to_affordance(affordance: &Affordance) -> TaskAffordance {
    TaskAffordance {
        intent: affordance.intent().name().to_string(),
        label: affordance.label().to_string(),
        task_id: affordance.intent().task_id().to_string(),
    }
}

fn to_task_row(view: TaskItemView) -> TaskRow {
    TaskRow {
        archive: to_affordance(&view.archive),
        pin: view.pin.as_ref().map(to_affordance),
        id: view.id.into(),
        title: view.title,
        state: view.state.as_str().to_string(),
        checked: view.checked,
        title_read_only: view.title_read_only,
    }
}

fn to_task_list_response(view: TaskListView) -> TaskListResponse {
    let mode = view.mode().as_str().to_string();
    let mut response = TaskListResponse {
        ok: true,
        message: String::new(),
        mode,
        loading_rows: 0,
        empty_icon: None,
        empty_title: None,
        empty_subtitle: None,
        items: Vec::new(),
    };
    match view {
        TaskListView::Loading(rows) => {
            response.loading_rows = u32::try_from(rows.len()).unwrap_or(u32::MAX);
        }
        TaskListView::Empty(empty) => {
            response.empty_icon = Some(empty.icon.to_string());
            response.empty_title = Some(empty.title.to_string());
            response.empty_subtitle = Some(empty.subtitle.to_string());
        }
        TaskListView::Listing(items) => {
            response.items = items.into_iter().map(to_task_row).collect();
        }
    }
    response
}
