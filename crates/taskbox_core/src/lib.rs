//! Core view logic for Taskbox.
//! This crate is the single source of truth for task ordering and render-mode rules.

pub mod logging;
pub mod model;
pub mod stories;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::task::{
    parse_task_state, Task, TaskId, TaskState, TaskStateError, TaskValidationError,
};
pub use stories::{all_stories, parse_story_id, render_story, StoryError, StoryId, StoryView};
pub use view::actions::{ActionLog, TaskActions, TaskIntent};
pub use view::task_item::{
    render_task_item, Affordance, AffordanceKind, Propagation, TaskItemView,
};
pub use view::task_list::{
    order_for_display, render_task_list, EmptyState, LoadingRow, RenderMode, TaskListProps,
    TaskListView, LOADING_ROW_COUNT,
};
pub use view::text::{render_item_text, render_list_text};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
