//! Plain-text rendering of task views for terminals and snapshots.

use crate::model::task::TaskState;
use crate::view::task_item::TaskItemView;
use crate::view::task_list::TaskListView;

const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";
const LOADING_CHECKBOX: &str = "[~]";

/// Renders one task row as a single line.
///
/// Format: `<checkbox> <title>[ (pinned)]  [<archive>][ [<pin>]]`.
pub fn render_item_text(item: &TaskItemView) -> String {
    let checkbox = if item.checked { CHECKED } else { UNCHECKED };
    let marker = if item.state == TaskState::Pinned {
        " (pinned)"
    } else {
        ""
    };
    let mut line = format!("{checkbox} {}{marker}  [{}]", item.title, item.archive.label());
    if let Some(pin) = &item.pin {
        line.push_str(&format!(" [{}]", pin.label()));
    }
    line
}

/// Renders a list view, one row per line, without a trailing newline.
pub fn render_list_text(view: &TaskListView) -> String {
    match view {
        TaskListView::Loading(rows) => rows
            .iter()
            .map(|row| format!("{LOADING_CHECKBOX} {}", row.text().join(" ")))
            .collect::<Vec<_>>()
            .join("\n"),
        TaskListView::Empty(empty) => {
            format!("({}) {}\n    {}", empty.icon, empty.title, empty.subtitle)
        }
        TaskListView::Listing(items) => items
            .iter()
            .map(render_item_text)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
