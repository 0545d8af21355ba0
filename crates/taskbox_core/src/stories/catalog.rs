//! Story definitions for task item and task list previews.

use crate::model::task::{Task, TaskId, TaskState};
use crate::view::actions::TaskActions;
use crate::view::task_item::{render_task_item, TaskItemView};
use crate::view::task_list::{render_task_list, TaskListProps, TaskListView};
use crate::view::text::{render_item_text, render_list_text};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

const TASK_COMPONENT: &str = "task";
const TASK_LIST_COMPONENT: &str = "task-list";

const LONG_TITLE: &str = "This task's name is absurdly large. In fact, I think if I keep \
going I might end up with content overflow. What will happen? The star that represents a \
pinned task could have text overlapping. The text could cut-off abruptly when it reaches the \
star. I hope not!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStory {
    Default,
    Pinned,
    Archived,
    LongTitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskListStory {
    Default,
    WithPinnedTasks,
    Loading,
    Empty,
}

/// Identifies one preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoryId {
    Task(TaskStory),
    TaskList(TaskListStory),
}

const ALL_STORIES: &[StoryId] = &[
    StoryId::Task(TaskStory::Default),
    StoryId::Task(TaskStory::Pinned),
    StoryId::Task(TaskStory::Archived),
    StoryId::Task(TaskStory::LongTitle),
    StoryId::TaskList(TaskListStory::Default),
    StoryId::TaskList(TaskListStory::WithPinnedTasks),
    StoryId::TaskList(TaskListStory::Loading),
    StoryId::TaskList(TaskListStory::Empty),
];

/// Returns every story in catalog order.
pub fn all_stories() -> &'static [StoryId] {
    ALL_STORIES
}

impl StoryId {
    pub fn component(self) -> &'static str {
        match self {
            Self::Task(_) => TASK_COMPONENT,
            Self::TaskList(_) => TASK_LIST_COMPONENT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Task(TaskStory::Default) | Self::TaskList(TaskListStory::Default) => "default",
            Self::Task(TaskStory::Pinned) => "pinned",
            Self::Task(TaskStory::Archived) => "archived",
            Self::Task(TaskStory::LongTitle) => "long-title",
            Self::TaskList(TaskListStory::WithPinnedTasks) => "with-pinned-tasks",
            Self::TaskList(TaskListStory::Loading) => "loading",
            Self::TaskList(TaskListStory::Empty) => "empty",
        }
    }
}

impl Display for StoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.component(), self.name())
    }
}

impl std::str::FromStr for StoryId {
    type Err = StoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_story_id(s)
    }
}

/// Parses `<component>/<story>`, e.g. `task-list/with-pinned-tasks`.
pub fn parse_story_id(value: &str) -> Result<StoryId, StoryError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(StoryError::EmptyStoryId);
    }

    ALL_STORIES
        .iter()
        .copied()
        .find(|story| story.to_string() == normalized)
        .ok_or_else(|| StoryError::UnknownStory(normalized.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryError {
    EmptyStoryId,
    UnknownStory(String),
}

impl Display for StoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyStoryId => write!(f, "story id must not be empty"),
            Self::UnknownStory(value) => write!(f, "unknown story: {value}"),
        }
    }
}

impl Error for StoryError {}

/// Inputs a story feeds to its component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryInput {
    Task(Task),
    TaskList { loading: bool, tasks: Vec<Task> },
}

/// Rendered story.
#[derive(Debug, Clone, PartialEq)]
pub enum StoryView {
    Task(TaskItemView),
    TaskList(TaskListView),
}

impl StoryView {
    pub fn to_text(&self) -> String {
        match self {
            Self::Task(item) => render_item_text(item),
            Self::TaskList(list) => render_list_text(list),
        }
    }
}

fn fixture(id: &'static str, title: &str, state: TaskState) -> Task {
    Task::new(TaskId::from_static(id), title).with_state(state)
}

fn default_task() -> Task {
    fixture("1", "Test Task", TaskState::Inbox)
}

fn default_tasks() -> Vec<Task> {
    [
        ("1", "Task 1"),
        ("2", "Task 2"),
        ("3", "Task 3"),
        ("4", "Task 4"),
        ("5", "Task 5"),
        ("6", "Task 6"),
    ]
    .into_iter()
    .map(|(id, title)| fixture(id, title, TaskState::Inbox))
    .collect()
}

/// Builds the inputs for `story`.
pub fn story_input(story: StoryId) -> StoryInput {
    match story {
        StoryId::Task(TaskStory::Default) => StoryInput::Task(default_task()),
        StoryId::Task(TaskStory::Pinned) => {
            StoryInput::Task(default_task().with_state(TaskState::Pinned))
        }
        StoryId::Task(TaskStory::Archived) => {
            StoryInput::Task(default_task().with_state(TaskState::Archived))
        }
        StoryId::Task(TaskStory::LongTitle) => {
            let mut task = default_task();
            task.title = LONG_TITLE.to_string();
            StoryInput::Task(task)
        }
        StoryId::TaskList(TaskListStory::Default) => StoryInput::TaskList {
            loading: false,
            tasks: default_tasks(),
        },
        StoryId::TaskList(TaskListStory::WithPinnedTasks) => {
            let mut tasks = default_tasks();
            tasks.truncate(5);
            tasks.push(fixture("6", "Task 6 (pinned)", TaskState::Pinned));
            StoryInput::TaskList {
                loading: false,
                tasks,
            }
        }
        StoryId::TaskList(TaskListStory::Loading) => StoryInput::TaskList {
            loading: true,
            tasks: Vec::new(),
        },
        StoryId::TaskList(TaskListStory::Empty) => StoryInput::TaskList {
            loading: false,
            tasks: Vec::new(),
        },
    }
}

/// Renders `story` with the given callbacks.
pub fn render_story(story: StoryId, actions: &TaskActions) -> StoryView {
    debug!("event=story_render module=stories story={story}");
    match story_input(story) {
        StoryInput::Task(task) => StoryView::Task(render_task_item(&task, actions)),
        StoryInput::TaskList { loading, tasks } => {
            let props = TaskListProps::new(&tasks, actions.clone()).loading(loading);
            StoryView::TaskList(render_task_list(&props))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{all_stories, parse_story_id, StoryError, StoryId, TaskListStory};

    #[test]
    fn every_story_id_round_trips_through_display() {
        for story in all_stories() {
            assert_eq!(
                parse_story_id(&story.to_string()).expect("catalog id parses"),
                *story
            );
        }
    }

    #[test]
    fn parses_trimmed_ids() {
        assert_eq!(
            parse_story_id("  task-list/with-pinned-tasks ").expect("parse"),
            StoryId::TaskList(TaskListStory::WithPinnedTasks)
        );
    }

    #[test]
    fn rejects_empty_and_unknown_ids() {
        assert_eq!(parse_story_id(""), Err(StoryError::EmptyStoryId));
        assert_eq!(
            parse_story_id("task/starred"),
            Err(StoryError::UnknownStory("task/starred".to_string()))
        );
    }
}
