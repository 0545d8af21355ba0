//! Fixed example inputs for the component catalog.
//!
//! # Responsibility
//! - Name every preview state of the task item and task list views.
//! - Build the exact inputs a catalog renders for each preview.
//!
//! # Invariants
//! - Story inputs are deterministic; two calls yield equal tasks.
//! - Story IDs are `<component>/<story>` in kebab-case.

pub mod catalog;

pub use catalog::{
    all_stories, parse_story_id, render_story, story_input, StoryError, StoryId, StoryInput,
    StoryView, TaskListStory, TaskStory,
};
