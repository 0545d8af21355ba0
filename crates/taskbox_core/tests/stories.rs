use taskbox_core::stories::{story_input, StoryInput, TaskListStory, TaskStory};
use taskbox_core::{all_stories, render_story, RenderMode, StoryId, StoryView, TaskActions};

#[test]
fn catalog_lists_every_story_once() {
    let names = all_stories()
        .iter()
        .map(|story| story.to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            "task/default",
            "task/pinned",
            "task/archived",
            "task/long-title",
            "task-list/default",
            "task-list/with-pinned-tasks",
            "task-list/loading",
            "task-list/empty",
        ]
    );
}

#[test]
fn with_pinned_tasks_story_renders_pinned_task_first() {
    let view = render_story(
        StoryId::TaskList(TaskListStory::WithPinnedTasks),
        &TaskActions::noop(),
    );
    let StoryView::TaskList(list) = view else {
        panic!("task list story should render a list");
    };
    let ids = list
        .items()
        .iter()
        .map(|item| item.id.to_string())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["6", "1", "2", "3", "4", "5"]);
    assert_eq!(list.items()[0].title, "Task 6 (pinned)");
}

#[test]
fn list_stories_cover_all_render_modes() {
    let modes = [
        (TaskListStory::Default, RenderMode::Listing),
        (TaskListStory::WithPinnedTasks, RenderMode::Listing),
        (TaskListStory::Loading, RenderMode::Loading),
        (TaskListStory::Empty, RenderMode::Empty),
    ];
    for (story, mode) in modes {
        match render_story(StoryId::TaskList(story), &TaskActions::noop()) {
            StoryView::TaskList(list) => assert_eq!(list.mode(), mode, "{story:?}"),
            StoryView::Task(_) => panic!("unexpected item view for {story:?}"),
        }
    }
}

#[test]
fn archived_story_hides_pin() {
    match render_story(StoryId::Task(TaskStory::Archived), &TaskActions::noop()) {
        StoryView::Task(item) => {
            assert!(item.checked);
            assert!(item.pin.is_none());
        }
        StoryView::TaskList(_) => panic!("task story should render an item"),
    }
}

#[test]
fn story_inputs_are_deterministic() {
    for story in all_stories() {
        assert_eq!(story_input(*story), story_input(*story));
    }
    match story_input(StoryId::TaskList(TaskListStory::Default)) {
        StoryInput::TaskList { loading, tasks } => {
            assert!(!loading);
            assert_eq!(tasks.len(), 6);
        }
        StoryInput::Task(_) => panic!("default list story should carry tasks"),
    }
}

#[test]
fn story_text_is_stable() {
    let text = render_story(StoryId::Task(TaskStory::Pinned), &TaskActions::noop()).to_text();
    assert_eq!(text, "[ ] Test Task (pinned)  [Archive] [Pin]");
}
