use taskbox_core::{
    order_for_display, render_task_list, EmptyState, RenderMode, Task, TaskActions, TaskId,
    TaskListProps, TaskListView, TaskState, LOADING_ROW_COUNT,
};

const STATES: [TaskState; 3] = [TaskState::Inbox, TaskState::Pinned, TaskState::Archived];

fn task(id: &str, state: TaskState) -> Task {
    Task::new(TaskId::new(id).unwrap(), format!("Task {id}")).with_state(state)
}

fn ids(view: &TaskListView) -> Vec<String> {
    view.items()
        .iter()
        .map(|item| item.id.to_string())
        .collect()
}

#[test]
fn pinned_task_moves_to_front() {
    let tasks = vec![
        task("1", TaskState::Inbox),
        task("2", TaskState::Pinned),
        task("3", TaskState::Inbox),
    ];
    let view = render_task_list(&TaskListProps::new(&tasks, TaskActions::noop()));

    assert_eq!(view.mode(), RenderMode::Listing);
    assert_eq!(ids(&view), vec!["2", "1", "3"]);
}

#[test]
fn empty_tasks_render_empty_state() {
    let view = render_task_list(&TaskListProps::new(&[], TaskActions::noop()));

    assert_eq!(view, TaskListView::Empty(EmptyState::default()));
    assert!(view.items().is_empty());
}

#[test]
fn loading_renders_six_placeholders_regardless_of_tasks() {
    let tasks = vec![task("1", TaskState::Pinned), task("2", TaskState::Inbox)];
    for input in [&tasks[..], &[][..]] {
        let view = render_task_list(&TaskListProps::new(input, TaskActions::noop()).loading(true));
        match &view {
            TaskListView::Loading(rows) => assert_eq!(rows.len(), LOADING_ROW_COUNT),
            other => panic!("expected loading placeholders, got {other:?}"),
        }
        assert!(view.items().is_empty());
    }
}

#[test]
fn placeholder_modes_never_dispatch() {
    let (actions, log) = TaskActions::recording();
    let tasks = vec![task("1", TaskState::Inbox)];
    render_task_list(&TaskListProps::new(&tasks, actions.clone()).loading(true));
    render_task_list(&TaskListProps::new(&[], actions));
    assert!(log.is_empty());
}

#[test]
fn display_order_is_a_stable_partition_for_all_small_inputs() {
    for len in 1..=5usize {
        let combos = STATES.len().pow(len as u32);
        for code in 0..combos {
            let mut rest = code;
            let tasks = (0..len)
                .map(|index| {
                    let state = STATES[rest % STATES.len()];
                    rest /= STATES.len();
                    task(&index.to_string(), state)
                })
                .collect::<Vec<_>>();

            let expected = tasks
                .iter()
                .filter(|task| task.is_pinned())
                .chain(tasks.iter().filter(|task| !task.is_pinned()))
                .map(|task| task.id.to_string())
                .collect::<Vec<_>>();

            let ordered = order_for_display(&tasks)
                .into_iter()
                .map(|task| task.id.to_string())
                .collect::<Vec<_>>();
            assert_eq!(ordered, expected, "order mismatch for {tasks:?}");

            let view = render_task_list(&TaskListProps::new(&tasks, TaskActions::noop()));
            assert_eq!(ids(&view), expected);
        }
    }
}

#[test]
fn rendering_twice_is_identical() {
    let tasks = vec![
        task("1", TaskState::Archived),
        task("2", TaskState::Pinned),
        task("3", TaskState::Inbox),
    ];
    let actions = TaskActions::noop();
    for loading in [false, true] {
        let props = TaskListProps::new(&tasks, actions.clone()).loading(loading);
        assert_eq!(render_task_list(&props), render_task_list(&props));
    }
}

#[test]
fn rows_forward_pin_and_archive_to_caller() {
    let tasks = vec![task("a", TaskState::Archived), task("b", TaskState::Inbox)];
    let (actions, log) = TaskActions::recording();
    let view = render_task_list(&TaskListProps::new(&tasks, actions));

    let items = view.items();
    assert!(items[0].pin.is_none());
    items[0].archive.activate();
    items[1].pin.as_ref().unwrap().activate();

    let names = log
        .entries()
        .iter()
        .map(|intent| format!("{}:{}", intent.name(), intent.task_id()))
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["archive:a", "pin:b"]);
}
