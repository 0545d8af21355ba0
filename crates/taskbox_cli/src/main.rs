//! Terminal catalog for Taskbox views.
//!
//! # Responsibility
//! - List and render catalog stories as plain text.
//! - Render a caller-supplied JSON task file through the same list view.
//! - Provide a quick probe of `taskbox_core` linkage.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};
use taskbox_core::{
    all_stories, default_log_level, init_logging, parse_story_id, render_list_text,
    render_story, render_task_list, LoggingConfig, StoryView, Task, TaskActions, TaskListProps,
    TaskListView,
};

const LOG_DIR_ENV: &str = "TASKBOX_LOG_DIR";

#[derive(Parser)]
#[command(name = "taskbox", version, about = "Preview task list views in the terminal")]
struct Cli {
    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Absolute log directory; falls back to $TASKBOX_LOG_DIR
    #[arg(long, global = true)]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print core ping and version
    Ping,
    /// List catalog story IDs
    Stories,
    /// Render one story, e.g. `task-list/with-pinned-tasks`
    Story {
        id: String,
        /// Print dispatched intents after activating every affordance
        #[arg(long)]
        actions: bool,
    },
    /// Render a JSON array of tasks as a task list
    Render {
        file: PathBuf,
        #[arg(long)]
        loading: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level, cli.log_dir)?;

    match cli.command {
        Commands::Ping => {
            println!("taskbox_core ping={}", taskbox_core::ping());
            println!("taskbox_core version={}", taskbox_core::core_version());
        }
        Commands::Stories => {
            for story in all_stories() {
                println!("{story}");
            }
        }
        Commands::Story { id, actions } => print_story(&id, actions)?,
        Commands::Render { file, loading } => print_task_file(&file, loading)?,
    }
    Ok(())
}

fn setup_logging(level: Option<String>, log_dir: Option<String>) -> Result<()> {
    let env_dir = std::env::var(LOG_DIR_ENV).ok();
    match resolve_logging_config(level, log_dir, env_dir) {
        Some(config) => init_logging(&config).context("failed to initialize logging"),
        None => Ok(()),
    }
}

/// `--log-dir` wins over `$TASKBOX_LOG_DIR`; no directory means no file logging.
fn resolve_logging_config(
    level: Option<String>,
    log_dir: Option<String>,
    env_dir: Option<String>,
) -> Option<LoggingConfig> {
    let log_dir = log_dir.or(env_dir).filter(|dir| !dir.trim().is_empty())?;
    let level = level.unwrap_or_else(|| default_log_level().to_string());
    Some(LoggingConfig::new(level, log_dir))
}

fn print_story(id: &str, show_actions: bool) -> Result<()> {
    let story = parse_story_id(id)?;
    let (actions, log) = TaskActions::recording();
    let view = render_story(story, &actions);
    println!("{}", view.to_text());
    info!("event=cli_story module=cli status=ok story={story}");

    if show_actions {
        let items = match &view {
            StoryView::Task(item) => std::slice::from_ref(item),
            StoryView::TaskList(list) => list.items(),
        };
        for item in items {
            item.archive.activate();
            if let Some(pin) = &item.pin {
                pin.activate();
            }
        }
        for intent in log.entries() {
            println!("action {}({})", intent.name(), intent.task_id());
        }
    }
    Ok(())
}

fn print_task_file(file: &Path, loading: bool) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let view = render_task_json(&raw, loading)
        .with_context(|| format!("invalid task list in {}", file.display()))?;
    println!("{}", render_list_text(&view));
    info!(
        "event=cli_render module=cli status=ok mode={} rows={}",
        view.mode().as_str(),
        view.items().len()
    );
    Ok(())
}

/// Renders a JSON task array; while loading the content is not parsed.
fn render_task_json(raw: &str, loading: bool) -> Result<TaskListView> {
    let tasks: Vec<Task> = if loading {
        Vec::new()
    } else {
        serde_json::from_str(raw)?
    };
    let props = TaskListProps::new(&tasks, TaskActions::noop()).loading(loading);
    Ok(render_task_list(&props))
}
