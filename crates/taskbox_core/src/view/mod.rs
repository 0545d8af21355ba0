//! Presentational view models for task items and task lists.
//!
//! # Responsibility
//! - Turn caller-owned tasks into framework-neutral view trees.
//! - Route user intents back to the caller through `TaskActions`.
//!
//! # Invariants
//! - Every render is a pure function of its inputs.
//! - Views never mutate tasks; state changes are requested, not applied.

pub mod actions;
pub mod task_item;
pub mod task_list;
pub mod text;
