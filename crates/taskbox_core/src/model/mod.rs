//! Task domain model consumed by the view layer.
//!
//! # Responsibility
//! - Define the task record the caller owns and the view layer reads.
//! - Parse external state strings strictly at the boundary.
//!
//! # Invariants
//! - A `TaskId` is never empty.
//! - A `TaskState` is always exactly one of inbox, pinned or archived.

pub mod task;
