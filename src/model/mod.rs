//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record and its persisted wire shape.
//! - Keep identifier generation behind an explicit capability.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId` assigned once at creation.
//! - Tasks are never destroyed; there is no delete operation.

pub mod task;
