//! Rendering bridge between tasks and the list surface.
//!
//! # Responsibility
//! - Project each task into a visual entry for the external UI surface.
//! - Keep entries tied to tasks by stable id handle, not by reference.
//!
//! # Invariants
//! - An entry's initial `checked` state equals the task's `completed` flag.
//! - Entries are never detached or re-rendered; there is no delete feature.

mod bridge;
mod headless;

pub use bridge::{project, render_task, ListSurface, VisualEntry};
pub use headless::RecordingSurface;
