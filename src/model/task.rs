//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical record for one to-do entry.
//! - Provide the id-generation seam used by the submit flow.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is immutable after creation (no edit operation exists).
//! - `completed` changes only through the session toggle path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque unique identifier for one task.
///
/// Kept as a newtype over the wire string so handles cannot be confused
/// with titles or raw form input in signatures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Produces a fresh unique id per task.
///
/// The store trusts callers to source ids here; `TaskStore::append` never
/// re-checks uniqueness.
pub trait IdSource {
    fn fresh_id(&mut self) -> TaskId;
}

/// Default id source backed by random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn fresh_id(&mut self) -> TaskId {
        TaskId(Uuid::new_v4().to_string())
    }
}

/// One to-do entry.
///
/// Field names follow the persisted wire contract, so `created_at` travels
/// as `createdAt`. The persisted shape carries exactly these four fields;
/// anything else is treated as corrupt on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task {
    /// Stable opaque id assigned once at creation.
    pub id: TaskId,
    /// Non-empty display text. Never edited after creation.
    pub title: String,
    /// Completion flag, flipped only by the toggle handler.
    pub completed: bool,
    /// Creation instant; persisted but not used for ordering or display.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task stamped with the current time.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    /// - The caller supplies a fresh id from an `IdSource`.
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self::with_created_at(id, title, Utc::now())
    }

    /// Creates a task with a caller-provided creation instant.
    ///
    /// Used by load paths and tests where the timestamp already exists.
    pub fn with_created_at(
        id: TaskId,
        title: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
            created_at,
        }
    }
}
