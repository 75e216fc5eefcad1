//! Ordered task sequence and blob (de)serialization.
//!
//! # Responsibility
//! - Provide append/lookup/toggle access to the session's task sequence.
//! - Own the JSON wire shape of the persisted blob.
//!
//! # Invariants
//! - `append` never re-checks id uniqueness; callers are trusted to supply
//!   fresh ids from an `IdSource`.
//! - `set_completed` is the only mutation of an existing task.

use crate::model::task::{Task, TaskId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for task-store load, save and lookup operations.
#[derive(Debug)]
pub enum StoreError {
    /// Persisted blob present but not the expected wire shape.
    Deserialize(serde_json::Error),
    /// The in-memory sequence could not be serialized.
    Serialize(serde_json::Error),
    /// Toggle handle did not resolve to a stored task.
    UnknownTask(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deserialize(err) => write!(f, "malformed persisted task blob: {err}"),
            Self::Serialize(err) => write!(f, "failed to serialize task sequence: {err}"),
            Self::UnknownTask(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Deserialize(err) | Self::Serialize(err) => Some(err),
            Self::UnknownTask(_) => None,
        }
    }
}

/// Authoritative ordered collection of tasks for one session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from the persisted blob.
    ///
    /// # Contract
    /// - `None` (no prior data) yields an empty store.
    /// - A present blob must deserialize to the exact four-field wire shape,
    ///   preserving order; otherwise `StoreError::Deserialize` is returned
    ///   and the caller decides the recovery policy.
    pub fn load(blob: Option<&str>) -> StoreResult<Self> {
        match blob {
            None => Ok(Self::new()),
            Some(text) => {
                let tasks = serde_json::from_str(text).map_err(StoreError::Deserialize)?;
                Ok(Self { tasks })
            }
        }
    }

    /// Appends a task to the end of the sequence.
    pub fn append(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Looks up a task by its stable id.
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    /// Sets the completion flag of the task identified by `id`.
    ///
    /// Returns `StoreError::UnknownTask` when the handle does not resolve.
    pub fn set_completed(&mut self, id: &TaskId, completed: bool) -> StoreResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| &task.id == id)
            .ok_or_else(|| StoreError::UnknownTask(id.clone()))?;
        task.completed = completed;
        Ok(())
    }

    /// Iterates tasks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Serializes the whole sequence into the persisted blob form.
    pub fn to_blob(&self) -> StoreResult<String> {
        serde_json::to_string(&self.tasks).map_err(StoreError::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreError, TaskStore};
    use crate::model::task::{Task, TaskId};

    #[test]
    fn load_without_blob_yields_empty_store() {
        let store = TaskStore::load(None).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn append_then_get_resolves_by_id() {
        let mut store = TaskStore::new();
        let task = Task::new(TaskId::from("t-1"), "write docs");
        store.append(task.clone());

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&task.id), Some(&task));
    }

    #[test]
    fn set_completed_on_unknown_id_is_an_error() {
        let mut store = TaskStore::new();
        let missing = TaskId::from("t-missing");

        let err = store.set_completed(&missing, true).unwrap_err();
        assert!(matches!(err, StoreError::UnknownTask(id) if id == missing));
    }

    #[test]
    fn malformed_blob_propagates_deserialize_error() {
        let err = TaskStore::load(Some("definitely not json")).unwrap_err();
        assert!(matches!(err, StoreError::Deserialize(_)));
    }
}
