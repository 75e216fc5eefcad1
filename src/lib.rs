//! Core domain logic for the task list.
//! This crate is the single source of truth for the persistence and
//! rendering synchronization contract: the in-memory task sequence, its
//! persisted serialized copy, and the rendered view stay consistent on
//! every mutation.

pub mod db;
pub mod logging;
pub mod model;
pub mod render;
pub mod session;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{IdSource, Task, TaskId, UuidIdSource};
pub use render::{ListSurface, RecordingSurface, VisualEntry};
pub use session::controller::{
    InitReport, SaveStatus, SessionController, SessionError, SubmitOutcome, TASKS_KEY,
};
pub use storage::{
    MemoryStorageGateway, SqliteStorageGateway, StorageError, StorageGateway, StorageResult,
};
pub use store::task_store::{StoreError, StoreResult, TaskStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
