//! Session controller for startup, submission and persistence.
//!
//! # Responsibility
//! - Drive the load -> render startup sequence exactly once.
//! - Keep the in-memory store, the persisted blob and the rendered view
//!   consistent on every submit and toggle.
//!
//! # Invariants
//! - Submit and toggle are rejected until `initialize` has completed.
//! - A failed save leaves the in-memory mutation in place; the session
//!   keeps operating and the caller is told the change is not durable.

use crate::model::task::{IdSource, Task, TaskId};
use crate::render::{render_task, ListSurface};
use crate::storage::{StorageError, StorageGateway};
use crate::store::task_store::{StoreError, TaskStore};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed storage key for the serialized task sequence.
pub const TASKS_KEY: &str = "TASKS";

/// Error for session lifecycle and mutation operations.
#[derive(Debug)]
pub enum SessionError {
    /// Submit or toggle arrived before `initialize` completed.
    NotReady,
    /// `initialize` was called on an already-ready session.
    AlreadyInitialized,
    Storage(StorageError),
    Store(StoreError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotReady => write!(f, "session is not initialized"),
            Self::AlreadyInitialized => write!(f, "session is already initialized"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotReady | Self::AlreadyInitialized => None,
            Self::Storage(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StorageError> for SessionError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Outcome of the startup load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    /// Number of tasks loaded and rendered.
    pub loaded: usize,
    /// True when a malformed blob was discarded and the session started
    /// from an empty store.
    pub recovered_from_corrupt: bool,
}

/// Durability of the most recent save.
#[derive(Debug)]
pub enum SaveStatus {
    Saved,
    /// The in-memory mutation stands, but the blob write failed; the
    /// caller should tell the user their changes are not saved.
    NotSaved(SessionError),
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

/// Outcome of one form submission.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Empty input; no task created, no persistence call.
    Rejected,
    Created { id: TaskId, save: SaveStatus },
}

/// Orchestrates one task-list session over a storage gateway and an id
/// source, owning the task store for its lifetime.
pub struct SessionController<G: StorageGateway, I: IdSource> {
    gateway: G,
    ids: I,
    store: TaskStore,
    ready: bool,
}

impl<G: StorageGateway, I: IdSource> SessionController<G, I> {
    /// Creates an uninitialized session.
    pub fn new(gateway: G, ids: I) -> Self {
        Self {
            gateway,
            ids,
            store: TaskStore::new(),
            ready: false,
        }
    }

    /// Loads the persisted blob and renders every task in order.
    ///
    /// # Contract
    /// - Runs at most once; a second call fails with `AlreadyInitialized`.
    /// - No prior blob yields an empty store and zero rendered entries.
    /// - A malformed blob is discarded with a diagnostic; the session
    ///   starts empty and reports `recovered_from_corrupt = true`.
    ///
    /// # Errors
    /// - Gateway read failures are fatal here; there is no session state
    ///   to keep alive yet.
    pub fn initialize(
        &mut self,
        surface: &mut dyn ListSurface,
    ) -> Result<InitReport, SessionError> {
        if self.ready {
            return Err(SessionError::AlreadyInitialized);
        }

        let blob = self.gateway.get(TASKS_KEY)?;
        let (store, recovered_from_corrupt) = match TaskStore::load(blob.as_deref()) {
            Ok(store) => (store, false),
            Err(StoreError::Deserialize(err)) => {
                warn!(
                    "event=session_init module=session status=recovered error_code=corrupt_blob error={err}"
                );
                (TaskStore::new(), true)
            }
            Err(other) => return Err(other.into()),
        };

        for task in store.iter() {
            render_task(surface, task);
        }

        self.store = store;
        self.ready = true;
        info!(
            "event=session_init module=session status=ok loaded={} recovered={recovered_from_corrupt}",
            self.store.len()
        );

        Ok(InitReport {
            loaded: self.store.len(),
            recovered_from_corrupt,
        })
    }

    /// Handles one form submission.
    ///
    /// Empty input is a deliberate soft-fail: no task, no persistence
    /// call, no rendered entry. Valid input appends a task with a fresh
    /// id, persists the whole store, renders the new entry and clears the
    /// input field.
    pub fn handle_submit(
        &mut self,
        surface: &mut dyn ListSurface,
        raw_input: &str,
    ) -> Result<SubmitOutcome, SessionError> {
        if !self.ready {
            return Err(SessionError::NotReady);
        }

        // Only the literal empty string is invalid; whitespace-only titles
        // are accepted, matching the persisted-data compatibility contract.
        if raw_input.is_empty() {
            debug!("event=submit module=session status=rejected reason=empty_input");
            return Ok(SubmitOutcome::Rejected);
        }

        let task = Task::new(self.ids.fresh_id(), raw_input);
        let id = task.id.clone();
        self.store.append(task);
        let save = self.persist();

        if let Some(task) = self.store.get(&id) {
            render_task(surface, task);
        }
        surface.clear_input();

        info!(
            "event=submit module=session status=ok id={id} total={} saved={}",
            self.store.len(),
            save.is_saved()
        );
        Ok(SubmitOutcome::Created { id, save })
    }

    /// Handles one checkbox toggle, resolved by task id handle.
    ///
    /// Sets the task's completion flag to `checked` and re-persists the
    /// whole store.
    ///
    /// # Errors
    /// - `NotReady` before initialization.
    /// - `Store(UnknownTask)` when the handle does not resolve; the store
    ///   is unchanged in that case.
    pub fn handle_toggle(
        &mut self,
        id: &TaskId,
        checked: bool,
    ) -> Result<SaveStatus, SessionError> {
        if !self.ready {
            return Err(SessionError::NotReady);
        }

        self.store.set_completed(id, checked)?;
        let save = self.persist();
        debug!(
            "event=toggle module=session status=ok id={id} checked={checked} saved={}",
            save.is_saved()
        );
        Ok(save)
    }

    /// Serializes the entire store and writes it under the fixed key.
    ///
    /// Called after every mutation; there is no batching or debouncing.
    /// Failures are caught and reported, never propagated as panics, so
    /// the session keeps operating in memory.
    pub fn persist(&mut self) -> SaveStatus {
        let blob = match self.store.to_blob() {
            Ok(blob) => blob,
            Err(err) => {
                error!("event=persist module=session status=error error={err}");
                return SaveStatus::NotSaved(err.into());
            }
        };

        match self.gateway.set(TASKS_KEY, &blob) {
            Ok(()) => SaveStatus::Saved,
            Err(err) => {
                error!("event=persist module=session status=error error={err}");
                SaveStatus::NotSaved(err.into())
            }
        }
    }

    /// Read access to the session's task store.
    pub fn tasks(&self) -> &TaskStore {
        &self.store
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Tears the session down, handing the gateway back to the caller.
    pub fn into_gateway(self) -> G {
        self.gateway
    }
}
