//! Persistence gateway abstractions and implementations.
//!
//! # Responsibility
//! - Define the get/set contract for a single named serialized blob.
//! - Isolate key-value storage details from store/session orchestration.
//!
//! # Invariants
//! - Gateways are opaque about their medium; callers see only blob text.
//! - A `set` that returns `Ok` means the blob is durable in the medium.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryStorageGateway;
pub use sqlite::SqliteStorageGateway;

pub type StorageResult<T> = Result<T, StorageError>;

/// Error for gateway construction and blob access.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    /// Connection was handed over before migrations ran.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    /// The medium rejected the operation (quota, detached backend, ...).
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations first"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Get/set access to one named serialized blob in a key-value medium.
///
/// The session layer treats this as synchronous and always-available; a
/// failing `set` is surfaced to the caller, never retried internally.
pub trait StorageGateway {
    /// Reads the blob stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous blob.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}
