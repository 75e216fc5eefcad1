//! In-memory task storage.
//!
//! # Responsibility
//! - Hold the authoritative ordered task sequence for a session.
//! - Convert between the sequence and its serialized blob form.
//!
//! # Invariants
//! - Insertion order is display order is persisted order.
//! - The store never persists on its own; writing the blob is an explicit
//!   step owned by the session layer.

pub mod task_store;
