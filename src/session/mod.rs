//! Session orchestration.
//!
//! # Responsibility
//! - Sequence startup load, submission handling and save-on-mutation.
//! - Own the recovery policy for corrupt blobs and failed saves.
//!
//! # Invariants
//! - `initialize` is the only Uninitialized -> Ready transition and runs
//!   at most once per session.
//! - Every mutation re-persists the whole store before control returns.

pub mod controller;
