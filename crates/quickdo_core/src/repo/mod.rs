//! Storage adapter layer over the persisted slot.
//!
//! # Responsibility
//! - Define the two-operation slot access contract used by services.
//! - Isolate SQLite and JSON payload details from widget orchestration.
//!
//! # Invariants
//! - `save_all` always overwrites the full sequence in one statement.
//! - Unparsable slot values are recovered as empty, never surfaced.

pub mod slot_repo;
