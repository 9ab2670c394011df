//! Slot repository contracts and implementations.
//!
//! # Responsibility
//! - Read and overwrite the ordered task sequence under the `tasks` slot.
//! - Recover malformed persisted values as an empty sequence.
//!
//! # Invariants
//! - `load_all` only fails on storage transport errors; an absent or
//!   unparsable value yields an empty sequence.
//! - `save_all` is a single upsert; callers never observe partial writes.

use crate::db::DbError;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Key of the one slot holding the serialized task sequence.
pub const TASKS_SLOT_KEY: &str = "tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for slot persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialize(serde_json::Error),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize slot payload: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is not bootstrapped (expected {expected_version})"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Storage adapter contract: whole-sequence read and overwrite.
///
/// There is no incremental patching; removal by value is a read-modify-write
/// at the service layer, so deleting a duplicated text drops only the first
/// stored occurrence.
pub trait SlotRepository {
    /// Loads the full persisted sequence.
    ///
    /// An absent slot and a value that fails to parse as a JSON array of
    /// strings both yield `Ok` with an empty sequence.
    fn load_all(&self) -> RepoResult<Vec<String>>;

    /// Serializes the full sequence and overwrites the slot.
    fn save_all(&self, tasks: &[String]) -> RepoResult<()>;
}

/// SQLite-backed slot repository.
pub struct SqliteSlotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotRepository<'conn> {
    /// Wraps a bootstrapped connection, validating the slot schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations never ran.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   does not contain the expected `slots` layout.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = crate::db::migrations::latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version == 0 {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        ensure_table(conn, "slots")?;
        for column in ["key", "value"] {
            ensure_column(conn, "slots", column)?;
        }

        Ok(Self { conn })
    }
}

impl SlotRepository for SqliteSlotRepository<'_> {
    fn load_all(&self) -> RepoResult<Vec<String>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                [TASKS_SLOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            None => Ok(Vec::new()),
            Some(value) => Ok(decode_slot_value(&value)),
        }
    }

    fn save_all(&self, tasks: &[String]) -> RepoResult<()> {
        let payload = serde_json::to_string(tasks)?;
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![TASKS_SLOT_KEY, payload],
        )?;
        Ok(())
    }
}

/// In-memory slot repository honoring the same contract.
///
/// Intended for widget-level tests and embeddings without SQLite; keeps the
/// raw serialized payload so parse recovery behaves like the real store.
#[derive(Debug, Default)]
pub struct MemorySlotRepository {
    slot: RefCell<Option<String>>,
}

impl MemorySlotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the raw slot value, bypassing serialization.
    pub fn set_raw(&self, value: impl Into<String>) {
        *self.slot.borrow_mut() = Some(value.into());
    }
}

impl SlotRepository for MemorySlotRepository {
    fn load_all(&self) -> RepoResult<Vec<String>> {
        Ok(self
            .slot
            .borrow()
            .as_deref()
            .map(decode_slot_value)
            .unwrap_or_default())
    }

    fn save_all(&self, tasks: &[String]) -> RepoResult<()> {
        let payload = serde_json::to_string(tasks)?;
        *self.slot.borrow_mut() = Some(payload);
        Ok(())
    }
}

/// Decodes a raw slot value, recovering malformed payloads as empty.
fn decode_slot_value(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!(
                "event=slot_load module=repo status=recovered error_code=malformed_slot error={err}"
            );
            Vec::new()
        }
    }
}

fn ensure_table(conn: &Connection, table: &'static str) -> RepoResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    if exists == 0 {
        return Err(RepoError::MissingRequiredTable(table));
    }
    Ok(())
}

fn ensure_column(
    conn: &Connection,
    table: &'static str,
    column: &'static str,
) -> RepoResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM pragma_table_info(?1)
            WHERE name = ?2
        );",
        params![table, column],
        |row| row.get(0),
    )?;
    if exists == 0 {
        return Err(RepoError::MissingRequiredColumn { table, column });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::decode_slot_value;

    #[test]
    fn decode_accepts_json_array_of_strings() {
        let tasks = decode_slot_value(r#"["Buy milk","Call Sam"]"#);
        assert_eq!(tasks, vec!["Buy milk".to_string(), "Call Sam".to_string()]);
    }

    #[test]
    fn decode_recovers_non_array_payload_as_empty() {
        assert!(decode_slot_value(r#"{"tasks":[]}"#).is_empty());
        assert!(decode_slot_value("not json at all").is_empty());
    }

    #[test]
    fn decode_recovers_array_with_non_string_items_as_empty() {
        assert!(decode_slot_value("[1,2,3]").is_empty());
    }
}
