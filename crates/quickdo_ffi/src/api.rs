//! FFI use-case API for host-facing calls.
//!
//! # Responsibility
//! - Expose the storage-synchronization half of the widget contract to an
//!   embedding host UI that owns the rendering surface.
//! - Keep error semantics simple for UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Rendering loaded tasks never changes the stored sequence.

use log::warn;
use quickdo_core::db::open_db;
use quickdo_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    SqliteSlotRepository, Task, TaskListService, EMPTY_INPUT_NOTICE,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const WIDGET_DB_FILE_NAME: &str = "quickdo_widget.sqlite3";
static WIDGET_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Action result envelope for widget mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetActionResponse {
    /// Whether the operation completed without a storage failure.
    pub ok: bool,
    /// Whether the stored sequence changed.
    pub changed: bool,
    /// Human-readable message for diagnostics and UI notices.
    pub message: String,
}

impl WidgetActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            changed: true,
            message: message.into(),
        }
    }

    fn unchanged(ok: bool, message: impl Into<String>) -> Self {
        Self {
            ok,
            changed: false,
            message: message.into(),
        }
    }
}

/// Load response envelope for the initial render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetLoadResponse {
    /// Whether the load succeeded.
    pub ok: bool,
    /// Stored task texts in display order (empty on failure).
    pub tasks: Vec<String>,
    /// Human-readable message for diagnostics.
    pub message: String,
}

/// Loads the persisted sequence for the host to render.
///
/// The host renders each returned text as one visible entry; the stored
/// sequence is left untouched, so reloads never duplicate tasks.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn widget_load_tasks() -> WidgetLoadResponse {
    let loaded = with_list_service(|service| {
        service.tasks().map(|tasks| {
            tasks
                .into_iter()
                .map(Task::into_text)
                .collect::<Vec<String>>()
        })
    });

    match loaded {
        Ok(tasks) => WidgetLoadResponse {
            ok: true,
            message: format!("Loaded {} task(s).", tasks.len()),
            tasks,
        },
        Err(message) => {
            warn!("event=widget_load module=ffi status=error error={message}");
            WidgetLoadResponse {
                ok: false,
                tasks: Vec::new(),
                message: format!("widget_load_tasks failed: {message}"),
            }
        }
    }
}

/// Appends one task from the host's input field.
///
/// Blank or whitespace-only text is rejected with the validation notice
/// the host should surface; nothing is persisted in that case.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn widget_submit_task(text: String) -> WidgetActionResponse {
    let task = match Task::parse(&text) {
        Ok(task) => task,
        Err(_) => return WidgetActionResponse::unchanged(false, EMPTY_INPUT_NOTICE),
    };

    match with_list_service(|service| service.add_task(&task)) {
        Ok(()) => WidgetActionResponse::success("Task added."),
        Err(message) => {
            WidgetActionResponse::unchanged(false, format!("widget_submit_task failed: {message}"))
        }
    }
}

/// Removes the first stored value equal to the given text.
///
/// The host detaches the activated row itself; a value already gone from
/// storage is reported as unchanged, not as a failure.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn widget_remove_task(text: String) -> WidgetActionResponse {
    match with_list_service(|service| service.remove_task(text.trim())) {
        Ok(true) => WidgetActionResponse::success("Task removed."),
        Ok(false) => WidgetActionResponse::unchanged(true, "Task not found."),
        Err(message) => {
            WidgetActionResponse::unchanged(false, format!("widget_remove_task failed: {message}"))
        }
    }
}

fn resolve_widget_db_path() -> PathBuf {
    WIDGET_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("QUICKDO_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(WIDGET_DB_FILE_NAME)
        })
        .clone()
}

fn with_list_service<T>(
    f: impl FnOnce(&TaskListService<SqliteSlotRepository<'_>>) -> quickdo_core::RepoResult<T>,
) -> Result<T, String> {
    let db_path = resolve_widget_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("widget DB open failed: {err}"))?;
    let repo = SqliteSlotRepository::try_new(&conn)
        .map_err(|err| format!("widget repo init failed: {err}"))?;
    let service = TaskListService::new(repo);
    f(&service).map_err(|err| err.to_string())
}
