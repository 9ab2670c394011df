//! Core domain logic for QuickDo.
//! This crate is the single source of truth for the widget's invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod widget;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskValidationError};
pub use repo::slot_repo::{
    MemorySlotRepository, RepoError, RepoResult, SlotRepository, SqliteSlotRepository,
    TASKS_SLOT_KEY,
};
pub use service::list_service::TaskListService;
pub use widget::controller::{WidgetController, WidgetError, WidgetResult, EMPTY_INPUT_NOTICE};
pub use widget::view::{EntryId, TaskView, UiEvent};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
