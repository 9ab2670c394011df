//! Widget controller.
//!
//! # Responsibility
//! - Wire input events to task creation, removal controls to deletion,
//!   and perform the initial non-persisting load.
//!
//! # Invariants
//! - Rendered rows and the persisted sequence agree after every completed
//!   operation; a failed save rolls the rendered row back.
//! - Each row's text is captured at render time, not re-read from the row.

use crate::model::task::Task;
use crate::repo::slot_repo::{RepoError, SlotRepository};
use crate::service::list_service::TaskListService;
use crate::widget::view::{EntryId, TaskView, UiEvent};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Notice shown when blank input is submitted.
pub const EMPTY_INPUT_NOTICE: &str = "Please enter a task.";

pub type WidgetResult<T> = Result<T, WidgetError>;

/// Controller-level error for widget operations.
#[derive(Debug)]
pub enum WidgetError {
    Repo(RepoError),
    UnknownEntry(EntryId),
}

impl Display for WidgetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::UnknownEntry(id) => write!(f, "no visible entry with id {id}"),
        }
    }
}

impl Error for WidgetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::UnknownEntry(_) => None,
        }
    }
}

impl From<RepoError> for WidgetError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

struct Entry {
    id: EntryId,
    text: String,
}

/// Controller keeping the visible list, the input field and the persisted
/// slot synchronized.
pub struct WidgetController<R: SlotRepository, V: TaskView> {
    service: TaskListService<R>,
    view: V,
    entries: Vec<Entry>,
}

impl<R: SlotRepository, V: TaskView> WidgetController<R, V> {
    /// Creates a controller over a repository and a host view.
    pub fn new(repo: R, view: V) -> Self {
        Self {
            service: TaskListService::new(repo),
            view,
            entries: Vec::new(),
        }
    }

    /// Renders every persisted task without re-persisting it.
    ///
    /// Previously rendered rows are detached first, so re-invocation after
    /// the initial load does not duplicate entries.
    pub fn load_on_startup(&mut self) -> WidgetResult<()> {
        for entry in self.entries.drain(..) {
            self.view.detach_entry(entry.id);
        }

        for task in self.service.tasks()? {
            self.render_row(task.into_text());
        }
        info!(
            "event=widget_load module=widget status=ok count={}",
            self.entries.len()
        );
        Ok(())
    }

    /// Routes one user event.
    ///
    /// The add control and the keyboard commit share the identical
    /// submission path.
    pub fn handle_event(&mut self, event: UiEvent) -> WidgetResult<()> {
        match event {
            UiEvent::AddActivated | UiEvent::InputSubmitted => self.submit_from_input(),
            UiEvent::RemoveActivated(id) => self.remove_entry(id),
        }
    }

    /// Reads the input field and appends its trimmed text as a new task.
    ///
    /// Blank input surfaces one validation notice and changes nothing: no
    /// row, no persistence, no input clear.
    pub fn submit_from_input(&mut self) -> WidgetResult<()> {
        let raw = self.view.input_text();
        let task = match Task::parse(&raw) {
            Ok(task) => task,
            Err(_) => {
                self.view.show_notice(EMPTY_INPUT_NOTICE);
                return Ok(());
            }
        };

        let id = self.render_row(task.text().to_string());
        if let Err(err) = self.service.add_task(&task) {
            // Keep rendered and persisted state equal: drop the row again.
            self.detach_row(id);
            return Err(err.into());
        }

        self.view.clear_input();
        self.view.focus_input();
        Ok(())
    }

    /// Detaches the activated row and deletes the first stored occurrence
    /// of the text captured when that row was rendered.
    pub fn remove_entry(&mut self, id: EntryId) -> WidgetResult<()> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(WidgetError::UnknownEntry(id))?;
        let entry = self.entries.remove(position);
        self.view.detach_entry(entry.id);

        let removed = self.service.remove_task(&entry.text)?;
        if !removed {
            warn!("event=task_remove module=widget status=recovered error_code=value_not_in_slot");
        }
        Ok(())
    }

    /// Returns the rendered texts in display order.
    pub fn visible_texts(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.text.as_str()).collect()
    }

    fn render_row(&mut self, text: String) -> EntryId {
        let id = Uuid::new_v4();
        self.view.insert_entry(id, &text);
        self.entries.push(Entry { id, text });
        id
    }

    fn detach_row(&mut self, id: EntryId) {
        if let Some(position) = self.entries.iter().position(|entry| entry.id == id) {
            let entry = self.entries.remove(position);
            self.view.detach_entry(entry.id);
        }
    }
}
