//! Rendering surface seam.
//!
//! # Responsibility
//! - Abstract the host-owned input field, notice surface and entry list.
//!
//! # Invariants
//! - View implementations perform pure UI mutation; they never touch
//!   storage.

use uuid::Uuid;

/// Handle coupling one visible entry to its removal control.
///
/// Generated at render time; the controller uses it to detach exactly the
/// row whose control was activated, never a lookalike row with equal text.
pub type EntryId = Uuid;

/// Host-owned rendering surface for the to-do widget.
///
/// The widget consumes an input field (read/clear/focus), a notice surface
/// for validation messages, and a list container receiving one row per
/// task.
pub trait TaskView {
    /// Returns the current raw input field value.
    fn input_text(&self) -> String;

    /// Clears the input field.
    fn clear_input(&mut self);

    /// Returns keyboard focus to the input field.
    fn focus_input(&mut self);

    /// Surfaces a blocking, user-visible validation notice.
    fn show_notice(&mut self, message: &str);

    /// Appends one visible row showing `text` with a removal control.
    fn insert_entry(&mut self, id: EntryId, text: &str);

    /// Detaches the row identified by `id` from the visible list.
    fn detach_entry(&mut self, id: EntryId);
}

/// Discrete user events the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// The add control was activated.
    AddActivated,
    /// The Enter-equivalent key was pressed while the input had focus.
    InputSubmitted,
    /// The removal control of one visible row was activated.
    RemoveActivated(EntryId),
}
