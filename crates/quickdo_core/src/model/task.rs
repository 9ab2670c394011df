//! Task domain model.
//!
//! # Responsibility
//! - Guarantee that task text is trimmed and non-empty at construction.
//! - Keep the wire shape a bare JSON string, so a task list serializes as
//!   a JSON array of strings.
//!
//! # Invariants
//! - `text` is never empty and carries no surrounding whitespace.
//! - Two tasks with equal text are indistinguishable to persistence and
//!   removal logic.

use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for task construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Input was empty or whitespace-only after trimming.
    EmptyText,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text is empty after trimming"),
        }
    }
}

impl Error for TaskValidationError {}

/// A single to-do item, represented solely by its trimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Task {
    text: String,
}

impl Task {
    /// Parses raw user input into a task.
    ///
    /// Surrounding whitespace is removed; blank input is rejected.
    pub fn parse(raw: &str) -> Result<Self, TaskValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    /// Returns the task text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the task, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl<'de> Deserialize<'de> for Task {
    /// Deserializes from a bare string, enforcing construction invariants.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
