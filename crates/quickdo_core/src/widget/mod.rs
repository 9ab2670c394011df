//! Widget synchronization layer.
//!
//! # Responsibility
//! - Define the rendering-surface seam consumed by the controller.
//! - Keep the visible list, the input field and the persisted slot in step.
//!
//! # Invariants
//! - After every completed operation the rendered sequence equals the
//!   persisted sequence in content and order.
//! - Loading renders stored tasks without re-appending them to storage.

pub mod controller;
pub mod view;
