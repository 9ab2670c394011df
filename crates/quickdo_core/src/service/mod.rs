//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate slot repository calls into task-list operations.
//! - Keep widget and FFI layers decoupled from storage details.

pub mod list_service;
