//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep HTTP/FFI/CLI layers decoupled from storage details.

pub mod project_service;
pub mod task_service;
