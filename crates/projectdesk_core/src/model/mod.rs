//! Domain model shared by the API, mobile and web fronts.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Own field-level validation so every front rejects the same inputs.
//!
//! # Invariants
//! - Every project and task is identified by a stable, non-nil UUID.
//! - A task always belongs to exactly one project.

pub mod facility;
pub mod project;
pub mod task;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for domain records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValidationError {
    /// Identifier is the nil UUID.
    NilId,
    /// Parent project identifier of a task is the nil UUID.
    NilProjectId,
    /// Named field is empty after trimming.
    EmptyField(&'static str),
    /// Named field exceeds its maximum length in characters.
    FieldTooLong { field: &'static str, max_chars: usize },
    /// Theme color is not a `#RRGGBB` token.
    InvalidColor { field: &'static str, value: String },
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "id must not be nil"),
            Self::NilProjectId => write!(f, "project_id must not be nil"),
            Self::EmptyField(field) => write!(f, "{field} must not be empty"),
            Self::FieldTooLong { field, max_chars } => {
                write!(f, "{field} must be at most {max_chars} characters")
            }
            Self::InvalidColor { field, value } => {
                write!(f, "{field} must be a #RRGGBB color, got `{value}`")
            }
        }
    }
}

impl Error for ModelValidationError {}
