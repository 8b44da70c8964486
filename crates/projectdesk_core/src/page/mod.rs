//! Mobile-front page models, pages and navigation routes.
//!
//! # Responsibility
//! - Hold list state for the project list page as an explicit state machine.
//! - Bind externally constructed page models to pages.
//! - Build and parse string-templated navigation routes.
//!
//! # Invariants
//! - Page models never talk to storage directly; they use `ProjectSource`.
//! - Only the latest load may change the held project list.

pub mod main_page;
pub mod navigation;
pub mod project_list;
