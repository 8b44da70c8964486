//! Web-front facility branding: context provider and display formatting.
//!
//! # Responsibility
//! - Hand facility data to consumers through an explicit context value.
//! - Derive display strings (address, contact, theme) from a `Facility`.
//!
//! # Invariants
//! - Formatting functions are pure and never fail.
//! - A consumer can only observe a context that a provider produced.

pub mod context;
pub mod format;
