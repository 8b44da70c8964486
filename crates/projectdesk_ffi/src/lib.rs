//! Flutter-facing bridge for the ProjectDesk mobile client.

pub mod api;
