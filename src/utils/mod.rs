//! Shared utilities.
//!
//! - [`listing`]: how empty collections are answered
//! - [`tracing`]: audit/security logging macros and span helpers

pub mod listing;
pub mod tracing;
