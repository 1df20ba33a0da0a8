//! Error handling for the cleanup tool
//!
//! This module provides the error types, result alias, and error context
//! utilities shared by every stage of a run.

pub mod context;
pub mod types;

pub use context::handle_error;
pub use types::{CleanupError, ErrorSeverity, Result};
