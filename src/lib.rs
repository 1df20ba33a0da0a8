//! cleanup-examples - strips marked demo code from a Go project template
//!
//! Deletes files named after the marker (`koo_*.go`, `*_koo_*.sql`), then
//! parses the remaining Go sources and removes the declarations, struct
//! fields, assignments, routes and literal entries that reference it. Every
//! untouched byte of a rewritten file is kept as it was.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;

// Re-export commonly used types
pub use crate::core::{Cleaner, Marker, Rewriter};
pub use error::{handle_error, CleanupError, ErrorSeverity, Result};
pub use models::{
    config::{OutputFormat, RunMode, Settings},
    report::{FileAction, FileChange, ImportFixStatus, RunReport},
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
