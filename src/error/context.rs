//! Error handling policy
//!
//! Decides which errors end a run and which are reported and skipped.

use crate::error::{CleanupError, ErrorSeverity};

/// Report an error on stderr and decide whether the run must stop
///
/// - Warning: print it and return None, the run continues
/// - Error / Critical: return Some(error) for the caller to propagate
pub fn handle_error(err: CleanupError) -> Option<CleanupError> {
    match err.severity() {
        ErrorSeverity::Warning => {
            eprintln!("{}", err.user_message());
            if let Some(suggestion) = err.suggestion() {
                eprintln!("  {}", suggestion);
            }
            tracing::warn!(error = %err, "continuing after non-fatal error");
            None
        }
        ErrorSeverity::Error | ErrorSeverity::Critical => Some(err),
    }
}
