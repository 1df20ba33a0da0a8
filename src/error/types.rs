//! Error types and definitions for the cleanup tool
//!
//! Every fatal condition of a run maps to one variant here. The only
//! non-fatal condition is a failing import fixer, which is classified as a
//! warning so the orchestrator can report it and keep going.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - the run still completes
    Warning,
    /// Error level - the run aborts
    Error,
    /// Critical level - the run cannot even start (bad configuration, broken grammar)
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for cleanup operations
#[derive(Debug, Error)]
pub enum CleanupError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// No ancestor directory holds the project manifest
    #[error("could not find {manifest} in {start} or any parent directory")]
    ProjectRootNotFound {
        start: PathBuf,
        manifest: String,
    },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal {
        path: PathBuf,
        message: String,
    },

    /// A marked file could not be removed
    #[error("failed to delete {path}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source file does not parse
    #[error("failed to parse {path}: {message}")]
    Parse {
        path: PathBuf,
        message: String,
    },

    /// The rewritten text of a file no longer parses
    #[error("failed to format {path}: {message}")]
    Format {
        path: PathBuf,
        message: String,
    },

    /// A rewritten file could not be written back
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The Go grammar could not be loaded into the parser
    #[error("Grammar error: {message}")]
    Grammar { message: String },

    /// The external import fixer failed or is missing
    #[error("{command} failed: {message}")]
    ImportFixer {
        command: String,
        /// Directory the fixer was pointed at, relative to the project root
        target: String,
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration file write errors (`--init`)
    #[error("Error writing configuration file {path}: {message}")]
    ConfigWrite {
        path: PathBuf,
        message: String,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },
}

impl CleanupError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CleanupError::ImportFixer { .. } => ErrorSeverity::Warning,

            CleanupError::Config { .. } => ErrorSeverity::Critical,
            CleanupError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            CleanupError::ConfigRead { .. } => ErrorSeverity::Critical,
            CleanupError::ConfigParse { .. } => ErrorSeverity::Critical,
            CleanupError::GlobPattern { .. } => ErrorSeverity::Critical,
            CleanupError::Grammar { .. } => ErrorSeverity::Critical,
            CleanupError::StdoutWrite { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Check if the run can continue after this error
    pub fn is_recoverable(&self) -> bool {
        self.severity() == ErrorSeverity::Warning
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            CleanupError::ProjectRootNotFound { start, manifest, .. } => {
                format!(
                    "Error finding project root: could not find {} in '{}' or any parent directory",
                    manifest,
                    start.display()
                )
            }
            CleanupError::Delete { path, source, .. } => {
                format!("Error deleting files: failed to delete '{}': {}", path.display(), source)
            }
            CleanupError::Parse { path, message, .. } => {
                format!(
                    "Error processing Go files: failed to parse '{}': {}",
                    path.display(),
                    message
                )
            }
            CleanupError::Format { path, message, .. } => {
                format!(
                    "Error processing Go files: failed to format '{}': {}",
                    path.display(),
                    message
                )
            }
            CleanupError::Write { path, source, .. } => {
                format!(
                    "Error processing Go files: failed to write '{}': {}",
                    path.display(),
                    source
                )
            }
            CleanupError::Read { path, source, .. } => {
                format!(
                    "Error processing Go files: failed to read '{}': {}",
                    path.display(),
                    source
                )
            }
            CleanupError::InvalidPath { path, .. } => {
                format!(
                    "Invalid path: '{}'. Please provide a valid directory path.",
                    path.display()
                )
            }
            CleanupError::ConfigNotFound { path, .. } => {
                format!("Configuration file not found at '{}'.", path.display())
            }
            CleanupError::ImportFixer { command, message, .. } => {
                format!("Warning: {} failed: {}", command, message)
            }
            _ => self.to_string(),
        }
    }

    /// Get a remediation hint for the user, if one applies
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CleanupError::ProjectRootNotFound { manifest, .. } => Some(format!(
                "Run the tool from inside the project, or pass --path pointing at a \
                 directory below the {}",
                manifest
            )),
            CleanupError::ImportFixer { command, target, .. } => {
                Some(format!("Please run '{} ./{}/' manually", command, target))
            }
            CleanupError::Parse { .. } => {
                Some(
                    "Fix the syntax error first; no files were rewritten after this point"
                        .to_string(),
                )
            }
            CleanupError::ConfigParse { .. } | CleanupError::Config { .. } => {
                Some(
                    "Check the configuration file or run with --init to create a fresh one"
                        .to_string(),
                )
            }
            _ => None,
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        CleanupError::Io { source }
    }

    /// Create a project root error
    pub fn project_root_not_found(start: impl Into<PathBuf>, manifest: impl Into<String>) -> Self {
        CleanupError::ProjectRootNotFound {
            start: start.into(),
            manifest: manifest.into(),
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        CleanupError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a deletion error
    pub fn delete_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CleanupError::Delete {
            path: path.into(),
            source,
        }
    }

    /// Create a read error
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CleanupError::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        CleanupError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a format error
    pub fn format_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        CleanupError::Format {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a write error
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CleanupError::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a grammar error
    pub fn grammar_error(message: impl Into<String>) -> Self {
        CleanupError::Grammar { message: message.into() }
    }

    /// Create an import fixer error
    pub fn import_fixer_error(
        command: impl Into<String>,
        target: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        CleanupError::ImportFixer {
            command: command.into(),
            target: target.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        CleanupError::Config { message: message.into() }
    }

    /// Create a configuration-not-found error
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        CleanupError::ConfigNotFound { path: path.into() }
    }

    /// Create a configuration write error
    pub fn config_write_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        CleanupError::ConfigWrite {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        CleanupError::InvalidPath { path: path.into() }
    }

}

// Implement From for common error types
impl From<std::io::Error> for CleanupError {
    fn from(err: std::io::Error) -> Self {
        CleanupError::io_error(err)
    }
}

impl From<glob::PatternError> for CleanupError {
    fn from(err: glob::PatternError) -> Self {
        CleanupError::GlobPattern { source: err }
    }
}

impl From<serde_json::Error> for CleanupError {
    fn from(err: serde_json::Error) -> Self {
        CleanupError::JsonSerialize { source: err }
    }
}

impl From<walkdir::Error> for CleanupError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        CleanupError::directory_traversal_error(path, err.to_string())
    }
}

/// Result type alias for cleanup operations
pub type Result<T> = std::result::Result<T, CleanupError>;
