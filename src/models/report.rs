//! Outcome of a single cleanup run

use super::config::RunMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happened (or would happen) to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAction {
    Deleted,
    Modified,
}

/// A file touched by the run, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    pub path: PathBuf,
    pub action: FileAction,
    /// Number of constructs removed from the file; zero for deletions
    pub removals: usize,
}

/// Result of running the import fixer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportFixStatus {
    /// Not attempted (preview mode or disabled)
    Skipped,
    Fixed,
    Failed { message: String },
}

/// Everything a run did, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub mode: RunMode,
    pub project_root: PathBuf,
    pub changes: Vec<FileChange>,
    pub import_fix: ImportFixStatus,
}

impl RunReport {
    pub fn new(mode: RunMode, project_root: PathBuf) -> Self {
        Self {
            mode,
            project_root,
            changes: Vec::new(),
            import_fix: ImportFixStatus::Skipped,
        }
    }

    pub fn record_deleted(&mut self, path: PathBuf) {
        self.changes.push(FileChange {
            path,
            action: FileAction::Deleted,
            removals: 0,
        });
    }

    pub fn record_modified(&mut self, path: PathBuf, removals: usize) {
        self.changes.push(FileChange {
            path,
            action: FileAction::Modified,
            removals,
        });
    }

    /// Files deleted (or to be deleted in preview)
    pub fn deleted(&self) -> impl Iterator<Item = &FileChange> {
        self.changes.iter().filter(|c| c.action == FileAction::Deleted)
    }

    /// Files rewritten (or to be rewritten in preview)
    pub fn modified(&self) -> impl Iterator<Item = &FileChange> {
        self.changes.iter().filter(|c| c.action == FileAction::Modified)
    }

    /// True when the run found nothing to do
    pub fn is_clean(&self) -> bool {
        self.changes.is_empty()
    }
}
