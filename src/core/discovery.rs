//! Project root discovery and file enumeration
//!
//! Walks the project tree with exclusion rules, collects the files removed
//! wholesale and the source files handed to the rewrite engine.

use crate::core::marker::Marker;
use crate::error::{CleanupError, Result};
use crate::models::config::RunMode;
use crate::output::console::Console;
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

/// Find the first ancestor of `start` (inclusive) holding `manifest`
pub fn find_project_root(start: &Path, manifest: &str) -> Result<PathBuf> {
    let start = start
        .canonicalize()
        .map_err(|_| CleanupError::invalid_path(start))?;

    start
        .ancestors()
        .find(|dir| dir.join(manifest).is_file())
        .map(Path::to_path_buf)
        .ok_or_else(|| CleanupError::project_root_not_found(&start, manifest))
}

/// The project tree below a root, with exclusion rules applied
#[derive(Debug, Clone)]
pub struct SourceTree {
    root: PathBuf,
    excludes: Vec<Pattern>,
}

impl SourceTree {
    /// Compile exclusion globs for the tree rooted at `root`
    pub fn new(root: impl Into<PathBuf>, exclude_patterns: &[String]) -> Result<Self> {
        let excludes = exclude_patterns
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            root: root.into(),
            excludes,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path relative to the root, for display
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    /// Whether a directory entry is skipped along with everything below it
    fn is_excluded(&self, entry: &DirEntry) -> bool {
        // The walk root is exempt even when its own name looks hidden
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }

        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') || self.excludes.iter().any(|p| p.matches(&name))
    }

    /// Every regular file under `dir`, sorted
    pub fn files_under(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_excluded(entry));

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// Files removed wholesale: marked sources (`koo_*.go`) and marked data
    /// files (`*_koo_*.sql`) anywhere in the tree
    pub fn marked_files(
        &self,
        marker: &Marker,
        source_ext: &str,
        data_ext: &str,
    ) -> Result<Vec<PathBuf>> {
        let files = self
            .files_under(&self.root)?
            .into_iter()
            .filter(|path| {
                let name = file_name(path);
                marker.is_marked_source_file(&name, source_ext)
                    || marker.is_marked_data_file(&name, data_ext)
            })
            .collect::<Vec<_>>();

        debug!(count = files.len(), "found marked files");
        Ok(files)
    }

    /// Source files under `dir` that the rewrite engine should visit
    ///
    /// Files that would be removed wholesale are left out. A missing
    /// directory yields no files.
    pub fn source_files(
        &self,
        dir: &Path,
        marker: &Marker,
        source_ext: &str,
    ) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "directory not present, skipping");
            return Ok(Vec::new());
        }

        let files = self
            .files_under(dir)?
            .into_iter()
            .filter(|path| {
                let name = file_name(path);
                has_extension(&name, source_ext) && !marker.is_marked_source_file(&name, source_ext)
            })
            .collect();

        Ok(files)
    }
}

/// Delete (or in preview, list) the given files
///
/// The first failure aborts the run.
pub fn delete_files(
    tree: &SourceTree,
    files: &[PathBuf],
    marker: &Marker,
    mode: RunMode,
    console: &Console,
) -> Result<()> {
    if files.is_empty() {
        console.item(&format!("No {}* files found", marker.file_prefix()));
        return Ok(());
    }

    for path in files {
        let rel = tree.relative(path);
        if mode.is_preview() {
            console.would(&format!("Would delete: {}", rel.display()));
            continue;
        }

        fs::remove_file(path).map_err(|e| CleanupError::delete_error(path, e))?;
        info!(path = %rel.display(), "deleted file");
        console.done(&format!("Deleted: {}", rel.display()));
    }

    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn has_extension(name: &str, extension: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext == extension)
}
