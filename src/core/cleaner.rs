//! Cleanup orchestration
//!
//! Locates the project root, removes marked files, rewrites the remaining
//! sources and finally runs the import fixer. Everything runs sequentially;
//! each file is read, rewritten and written before the next one is opened.

use crate::core::discovery::{self, SourceTree};
use crate::core::import_fixer::ImportFixer;
use crate::core::marker::Marker;
use crate::core::rewrite::{RewriteRules, Rewriter};
use crate::error::{handle_error, CleanupError, Result};
use crate::models::config::{RunMode, Settings};
use crate::models::report::{ImportFixStatus, RunReport};
use crate::output::Console;
use crate::parsers::go_parser::GoParser;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Runs one cleanup over a project
pub struct Cleaner {
    settings: Settings,
    marker: Marker,
    rewriter: Rewriter,
    console: Console,
}

impl Cleaner {
    /// Create a cleaner; fails if the marker token is invalid
    pub fn new(settings: Settings, console: Console) -> Result<Self> {
        let rules = RewriteRules::from_settings(&settings)?;
        let marker = rules.marker.clone();

        Ok(Self {
            settings,
            marker,
            rewriter: Rewriter::new(rules),
            console,
        })
    }

    /// Execute the whole sequence in the given mode
    pub fn run(&self, mode: RunMode) -> Result<RunReport> {
        let root = discovery::find_project_root(
            &self.settings.start_path,
            &self.settings.manifest_file,
        )?;
        info!(root = %root.display(), %mode, "starting cleanup");

        let mut report = RunReport::new(mode, root.clone());
        let tree = SourceTree::new(&root, &self.settings.exclude_patterns)?;

        if mode.is_preview() {
            self.console.banner("DRY RUN MODE - No changes will be made");
            self.console.blank();
        }
        self.console
            .banner(&format!("Cleaning up {}-prefixed example code", self.marker.upper()));
        self.console.blank();

        self.delete_marked_files(&tree, mode, &mut report)?;
        self.rewrite_sources(&tree, mode, &mut report)?;

        if !mode.is_preview() && self.settings.fix_imports {
            self.fix_imports(&root, &mut report)?;
        }

        Ok(report)
    }

    fn delete_marked_files(
        &self,
        tree: &SourceTree,
        mode: RunMode,
        report: &mut RunReport,
    ) -> Result<()> {
        self.console
            .heading(&format!("Deleting {}* files...", self.marker.file_prefix()));

        let files = tree.marked_files(
            &self.marker,
            &self.settings.source_extension,
            &self.settings.data_extension,
        )?;
        discovery::delete_files(tree, &files, &self.marker, mode, &self.console)?;

        for path in &files {
            report.record_deleted(tree.relative(path).to_path_buf());
        }

        Ok(())
    }

    fn rewrite_sources(
        &self,
        tree: &SourceTree,
        mode: RunMode,
        report: &mut RunReport,
    ) -> Result<()> {
        self.console.blank();
        self.console.heading(&format!(
            "Processing Go files to remove {} references...",
            self.marker.upper()
        ));

        let mut parser = GoParser::new()?;

        for dir in &self.settings.process_dirs {
            let files = tree.source_files(
                &tree.root().join(dir),
                &self.marker,
                &self.settings.source_extension,
            )?;
            debug!(dir = %dir, count = files.len(), "rewriting directory");

            for path in files {
                self.rewrite_file(&mut parser, tree, &path, mode, report)?;
            }
        }

        Ok(())
    }

    fn rewrite_file(
        &self,
        parser: &mut GoParser,
        tree: &SourceTree,
        path: &Path,
        mode: RunMode,
        report: &mut RunReport,
    ) -> Result<()> {
        let file = parser.parse_file(path)?;
        let rewrite = self.rewriter.rewrite(&file);

        let Some(text) = rewrite.text() else {
            return Ok(());
        };

        // Never write something that no longer parses
        parser.check_syntax(path, text)?;

        let rel = tree.relative(path);
        if mode.is_preview() {
            self.console.would(&format!("Would modify: {}", rel.display()));
        } else {
            fs::write(path, text).map_err(|e| CleanupError::write_error(path, e))?;
            info!(path = %rel.display(), removals = rewrite.removals().len(), "rewrote file");
            self.console.done(&format!("Modified: {}", rel.display()));
        }

        report.record_modified(rel.to_path_buf(), rewrite.removals().len());
        Ok(())
    }

    /// Run the import fixer; failure is reported and the run continues
    fn fix_imports(&self, root: &Path, report: &mut RunReport) -> Result<()> {
        let fixer = ImportFixer::from_command(&self.settings.import_fixer)?
            .forward_stdout(!self.console.is_silent());
        let target = self
            .settings
            .process_dirs
            .first()
            .map(String::as_str)
            .unwrap_or(".");

        self.console.blank();
        self.console.heading(&format!(
            "Running {} to fix imports...",
            self.settings.import_fixer.first().map(String::as_str).unwrap_or_default()
        ));

        match fixer.run(root, target) {
            Ok(()) => {
                self.console.done("Imports fixed");
                report.import_fix = ImportFixStatus::Fixed;
                Ok(())
            }
            Err(err) => {
                let message = err.to_string();
                match handle_error(err) {
                    Some(fatal) => Err(fatal),
                    None => {
                        report.import_fix = ImportFixStatus::Failed { message };
                        Ok(())
                    }
                }
            }
        }
    }
}
