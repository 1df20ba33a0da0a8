//! Validation of fully merged settings

use std::path::{Component, Path};

use crate::core::marker::Marker;
use crate::error::{CleanupError, Result};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if !settings.start_path.exists() {
            return Err(CleanupError::invalid_path(&settings.start_path));
        }

        Marker::new(&settings.marker)?;

        for pattern in &settings.exclude_patterns {
            glob::Pattern::new(pattern)?;
        }

        if settings.process_dirs.is_empty() {
            return Err(CleanupError::config_error("process_dirs must name at least one directory"));
        }
        for dir in &settings.process_dirs {
            Self::validate_process_dir(dir)?;
        }

        let manifest = &settings.manifest_file;
        if manifest.is_empty() || manifest.contains(|c: char| c == '/' || c == '\\') {
            return Err(CleanupError::config_error(format!(
                "manifest_file must be a plain file name, got '{}'",
                settings.manifest_file
            )));
        }

        if settings.source_extension.is_empty() || settings.data_extension.is_empty() {
            return Err(CleanupError::config_error("file extensions must not be empty"));
        }

        if settings.fix_imports && settings.import_fixer.is_empty() {
            return Err(CleanupError::config_error(
                "import_fixer must name a command when fix_imports is enabled",
            ));
        }

        Ok(())
    }

    /// Process directories stay inside the project root
    fn validate_process_dir(dir: &str) -> Result<()> {
        let path = Path::new(dir);
        let escapes = path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));

        if dir.is_empty() || escapes {
            return Err(CleanupError::config_error(format!(
                "process directory '{}' must be a relative path inside the project",
                dir
            )));
        }

        Ok(())
    }
}
