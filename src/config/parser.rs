//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use super::file::DEFAULT_CONFIG_FILE;
use crate::error::{CleanupError, Result};
use crate::models::config::PartialSettings;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CleanupError::config_not_found(path));
    }

    let content = fs::read_to_string(path).map_err(|e| CleanupError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content).map_err(|e| CleanupError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(
    settings: &PartialSettings,
    path: P,
) -> Result<()> {
    let path = path.as_ref();

    let empty = |key: &str| {
        CleanupError::config_error(format!(
            "Invalid empty {} in config file: {}",
            key,
            path.display()
        ))
    };

    if settings.marker.as_deref().is_some_and(str::is_empty) {
        return Err(empty("marker"));
    }

    if settings.manifest_file.as_deref().is_some_and(str::is_empty) {
        return Err(empty("manifest_file"));
    }

    if let Some(start_path) = &settings.start_path {
        if start_path.as_os_str().is_empty() {
            return Err(empty("start_path"));
        }
    }

    if let Some(dirs) = &settings.process_dirs {
        if dirs.is_empty() || dirs.iter().any(String::is_empty) {
            return Err(empty("process_dirs"));
        }
    }

    if let Some(fixer) = &settings.import_fixer {
        if fixer.is_empty() {
            return Err(empty("import_fixer"));
        }
    }

    if let Some(patterns) = &settings.exclude_patterns {
        for pattern in patterns {
            if pattern.is_empty() {
                return Err(CleanupError::config_error(format!(
                    "Empty exclude pattern in config file: {}",
                    path.display()
                )));
            }

            glob::Pattern::new(pattern).map_err(|e| {
                CleanupError::config_error(format!(
                    "Invalid exclude pattern '{}' in config file: {}: {}",
                    pattern,
                    path.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// Locations searched for a configuration file, in order
pub fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];

    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("cleanup-examples").join("config.toml"));
    }

    locations
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    for location in default_config_locations() {
        if location.is_file() {
            tracing::debug!(path = %location.display(), "using configuration file");
            return Ok(Some(parse_config_file(location)?));
        }
    }

    Ok(None)
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| CleanupError::config_write_error(path, e.to_string()))?;
        }
    }

    let default_config = include_str!("default_config.toml");

    fs::write(path, default_config)
        .map_err(|e| CleanupError::config_write_error(path, e.to_string()))
}
