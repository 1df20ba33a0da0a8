//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{CleanupError, Result};
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".cleanup-examples.toml";

/// Prefix of environment variables read by [`EnvConfig`]
pub const ENV_PREFIX: &str = "CLEANUP_EXAMPLES";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 20,
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(CleanupError::config_not_found(&self.path));
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

/// Environment variable configuration source
///
/// Reads `<PREFIX>_MARKER`, `<PREFIX>_DIRS` and `<PREFIX>_EXCLUDE` (comma
/// lists) and `<PREFIX>_IMPORT_FIXER` (whitespace separated command).
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

impl EnvConfig {
    const KEYS: [&'static str; 4] = ["MARKER", "DIRS", "EXCLUDE", "IMPORT_FIXER"];

    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 15,
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }
}

fn comma_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(marker) = self.var("MARKER") {
            settings.marker = Some(marker.trim().to_string());
        }

        if let Some(dirs) = self.var("DIRS") {
            settings.process_dirs = Some(comma_list(&dirs));
        }

        if let Some(exclude) = self.var("EXCLUDE") {
            settings.exclude_patterns = Some(comma_list(&exclude));
        }

        if let Some(fixer) = self.var("IMPORT_FIXER") {
            settings.import_fixer = Some(fixer.split_whitespace().map(str::to_string).collect());
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        Self::KEYS.iter().any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
