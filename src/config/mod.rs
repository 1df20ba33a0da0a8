//! Configuration management
//!
//! Settings are layered: built-in defaults, then a TOML file, then
//! `CLEANUP_EXAMPLES_*` environment variables, then command-line flags.

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;

use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};
use tracing::debug;

pub use cli::{CliArgs, CliConfig};
pub use file::{EnvConfig, FileConfig, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use parser::{
    create_default_config, find_default_config, parse_config_content, parse_config_file,
};
pub use settings::SettingsValidator;

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Get the name of this configuration source for logging
    fn name(&self) -> &str;

    /// Get the priority of this source (higher numbers take precedence)
    fn priority(&self) -> u8 {
        10
    }
}

/// Configuration builder for merging multiple sources
pub struct ConfigBuilder {
    partial: PartialSettings,
    extra_excludes: Vec<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
            extra_excludes: Vec::new(),
        }
    }

    /// Merge settings from a partial configuration
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource>(self, source: &S) -> Result<Self> {
        if !source.is_available() {
            return Ok(self);
        }

        debug!(source = source.name(), priority = source.priority(), "loading configuration");
        let partial = source.load()?;
        Ok(self.merge(partial))
    }

    /// Add configuration from a file that must exist
    pub fn add_config_file(self, path: &std::path::Path) -> Result<Self> {
        let file_config = FileConfig::with_path(path);
        let partial = file_config.load()?;
        Ok(self.merge(partial))
    }

    /// Add configuration from the default locations, if a file exists there
    pub fn add_default_config_file(self) -> Result<Self> {
        match parser::find_default_config()? {
            Some(partial) => Ok(self.merge(partial)),
            None => Ok(self),
        }
    }

    /// Exclusion globs appended to whatever the merged layers configure
    pub fn add_exclude_patterns(mut self, patterns: &[String]) -> Self {
        self.extra_excludes.extend(patterns.iter().cloned());
        self
    }

    /// Build the final settings with validation
    pub fn build(self) -> Result<Settings> {
        let mut settings = self.partial.to_settings();

        for pattern in self.extra_excludes {
            if !settings.exclude_patterns.contains(&pattern) {
                settings.exclude_patterns.push(pattern);
            }
        }

        SettingsValidator::validate(&settings)?;

        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from every source with proper precedence handling
pub fn load_config(cli_args: CliArgs) -> Result<Settings> {
    load_config_with_env_prefix(cli_args, ENV_PREFIX)
}

/// Load configuration with a custom environment variable prefix
pub fn load_config_with_env_prefix(cli_args: CliArgs, env_prefix: &str) -> Result<Settings> {
    let mut builder = ConfigBuilder::new();

    builder = match &cli_args.config {
        Some(path) => builder.add_config_file(path)?,
        None => builder.add_default_config_file()?,
    };

    builder = builder.load_from(&EnvConfig::new(env_prefix))?;

    let extra_excludes = cli_args.exclude.clone();
    builder = builder
        .load_from(&CliConfig::new(cli_args))?
        .add_exclude_patterns(&extra_excludes);

    builder.build()
}
