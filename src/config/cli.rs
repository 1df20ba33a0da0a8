//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::{Args, OutputFormat as CliOutputFormat};
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings, RunMode};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub dry_run: bool,
    pub path: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub marker: Option<String>,
    pub dirs: Option<Vec<String>>,
    /// Appended to the configured exclusions rather than replacing them
    pub exclude: Vec<String>,
    pub no_imports: bool,
    pub output_format: Option<OutputFormat>,
    pub no_colors: bool,
    pub quiet: bool,
    pub verbose: bool,
}

impl CliArgs {
    /// Extract the configuration-relevant flags from parsed arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            dry_run: args.dry_run,
            path: args.path.clone(),
            config: args.config.clone(),
            marker: args.marker.clone(),
            dirs: if args.dirs.is_empty() { None } else { Some(args.dirs.clone()) },
            exclude: args.exclude.clone(),
            no_imports: args.no_imports,
            output_format: args.output.map(|format| match format {
                CliOutputFormat::Text => OutputFormat::Text,
                CliOutputFormat::Json => OutputFormat::Json,
            }),
            no_colors: args.no_colors,
            quiet: args.quiet,
            verbose: args.verbose,
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30,
        }
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(path) = &self.args.path {
            settings.start_path = Some(path.clone());
        }

        if let Some(marker) = &self.args.marker {
            settings.marker = Some(marker.clone());
        }

        if let Some(dirs) = &self.args.dirs {
            settings.process_dirs = Some(dirs.clone());
        }

        if let Some(format) = self.args.output_format {
            settings.output_format = Some(format);
        }

        // Flags only ever override towards their non-default side
        if self.args.dry_run {
            settings.mode = Some(RunMode::Preview);
        }

        if self.args.no_imports {
            settings.fix_imports = Some(false);
        }

        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        if self.args.quiet {
            settings.quiet = Some(true);
        }

        if self.args.verbose {
            settings.verbose = Some(true);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
