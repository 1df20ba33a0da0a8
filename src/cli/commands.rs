//! Command implementations

use super::Args;
use crate::config::{self, parser, CliArgs, DEFAULT_CONFIG_FILE};
use crate::core::{Cleaner, Marker};
use crate::error::Result;
use crate::models::config::{OutputFormat, Settings};
use crate::output::{create_formatter, Console, OutputWriter, StdoutWriter};
use std::path::PathBuf;
use tracing::debug;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Strip the example code from the project
    Clean(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Clean(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Init => init(),
            Command::Clean(args) => {
                let settings = config::load_config(CliArgs::from_args(args))?;
                clean(settings)
            }
        }
    }
}

/// Write `.cleanup-examples.toml` into the current directory unless one exists
fn init() -> Result<()> {
    let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);

    if config_path.exists() {
        println!("Configuration file already exists at: {}", config_path.display());
        println!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    parser::create_default_config(&config_path)?;

    println!("Created default configuration file at: {}", config_path.display());
    println!("Every setting is commented out; uncomment the ones you want to change.");
    Ok(())
}

/// Run the cleanup with fully merged settings and print the report
pub fn clean(settings: Settings) -> Result<()> {
    debug!(?settings, "effective settings");

    let json = settings.output_format == OutputFormat::Json;
    let console = Console::new(settings.use_colors, settings.quiet || json);
    let marker = Marker::new(&settings.marker)?;

    let cleaner = Cleaner::new(settings.clone(), console)?;
    let report = cleaner.run(settings.mode)?;

    let formatter = create_formatter(
        settings.output_format,
        settings.use_colors,
        settings.verbose,
        settings.quiet,
        marker.file_prefix(),
    );
    StdoutWriter.write(&formatter.format(&report)?)
}
