//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// cleanup-examples - strip marked demo code from a Go project template
#[derive(Parser, Debug)]
#[command(name = "cleanup-examples")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Remove Koo-prefixed example code from a Go project")]
#[command(long_about = "cleanup-examples strips the demo code shipped with a project template. \
It deletes koo_*.go sources and *_koo_*.sql migrations, then parses the remaining Go files \
and removes declarations, struct fields, assignments, routes and literal entries that \
reference the marker, keeping the rest of each file byte-for-byte.")]
#[command(after_help = "EXAMPLES:

    # Show what would be removed, change nothing
    cleanup-examples --dry-run

    # Strip the demo code from the project containing ./cmd
    cleanup-examples --path ./cmd

    # Use a different marker token and also rewrite ./pkg
    cleanup-examples --marker Demo --dir internal --dir pkg

    # Skip goimports and print a JSON report
    cleanup-examples --no-imports --output json

    # Create a default configuration file
    cleanup-examples --init
")]
pub struct Args {
    /// Preview mode: report intended changes without touching any file
    #[arg(
        long,
        visible_alias = "preview",
        help = "Print what would be done without making changes",
    )]
    pub dry_run: bool,

    /// Start directory for the project-root search
    #[arg(
        short,
        long,
        value_name = "DIR",
        help = "Directory to start the go.mod search from (defaults to the current directory)",
    )]
    pub path: Option<PathBuf>,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (defaults to .cleanup-examples.toml in the \
                current directory)",
    )]
    pub config: Option<PathBuf>,

    /// Marker token
    #[arg(
        short,
        long,
        value_name = "TOKEN",
        help = "Marker token flagging example code (default: Koo)",
    )]
    pub marker: Option<String>,

    /// Directories to rewrite
    #[arg(
        short,
        long = "dir",
        value_name = "DIR",
        help = "Directory, relative to the project root, whose Go files are rewritten \
                (can be given multiple times; default: internal)",
    )]
    pub dirs: Vec<String>,

    /// Extra exclusion globs
    #[arg(
        short,
        long,
        value_name = "GLOB",
        help = "Directory-name glob to skip while walking, added to the configured \
                ones (can be given multiple times)",
    )]
    pub exclude: Vec<String>,

    /// Skip the import fixer
    #[arg(long, help = "Do not run goimports after rewriting")]
    pub no_imports: bool,

    /// Output format (text, json)
    #[arg(
        short,
        long,
        value_enum,
        value_name = "FORMAT",
        help = "Output format: 'text' (default) for progress lines and checklist, \
                'json' for a machine-readable report",
    )]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, help = "Disable colored output")]
    pub no_colors: bool,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress progress lines, print only the final counts")]
    pub quiet: bool,

    /// Show debug diagnostics
    #[arg(short, long, help = "Show debug diagnostics and a per-file summary")]
    pub verbose: bool,

    /// Initialize a default configuration file
    #[arg(
        long,
        help = "Create a default configuration file (.cleanup-examples.toml) in the \
                current directory",
    )]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
