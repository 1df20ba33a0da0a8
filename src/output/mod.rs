//! Output formatting and writing functionality

pub mod console;
mod formatters;
mod writers;

pub use self::console::Console;
pub use self::formatters::{checklist, format_summary_line};
pub use self::writers::{OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::report::RunReport;

/// Trait for different report formatters
pub trait Formatter {
    /// Format a run report into a string
    fn format(&self, report: &RunReport) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
    /// Marker file prefix quoted in the checklist (`koo_`)
    pub file_prefix: String,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(
        use_colors: bool,
        verbose: bool,
        quiet: bool,
        file_prefix: impl Into<String>,
    ) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
            file_prefix: file_prefix.into(),
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        // Quiet runs get the counts only
        if self.quiet {
            return Ok(format!("{}\n", formatters::format_summary_line(report)));
        }

        Ok(formatters::format_report_text(
            report,
            self.use_colors,
            self.verbose,
            &self.file_prefix,
        ))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        formatters::format_report_json(report)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(
    format: OutputFormat,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
    file_prefix: &str,
) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, verbose, quiet, file_prefix)),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
