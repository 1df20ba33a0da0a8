//! Report formatting functionality
//!
//! Renders the final [`RunReport`] as the completion block (text) or as a
//! JSON document.

use crate::error::Result;
use crate::models::config::RunMode;
use crate::models::report::{FileAction, ImportFixStatus, RunReport};
use ansi_term::Colour::{Cyan, Green, Red, Yellow};
use ansi_term::Style;

/// Follow-up steps printed after every successful run
pub fn checklist(file_prefix: &str) -> Vec<String> {
    vec![
        "Run 'task atlas:hash' to update migration checksums".to_string(),
        "Run 'go mod tidy' to clean up dependencies".to_string(),
        "Run 'go build ./...' to verify the build".to_string(),
        format!(
            "If you have existing {}* tables, drop them or reset the database",
            file_prefix
        ),
    ]
}

/// One-line count of what the run did
pub fn format_summary_line(report: &RunReport) -> String {
    let (deleted, modified) = match report.mode {
        RunMode::Preview => ("Would delete", "Would modify"),
        RunMode::Apply => ("Deleted", "Modified"),
    };

    format!(
        "{}: {} file(s), {}: {} file(s)",
        deleted,
        report.deleted().count(),
        modified,
        report.modified().count()
    )
}

/// Completion banner, summary and checklist
pub fn format_report_text(
    report: &RunReport,
    use_colors: bool,
    verbose: bool,
    file_prefix: &str,
) -> String {
    let mut output = String::new();

    output.push('\n');
    if use_colors {
        output.push_str(&format!("{}\n\n", Cyan.bold().paint("=== Cleanup complete! ===")));
    } else {
        output.push_str("=== Cleanup complete! ===\n\n");
    }

    if verbose {
        output.push_str(&format!("{}\n", format_summary_line(report)));
        for change in &report.changes {
            let detail = match change.action {
                FileAction::Deleted => "deleted".to_string(),
                FileAction::Modified => format!("{} removal(s)", change.removals),
            };
            if use_colors {
                output.push_str(&format!(
                    "  {} {}\n",
                    change.path.display(),
                    Style::new().dimmed().paint(format!("({})", detail))
                ));
            } else {
                output.push_str(&format!("  {} ({})\n", change.path.display(), detail));
            }
        }

        let imports = match &report.import_fix {
            ImportFixStatus::Skipped => "skipped".to_string(),
            ImportFixStatus::Fixed => {
                if use_colors {
                    Green.paint("fixed").to_string()
                } else {
                    "fixed".to_string()
                }
            }
            ImportFixStatus::Failed { message } => {
                if use_colors {
                    Red.paint(format!("failed ({})", message)).to_string()
                } else {
                    format!("failed ({})", message)
                }
            }
        };
        output.push_str(&format!("Imports: {}\n\n", imports));
    }

    if use_colors {
        output.push_str(&format!("{}\n", Yellow.bold().paint("Next steps:")));
    } else {
        output.push_str("Next steps:\n");
    }
    for (i, step) in checklist(file_prefix).iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, step));
    }

    output
}

/// Pretty-printed JSON run report
pub fn format_report_json(report: &RunReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}
