//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Whether a run mutates the tree or only describes what it would do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Report intended deletions and rewrites, touch nothing
    Preview,
    /// Delete and rewrite files in place
    #[default]
    Apply,
}

impl RunMode {
    pub fn is_preview(self) -> bool {
        self == RunMode::Preview
    }
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunMode::Preview => write!(f, "preview"),
            RunMode::Apply => write!(f, "apply"),
        }
    }
}

/// Main configuration settings for a cleanup run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory the project-root search starts from
    pub start_path: PathBuf,

    /// Marker token flagging example code (e.g. `Koo`)
    pub marker: String,

    /// File whose presence marks the project root
    pub manifest_file: String,

    /// Extension of source files (without the dot)
    pub source_extension: String,

    /// Extension of data/migration files (without the dot)
    pub data_extension: String,

    /// Directories, relative to the root, whose sources are rewritten
    pub process_dirs: Vec<String>,

    /// Directory-name globs skipped while walking
    pub exclude_patterns: Vec<String>,

    /// Element type name of the routing table slice
    pub route_element_type: String,

    /// Key of the route literal holding the path
    pub route_path_key: String,

    /// Whether to run the import fixer after rewriting
    pub fix_imports: bool,

    /// Import fixer program and leading arguments; the target directory is appended
    pub import_fixer: Vec<String>,

    /// Preview or apply
    pub mode: RunMode,

    /// Output format of the final report
    pub output_format: OutputFormat,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show debug diagnostics
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_path: PathBuf::from("."),
            marker: "Koo".to_string(),
            manifest_file: "go.mod".to_string(),
            source_extension: "go".to_string(),
            data_extension: "sql".to_string(),
            process_dirs: vec!["internal".to_string()],
            exclude_patterns: vec!["vendor".to_string(), "node_modules".to_string()],
            route_element_type: "route".to_string(),
            route_path_key: "Path".to_string(),
            fix_imports: true,
            import_fixer: vec!["goimports".to_string(), "-w".to_string()],
            mode: RunMode::Apply,
            output_format: OutputFormat::Text,
            use_colors: true,
            quiet: false,
            verbose: false,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable progress lines and checklist
    Text,
    /// JSON run report for programmatic consumption
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub start_path: Option<PathBuf>,
    pub marker: Option<String>,
    pub manifest_file: Option<String>,
    pub source_extension: Option<String>,
    pub data_extension: Option<String>,
    pub process_dirs: Option<Vec<String>>,
    pub exclude_patterns: Option<Vec<String>>,
    pub route_element_type: Option<String>,
    pub route_path_key: Option<String>,
    pub fix_imports: Option<bool>,
    pub import_fixer: Option<Vec<String>>,
    pub mode: Option<RunMode>,
    pub output_format: Option<OutputFormat>,
    pub use_colors: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.start_path.is_some() {
            self.start_path = other.start_path;
        }
        if other.marker.is_some() {
            self.marker = other.marker;
        }
        if other.manifest_file.is_some() {
            self.manifest_file = other.manifest_file;
        }
        if other.source_extension.is_some() {
            self.source_extension = other.source_extension;
        }
        if other.data_extension.is_some() {
            self.data_extension = other.data_extension;
        }
        if other.process_dirs.is_some() {
            self.process_dirs = other.process_dirs;
        }
        if other.exclude_patterns.is_some() {
            self.exclude_patterns = other.exclude_patterns;
        }
        if other.route_element_type.is_some() {
            self.route_element_type = other.route_element_type;
        }
        if other.route_path_key.is_some() {
            self.route_path_key = other.route_path_key;
        }
        if other.fix_imports.is_some() {
            self.fix_imports = other.fix_imports;
        }
        if other.import_fixer.is_some() {
            self.import_fixer = other.import_fixer;
        }
        if other.mode.is_some() {
            self.mode = other.mode;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let defaults = Settings::default();

        Settings {
            start_path: self.start_path.clone().unwrap_or(defaults.start_path),
            marker: self.marker.clone().unwrap_or(defaults.marker),
            manifest_file: self.manifest_file.clone().unwrap_or(defaults.manifest_file),
            source_extension: self.source_extension.clone().unwrap_or(defaults.source_extension),
            data_extension: self.data_extension.clone().unwrap_or(defaults.data_extension),
            process_dirs: self.process_dirs.clone().unwrap_or(defaults.process_dirs),
            exclude_patterns: self.exclude_patterns.clone().unwrap_or(defaults.exclude_patterns),
            route_element_type: self
                .route_element_type
                .clone()
                .unwrap_or(defaults.route_element_type),
            route_path_key: self.route_path_key.clone().unwrap_or(defaults.route_path_key),
            fix_imports: self.fix_imports.unwrap_or(defaults.fix_imports),
            import_fixer: self.import_fixer.clone().unwrap_or(defaults.import_fixer),
            mode: self.mode.unwrap_or(defaults.mode),
            output_format: self.output_format.unwrap_or(defaults.output_format),
            use_colors: self.use_colors.unwrap_or(defaults.use_colors),
            quiet: self.quiet.unwrap_or(defaults.quiet),
            verbose: self.verbose.unwrap_or(defaults.verbose),
        }
    }
}
