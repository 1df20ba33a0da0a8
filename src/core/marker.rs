//! Marker matching
//!
//! Decides from a bare identifier or file name whether it belongs to the
//! example code. Matching is purely textual: nothing is resolved across files.

use crate::error::{CleanupError, Result};

/// A marker token and every spelling derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    upper: String,
    lower: String,
    file_prefix: String,
    data_infix: String,
    route_path: String,
}

impl Marker {
    /// Derive all spellings from a token such as `Koo`
    ///
    /// The token must be non-empty ASCII alphanumeric. Its first letter is
    /// upper-cased for the type/function spelling and lower-cased for the
    /// variable spelling; file names and paths use the fully lower-cased form.
    pub fn new(token: &str) -> Result<Self> {
        if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CleanupError::config_error(format!(
                "marker token must be non-empty ASCII alphanumeric, got '{}'",
                token
            )));
        }

        let (head, tail) = token.split_at(1);
        let upper = format!("{}{}", head.to_ascii_uppercase(), tail);
        let lower = format!("{}{}", head.to_ascii_lowercase(), tail);
        let snake = token.to_ascii_lowercase();

        Ok(Self {
            upper,
            lower,
            file_prefix: format!("{}_", snake),
            data_infix: format!("_{}_", snake),
            route_path: format!("/{}/", snake),
        })
    }

    /// Upper-camel spelling, e.g. `Koo`
    pub fn upper(&self) -> &str {
        &self.upper
    }

    /// Lower-camel spelling, e.g. `koo`
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Prefix of source files removed wholesale, e.g. `koo_`
    pub fn file_prefix(&self) -> &str {
        &self.file_prefix
    }

    /// Infix of data/migration files removed wholesale, e.g. `_koo_`
    pub fn data_infix(&self) -> &str {
        &self.data_infix
    }

    /// Path fragment identifying example routes, e.g. `/koo/`
    pub fn route_path(&self) -> &str {
        &self.route_path
    }

    /// Whether an identifier is marked
    ///
    /// True if it starts with the upper spelling, starts with the lower
    /// spelling, or contains the upper spelling anywhere. The contains arm
    /// over-matches names such as `Kookaburra`; that is accepted behaviour.
    pub fn is_marked(&self, ident: &str) -> bool {
        ident.starts_with(&self.upper)
            || ident.starts_with(&self.lower)
            || ident.contains(&self.upper)
    }

    /// Case-insensitive containment, used only for assignment targets
    pub fn is_loosely_marked(&self, ident: &str) -> bool {
        ident.to_lowercase().contains(&self.lower.to_lowercase())
    }

    /// Whether a source file is removed wholesale (`koo_*.go`)
    pub fn is_marked_source_file(&self, file_name: &str, extension: &str) -> bool {
        file_name.starts_with(&self.file_prefix) && has_extension(file_name, extension)
    }

    /// Whether a data file is removed wholesale (`*_koo_*.sql`)
    pub fn is_marked_data_file(&self, file_name: &str, extension: &str) -> bool {
        file_name.contains(&self.data_infix) && has_extension(file_name, extension)
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            upper: "Koo".to_string(),
            lower: "koo".to_string(),
            file_prefix: "koo_".to_string(),
            data_infix: "_koo_".to_string(),
            route_path: "/koo/".to_string(),
        }
    }
}

fn has_extension(file_name: &str, extension: &str) -> bool {
    file_name
        .strip_suffix(extension)
        .is_some_and(|stem| stem.ends_with('.'))
}
