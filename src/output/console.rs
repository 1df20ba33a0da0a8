//! Progress lines printed while a run is in flight

use ansi_term::Colour::{Cyan, Green, Yellow};
use ansi_term::Style;

/// Line-oriented progress output on stdout
///
/// Silent consoles print nothing; used for JSON output and quiet runs.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    use_colors: bool,
    silent: bool,
}

impl Console {
    pub fn new(use_colors: bool, silent: bool) -> Self {
        Self { use_colors, silent }
    }

    pub fn silent() -> Self {
        Self::new(false, true)
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    fn emit(&self, line: String) {
        if !self.silent {
            println!("{}", line);
        }
    }

    /// `=== text ===`
    pub fn banner(&self, text: &str) {
        let line = format!("=== {} ===", text);
        if self.use_colors {
            self.emit(Cyan.bold().paint(line).to_string());
        } else {
            self.emit(line);
        }
    }

    /// Section header such as `Deleting koo_* files...`
    pub fn heading(&self, text: &str) {
        if self.use_colors {
            self.emit(Style::new().bold().paint(text).to_string());
        } else {
            self.emit(text.to_string());
        }
    }

    pub fn blank(&self) {
        self.emit(String::new());
    }

    /// Indented informational line
    pub fn item(&self, text: &str) {
        self.emit(format!("  {}", text));
    }

    /// Something preview mode would have done
    pub fn would(&self, text: &str) {
        if self.use_colors {
            self.emit(format!("  {}", Yellow.paint(text)));
        } else {
            self.emit(format!("  {}", text));
        }
    }

    /// Something that was done, ticked
    pub fn done(&self, text: &str) {
        if self.use_colors {
            self.emit(format!("  {} {}", Green.paint("✓"), text));
        } else {
            self.emit(format!("  ✓ {}", text));
        }
    }
}
