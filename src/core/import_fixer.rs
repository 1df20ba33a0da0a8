//! External import fixer invocation
//!
//! After rewriting, imports that only the removed code used are left behind.
//! An external tool (`goimports -w` by default) prunes them. Its failure never
//! aborts the run; the caller downgrades the error to a warning.

use crate::error::{CleanupError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// A configured import fixer command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFixer {
    program: String,
    args: Vec<String>,
    forward_stdout: bool,
}

impl ImportFixer {
    /// Build from a program followed by its leading arguments
    pub fn from_command(command: &[String]) -> Result<Self> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| CleanupError::config_error("import fixer command is empty"))?;

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            forward_stdout: true,
        })
    }

    /// Whether the tool's stdout reaches ours; stderr always does
    pub fn forward_stdout(mut self, forward: bool) -> Self {
        self.forward_stdout = forward;
        self
    }

    /// The command as typed on a shell, without the target
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the fixer on `root/target`
    pub fn run(&self, root: &Path, target: &str) -> Result<()> {
        let dir = root.join(target);
        debug!(command = %self.display(), dir = %dir.display(), "running import fixer");

        let stdout = if self.forward_stdout {
            Stdio::inherit()
        } else {
            Stdio::null()
        };

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(&dir)
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| CleanupError::import_fixer_error(self.display(), target, e.to_string()))?;

        if !status.success() {
            return Err(CleanupError::import_fixer_error(
                self.display(),
                target,
                status.to_string(),
            ));
        }

        info!(command = %self.display(), "imports fixed");
        Ok(())
    }
}
