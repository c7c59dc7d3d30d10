use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::errors::{Error, Result};

/// External vector editor used to center the artwork on the canvas after
/// stripping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    /// Program to run
    pub program: String,
    /// Arguments given before the file path
    pub args: Vec<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            program: "inkscape".to_string(),
            args: [
                "EditSelectAll",
                "AlignHorizontalCenter",
                "AlignVerticalCenter",
                "FileSave",
                "FileQuit",
            ]
            .iter()
            .flat_map(|verb| ["--verb".to_string(), verb.to_string()])
            .collect(),
        }
    }
}

impl EditorConfig {
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }
}

/// Open `path` in the editor, align everything to the page center and save.
///
/// Blocks until the editor exits; a non-zero exit status is an error.
pub fn align_and_save(config: &EditorConfig, path: &Path) -> Result<()> {
    debug!(program = %config.program, args = ?config.args, "running editor");
    let status = Command::new(&config.program)
        .args(&config.args)
        .arg(path)
        .status()
        .map_err(|e| Error::Editor(format!("could not run '{}': {e}", config.program)))?;

    if !status.success() {
        return Err(Error::Editor(format!(
            "'{}' failed on {}: {status}",
            config.program,
            path.display()
        )));
    }
    info!(path = %path.display(), "aligned");
    Ok(())
}
