//! Live editor adapter that spawns the editor as a child process.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::ports::editor::{Editor, EditorExit};

/// Live editor that runs the program attached to the current terminal.
///
/// `program` may carry arguments (`"code --wait"`); it is split on
/// whitespace and the template path is appended last.
pub struct LiveEditor;

impl Editor for LiveEditor {
    fn open(
        &self,
        program: &str,
        path: &Path,
    ) -> Result<EditorExit, Box<dyn std::error::Error + Send + Sync>> {
        let mut parts = program.split_whitespace();
        let bin = parts.next().ok_or("editor command is empty")?;

        let status = Command::new(bin)
            .args(parts)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| format!("failed to launch editor {bin}: {e}"))?;

        Ok(EditorExit { code: status.code() })
    }
}
