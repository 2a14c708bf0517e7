//! Editor port for launching an interactive text editor.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// How the editor process finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorExit {
    /// Exit code of the editor, `None` when it was killed by a signal.
    pub code: Option<i32>,
}

impl EditorExit {
    /// Returns `true` if the editor exited with status 0.
    #[must_use]
    pub fn success(self) -> bool {
        self.code == Some(0)
    }
}

/// Launches an external editor on a file and waits for it to exit.
///
/// The editor inherits the terminal, so the call blocks for as long as the
/// user keeps the file open.
pub trait Editor: Send + Sync {
    /// Opens `path` in `program` and waits for the process to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be spawned or waited on.
    fn open(
        &self,
        program: &str,
        path: &Path,
    ) -> Result<EditorExit, Box<dyn std::error::Error + Send + Sync>>;
}
