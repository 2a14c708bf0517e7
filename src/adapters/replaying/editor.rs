//! Replaying adapter for the `Editor` port.

use std::path::Path;
use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{Editor, EditorExit};

/// Replays recorded editor exits; no process is spawned.
///
/// The file the editor would have produced is replayed separately through
/// the filesystem port.
pub struct ReplayingEditor {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingEditor {
    /// Creates a new replaying editor from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Editor for ReplayingEditor {
    fn open(
        &self,
        _program: &str,
        _path: &Path,
    ) -> Result<EditorExit, Box<dyn std::error::Error + Send + Sync>> {
        replay_result(next_output(&self.replayer, "editor", "open"))
    }
}
