//! Recording session managing per-port cassette recorders.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// Manages per-port `CassetteRecorder` instances for a recording session.
///
/// Each port gets its own recorder writing to `<port>.cassette.yaml` inside
/// a timestamped directory, the layout `CassetteConfig::from_session_dir`
/// reads back.
pub struct RecordingSession {
    /// Recorder for issue tracker interactions.
    pub issues: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for editor interactions.
    pub editor: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for filesystem interactions.
    pub fs: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for clock interactions.
    pub clock: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for ID generator interactions.
    pub id_gen: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a new recording session under `root/<timestamp>/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory already exists or cannot
    /// be created.
    pub fn new(root: &Path) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let output_dir = root.join(&timestamp);

        if output_dir.exists() {
            return Err(format!("Cassette directory already exists: {}", output_dir.display()));
        }
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let make_recorder = |port: &str| {
            let path = output_dir.join(format!("{port}.cassette.yaml"));
            Arc::new(Mutex::new(CassetteRecorder::new(path, format!("{timestamp}-{port}"))))
        };

        Ok(Self {
            issues: make_recorder("issues"),
            editor: make_recorder("editor"),
            fs: make_recorder("fs"),
            clock: make_recorder("clock"),
            id_gen: make_recorder("id_gen"),
            output_dir,
        })
    }

    /// Directory the cassettes are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Finish all recorders and write cassette files to disk.
    ///
    /// Ports that saw no interaction produce no file.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds its recorder or a file
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(arc: Arc<Mutex<CassetteRecorder>>, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .unwrap_or_else(PoisonError::into_inner);
            if recorder.is_empty() {
                return Ok(());
            }
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            Ok(())
        }

        finish_one(self.issues, "issues")?;
        finish_one(self.editor, "editor")?;
        finish_one(self.fs, "fs")?;
        finish_one(self.clock, "clock")?;
        finish_one(self.id_gen, "id_gen")?;

        Ok(self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn writes_only_ports_that_recorded() {
        let root = tempfile::tempdir().unwrap();
        let session = RecordingSession::new(root.path()).unwrap();
        assert!(session.output_dir().starts_with(root.path()));

        session.issues.lock().unwrap().record(
            "issues",
            "search_issues",
            json!({}),
            json!({"Ok": {"total_count": 0, "items": []}}),
        );

        let dir = session.finish().unwrap();
        assert!(dir.join("issues.cassette.yaml").exists());
        assert!(!dir.join("clock.cassette.yaml").exists());
    }

    #[test]
    fn finish_fails_while_an_adapter_holds_a_recorder() {
        let root = tempfile::tempdir().unwrap();
        let session = RecordingSession::new(root.path()).unwrap();
        let _held = Arc::clone(&session.fs);

        let err = session.finish().unwrap_err();
        assert!(err.contains("fs still has references"));
    }
}
