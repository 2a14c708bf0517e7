//! Recording adapter for the `Editor` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{Editor, EditorExit};

/// Records editor launches while delegating to an inner implementation.
pub struct RecordingEditor {
    inner: Box<dyn Editor>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingEditor {
    /// Creates a new recording editor wrapping the given implementation.
    pub fn new(inner: Box<dyn Editor>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct OpenInput<'a> {
    program: &'a str,
    path: String,
}

impl Editor for RecordingEditor {
    fn open(
        &self,
        program: &str,
        path: &Path,
    ) -> Result<EditorExit, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.open(program, path);
        let input = OpenInput { program, path: path.display().to_string() };
        record_result(&self.recorder, "editor", "open", &input, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::editor::LiveEditor;
    use crate::adapters::recording::test_support::{finish, shared_recorder};
    use serde_json::json;

    #[test]
    fn records_exit_status() {
        let dir = tempfile::tempdir().unwrap();
        let recorder = shared_recorder(&dir.path().join("editor.cassette.yaml"));

        {
            let editor = RecordingEditor::new(Box::new(LiveEditor), Arc::clone(&recorder));
            editor.open("false", Path::new("/dev/null")).unwrap();
        }

        let cassette = finish(recorder);
        let interaction = &cassette.interactions[0];
        assert_eq!(interaction.input, json!({"program": "false", "path": "/dev/null"}));
        assert_eq!(interaction.output, json!({"Ok": {"code": 1}}));
    }
}
