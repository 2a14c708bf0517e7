//! Recording adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::FileSystem;

/// Records filesystem interactions while delegating to an inner implementation.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingFileSystem {
    /// Creates a new recording filesystem wrapping the given implementation.
    pub fn new(inner: Box<dyn FileSystem>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct PathInput {
    path: String,
}

#[derive(Serialize)]
struct WriteInput<'a> {
    path: String,
    contents: &'a str,
}

impl FileSystem for RecordingFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.read_to_string(path);
        let input = PathInput { path: path.display().to_string() };
        record_result(&self.recorder, "fs", "read_to_string", &input, &result);
        result
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.write(path, contents);
        let input = WriteInput { path: path.display().to_string(), contents };
        record_result(&self.recorder, "fs", "write", &input, &result);
        result
    }

    fn remove_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.remove_file(path);
        let input = PathInput { path: path.display().to_string() };
        record_result(&self.recorder, "fs", "remove_file", &input, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::filesystem::LiveFileSystem;
    use crate::adapters::recording::test_support::{finish, shared_recorder};
    use serde_json::json;

    #[test]
    fn records_reads_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("issue.txt");
        let recorder = shared_recorder(&dir.path().join("fs.cassette.yaml"));

        {
            let fs = RecordingFileSystem::new(Box::new(LiveFileSystem), Arc::clone(&recorder));
            fs.write(&file, "Title: a\nBody: b\n").unwrap();
            fs.read_to_string(&file).unwrap();
            fs.remove_file(&file).unwrap();
        }

        let cassette = finish(recorder);
        let methods: Vec<_> = cassette.interactions.iter().map(|i| i.method.as_str()).collect();
        assert_eq!(methods, ["write", "read_to_string", "remove_file"]);
        assert_eq!(cassette.interactions[1].output, json!({"Ok": "Title: a\nBody: b\n"}));
    }
}
