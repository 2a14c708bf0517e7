//! Filesystem port for the editor's scratch files.

use std::path::Path;

/// Reads, writes and removes the template handed to the editor.
///
/// The token file never goes through this port, so it stays out of cassettes.
pub trait FileSystem: Send + Sync {
    /// Reads back an edited template.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is gone or not UTF-8.
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Writes a template, replacing any previous contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Deletes a template once it has been parsed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be removed.
    fn remove_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
