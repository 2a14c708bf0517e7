//! Runtime settings assembled from the command line and environment.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::ports::Repo;

/// Everything a command needs besides the service context.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Repository the command works on.
    pub repo: Repo,
    /// API root.
    pub api_url: String,
    /// Bearer token read from the token file.
    pub token: String,
    /// Root directory for recorded cassettes, when recording.
    pub record_dir: Option<PathBuf>,
}

impl Settings {
    /// Builds settings from parsed arguments, reading the token file.
    ///
    /// # Errors
    ///
    /// Returns an error if no token file was given or it cannot be read.
    pub fn from_cli(cli: &Cli) -> Result<Self, String> {
        let token_file =
            cli.token_file.as_deref().ok_or("No personal access token provided")?;
        Ok(Self {
            repo: cli.repo.clone(),
            api_url: cli.url.clone(),
            token: read_token(token_file)?,
            record_dir: cli.record.clone(),
        })
    }
}

/// Reads a personal access token, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds only whitespace.
pub fn read_token(path: &Path) -> Result<String, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read token file {}: {e}", path.display()))?;
    let token = raw.trim();
    if token.is_empty() {
        return Err("No personal access token provided".to_string());
    }
    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn token_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "  ghp_abc123\n").unwrap();
        assert_eq!(read_token(&path).unwrap(), "ghp_abc123");
    }

    #[test]
    fn blank_token_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "\n\n").unwrap();
        assert_eq!(read_token(&path).unwrap_err(), "No personal access token provided");
    }

    #[test]
    fn missing_token_file_names_the_path() {
        let err = read_token(Path::new("/nonexistent/ghicli-token")).unwrap_err();
        assert!(err.contains("/nonexistent/ghicli-token"));
    }

    #[test]
    fn settings_require_a_token_file() {
        let mut cli = Cli::parse_from(["ghicli", "list"]);
        // GHICLI_TOKEN_FILE may be set where the tests run
        cli.token_file = None;
        let err = Settings::from_cli(&cli).unwrap_err();
        assert_eq!(err, "No personal access token provided");
    }

    #[test]
    fn settings_from_cli() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "tok").unwrap();

        let cli = Cli::parse_from([
            "ghicli",
            "--repo",
            "o/r",
            "--url",
            "http://localhost:9/",
            "--ghtoken",
            path.to_str().unwrap(),
            "list",
        ]);
        let settings = Settings::from_cli(&cli).unwrap();
        assert_eq!(settings.repo.to_string(), "o/r");
        assert_eq!(settings.api_url, "http://localhost:9/");
        assert_eq!(settings.token, "tok");
    }
}
