//! Cassette configuration for composable per-port replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Per-port cassette file paths. Ports without a cassette path panic if
/// called during replay.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Path to the issue tracker cassette.
    pub issues: Option<PathBuf>,
    /// Path to the editor cassette.
    pub editor: Option<PathBuf>,
    /// Path to the filesystem cassette.
    pub fs: Option<PathBuf>,
    /// Path to the clock cassette.
    pub clock: Option<PathBuf>,
    /// Path to the ID generator cassette.
    pub id_gen: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
pub struct PortReplayers {
    /// Replayer for the issue tracker port.
    pub issues: Option<CassetteReplayer>,
    /// Replayer for the editor port.
    pub editor: Option<CassetteReplayer>,
    /// Replayer for the filesystem port.
    pub fs: Option<CassetteReplayer>,
    /// Replayer for the clock port.
    pub clock: Option<CassetteReplayer>,
    /// Replayer for the ID generator port.
    pub id_gen: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Config pointing every port at `<dir>/<port>.cassette.yaml`, the
    /// layout a recording session writes. Ports whose file is missing stay
    /// unconfigured.
    #[must_use]
    pub fn from_session_dir(dir: &Path) -> Self {
        let existing = |port: &str| {
            let path = dir.join(format!("{port}.cassette.yaml"));
            path.exists().then_some(path)
        };
        Self {
            issues: existing("issues"),
            editor: existing("editor"),
            fs: existing("fs"),
            clock: existing("clock"),
            id_gen: existing("id_gen"),
        }
    }

    /// Load a single cassette file and create a replayer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_port_cassette(path: &Path) -> Result<CassetteReplayer, String> {
        Cassette::load(path).map(|cassette| CassetteReplayer::new(&cassette))
    }

    /// Load all configured per-port cassette files and create replayers.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        let load = |path: &Option<PathBuf>| path.as_deref().map(Self::load_port_cassette).transpose();
        Ok(PortReplayers {
            issues: load(&self.issues)?,
            editor: load(&self.editor)?,
            fs: load(&self.fs)?,
            clock: load(&self.clock)?,
            id_gen: load(&self.id_gen)?,
        })
    }
}
