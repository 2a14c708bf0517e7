//! Service context bundling all port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::editor::LiveEditor;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::id_gen::LiveIdGenerator;
use crate::adapters::live::issues::GithubIssueTracker;
use crate::adapters::recording::{
    RecordingClock, RecordingEditor, RecordingFileSystem, RecordingIdGenerator,
    RecordingIssueTracker,
};
use crate::adapters::replaying::{
    ReplayingClock, ReplayingEditor, ReplayingFileSystem, ReplayingIdGenerator,
    ReplayingIssueTracker,
};
use crate::cassette::config::CassetteConfig;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::{
    Clock, Editor, EditorExit, FileSystem, IdGenerator, IssueFuture, IssueTracker, IssueUpdate,
    NewIssue, Repo, SearchFuture,
};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, recording, replaying).
pub struct ServiceContext {
    /// Remote issue tracker.
    pub issues: Box<dyn IssueTracker>,
    /// External editor launcher.
    pub editor: Box<dyn Editor>,
    /// Filesystem for editor template files.
    pub fs: Box<dyn FileSystem>,
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// ID generator for scratch file names.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Live local adapters (filesystem, editor, clock, IDs) around the given tracker.
    #[must_use]
    pub fn local(issues: Box<dyn IssueTracker>) -> Self {
        Self {
            issues,
            editor: Box::new(LiveEditor),
            fs: Box::new(LiveFileSystem),
            clock: Box::new(LiveClock),
            id_gen: Box::new(LiveIdGenerator),
        }
    }

    /// Fully live context talking to GitHub at `api_url` with `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API url is unusable.
    pub fn live(api_url: &str, token: &str) -> Result<Self, String> {
        let tracker = GithubIssueTracker::new(api_url, token).map_err(|e| e.to_string())?;
        Ok(Self::local(Box::new(tracker)))
    }

    /// Wraps every port of `inner` in a recording adapter.
    ///
    /// Cassettes are written under `root/<timestamp>/` when the returned
    /// session is finished, after this context has been dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory cannot be created.
    pub fn recording_at(inner: Self, root: &Path) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(root)?;
        let ctx = Self {
            issues: Box::new(RecordingIssueTracker::new(
                inner.issues,
                Arc::clone(&session.issues),
            )),
            editor: Box::new(RecordingEditor::new(inner.editor, Arc::clone(&session.editor))),
            fs: Box::new(RecordingFileSystem::new(inner.fs, Arc::clone(&session.fs))),
            clock: Box::new(RecordingClock::new(inner.clock, Arc::clone(&session.clock))),
            id_gen: Box::new(RecordingIdGenerator::new(
                inner.id_gen,
                Arc::clone(&session.id_gen),
            )),
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from a monolithic cassette file.
    ///
    /// Each port gets its own replayer over the same cassette so per-port
    /// cursors are independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        let replayer = || CassetteReplayer::new(&cassette);
        Ok(Self {
            issues: Box::new(ReplayingIssueTracker::new(replayer())),
            editor: Box::new(ReplayingEditor::new(replayer())),
            fs: Box::new(ReplayingFileSystem::new(replayer())),
            clock: Box::new(ReplayingClock::new(replayer())),
            id_gen: Box::new(ReplayingIdGenerator::new(replayer())),
        })
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette use a panicking adapter that
    /// fails with a clear message when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            issues: match replayers.issues {
                Some(r) => Box::new(ReplayingIssueTracker::new(r)),
                None => Box::new(PanickingIssueTracker),
            },
            editor: match replayers.editor {
                Some(r) => Box::new(ReplayingEditor::new(r)),
                None => Box::new(PanickingEditor),
            },
            fs: match replayers.fs {
                Some(r) => Box::new(ReplayingFileSystem::new(r)),
                None => Box::new(PanickingFileSystem),
            },
            clock: match replayers.clock {
                Some(r) => Box::new(ReplayingClock::new(r)),
                None => Box::new(PanickingClock),
            },
            id_gen: match replayers.id_gen {
                Some(r) => Box::new(ReplayingIdGenerator::new(r)),
                None => Box::new(PanickingIdGenerator),
            },
        })
    }
}

// --- Panicking adapters for unspecified ports ---

fn unconfigured(port: &str) -> ! {
    panic!("{port} port not configured in CassetteConfig: no cassette loaded for it");
}

struct PanickingClock;
impl Clock for PanickingClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        unconfigured("clock")
    }
}

struct PanickingFileSystem;
impl FileSystem for PanickingFileSystem {
    fn read_to_string(
        &self,
        _path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        unconfigured("fs")
    }
    fn write(
        &self,
        _path: &Path,
        _contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        unconfigured("fs")
    }
    fn remove_file(&self, _path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        unconfigured("fs")
    }
}

struct PanickingIdGenerator;
impl IdGenerator for PanickingIdGenerator {
    fn generate_id(&self) -> String {
        unconfigured("id_gen")
    }
}

struct PanickingEditor;
impl Editor for PanickingEditor {
    fn open(
        &self,
        _program: &str,
        _path: &Path,
    ) -> Result<EditorExit, Box<dyn std::error::Error + Send + Sync>> {
        unconfigured("editor")
    }
}

/// Issue tracker for contexts that must never reach the network.
pub(crate) struct PanickingIssueTracker;
impl IssueTracker for PanickingIssueTracker {
    fn search_issues<'a>(&'a self, _repo: &'a Repo, _terms: &'a [String]) -> SearchFuture<'a> {
        unconfigured("issues")
    }
    fn create_issue<'a>(&'a self, _repo: &'a Repo, _issue: &'a NewIssue) -> IssueFuture<'a> {
        unconfigured("issues")
    }
    fn get_issue<'a>(&'a self, _repo: &'a Repo, _number: u64) -> IssueFuture<'a> {
        unconfigured("issues")
    }
    fn update_issue<'a>(
        &'a self,
        _repo: &'a Repo,
        _number: u64,
        _update: &'a IssueUpdate,
    ) -> IssueFuture<'a> {
        unconfigured("issues")
    }
}
