//! Fixtures shared by unit tests.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::adapters::replaying::ReplayingIssueTracker;
use crate::cassette::format::{Cassette, Interaction};
use crate::cassette::replayer::CassetteReplayer;
use crate::context::{PanickingIssueTracker, ServiceContext};
use crate::ports::{Clock, Editor, EditorExit};

/// Editor that "types" fixed contents into the file it is given.
pub struct ScriptedEditor {
    pub contents: &'static str,
    pub code: i32,
}

impl Editor for ScriptedEditor {
    fn open(
        &self,
        _program: &str,
        path: &Path,
    ) -> Result<EditorExit, Box<dyn std::error::Error + Send + Sync>> {
        std::fs::write(path, self.contents)?;
        Ok(EditorExit { code: Some(self.code) })
    }
}

/// Clock frozen at one instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Tracker answering `(method, output)` pairs in order.
pub fn canned_tracker(calls: Vec<(&str, Value)>) -> ReplayingIssueTracker {
    let interactions = calls
        .into_iter()
        .zip(0..)
        .map(|((method, output), seq)| Interaction {
            seq,
            port: "issues".into(),
            method: method.into(),
            input: json!({}),
            output,
        })
        .collect();
    let cassette = Cassette {
        name: "canned".into(),
        recorded_at: Utc::now(),
        client_version: "test".into(),
        interactions,
    };
    ReplayingIssueTracker::new(CassetteReplayer::new(&cassette))
}

/// Local context with an editor that writes `contents`, and no tracker.
pub fn context_with_editor(contents: &'static str, code: i32) -> ServiceContext {
    let mut ctx = ServiceContext::local(Box::new(PanickingIssueTracker));
    ctx.editor = Box::new(ScriptedEditor { contents, code });
    ctx
}

/// JSON for an issue the way GitHub returns it.
pub fn issue_json(number: u64, title: &str, login: &str) -> Value {
    json!({
        "number": number,
        "html_url": format!("https://github.com/golang/go/issues/{number}"),
        "title": title,
        "state": "open",
        "user": {"login": login, "html_url": format!("https://github.com/{login}")},
        "created_at": "2024-03-01T12:00:00Z",
        "body": "Steps to reproduce"
    })
}
