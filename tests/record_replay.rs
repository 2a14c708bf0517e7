//! Record-replay round-trip integration tests.
//!
//! A `create` session is written by hand as a cassette, replayed through
//! the command layer, re-recorded through the recording adapters, and the
//! re-recorded per-port cassettes are replayed once more.

use std::path::Path;

use serde_json::{json, Value};

use ghicli::cassette::config::CassetteConfig;
use ghicli::cassette::recorder::CassetteRecorder;
use ghicli::cli::Command;
use ghicli::commands::dispatch_with_context;
use ghicli::context::ServiceContext;
use ghicli::ports::Repo;

const SCRATCH: &str = "/tmp/ghicli-issue-0f1e2d3c.txt";
const EDITED: &str = "Title: runtime: crash on exit\nBody: Seen on linux/arm64.\n";

fn issue(number: u64, title: &str) -> Value {
    json!({
        "number": number,
        "html_url": format!("https://github.com/golang/go/issues/{number}"),
        "title": title,
        "state": "open",
        "user": {"login": "gopher", "html_url": "https://github.com/gopher"},
        "created_at": "2025-03-15T14:30:00Z",
        "body": "Seen on linux/arm64."
    })
}

fn write_create_session(path: &Path) {
    let mut recorder = CassetteRecorder::new(path, "create-session");
    recorder.record("id_gen", "generate_id", json!(null), json!("0f1e2d3c"));
    recorder.record(
        "fs",
        "write",
        json!({"path": SCRATCH, "contents": "Title: \nBody: \n"}),
        json!({"Ok": null}),
    );
    recorder.record(
        "editor",
        "open",
        json!({"program": "vim", "path": SCRATCH}),
        json!({"Ok": {"code": 0}}),
    );
    recorder.record("fs", "read_to_string", json!({"path": SCRATCH}), json!({"Ok": EDITED}));
    recorder.record("fs", "remove_file", json!({"path": SCRATCH}), json!({"Ok": null}));
    recorder.record(
        "issues",
        "search_issues",
        json!({"repo": {"owner": "golang", "name": "go"}, "terms": ["in:title", "\"runtime: crash on exit\""]}),
        json!({"Ok": {"total_count": 1, "items": [issue(100, "runtime: crash on exit in cgo")]}}),
    );
    recorder.record(
        "issues",
        "create_issue",
        json!({"repo": {"owner": "golang", "name": "go"}, "issue": {"title": "runtime: crash on exit"}}),
        json!({"Ok": issue(4242, "runtime: crash on exit")}),
    );
    recorder.finish().expect("cassette should be written");
}

async fn run_create(ctx: &ServiceContext) -> Result<String, String> {
    let repo: Repo = "golang/go".parse().unwrap();
    let command = Command::Create { editor: Some("vim".to_string()) };
    let mut out = Vec::new();
    dispatch_with_context(ctx, &repo, &command, &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

const EXPECTED: &str = "Found title: runtime: crash on exit\n\
                        Found body: Seen on linux/arm64.\n\
                        Created issue at https://github.com/golang/go/issues/4242\n\
                        #4242     gopher runtime: crash on exit\n";

#[tokio::test]
async fn replayed_create_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let cassette = dir.path().join("create.cassette.yaml");
    write_create_session(&cassette);

    let first = run_create(&ServiceContext::replaying(&cassette).unwrap()).await.unwrap();
    let second = run_create(&ServiceContext::replaying(&cassette).unwrap()).await.unwrap();

    assert_eq!(first, EXPECTED);
    assert_eq!(first, second, "replays differ");
}

#[tokio::test]
async fn rerecorded_session_replays_per_port() {
    let dir = tempfile::tempdir().unwrap();
    let cassette = dir.path().join("create.cassette.yaml");
    write_create_session(&cassette);

    // Record a replayed run; the recording adapters see exactly what a live run would.
    let inner = ServiceContext::replaying(&cassette).unwrap();
    let (ctx, session) = ServiceContext::recording_at(inner, &dir.path().join("rec")).unwrap();
    let recorded = run_create(&ctx).await.unwrap();
    drop(ctx);
    let session_dir = session.finish().unwrap();

    for port in ["issues", "editor", "fs", "id_gen"] {
        assert!(session_dir.join(format!("{port}.cassette.yaml")).exists(), "{port} missing");
    }
    // create never asks for the time
    assert!(!session_dir.join("clock.cassette.yaml").exists());

    let config = CassetteConfig::from_session_dir(&session_dir);
    let replayed = run_create(&ServiceContext::replaying_from(&config).unwrap()).await.unwrap();
    assert_eq!(recorded, EXPECTED);
    assert_eq!(replayed, recorded);
}

#[tokio::test]
async fn replayed_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fetch.cassette.yaml");
    let mut recorder = CassetteRecorder::new(&path, "fetch-missing");
    recorder.record(
        "issues",
        "get_issue",
        json!({"repo": {"owner": "golang", "name": "go"}, "number": 1}),
        json!({"Err": "not found: Not Found"}),
    );
    recorder.finish().unwrap();

    let ctx = ServiceContext::replaying(&path).unwrap();
    let repo: Repo = "golang/go".parse().unwrap();
    let err = dispatch_with_context(&ctx, &repo, &Command::Fetch { number: 1 }, &mut Vec::new())
        .await
        .unwrap_err();
    assert_eq!(err, "not found: Not Found");
}
