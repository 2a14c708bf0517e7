//! Command dispatch and handlers.

pub mod create;
pub mod edit;
pub mod fetch;
pub mod list;
pub mod state;

use std::io::{self, Write};

use tracing::{info, warn};

use crate::cassette::session::RecordingSession;
use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::editor::{prompt_for_editor, resolve_editor};
use crate::ports::{Issue, IssueState, Repo};

/// Placeholder shown for issues whose author account no longer exists.
pub const GHOST_LOGIN: &str = "ghost";

/// Dispatch a parsed command line to its handler.
///
/// When `--record` (or `GHICLI_RECORD`) names a directory, all port
/// interactions are recorded to per-port cassette files below it.
///
/// # Errors
///
/// Returns an error string if settings are incomplete or the command fails.
pub async fn dispatch(cli: &Cli) -> Result<(), String> {
    if let Command::Delete { number } = cli.command {
        return Err(delete_unsupported(number));
    }

    let settings = Settings::from_cli(cli)?;
    let live = ServiceContext::live(&settings.api_url, &settings.token)?;
    let (ctx, session) = match &settings.record_dir {
        Some(dir) => {
            let (ctx, session) = ServiceContext::recording_at(live, dir)?;
            (ctx, Some(session))
        }
        None => (live, None),
    };

    let mut stdout = io::stdout();
    let result = dispatch_with_context(&ctx, &settings.repo, &cli.command, &mut stdout).await;

    // Release the Arc references held by the recording adapters.
    drop(ctx);
    match session {
        Some(session) => settle(result, finish_recording(session)),
        None => result,
    }
}

/// Run `command` against `repo` using the given context, writing to `out`.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub async fn dispatch_with_context(
    ctx: &ServiceContext,
    repo: &Repo,
    command: &Command,
    out: &mut dyn Write,
) -> Result<(), String> {
    match command {
        Command::List { terms } => list::run(ctx, repo, terms, out).await,
        Command::Create { editor } => {
            let program = choose_editor(editor.as_deref())?;
            create::run(ctx, repo, &program, out).await
        }
        Command::Fetch { number } => fetch::run(ctx, repo, *number, out).await,
        Command::Edit { number, editor } => {
            let program = choose_editor(editor.as_deref())?;
            edit::run(ctx, repo, *number, &program, out).await
        }
        Command::Close { number } => state::run(ctx, repo, *number, IssueState::Closed, out).await,
        Command::Reopen { number } => state::run(ctx, repo, *number, IssueState::Open, out).await,
        Command::Delete { number } => Err(delete_unsupported(*number)),
    }
}

/// One summary line: number, author and title, truncated to fit a terminal.
#[must_use]
pub fn format_issue_line(issue: &Issue) -> String {
    let login = issue.user.as_ref().map_or(GHOST_LOGIN, |u| u.login.as_str());
    format!("#{:<5} {:>9.9} {:.55}", issue.number, login, issue.title)
}

fn delete_unsupported(number: u64) -> String {
    format!("cannot delete issue #{number}: delete is not supported by the GitHub issues API")
}

fn choose_editor(flag: Option<&str>) -> Result<String, String> {
    match resolve_editor(flag, |key| std::env::var(key).ok()) {
        Some(program) => Ok(program),
        None => prompt_for_editor(io::stdin().lock(), io::stdout()),
    }
}

pub(crate) fn write_failed(e: io::Error) -> String {
    format!("Failed to write output: {e}")
}

/// Combine a command outcome with the outcome of saving its recording.
///
/// A command error wins; a recording failure alongside it is only logged.
fn settle(command: Result<(), String>, recording: Result<(), String>) -> Result<(), String> {
    match (command, recording) {
        (Err(e), Err(rec)) => {
            warn!(error = %rec, "failed to save recording");
            Err(e)
        }
        (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
        (Ok(()), Ok(())) => Ok(()),
    }
}

/// Finish a recording session and report the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    info!(dir = %output_dir.display(), "recording finished");
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
