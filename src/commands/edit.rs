//! `ghicli edit` command.

use std::io::Write;

use tracing::info;

use crate::context::ServiceContext;
use crate::editor::{compose, render};
use crate::ports::{IssueUpdate, Repo};

use super::{format_issue_line, write_failed};

/// Open issue `number` in `program` pre-filled with its current title and
/// body, then send back whatever changed.
///
/// # Errors
///
/// Returns an error string if the issue cannot be fetched, composing fails,
/// or the update is rejected.
pub async fn run(
    ctx: &ServiceContext,
    repo: &Repo,
    number: u64,
    program: &str,
    out: &mut dyn Write,
) -> Result<(), String> {
    let current = ctx.issues.get_issue(repo, number).await.map_err(|e| e.to_string())?;
    let current_body = current.body.as_deref().unwrap_or_default().trim();

    let draft = compose(ctx, program, &render(&current.title, current_body))?;

    let update = IssueUpdate {
        title: (draft.title != current.title).then_some(draft.title),
        body: (draft.body != current_body).then_some(draft.body),
        state: None,
    };
    if update == IssueUpdate::default() {
        writeln!(out, "No changes to #{number}").map_err(write_failed)?;
        return Ok(());
    }

    let updated =
        ctx.issues.update_issue(repo, number, &update).await.map_err(|e| e.to_string())?;
    info!(number, "issue updated");
    writeln!(out, "{}", format_issue_line(&updated)).map_err(write_failed)?;
    Ok(())
}
