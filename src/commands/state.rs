//! `ghicli close` and `ghicli reopen` commands.

use std::io::Write;

use tracing::info;

use crate::context::ServiceContext;
use crate::ports::{IssueState, IssueUpdate, Repo};

use super::{format_issue_line, write_failed};

/// Move issue `number` to `state` and print the resulting issue line.
///
/// # Errors
///
/// Returns an error string if the tracker rejects the update.
pub async fn run(
    ctx: &ServiceContext,
    repo: &Repo,
    number: u64,
    state: IssueState,
    out: &mut dyn Write,
) -> Result<(), String> {
    let update = IssueUpdate { state: Some(state), ..IssueUpdate::default() };
    let issue = ctx.issues.update_issue(repo, number, &update).await.map_err(|e| e.to_string())?;
    info!(number, state = %issue.state, "issue state changed");

    writeln!(out, "{} [{}]", format_issue_line(&issue), issue.state).map_err(write_failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{canned_tracker, issue_json};
    use serde_json::json;

    #[tokio::test]
    async fn close_prints_new_state() {
        let mut closed = issue_json(8, "flaky", "gopher");
        closed["state"] = json!("closed");
        let ctx = ServiceContext::local(Box::new(canned_tracker(vec![(
            "update_issue",
            json!({"Ok": closed}),
        )])));
        let repo: Repo = "golang/go".parse().unwrap();

        let mut out = Vec::new();
        run(&ctx, &repo, 8, IssueState::Closed, &mut out).await.unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("flaky [closed]\n"));
    }
}
