//! `ghicli create` command.

use std::io::Write;

use tracing::{debug, info};

use crate::context::ServiceContext;
use crate::editor::{compose, template};
use crate::ports::{Issue, NewIssue, Repo};

use super::{format_issue_line, write_failed};

/// Compose a new issue in `program` and open it in `repo`.
///
/// The tracker is searched for the title first; an existing issue with the
/// same title (ignoring case) aborts the command.
///
/// # Errors
///
/// Returns an error string if composing fails, a duplicate exists, or the
/// tracker rejects the issue.
pub async fn run(
    ctx: &ServiceContext,
    repo: &Repo,
    program: &str,
    out: &mut dyn Write,
) -> Result<(), String> {
    let draft = compose(ctx, program, template())?;
    writeln!(out, "Found title: {}", draft.title).map_err(write_failed)?;
    writeln!(out, "Found body: {}", draft.body).map_err(write_failed)?;

    let terms = duplicate_query(&draft.title);
    let candidates = ctx.issues.search_issues(repo, &terms).await.map_err(|e| e.to_string())?;
    debug!(candidates = candidates.total_count, "searched for duplicates");
    if let Some(existing) = find_duplicate(&draft.title, &candidates.items) {
        return Err(format!("Issue already exists: #{} {}", existing.number, existing.html_url));
    }

    let issue = NewIssue { title: draft.title, body: draft.body };
    let created = ctx.issues.create_issue(repo, &issue).await.map_err(|e| e.to_string())?;
    info!(number = created.number, "issue created");

    writeln!(out, "Created issue at {}", created.html_url).map_err(write_failed)?;
    writeln!(out, "{}", format_issue_line(&created)).map_err(write_failed)?;
    Ok(())
}

/// Search terms restricting matches to titles containing `title` as a phrase.
fn duplicate_query(title: &str) -> Vec<String> {
    vec!["in:title".to_string(), format!("\"{}\"", title.replace('"', ""))]
}

// Title search is fuzzy, so only an exact (case-folded) title counts.
fn find_duplicate<'a>(title: &str, candidates: &'a [Issue]) -> Option<&'a Issue> {
    let wanted = title.trim().to_lowercase();
    candidates.iter().find(|issue| issue.title.trim().to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{canned_tracker, context_with_editor, issue_json};
    use serde_json::json;

    fn repo() -> Repo {
        "golang/go".parse().unwrap()
    }

    #[test]
    fn query_quotes_title_as_phrase() {
        assert_eq!(duplicate_query("say \"hi\" twice"), ["in:title", "\"say hi twice\""]);
    }

    #[tokio::test]
    async fn creates_when_no_exact_title_match() {
        let mut ctx = context_with_editor("Title: Crash\nBody: details here\n", 0);
        ctx.issues = Box::new(canned_tracker(vec![
            (
                "search_issues",
                json!({"Ok": {"total_count": 1, "items": [issue_json(3, "Crash in parser", "bob")]}}),
            ),
            ("create_issue", json!({"Ok": issue_json(10, "Crash", "me")})),
        ]));

        let mut out = Vec::new();
        run(&ctx, &repo(), "scripted", &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Found title: Crash\n\
             Found body: details here\n\
             Created issue at https://github.com/golang/go/issues/10\n\
             #10           me Crash\n"
        );
    }

    #[tokio::test]
    async fn refuses_duplicate_title() {
        let mut ctx = context_with_editor("Title: crash\nBody: again\n", 0);
        // no create_issue entry: reaching it would exhaust the cassette
        ctx.issues = Box::new(canned_tracker(vec![(
            "search_issues",
            json!({"Ok": {"total_count": 1, "items": [issue_json(3, "CRASH", "bob")]}}),
        )]));

        let err = run(&ctx, &repo(), "scripted", &mut Vec::new()).await.unwrap_err();
        assert_eq!(err, "Issue already exists: #3 https://github.com/golang/go/issues/3");
    }

    #[tokio::test]
    async fn tracker_rejection_is_reported() {
        let mut ctx = context_with_editor("Title: t\nBody: b\n", 0);
        ctx.issues = Box::new(canned_tracker(vec![
            ("search_issues", json!({"Ok": {"total_count": 0, "items": []}})),
            ("create_issue", json!({"Err": "GitHub rejected the access token"})),
        ]));

        let err = run(&ctx, &repo(), "scripted", &mut Vec::new()).await.unwrap_err();
        assert_eq!(err, "GitHub rejected the access token");
    }
}
