//! `ghicli fetch` command.

use std::io::Write;

use chrono::{DateTime, Utc};

use crate::context::ServiceContext;
use crate::ports::{Issue, Repo};

use super::{format_issue_line, write_failed, GHOST_LOGIN};

/// Print one issue with its metadata and body.
///
/// # Errors
///
/// Returns an error string if the issue cannot be fetched.
pub async fn run(
    ctx: &ServiceContext,
    repo: &Repo,
    number: u64,
    out: &mut dyn Write,
) -> Result<(), String> {
    let issue = ctx.issues.get_issue(repo, number).await.map_err(|e| e.to_string())?;
    write!(out, "{}", describe(&issue, ctx.clock.now())).map_err(write_failed)
}

fn describe(issue: &Issue, now: DateTime<Utc>) -> String {
    let author = match &issue.user {
        Some(user) if !user.html_url.is_empty() => format!("{} ({})", user.login, user.html_url),
        Some(user) => user.login.clone(),
        None => GHOST_LOGIN.to_string(),
    };
    let age = (now - issue.created_at).num_days().max(0);

    let mut text = format!(
        "{}\nState:   {}\nAuthor:  {author}\nOpened:  {} ({age} days ago)\nURL:     {}\n",
        format_issue_line(issue),
        issue.state,
        issue.created_at.format("%Y-%m-%d %H:%M UTC"),
        issue.html_url,
    );
    if let Some(body) = issue.body.as_deref().filter(|b| !b.trim().is_empty()) {
        text.push('\n');
        text.push_str(body.trim_end());
        text.push('\n');
    }
    text
}
