//! `ghicli list` command.

use std::io::Write;

use crate::context::ServiceContext;
use crate::ports::Repo;

use super::{format_issue_line, write_failed};

/// Search `repo` for `terms` and print the total followed by one line per hit.
///
/// # Errors
///
/// Returns an error string if the search fails.
pub async fn run(
    ctx: &ServiceContext,
    repo: &Repo,
    terms: &[String],
    out: &mut dyn Write,
) -> Result<(), String> {
    let result = ctx.issues.search_issues(repo, terms).await.map_err(|e| e.to_string())?;

    writeln!(out, "{} issues:", result.total_count).map_err(write_failed)?;
    for issue in &result.items {
        writeln!(out, "{}", format_issue_line(issue)).map_err(write_failed)?;
    }
    Ok(())
}
