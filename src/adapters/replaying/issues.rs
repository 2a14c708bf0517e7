//! Replaying adapter for the `IssueTracker` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{IssueFuture, IssueTracker, IssueUpdate, NewIssue, Repo, SearchFuture};

/// Serves recorded issue tracker results from a cassette.
pub struct ReplayingIssueTracker {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingIssueTracker {
    /// Create a replaying issue tracker backed by the given replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl IssueTracker for ReplayingIssueTracker {
    fn search_issues<'a>(&'a self, _repo: &'a Repo, _terms: &'a [String]) -> SearchFuture<'a> {
        let output = next_output(&self.replayer, "issues", "search_issues");
        Box::pin(async move { replay_result(output) })
    }

    fn create_issue<'a>(&'a self, _repo: &'a Repo, _issue: &'a NewIssue) -> IssueFuture<'a> {
        let output = next_output(&self.replayer, "issues", "create_issue");
        Box::pin(async move { replay_result(output) })
    }

    fn get_issue<'a>(&'a self, _repo: &'a Repo, _number: u64) -> IssueFuture<'a> {
        let output = next_output(&self.replayer, "issues", "get_issue");
        Box::pin(async move { replay_result(output) })
    }

    fn update_issue<'a>(
        &'a self,
        _repo: &'a Repo,
        _number: u64,
        _update: &'a IssueUpdate,
    ) -> IssueFuture<'a> {
        let output = next_output(&self.replayer, "issues", "update_issue");
        Box::pin(async move { replay_result(output) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::test_support::replayer_for;
    use serde_json::json;

    #[tokio::test]
    async fn replays_recorded_issue() {
        let tracker = ReplayingIssueTracker::new(replayer_for(
            "issues",
            "get_issue",
            vec![json!({"Ok": {
                "number": 5,
                "html_url": "https://github.com/o/r/issues/5",
                "title": "crash on start",
                "state": "open",
                "user": {"login": "octocat", "html_url": ""},
                "created_at": "2024-01-01T00:00:00Z",
                "body": "boom"
            }})],
        ));
        let repo: Repo = "o/r".parse().unwrap();

        let issue = tracker.get_issue(&repo, 5).await.unwrap();
        assert_eq!(issue.title, "crash on start");
        assert_eq!(issue.body.as_deref(), Some("boom"));
    }
}
