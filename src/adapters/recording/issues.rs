//! Recording adapter for the `IssueTracker` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{IssueFuture, IssueTracker, IssueUpdate, NewIssue, Repo, SearchFuture};

/// Records issue tracker interactions while delegating to an inner implementation.
pub struct RecordingIssueTracker {
    inner: Box<dyn IssueTracker>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingIssueTracker {
    /// Creates a new recording issue tracker wrapping the given implementation.
    pub fn new(inner: Box<dyn IssueTracker>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct SearchInput<'a> {
    repo: &'a Repo,
    terms: &'a [String],
}

#[derive(Serialize)]
struct CreateInput<'a> {
    repo: &'a Repo,
    issue: &'a NewIssue,
}

#[derive(Serialize)]
struct NumberInput<'a> {
    repo: &'a Repo,
    number: u64,
}

#[derive(Serialize)]
struct UpdateInput<'a> {
    repo: &'a Repo,
    number: u64,
    update: &'a IssueUpdate,
}

impl IssueTracker for RecordingIssueTracker {
    fn search_issues<'a>(&'a self, repo: &'a Repo, terms: &'a [String]) -> SearchFuture<'a> {
        Box::pin(async move {
            let result = self.inner.search_issues(repo, terms).await;
            let input = SearchInput { repo, terms };
            record_result(&self.recorder, "issues", "search_issues", &input, &result);
            result
        })
    }

    fn create_issue<'a>(&'a self, repo: &'a Repo, issue: &'a NewIssue) -> IssueFuture<'a> {
        Box::pin(async move {
            let result = self.inner.create_issue(repo, issue).await;
            let input = CreateInput { repo, issue };
            record_result(&self.recorder, "issues", "create_issue", &input, &result);
            result
        })
    }

    fn get_issue<'a>(&'a self, repo: &'a Repo, number: u64) -> IssueFuture<'a> {
        Box::pin(async move {
            let result = self.inner.get_issue(repo, number).await;
            let input = NumberInput { repo, number };
            record_result(&self.recorder, "issues", "get_issue", &input, &result);
            result
        })
    }

    fn update_issue<'a>(
        &'a self,
        repo: &'a Repo,
        number: u64,
        update: &'a IssueUpdate,
    ) -> IssueFuture<'a> {
        Box::pin(async move {
            let result = self.inner.update_issue(repo, number, update).await;
            let input = UpdateInput { repo, number, update };
            record_result(&self.recorder, "issues", "update_issue", &input, &result);
            result
        })
    }
}
