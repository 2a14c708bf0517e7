//! Issue tracker port for searching and managing issues.

use std::error::Error;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Boxed future returned by single-issue operations on [`IssueTracker`].
pub type IssueFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Issue, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// Boxed future returned by [`IssueTracker::search_issues`].
pub type SearchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<SearchResult, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// A repository identified as `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    /// Account or organisation owning the repository.
    pub owner: String,
    /// Repository name.
    pub name: String,
}

impl FromStr for Repo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self { owner: owner.to_string(), name: name.to_string() })
            }
            _ => Err("Invalid repo owner/name provided".to_string()),
        }
    }
}

impl fmt::Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// The account that opened an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login handle.
    pub login: String,
    /// Profile page.
    #[serde(default)]
    pub html_url: String,
}

/// An issue as returned by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Repository-scoped issue number.
    pub number: u64,
    /// Browser URL of the issue.
    #[serde(default)]
    pub html_url: String,
    /// The issue title.
    pub title: String,
    /// `"open"` or `"closed"`.
    #[serde(default)]
    pub state: String,
    /// Author; `None` when the account has been deleted.
    #[serde(default)]
    pub user: Option<User>,
    /// When the issue was opened.
    pub created_at: DateTime<Utc>,
    /// Markdown body, absent for issues created without one.
    #[serde(default)]
    pub body: Option<String>,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Number of matches across all pages.
    pub total_count: u64,
    /// Matches on the first page.
    #[serde(default)]
    pub items: Vec<Issue>,
}

/// Payload for opening a new issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewIssue {
    /// Title of the new issue.
    pub title: String,
    /// Body of the new issue.
    pub body: String,
}

/// Open/closed state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    /// The issue is open.
    Open,
    /// The issue is closed.
    Closed,
}

/// A partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueUpdate {
    /// Replacement title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// New state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<IssueState>,
}

/// Talks to a remote issue tracker.
///
/// Methods return boxed futures so the trait stays dyn-compatible and can
/// sit behind `Box<dyn IssueTracker>` in the service context.
pub trait IssueTracker: Send + Sync {
    /// Searches issues in `repo` matching the free-text `terms`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    fn search_issues<'a>(&'a self, repo: &'a Repo, terms: &'a [String]) -> SearchFuture<'a>;

    /// Opens a new issue in `repo`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tracker rejects the issue.
    fn create_issue<'a>(&'a self, repo: &'a Repo, issue: &'a NewIssue) -> IssueFuture<'a>;

    /// Fetches a single issue by number.
    ///
    /// # Errors
    ///
    /// Returns an error if the issue does not exist or the request fails.
    fn get_issue<'a>(&'a self, repo: &'a Repo, number: u64) -> IssueFuture<'a>;

    /// Applies a partial update to an issue.
    ///
    /// # Errors
    ///
    /// Returns an error if the issue does not exist or the update is rejected.
    fn update_issue<'a>(
        &'a self,
        repo: &'a Repo,
        number: u64,
        update: &'a IssueUpdate,
    ) -> IssueFuture<'a>;
}
