//! Live adapter for the `IssueTracker` port backed by the GitHub REST API.

use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::ports::issues::{
    Issue, IssueFuture, IssueTracker, IssueUpdate, NewIssue, Repo, SearchFuture, SearchResult,
};

/// Default API root.
pub const GITHUB_API_URL: &str = "https://api.github.com/";

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Errors returned by the GitHub client.
#[derive(Debug, Error)]
pub enum GithubError {
    /// The token was rejected (HTTP 401).
    #[error("GitHub rejected the access token")]
    Unauthorized,

    /// The repository or issue does not exist, or the token cannot see it (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-success status.
    #[error("GitHub request failed ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message reported by GitHub, or the raw body.
        message: String,
    },

    /// Connection, TLS or body transfer failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("failed to decode GitHub response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The created issue came back with a different title.
    #[error("response title {received:?} not equivalent to posted title {sent:?}")]
    TitleMismatch {
        /// Title that was posted.
        sent: String,
        /// Title in the response.
        received: String,
    },

    /// The configured API root cannot be used as a base URL.
    #[error("invalid API url: {0}")]
    InvalidUrl(String),
}

/// Error body GitHub sends with 4xx/5xx responses.
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GithubError {
    fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .map_or_else(|_| body.trim().to_string(), |b| b.message);
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::NOT_FOUND => Self::NotFound(message),
            _ => Self::Status { status: status.as_u16(), message },
        }
    }
}

/// Builds the search query: the repo qualifier followed by the free-text terms.
#[must_use]
pub fn search_query(repo: &Repo, terms: &[String]) -> String {
    std::iter::once(format!("repo:{repo}"))
        .chain(terms.iter().cloned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Issue tracker that calls the GitHub REST API with a bearer token.
pub struct GithubIssueTracker {
    client: Client,
    base_url: Url,
    token: String,
}

impl GithubIssueTracker {
    /// Creates a client rooted at `base_url` (e.g. [`GITHUB_API_URL`]).
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self, GithubError> {
        let base_url =
            Url::parse(base_url).map_err(|e| GithubError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(GithubError::InvalidUrl(base_url.to_string()));
        }
        let client =
            Client::builder().user_agent(concat!("ghicli/", env!("CARGO_PKG_VERSION"))).build()?;
        Ok(Self { client, base_url, token: token.into() })
    }

    /// Appends path segments to the API root.
    fn endpoint<I>(&self, segments: I) -> Result<Url, GithubError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GithubError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn issue_url(&self, repo: &Repo, number: u64) -> Result<Url, GithubError> {
        let number = number.to_string();
        self.endpoint([
            "repos",
            repo.owner.as_str(),
            repo.name.as_str(),
            "issues",
            number.as_str(),
        ])
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
    }

    /// Searches issues in `repo` matching `terms`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status or a
    /// malformed body.
    pub async fn search(&self, repo: &Repo, terms: &[String]) -> Result<SearchResult, GithubError> {
        let mut url = self.endpoint(["search", "issues"])?;
        url.query_pairs_mut().append_pair("q", &search_query(repo, terms));
        debug!(%url, "sending search query");

        let response = self.request(Method::GET, url).send().await?;
        decode(response).await
    }

    /// Opens a new issue and checks the tracker echoed the same title back.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the title does not match.
    pub async fn create(&self, repo: &Repo, issue: &NewIssue) -> Result<Issue, GithubError> {
        let url = self.endpoint(["repos", repo.owner.as_str(), repo.name.as_str(), "issues"])?;
        debug!(%url, title = %issue.title, "creating issue");

        let response = self.request(Method::POST, url).json(issue).send().await?;
        let created: Issue = decode(response).await?;
        if created.title != issue.title {
            return Err(GithubError::TitleMismatch {
                sent: issue.title.clone(),
                received: created.title,
            });
        }
        Ok(created)
    }

    /// Fetches one issue.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::NotFound`] if the issue does not exist.
    pub async fn get(&self, repo: &Repo, number: u64) -> Result<Issue, GithubError> {
        let url = self.issue_url(repo, number)?;
        debug!(%url, "fetching issue");

        let response = self.request(Method::GET, url).send().await?;
        decode(response).await
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns an error if the issue does not exist or the update is rejected.
    pub async fn update(
        &self,
        repo: &Repo,
        number: u64,
        update: &IssueUpdate,
    ) -> Result<Issue, GithubError> {
        let url = self.issue_url(repo, number)?;
        debug!(%url, ?update, "updating issue");

        let response = self.request(Method::PATCH, url).json(update).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GithubError> {
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(GithubError::from_response(status, &text));
    }
    Ok(serde_json::from_str(&text)?)
}

impl IssueTracker for GithubIssueTracker {
    fn search_issues<'a>(&'a self, repo: &'a Repo, terms: &'a [String]) -> SearchFuture<'a> {
        Box::pin(async move { self.search(repo, terms).await.map_err(Into::into) })
    }

    fn create_issue<'a>(&'a self, repo: &'a Repo, issue: &'a NewIssue) -> IssueFuture<'a> {
        Box::pin(async move { self.create(repo, issue).await.map_err(Into::into) })
    }

    fn get_issue<'a>(&'a self, repo: &'a Repo, number: u64) -> IssueFuture<'a> {
        Box::pin(async move { self.get(repo, number).await.map_err(Into::into) })
    }

    fn update_issue<'a>(
        &'a self,
        repo: &'a Repo,
        number: u64,
        update: &'a IssueUpdate,
    ) -> IssueFuture<'a> {
        Box::pin(async move { self.update(repo, number, update).await.map_err(Into::into) })
    }
}
