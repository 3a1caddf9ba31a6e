//! GitHub repository port
//!
//! Defines the remote primitives the GitHub toolkit is built on. One
//! implementation talks to the REST API; tests use in-memory mocks.

use async_trait::async_trait;
use toolkits_domain::RemoteError;
use toolkits_domain::github::{
    Contents, FileCommit, IssueDetails, IssueSummary, NewPullRequest, PullRequestDetails,
    PullRequestFile, PullRequestSummary,
};

/// Access to one repository.
///
/// Each method is a single remote call (or a short fixed chain) and never
/// retries.
#[async_trait]
pub trait GitHubPort: Send + Sync {
    /// `owner/name` of the bound repository
    fn repository(&self) -> &str;

    /// Open issues, pull requests excluded
    async fn open_issues(&self) -> Result<Vec<IssueSummary>, RemoteError>;

    async fn issue(&self, number: u64) -> Result<IssueDetails, RemoteError>;

    async fn comment_on_issue(&self, number: u64, body: &str) -> Result<(), RemoteError>;

    async fn open_pull_requests(&self) -> Result<Vec<PullRequestSummary>, RemoteError>;

    async fn pull_request(&self, number: u64) -> Result<PullRequestDetails, RemoteError>;

    async fn pull_request_files(&self, number: u64) -> Result<Vec<PullRequestFile>, RemoteError>;

    /// Open a pull request and return its number
    async fn create_pull_request(&self, request: &NewPullRequest) -> Result<u64, RemoteError>;

    /// File or directory listing at `path` on `reference`. An empty path is
    /// the repository root.
    async fn contents(&self, path: &str, reference: &str) -> Result<Contents, RemoteError>;

    /// Create or update a file (update when `commit.sha` is set)
    async fn put_file(&self, commit: &FileCommit) -> Result<(), RemoteError>;

    async fn delete_file(&self, commit: &FileCommit) -> Result<(), RemoteError>;

    async fn branches(&self) -> Result<Vec<String>, RemoteError>;

    /// Commit SHA at the head of `branch`
    async fn branch_head(&self, branch: &str) -> Result<String, RemoteError>;

    /// Create `refs/heads/{branch}` at `sha`. An existing name is reported as
    /// HTTP 422.
    async fn create_branch_ref(&self, branch: &str, sha: &str) -> Result<(), RemoteError>;
}
