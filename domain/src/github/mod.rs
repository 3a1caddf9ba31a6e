//! GitHub domain: operation table, parameters, entities and policies.
//!
//! Nothing here performs I/O. The application layer's `GitHubToolkit` drives
//! these types against a `GitHubPort`.

pub mod branch;
pub mod entities;
pub mod failure;
pub mod operation;
pub mod params;
pub mod query;

pub use branch::{BranchSnapshot, MAX_BRANCH_ATTEMPTS, branch_name_candidates};
pub use entities::{
    Contents, EntryKind, FileCommit, IssueComment, IssueDetails, IssueSummary, NewPullRequest,
    PullRequestDetails, PullRequestFile, PullRequestSummary, RepoEntry, RepoFile,
};
pub use failure::GitHubFailure;
pub use operation::{GitHubOperation, github_tool_spec};
pub use query::{CommentQuery, FileUpdate, PullRequestQuery, QueryError};
