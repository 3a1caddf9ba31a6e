//! Typed reasons a GitHub operation did not complete.
//!
//! `Display` renders the sentence returned to the agent; [`GitHubFailure::code`]
//! keeps the class machine-readable.

use thiserror::Error;

use super::query::QueryError;
use crate::remote::RemoteError;
use crate::tool::{ArgumentError, ToolError};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GitHubFailure {
    #[error(transparent)]
    Arguments(#[from] ArgumentError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(
        "You're attempting to commit directly to the `{branch}` branch, which is protected. \
         Please create a new branch and try again."
    )]
    ProtectedBranch { branch: String },

    #[error("File already exists at `{path}` on branch `{branch}`. You must use `update_file` to modify it.")]
    FileExists { path: String, branch: String },

    #[error("File not found `{path}` on branch `{branch}`. Error: {cause}")]
    FileNotFound {
        path: String,
        branch: String,
        cause: RemoteError,
    },

    #[error("`{path}` on branch `{branch}` is a directory. Use `get_files_from_directory` to list it.")]
    NotAFile { path: String, branch: String },

    #[error("File `{path}` is not UTF-8 text and cannot be returned as text.")]
    NotText { path: String },

    #[error(
        "File content was not updated because old content was not found. \
         It may be helpful to use the read_file action to get the current file contents."
    )]
    OldContentNotFound,

    #[error("Cannot make a pull request because commits are already in the `{branch}` branch.")]
    PullRequestFromBase { branch: String },

    #[error("Error {branch} does not exist, in repo with current branches: {}", .available.join(", "))]
    UnknownBranch {
        branch: String,
        available: Vec<String>,
    },

    #[error(
        "Unable to create branch. At least {attempts} branches exist with names derived from \
         proposed_branch_name: `{proposed}`"
    )]
    BranchNamesExhausted { proposed: String, attempts: usize },

    #[error("Error: {0}")]
    Listing(RemoteError),

    #[error("Unable to {action} due to error:\n{cause}")]
    Remote {
        action: &'static str,
        cause: RemoteError,
    },
}

impl GitHubFailure {
    pub fn remote(action: &'static str, cause: RemoteError) -> Self {
        GitHubFailure::Remote { action, cause }
    }

    pub fn code(&self) -> &'static str {
        match self {
            GitHubFailure::Arguments(_)
            | GitHubFailure::Query(_)
            | GitHubFailure::NotAFile { .. }
            | GitHubFailure::NotText { .. } => ToolError::INVALID_ARGUMENT,
            GitHubFailure::ProtectedBranch { .. } | GitHubFailure::PullRequestFromBase { .. } => {
                ToolError::POLICY_REFUSED
            }
            GitHubFailure::FileExists { .. }
            | GitHubFailure::OldContentNotFound
            | GitHubFailure::BranchNamesExhausted { .. } => ToolError::CONFLICT,
            GitHubFailure::FileNotFound { .. } | GitHubFailure::UnknownBranch { .. } => {
                ToolError::NOT_FOUND
            }
            GitHubFailure::Listing(_) | GitHubFailure::Remote { .. } => ToolError::EXECUTION_FAILED,
        }
    }
}

impl From<GitHubFailure> for ToolError {
    fn from(failure: GitHubFailure) -> Self {
        ToolError::new(failure.code(), failure.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_exists_message() {
        let failure = GitHubFailure::FileExists {
            path: "x.txt".into(),
            branch: "ai".into(),
        };
        assert_eq!(
            failure.to_string(),
            "File already exists at `x.txt` on branch `ai`. You must use `update_file` to modify it."
        );
        assert_eq!(failure.code(), ToolError::CONFLICT);
    }

    #[test]
    fn test_remote_message() {
        let failure =
            GitHubFailure::remote("make file", RemoteError::status(403, "Resource not accessible"));
        assert_eq!(
            failure.to_string(),
            "Unable to make file due to error:\nstatus code 403, Resource not accessible"
        );
    }

    #[test]
    fn test_unknown_branch_lists_available() {
        let failure = GitHubFailure::UnknownBranch {
            branch: "dev".into(),
            available: vec!["main".into(), "ai".into()],
        };
        assert_eq!(
            failure.to_string(),
            "Error dev does not exist, in repo with current branches: main, ai"
        );
    }

    #[test]
    fn test_into_tool_error() {
        let err: ToolError = GitHubFailure::ProtectedBranch {
            branch: "main".into(),
        }
        .into();
        assert_eq!(err.code, ToolError::POLICY_REFUSED);
        assert!(err.message.contains("`main`"));
    }

    #[test]
    fn test_listing_message() {
        let failure = GitHubFailure::Listing(RemoteError::status(404, "Not Found"));
        assert_eq!(failure.to_string(), "Error: status code 404, Not Found");
    }
}
