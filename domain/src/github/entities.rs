//! Repository entities exchanged with the GitHub port.
//!
//! The serializable types double as the JSON shape of tool output.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSummary {
    pub title: String,
    pub number: u64,
    pub opened_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueComment {
    pub body: String,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDetails {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub opened_by: String,
    pub comments: Vec<IssueComment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestSummary {
    pub title: String,
    pub number: u64,
    pub opened_by: String,
    pub head: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestDetails {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub opened_by: String,
    pub head: String,
    pub base: String,
    pub commits: u64,
    pub comments: Vec<IssueComment>,
}

/// One changed file of a pull request. Binary files have no patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestFile {
    pub path: String,
    pub patch: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPullRequest {
    pub title: String,
    pub body: String,
    pub head: String,
    pub base: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
}

/// A directory listing entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoEntry {
    pub path: String,
    pub kind: EntryKind,
}

impl RepoEntry {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Dir,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// A file blob with decoded content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoFile {
    pub path: String,
    pub sha: String,
    pub content: Vec<u8>,
}

/// What lives at a repository path on a given ref.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contents {
    File(RepoFile),
    Directory(Vec<RepoEntry>),
}

/// A single-file commit: create, update (with `sha`) or delete (with `sha`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCommit {
    pub path: String,
    pub message: String,
    pub branch: String,
    pub content: Option<String>,
    pub sha: Option<String>,
}

impl FileCommit {
    pub fn create(path: &str, content: &str, branch: &str) -> Self {
        Self {
            path: path.to_string(),
            message: format!("Create {}", path),
            branch: branch.to_string(),
            content: Some(content.to_string()),
            sha: None,
        }
    }

    pub fn update(path: &str, content: String, sha: String, branch: &str) -> Self {
        Self {
            path: path.to_string(),
            message: format!("Update {}", path),
            branch: branch.to_string(),
            content: Some(content),
            sha: Some(sha),
        }
    }

    pub fn delete(path: &str, sha: String, branch: &str) -> Self {
        Self {
            path: path.to_string(),
            message: format!("Delete {}", path),
            branch: branch.to_string(),
            content: None,
            sha: Some(sha),
        }
    }
}
