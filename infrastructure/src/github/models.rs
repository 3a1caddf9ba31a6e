//! REST payloads, trimmed to the fields the toolkit reads

use serde::{Deserialize, Serialize};
use toolkits_domain::github::{
    EntryKind, IssueComment, IssueDetails, IssueSummary, PullRequestDetails, PullRequestFile,
    PullRequestSummary, RepoEntry,
};

#[derive(Debug, Deserialize)]
pub(crate) struct Repository {
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct User {
    pub login: String,
}

fn login(user: &Option<User>) -> String {
    user.as_ref().map(|u| u.login.clone()).unwrap_or_default()
}

#[derive(Debug, Deserialize)]
pub(crate) struct Issue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    /// Present when the issue is really a pull request
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

impl Issue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    pub fn summary(&self) -> IssueSummary {
        IssueSummary {
            title: self.title.clone(),
            number: self.number,
            opened_by: login(&self.user),
        }
    }

    pub fn into_details(self, comments: Vec<Comment>) -> IssueDetails {
        IssueDetails {
            number: self.number,
            opened_by: login(&self.user),
            title: self.title,
            body: self.body.unwrap_or_default(),
            comments: comments.into_iter().map(Comment::into_entity).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Comment {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl Comment {
    fn into_entity(self) -> IssueComment {
        IssueComment {
            user: login(&self.user),
            body: self.body.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BranchRef {
    #[serde(rename = "ref")]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Pull {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    pub head: BranchRef,
    pub base: BranchRef,
    /// Only on the single pull request endpoint
    #[serde(default)]
    pub commits: Option<u64>,
}

impl Pull {
    pub fn summary(&self) -> PullRequestSummary {
        PullRequestSummary {
            title: self.title.clone(),
            number: self.number,
            opened_by: login(&self.user),
            head: self.head.name.clone(),
        }
    }

    pub fn into_details(self, comments: Vec<Comment>) -> PullRequestDetails {
        PullRequestDetails {
            number: self.number,
            opened_by: login(&self.user),
            title: self.title,
            body: self.body.unwrap_or_default(),
            head: self.head.name,
            base: self.base.name,
            commits: self.commits.unwrap_or_default(),
            comments: comments.into_iter().map(Comment::into_entity).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PullFile {
    pub filename: String,
    #[serde(default)]
    pub patch: Option<String>,
}

impl From<PullFile> for PullRequestFile {
    fn from(file: PullFile) -> Self {
        PullRequestFile {
            path: file.filename,
            patch: file.patch,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Created {
    pub number: u64,
}

/// `GET /contents/{path}` answers with an array for directories and an
/// object for files.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ContentsResponse {
    Directory(Vec<ContentItem>),
    Item(ContentItem),
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentItem {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub path: String,
    pub sha: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}

impl ContentItem {
    pub fn entry(&self) -> RepoEntry {
        RepoEntry {
            path: self.path.clone(),
            kind: self.kind,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Blob {
    pub content: String,
    pub encoding: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Branch {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Commit {
    pub sha: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BranchDetails {
    pub commit: Commit,
}

#[derive(Debug, Serialize)]
pub(crate) struct CommentBody<'a> {
    pub body: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct PullBody<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub head: &'a str,
    pub base: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ContentsBody<'a> {
    pub message: &'a str,
    pub branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RefBody<'a> {
    #[serde(rename = "ref")]
    pub name: String,
    pub sha: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Installation {
    pub id: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InstallationToken {
    pub token: String,
}
