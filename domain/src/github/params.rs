//! Declared parameter types, one per GitHub operation shape.

use serde::Deserialize;

use crate::tool::args::deserialize_number;

#[derive(Debug, Clone, Deserialize)]
pub struct IssueNumberParams {
    #[serde(default, deserialize_with = "deserialize_number")]
    pub issue_number: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestNumberParams {
    #[serde(default, deserialize_with = "deserialize_number")]
    pub pr_number: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentQueryParams {
    pub comment_query: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestQueryParams {
    pub pr_query: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFileParams {
    pub file_path: String,
    pub file_contents: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilePathParams {
    pub file_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileQueryParams {
    pub file_query: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BranchNameParams {
    pub branch_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBranchParams {
    pub proposed_branch_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryPathParams {
    #[serde(default)]
    pub directory_path: String,
}
