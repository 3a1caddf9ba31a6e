//! The GitHub operation table.
//!
//! [`GitHubOperation::ALL`] fixes both the set of operations and the order in
//! which they are listed. Each variant statically maps to its name,
//! description, risk level and parameter descriptors.

use std::str::FromStr;

use crate::tool::{ParamSpec, RiskLevel, ToolDefinition, ToolSpec, UnknownOperation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GitHubOperation {
    GetIssues,
    GetIssue,
    CommentOnIssue,
    ListOpenPullRequests,
    GetPullRequest,
    ListPullRequestFiles,
    CreatePullRequest,
    CreateFile,
    ReadFile,
    UpdateFile,
    DeleteFile,
    ListFilesInMainBranch,
    ListFilesInBotBranch,
    ListBranchesInRepo,
    SetActiveBranch,
    CreateBranch,
    GetFilesFromDirectory,
}

const NO_PARAMS: &[ParamSpec] = &[];

const ISSUE_NUMBER: &[ParamSpec] = &[ParamSpec::optional(
    "issue_number",
    "integer",
    "Issue number as an integer, e.g. `42`",
)];

const PR_NUMBER: &[ParamSpec] = &[ParamSpec::optional(
    "pr_number",
    "integer",
    "The pull request number as an integer, e.g. `12`",
)];

const COMMENT_QUERY: &[ParamSpec] = &[ParamSpec::required(
    "comment_query",
    "string",
    "The issue number on the first line, a blank line, then the comment text.",
)];

const PR_QUERY: &[ParamSpec] = &[ParamSpec::required(
    "pr_query",
    "string",
    "The pull request title on the first line, a blank line, then the body.",
)];

const CREATE_FILE: &[ParamSpec] = &[
    ParamSpec::required("file_path", "string", "Path of the file to be created."),
    ParamSpec::required("file_contents", "string", "Content of the file to be created."),
];

const FILE_PATH: &[ParamSpec] = &[ParamSpec::required(
    "file_path",
    "string",
    "The full path of the file, which must NOT start with a slash, e.g. `some_dir/my_file.py`.",
)];

const FILE_QUERY: &[ParamSpec] = &[ParamSpec::required(
    "file_query",
    "string",
    "The file path on the first line, followed by the OLD <<<< ... >>>> OLD and NEW <<<< ... >>>> NEW blocks.",
)];

const BRANCH_NAME: &[ParamSpec] = &[ParamSpec::required(
    "branch_name",
    "string",
    "The name of an existing branch, e.g. `my_branch`.",
)];

const PROPOSED_BRANCH_NAME: &[ParamSpec] = &[ParamSpec::required(
    "proposed_branch_name",
    "string",
    "The name of the branch to create, e.g. `my_branch`.",
)];

const DIRECTORY_PATH: &[ParamSpec] = &[ParamSpec::optional(
    "directory_path",
    "string",
    "The path of the directory, e.g. `some_dir/inner_dir`. Empty for the repository root.",
)];

impl GitHubOperation {
    pub const ALL: [GitHubOperation; 17] = [
        GitHubOperation::GetIssues,
        GitHubOperation::GetIssue,
        GitHubOperation::CommentOnIssue,
        GitHubOperation::ListOpenPullRequests,
        GitHubOperation::GetPullRequest,
        GitHubOperation::ListPullRequestFiles,
        GitHubOperation::CreatePullRequest,
        GitHubOperation::CreateFile,
        GitHubOperation::ReadFile,
        GitHubOperation::UpdateFile,
        GitHubOperation::DeleteFile,
        GitHubOperation::ListFilesInMainBranch,
        GitHubOperation::ListFilesInBotBranch,
        GitHubOperation::ListBranchesInRepo,
        GitHubOperation::SetActiveBranch,
        GitHubOperation::CreateBranch,
        GitHubOperation::GetFilesFromDirectory,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GitHubOperation::GetIssues => "get_issues",
            GitHubOperation::GetIssue => "get_issue",
            GitHubOperation::CommentOnIssue => "comment_on_issue",
            GitHubOperation::ListOpenPullRequests => "list_open_pull_requests",
            GitHubOperation::GetPullRequest => "get_pull_request",
            GitHubOperation::ListPullRequestFiles => "list_pull_request_files",
            GitHubOperation::CreatePullRequest => "create_pull_request",
            GitHubOperation::CreateFile => "create_file",
            GitHubOperation::ReadFile => "read_file",
            GitHubOperation::UpdateFile => "update_file",
            GitHubOperation::DeleteFile => "delete_file",
            GitHubOperation::ListFilesInMainBranch => "list_files_in_main_branch",
            GitHubOperation::ListFilesInBotBranch => "list_files_in_bot_branch",
            GitHubOperation::ListBranchesInRepo => "list_branches_in_repo",
            GitHubOperation::SetActiveBranch => "set_active_branch",
            GitHubOperation::CreateBranch => "create_branch",
            GitHubOperation::GetFilesFromDirectory => "get_files_from_directory",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GitHubOperation::GetIssues => {
                "Fetches the open issues of the repository. Returns the title, number and author of each issue. No input is required."
            }
            GitHubOperation::GetIssue => {
                "Fetches the title, body, author and comments of a specific issue. Input is the issue number."
            }
            GitHubOperation::CommentOnIssue => {
                "Adds a comment to an issue. The input must be the issue number on the first line, \
                 followed by a blank line and the comment text, e.g. `12\n\nWorking on it now.`"
            }
            GitHubOperation::ListOpenPullRequests => {
                "Lists the open pull requests of the repository with their title, number, author and head branch. No input is required."
            }
            GitHubOperation::GetPullRequest => {
                "Fetches the title, body, branches, commit count and comments of a specific pull request. Input is the pull request number."
            }
            GitHubOperation::ListPullRequestFiles => {
                "Lists the files changed by a pull request together with their patches. Input is the pull request number."
            }
            GitHubOperation::CreatePullRequest => {
                "Opens a pull request from the active branch into the base branch. The input must be the title \
                 on the first line, followed by a blank line and the body describing the change."
            }
            GitHubOperation::CreateFile => {
                "Creates a new file on the active branch. Fails if the file already exists; use update_file to change existing files."
            }
            GitHubOperation::ReadFile => {
                "Reads a file from the active branch and returns its text content."
            }
            GitHubOperation::UpdateFile => {
                "Updates the contents of a file on the active branch. The input must be the file path on the first line, then the \
                 text to replace wrapped between `OLD <<<<` and `>>>> OLD`, then the replacement wrapped between `NEW <<<<` and `>>>> NEW`, \
                 each marker on its own line."
            }
            GitHubOperation::DeleteFile => "Deletes a file from the active branch.",
            GitHubOperation::ListFilesInMainBranch => {
                "Recursively lists every file path in the base branch. No input is required."
            }
            GitHubOperation::ListFilesInBotBranch => {
                "Recursively lists every file path in the active working branch. No input is required."
            }
            GitHubOperation::ListBranchesInRepo => {
                "Lists the names of all branches in the repository. No input is required."
            }
            GitHubOperation::SetActiveBranch => {
                "Switches the active working branch to an existing branch. Subsequent file operations act on that branch."
            }
            GitHubOperation::CreateBranch => {
                "Creates a new branch from the base branch and makes it the active branch. If the name is taken, \
                 a suffixed variant such as `name_v1` is used instead."
            }
            GitHubOperation::GetFilesFromDirectory => {
                "Recursively lists every file path below a directory of the active branch."
            }
        }
    }

    pub fn risk_level(self) -> RiskLevel {
        match self {
            GitHubOperation::CommentOnIssue
            | GitHubOperation::CreatePullRequest
            | GitHubOperation::CreateFile
            | GitHubOperation::UpdateFile
            | GitHubOperation::DeleteFile
            | GitHubOperation::CreateBranch => RiskLevel::High,
            _ => RiskLevel::Low,
        }
    }

    pub fn parameters(self) -> &'static [ParamSpec] {
        match self {
            GitHubOperation::GetIssues
            | GitHubOperation::ListOpenPullRequests
            | GitHubOperation::ListFilesInMainBranch
            | GitHubOperation::ListFilesInBotBranch
            | GitHubOperation::ListBranchesInRepo => NO_PARAMS,
            GitHubOperation::GetIssue => ISSUE_NUMBER,
            GitHubOperation::GetPullRequest | GitHubOperation::ListPullRequestFiles => PR_NUMBER,
            GitHubOperation::CommentOnIssue => COMMENT_QUERY,
            GitHubOperation::CreatePullRequest => PR_QUERY,
            GitHubOperation::CreateFile => CREATE_FILE,
            GitHubOperation::ReadFile | GitHubOperation::DeleteFile => FILE_PATH,
            GitHubOperation::UpdateFile => FILE_QUERY,
            GitHubOperation::SetActiveBranch => BRANCH_NAME,
            GitHubOperation::CreateBranch => PROPOSED_BRANCH_NAME,
            GitHubOperation::GetFilesFromDirectory => DIRECTORY_PATH,
        }
    }

    pub fn definition(self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description(), self.risk_level())
            .with_parameters(self.parameters())
    }

    /// Whether the operation writes to the repository and is therefore
    /// subject to the protected-branch guard
    pub fn commits_to_branch(self) -> bool {
        matches!(
            self,
            GitHubOperation::CreateFile | GitHubOperation::UpdateFile | GitHubOperation::DeleteFile
        )
    }
}

impl std::fmt::Display for GitHubOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GitHubOperation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GitHubOperation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

/// The full GitHub operation table in declaration order
pub fn github_tool_spec() -> ToolSpec {
    GitHubOperation::ALL
        .into_iter()
        .map(GitHubOperation::definition)
        .collect()
}
