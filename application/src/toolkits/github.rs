//! GitHub toolkit
//!
//! Implements the seventeen repository operations on top of a [`GitHubPort`].
//! Every operation runs at most one remote call chain and turns remote
//! failures into a [`GitHubFailure`] sentence.

use std::collections::VecDeque;
use std::time::Instant;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info, warn};

use toolkits_domain::github::params::{
    BranchNameParams, CommentQueryParams, CreateBranchParams, CreateFileParams,
    DirectoryPathParams, FilePathParams, FileQueryParams, IssueNumberParams, PullRequestNumberParams,
    PullRequestQueryParams,
};
use toolkits_domain::github::{
    BranchSnapshot, CommentQuery, Contents, FileCommit, FileUpdate, GitHubFailure, GitHubOperation,
    MAX_BRANCH_ATTEMPTS, NewPullRequest, PullRequestQuery, RepoEntry, RepoFile,
    branch_name_candidates, github_tool_spec,
};
use toolkits_domain::{RemoteError, ToolAdapter, ToolCall, ToolResult, ToolSpec};

use super::{BranchContext, elapsed_ms, resolve};
use crate::ports::github::GitHubPort;

pub struct GitHubToolkit<P> {
    port: P,
    branches: BranchContext,
    operations: ToolSpec,
}

impl<P: GitHubPort> GitHubToolkit<P> {
    pub fn new(port: P, active_branch: impl Into<String>, base_branch: impl Into<String>) -> Self {
        let branches = BranchContext::new(active_branch, base_branch);
        let snapshot = branches.snapshot();
        info!(
            repository = port.repository(),
            active_branch = %snapshot.active,
            base_branch = %snapshot.base,
            "GitHub toolkit ready"
        );
        Self {
            port,
            branches,
            operations: github_tool_spec(),
        }
    }

    pub fn branches(&self) -> &BranchContext {
        &self.branches
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    async fn run(&self, operation: GitHubOperation, call: &ToolCall) -> Result<String, GitHubFailure> {
        let branches = self.branches.snapshot();
        if operation.commits_to_branch() {
            branches.guard_commit()?;
        }

        match operation {
            GitHubOperation::GetIssues => self.get_issues().await,
            GitHubOperation::GetIssue => {
                let params: IssueNumberParams = call.parse_args()?;
                self.get_issue(params.issue_number).await
            }
            GitHubOperation::CommentOnIssue => {
                let params: CommentQueryParams = call.parse_args()?;
                self.comment_on_issue(&params.comment_query).await
            }
            GitHubOperation::ListOpenPullRequests => self.list_open_pull_requests().await,
            GitHubOperation::GetPullRequest => {
                let params: PullRequestNumberParams = call.parse_args()?;
                self.get_pull_request(params.pr_number).await
            }
            GitHubOperation::ListPullRequestFiles => {
                let params: PullRequestNumberParams = call.parse_args()?;
                self.list_pull_request_files(params.pr_number).await
            }
            GitHubOperation::CreatePullRequest => {
                let params: PullRequestQueryParams = call.parse_args()?;
                self.create_pull_request(&params.pr_query, &branches).await
            }
            GitHubOperation::CreateFile => {
                let params: CreateFileParams = call.parse_args()?;
                self.create_file(&params.file_path, &params.file_contents, &branches)
                    .await
            }
            GitHubOperation::ReadFile => {
                let params: FilePathParams = call.parse_args()?;
                self.read_file(&params.file_path, &branches).await
            }
            GitHubOperation::UpdateFile => {
                let params: FileQueryParams = call.parse_args()?;
                self.update_file(&params.file_query, &branches).await
            }
            GitHubOperation::DeleteFile => {
                let params: FilePathParams = call.parse_args()?;
                self.delete_file(&params.file_path, &branches).await
            }
            GitHubOperation::ListFilesInMainBranch => self.list_files("", &branches.base).await,
            GitHubOperation::ListFilesInBotBranch => self.list_files("", &branches.active).await,
            GitHubOperation::ListBranchesInRepo => self.list_branches().await,
            GitHubOperation::SetActiveBranch => {
                let params: BranchNameParams = call.parse_args()?;
                self.set_active_branch(&params.branch_name).await
            }
            GitHubOperation::CreateBranch => {
                let params: CreateBranchParams = call.parse_args()?;
                self.create_branch(&params.proposed_branch_name, &branches)
                    .await
            }
            GitHubOperation::GetFilesFromDirectory => {
                let params: DirectoryPathParams = call.parse_args()?;
                self.list_files(&params.directory_path, &branches.active)
                    .await
            }
        }
    }

    async fn get_issues(&self) -> Result<String, GitHubFailure> {
        let issues = self
            .port
            .open_issues()
            .await
            .map_err(|e| GitHubFailure::remote("get issues", e))?;
        if issues.is_empty() {
            return Ok("No open issues available".to_string());
        }
        Ok(format!("Found {} issues:\n{}", issues.len(), to_json(&issues)?))
    }

    async fn get_issue(&self, number: u64) -> Result<String, GitHubFailure> {
        let issue = self
            .port
            .issue(number)
            .await
            .map_err(|e| GitHubFailure::remote("get issue", e))?;
        to_json(&issue)
    }

    async fn comment_on_issue(&self, query: &str) -> Result<String, GitHubFailure> {
        let comment = CommentQuery::parse(query)?;
        self.port
            .comment_on_issue(comment.issue_number, &comment.body)
            .await
            .map_err(|e| GitHubFailure::remote("make comment", e))?;
        Ok(format!("Commented on issue {}", comment.issue_number))
    }

    async fn list_open_pull_requests(&self) -> Result<String, GitHubFailure> {
        let pulls = self
            .port
            .open_pull_requests()
            .await
            .map_err(|e| GitHubFailure::remote("list pull requests", e))?;
        if pulls.is_empty() {
            return Ok("No open pull requests available".to_string());
        }
        Ok(format!("Found {} pull requests:\n{}", pulls.len(), to_json(&pulls)?))
    }

    async fn get_pull_request(&self, number: u64) -> Result<String, GitHubFailure> {
        let pull = self
            .port
            .pull_request(number)
            .await
            .map_err(|e| GitHubFailure::remote("get pull request", e))?;
        to_json(&pull)
    }

    async fn list_pull_request_files(&self, number: u64) -> Result<String, GitHubFailure> {
        let files = self
            .port
            .pull_request_files(number)
            .await
            .map_err(|e| GitHubFailure::remote("list pull request files", e))?;
        to_json(&files)
    }

    async fn create_pull_request(
        &self,
        query: &str,
        branches: &BranchSnapshot,
    ) -> Result<String, GitHubFailure> {
        if branches.is_on_base() {
            return Err(GitHubFailure::PullRequestFromBase {
                branch: branches.base.clone(),
            });
        }
        let query = PullRequestQuery::parse(query)?;
        let request = NewPullRequest {
            title: query.title,
            body: query.body,
            head: branches.active.clone(),
            base: branches.base.clone(),
        };
        let number = self
            .port
            .create_pull_request(&request)
            .await
            .map_err(|e| GitHubFailure::remote("make pull request", e))?;
        Ok(format!("Successfully created PR number {}", number))
    }

    async fn create_file(
        &self,
        path: &str,
        contents: &str,
        branches: &BranchSnapshot,
    ) -> Result<String, GitHubFailure> {
        match self.port.contents(path, &branches.active).await {
            Ok(_) => {
                return Err(GitHubFailure::FileExists {
                    path: path.to_string(),
                    branch: branches.active.clone(),
                });
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(GitHubFailure::remote("make file", e)),
        }

        self.port
            .put_file(&FileCommit::create(path, contents, &branches.active))
            .await
            .map_err(|e| GitHubFailure::remote("make file", e))?;
        Ok(format!("Created file {}", path))
    }

    async fn read_file(&self, path: &str, branches: &BranchSnapshot) -> Result<String, GitHubFailure> {
        let file = self
            .fetch_file(path, &branches.active)
            .await
            .map_err(|cause| match cause {
                FetchError::Remote(cause) => GitHubFailure::FileNotFound {
                    path: path.to_string(),
                    branch: branches.active.clone(),
                    cause,
                },
                FetchError::Directory => GitHubFailure::NotAFile {
                    path: path.to_string(),
                    branch: branches.active.clone(),
                },
            })?;
        String::from_utf8(file.content).map_err(|_| GitHubFailure::NotText {
            path: path.to_string(),
        })
    }

    async fn update_file(&self, query: &str, branches: &BranchSnapshot) -> Result<String, GitHubFailure> {
        let update = FileUpdate::parse(query)?;
        let file = self
            .fetch_file(&update.path, &branches.active)
            .await
            .map_err(|e| e.into_failure("update file", &update.path, &branches.active))?;
        let current = String::from_utf8(file.content).map_err(|_| GitHubFailure::NotText {
            path: update.path.clone(),
        })?;

        let updated = update
            .apply(&current)
            .ok_or(GitHubFailure::OldContentNotFound)?;
        self.port
            .put_file(&FileCommit::update(&update.path, updated, file.sha, &branches.active))
            .await
            .map_err(|e| GitHubFailure::remote("update file", e))?;
        Ok(format!("Updated file {}", update.path))
    }

    async fn delete_file(&self, path: &str, branches: &BranchSnapshot) -> Result<String, GitHubFailure> {
        let file = self
            .fetch_file(path, &branches.active)
            .await
            .map_err(|e| e.into_failure("delete file", path, &branches.active))?;
        self.port
            .delete_file(&FileCommit::delete(path, file.sha, &branches.active))
            .await
            .map_err(|e| GitHubFailure::remote("delete file", e))?;
        Ok(format!("Deleted file {}", path))
    }

    /// Breadth-first walk from `directory`, returning a JSON array of file
    /// paths in visiting order.
    async fn list_files(&self, directory: &str, reference: &str) -> Result<String, GitHubFailure> {
        debug!(directory, reference, "Listing repository files");
        let mut queue: VecDeque<RepoEntry> =
            match self.port.contents(directory, reference).await.map_err(GitHubFailure::Listing)? {
                Contents::Directory(entries) => entries.into(),
                Contents::File(file) => VecDeque::from([RepoEntry::file(file.path)]),
            };

        let mut files = Vec::new();
        while let Some(entry) = queue.pop_front() {
            if !entry.is_dir() {
                files.push(entry.path);
                continue;
            }
            match self
                .port
                .contents(&entry.path, reference)
                .await
                .map_err(GitHubFailure::Listing)?
            {
                Contents::Directory(children) => queue.extend(children),
                Contents::File(file) => files.push(file.path),
            }
        }
        to_json(&files)
    }

    async fn list_branches(&self) -> Result<String, GitHubFailure> {
        let names = self
            .port
            .branches()
            .await
            .map_err(|e| GitHubFailure::remote("list branches", e))?;
        if names.is_empty() {
            return Ok("No branches found in the repository".to_string());
        }
        Ok(format!(
            "Found {} branches in the repository:\n{}",
            names.len(),
            names.join("\n")
        ))
    }

    async fn set_active_branch(&self, branch: &str) -> Result<String, GitHubFailure> {
        let available = self
            .port
            .branches()
            .await
            .map_err(|e| GitHubFailure::remote("list branches", e))?;
        if !available.iter().any(|name| name == branch) {
            return Err(GitHubFailure::UnknownBranch {
                branch: branch.to_string(),
                available,
            });
        }
        self.branches.set_active(branch);
        info!(branch, "Switched active branch");
        Ok(format!("Switched to branch `{}`", branch))
    }

    async fn create_branch(
        &self,
        proposed: &str,
        branches: &BranchSnapshot,
    ) -> Result<String, GitHubFailure> {
        let head = self
            .port
            .branch_head(&branches.base)
            .await
            .map_err(|e| GitHubFailure::remote("create branch", e))?;

        for candidate in branch_name_candidates(proposed) {
            match self.port.create_branch_ref(&candidate, &head).await {
                Ok(()) => {
                    self.branches.set_active(candidate.as_str());
                    info!(branch = %candidate, "Created branch and set it active");
                    return Ok(format!(
                        "Branch '{}' created successfully, and set as current active branch.",
                        candidate
                    ));
                }
                Err(e) if e.is_unprocessable() => {
                    debug!(branch = %candidate, "Branch name taken, trying next");
                }
                Err(e) => return Err(GitHubFailure::remote("create branch", e)),
            }
        }

        Err(GitHubFailure::BranchNamesExhausted {
            proposed: proposed.to_string(),
            attempts: MAX_BRANCH_ATTEMPTS,
        })
    }

    async fn fetch_file(&self, path: &str, reference: &str) -> Result<RepoFile, FetchError> {
        match self.port.contents(path, reference).await {
            Ok(Contents::File(file)) => Ok(file),
            Ok(Contents::Directory(_)) => Err(FetchError::Directory),
            Err(e) => Err(FetchError::Remote(e)),
        }
    }
}

enum FetchError {
    Remote(RemoteError),
    Directory,
}

impl FetchError {
    fn into_failure(self, action: &'static str, path: &str, branch: &str) -> GitHubFailure {
        match self {
            FetchError::Remote(cause) => GitHubFailure::remote(action, cause),
            FetchError::Directory => GitHubFailure::NotAFile {
                path: path.to_string(),
                branch: branch.to_string(),
            },
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, GitHubFailure> {
    serde_json::to_string(value)
        .map_err(|e| GitHubFailure::remote("serialize response", RemoteError::Decode(e.to_string())))
}

#[async_trait]
impl<P: GitHubPort> ToolAdapter for GitHubToolkit<P> {
    fn id(&self) -> &str {
        "github"
    }

    fn operations(&self) -> &ToolSpec {
        &self.operations
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let started = Instant::now();
        let operation: GitHubOperation = match resolve(&self.operations, call) {
            Ok(operation) => operation,
            Err(e) => {
                warn!(tool = %call.tool_name, "Rejected GitHub call: {}", e);
                return ToolResult::failure(&call.tool_name, e).with_adapter(self.id());
            }
        };

        debug!(operation = %operation, repository = self.port.repository(), "Executing GitHub operation");
        let outcome = self.run(operation, call).await;
        if let Err(failure) = &outcome {
            warn!(operation = %operation, code = failure.code(), "GitHub operation failed: {}", failure);
        }

        ToolResult::from_outcome(operation.name(), outcome)
            .with_duration(elapsed_ms(started))
            .with_adapter(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use toolkits_domain::ToolError;
    use toolkits_domain::github::{
        IssueComment, IssueDetails, IssueSummary, PullRequestDetails, PullRequestFile,
        PullRequestSummary,
    };

    /// In-memory repository. File paths map to contents; directories are
    /// implied by path prefixes. Every port call is recorded by name.
    #[derive(Default)]
    struct MockRepo {
        files: Mutex<BTreeMap<String, String>>,
        branches: Mutex<Vec<String>>,
        issues: Vec<IssueSummary>,
        calls: Mutex<Vec<String>>,
        fail_puts: bool,
    }

    impl MockRepo {
        fn with_files(paths: &[(&str, &str)]) -> Self {
            let repo = Self {
                branches: Mutex::new(vec!["main".into(), "ai".into()]),
                ..Default::default()
            };
            {
                let mut files = repo.files.lock().unwrap();
                for (path, content) in paths {
                    files.insert(path.to_string(), content.to_string());
                }
            }
            repo
        }

        fn record(&self, name: &str) {
            self.calls.lock().unwrap().push(name.to_string());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn called(&self, name: &str) -> bool {
            self.calls().iter().any(|c| c == name)
        }

        fn file(&self, path: &str) -> Option<String> {
            self.files.lock().unwrap().get(path).cloned()
        }
    }

    #[async_trait]
    impl GitHubPort for MockRepo {
        fn repository(&self) -> &str {
            "octo/repo"
        }

        async fn open_issues(&self) -> Result<Vec<IssueSummary>, RemoteError> {
            self.record("open_issues");
            Ok(self.issues.clone())
        }

        async fn issue(&self, number: u64) -> Result<IssueDetails, RemoteError> {
            self.record("issue");
            if number != 7 {
                return Err(RemoteError::status(404, "Not Found"));
            }
            Ok(IssueDetails {
                number,
                title: "Crash on start".into(),
                body: "It crashes".into(),
                opened_by: "alice".into(),
                comments: vec![IssueComment {
                    body: "Confirmed".into(),
                    user: "bob".into(),
                }],
            })
        }

        async fn comment_on_issue(&self, _number: u64, _body: &str) -> Result<(), RemoteError> {
            self.record("comment_on_issue");
            Ok(())
        }

        async fn open_pull_requests(&self) -> Result<Vec<PullRequestSummary>, RemoteError> {
            self.record("open_pull_requests");
            Ok(Vec::new())
        }

        async fn pull_request(&self, number: u64) -> Result<PullRequestDetails, RemoteError> {
            self.record("pull_request");
            Ok(PullRequestDetails {
                number,
                title: "Add feature".into(),
                body: String::new(),
                opened_by: "alice".into(),
                head: "ai".into(),
                base: "main".into(),
                commits: 2,
                comments: Vec::new(),
            })
        }

        async fn pull_request_files(&self, _number: u64) -> Result<Vec<PullRequestFile>, RemoteError> {
            self.record("pull_request_files");
            Ok(vec![PullRequestFile {
                path: "src/lib.rs".into(),
                patch: Some("@@ -1 +1 @@".into()),
            }])
        }

        async fn create_pull_request(&self, request: &NewPullRequest) -> Result<u64, RemoteError> {
            self.record("create_pull_request");
            assert_eq!(request.base, "main");
            Ok(31)
        }

        async fn contents(&self, path: &str, _reference: &str) -> Result<Contents, RemoteError> {
            self.record("contents");
            let files = self.files.lock().unwrap();
            if let Some(content) = files.get(path) {
                return Ok(Contents::File(RepoFile {
                    path: path.to_string(),
                    sha: format!("sha-{}", path),
                    content: content.as_bytes().to_vec(),
                }));
            }

            let prefix = if path.is_empty() {
                String::new()
            } else {
                format!("{}/", path)
            };
            let mut entries: Vec<RepoEntry> = Vec::new();
            for key in files.keys() {
                let Some(rest) = key.strip_prefix(&prefix) else {
                    continue;
                };
                let entry = match rest.split_once('/') {
                    Some((dir, _)) => RepoEntry::dir(format!("{}{}", prefix, dir)),
                    None => RepoEntry::file(key.clone()),
                };
                if !entries.contains(&entry) {
                    entries.push(entry);
                }
            }

            if entries.is_empty() {
                return Err(RemoteError::status(404, "Not Found"));
            }
            Ok(Contents::Directory(entries))
        }

        async fn put_file(&self, commit: &FileCommit) -> Result<(), RemoteError> {
            self.record("put_file");
            if self.fail_puts {
                return Err(RemoteError::status(409, "sha mismatch"));
            }
            self.files
                .lock()
                .unwrap()
                .insert(commit.path.clone(), commit.content.clone().unwrap_or_default());
            Ok(())
        }

        async fn delete_file(&self, commit: &FileCommit) -> Result<(), RemoteError> {
            self.record("delete_file");
            self.files.lock().unwrap().remove(&commit.path);
            Ok(())
        }

        async fn branches(&self) -> Result<Vec<String>, RemoteError> {
            self.record("branches");
            Ok(self.branches.lock().unwrap().clone())
        }

        async fn branch_head(&self, _branch: &str) -> Result<String, RemoteError> {
            self.record("branch_head");
            Ok("abc123".into())
        }

        async fn create_branch_ref(&self, branch: &str, _sha: &str) -> Result<(), RemoteError> {
            self.record("create_branch_ref");
            let mut branches = self.branches.lock().unwrap();
            if branches.iter().any(|b| b == branch) {
                return Err(RemoteError::status(422, "Reference already exists"));
            }
            branches.push(branch.to_string());
            Ok(())
        }
    }

    fn toolkit(repo: MockRepo) -> GitHubToolkit<MockRepo> {
        GitHubToolkit::new(repo, "ai", "main")
    }

    #[tokio::test]
    async fn test_unknown_operation_is_not_dispatched() {
        let kit = toolkit(MockRepo::with_files(&[]));
        let result = kit.execute(&ToolCall::new("drop_repository")).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, ToolError::NOT_FOUND);
        assert!(result.render().contains("drop_repository"));
        assert!(kit.port().calls().is_empty());
    }

    #[test]
    fn test_operations_are_stable() {
        let kit = toolkit(MockRepo::with_files(&[]));
        let first: Vec<String> = kit.operations().names().map(String::from).collect();
        let second: Vec<String> = kit.operations().names().map(String::from).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 17);
    }

    #[tokio::test]
    async fn test_create_file_refuses_existing_file() {
        let kit = toolkit(MockRepo::with_files(&[("x.txt", "hello")]));
        let call = ToolCall::new("create_file")
            .with_arg("file_path", "x.txt")
            .with_arg("file_contents", "new");
        let result = kit.execute(&call).await;

        assert_eq!(result.error().unwrap().code, ToolError::CONFLICT);
        assert_eq!(
            result.render(),
            "File already exists at `x.txt` on branch `ai`. You must use `update_file` to modify it."
        );
        assert!(!kit.port().called("put_file"));
        assert_eq!(kit.port().file("x.txt").as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_create_file() {
        let kit = toolkit(MockRepo::with_files(&[]));
        let call = ToolCall::new("create_file")
            .with_arg("file_path", "docs/new.md")
            .with_arg("file_contents", "# New");
        let result = kit.execute(&call).await;

        assert_eq!(result.render(), "Created file docs/new.md");
        assert_eq!(kit.port().file("docs/new.md").as_deref(), Some("# New"));
    }

    #[tokio::test]
    async fn test_guard_refuses_commits_to_base_branch() {
        let kit = GitHubToolkit::new(MockRepo::with_files(&[("a.txt", "a")]), "main", "main");
        let calls = [
            ToolCall::new("create_file")
                .with_arg("file_path", "b.txt")
                .with_arg("file_contents", "b"),
            ToolCall::new("delete_file").with_arg("file_path", "a.txt"),
            ToolCall::new("update_file").with_arg("file_query", "a.txt\nOLD <<<<\na\n>>>> OLD\nNEW <<<<\nb\n>>>> NEW"),
        ];

        for call in &calls {
            let result = kit.execute(call).await;
            assert_eq!(result.error().unwrap().code, ToolError::POLICY_REFUSED);
            assert!(result.render().contains("main"));
        }
        assert!(kit.port().calls().is_empty());
    }

    #[tokio::test]
    async fn test_recursive_listing_is_breadth_first() {
        let kit = toolkit(MockRepo::with_files(&[
            ("a.txt", ""),
            ("dir1/b.txt", ""),
            ("dir1/dir2/c.txt", ""),
        ]));
        let result = kit.execute(&ToolCall::new("list_files_in_bot_branch")).await;

        let files: Vec<String> = serde_json::from_str(&result.render()).unwrap();
        assert_eq!(files, vec!["a.txt", "dir1/b.txt", "dir1/dir2/c.txt"]);
    }

    #[tokio::test]
    async fn test_directory_listing() {
        let kit = toolkit(MockRepo::with_files(&[
            ("a.txt", ""),
            ("dir1/b.txt", ""),
            ("dir1/dir2/c.txt", ""),
        ]));
        let call = ToolCall::new("get_files_from_directory").with_arg("directory_path", "dir1");
        let files: Vec<String> = serde_json::from_str(&kit.execute(&call).await.render()).unwrap();
        assert_eq!(files, vec!["dir1/b.txt", "dir1/dir2/c.txt"]);

        let missing = ToolCall::new("get_files_from_directory").with_arg("directory_path", "nope");
        assert_eq!(
            kit.execute(&missing).await.render(),
            "Error: status code 404, Not Found"
        );
    }

    #[tokio::test]
    async fn test_read_file() {
        let kit = toolkit(MockRepo::with_files(&[("src/main.rs", "fn main() {}")]));
        let ok = kit
            .execute(&ToolCall::new("read_file").with_arg("file_path", "src/main.rs"))
            .await;
        assert_eq!(ok.render(), "fn main() {}");

        let missing = kit
            .execute(&ToolCall::new("read_file").with_arg("file_path", "nope.rs"))
            .await;
        assert_eq!(missing.error().unwrap().code, ToolError::NOT_FOUND);
        assert_eq!(
            missing.render(),
            "File not found `nope.rs` on branch `ai`. Error: status code 404, Not Found"
        );
    }

    #[tokio::test]
    async fn test_update_file() {
        let kit = toolkit(MockRepo::with_files(&[("app.py", "print('hello')\n")]));
        let query = "app.py\nOLD <<<<\nprint('hello')\n>>>> OLD\nNEW <<<<\nprint('bye')\n>>>> NEW";
        let result = kit
            .execute(&ToolCall::new("update_file").with_arg("file_query", query))
            .await;

        assert_eq!(result.render(), "Updated file app.py");
        assert_eq!(kit.port().file("app.py").as_deref(), Some("print('bye')\n"));
    }

    #[tokio::test]
    async fn test_update_file_without_old_content() {
        let kit = toolkit(MockRepo::with_files(&[("app.py", "print('hello')\n")]));
        let query = "app.py\nOLD <<<<\nmissing\n>>>> OLD\nNEW <<<<\nx\n>>>> NEW";
        let result = kit
            .execute(&ToolCall::new("update_file").with_arg("file_query", query))
            .await;

        assert_eq!(result.error().unwrap().code, ToolError::CONFLICT);
        assert!(result.render().starts_with("File content was not updated"));
        assert!(!kit.port().called("put_file"));
    }

    #[tokio::test]
    async fn test_remote_failure_is_a_sentence() {
        let repo = MockRepo {
            fail_puts: true,
            ..MockRepo::with_files(&[])
        };
        let kit = toolkit(repo);
        let call = ToolCall::new("create_file")
            .with_arg("file_path", "a.txt")
            .with_arg("file_contents", "a");
        let result = kit.execute(&call).await;

        assert_eq!(
            result.render(),
            "Unable to make file due to error:\nstatus code 409, sha mismatch"
        );
        assert_eq!(result.error().unwrap().code, ToolError::EXECUTION_FAILED);
    }

    #[tokio::test]
    async fn test_delete_file() {
        let kit = toolkit(MockRepo::with_files(&[("old.txt", "x")]));
        let result = kit
            .execute(&ToolCall::new("delete_file").with_arg("file_path", "old.txt"))
            .await;
        assert_eq!(result.render(), "Deleted file old.txt");
        assert_eq!(kit.port().file("old.txt"), None);
    }

    #[tokio::test]
    async fn test_set_active_branch() {
        let kit = toolkit(MockRepo::with_files(&[]));
        let ok = kit
            .execute(&ToolCall::new("set_active_branch").with_arg("branch_name", "main"))
            .await;
        assert_eq!(ok.render(), "Switched to branch `main`");
        assert_eq!(kit.branches().snapshot().active, "main");

        let missing = kit
            .execute(&ToolCall::new("set_active_branch").with_arg("branch_name", "dev"))
            .await;
        assert_eq!(
            missing.render(),
            "Error dev does not exist, in repo with current branches: main, ai"
        );
        assert_eq!(kit.branches().snapshot().active, "main");
    }

    #[tokio::test]
    async fn test_create_branch_retries_taken_names() {
        let repo = MockRepo::with_files(&[]);
        repo.branches.lock().unwrap().push("feature".into());
        repo.branches.lock().unwrap().push("feature_v1".into());
        let kit = toolkit(repo);

        let result = kit
            .execute(&ToolCall::new("create_branch").with_arg("proposed_branch_name", "feature"))
            .await;
        assert_eq!(
            result.render(),
            "Branch 'feature_v2' created successfully, and set as current active branch."
        );
        assert_eq!(kit.branches().snapshot().active, "feature_v2");
    }

    #[tokio::test]
    async fn test_create_pull_request() {
        let kit = toolkit(MockRepo::with_files(&[]));
        let call = ToolCall::new("create_pull_request").with_arg("pr_query", "Add parser\n\nDetails");
        assert_eq!(kit.execute(&call).await.render(), "Successfully created PR number 31");

        kit.branches().set_active("main");
        let refused = kit.execute(&call).await;
        assert_eq!(refused.error().unwrap().code, ToolError::POLICY_REFUSED);
        assert_eq!(
            kit.port().calls().iter().filter(|c| *c == "create_pull_request").count(),
            1
        );
    }

    #[tokio::test]
    async fn test_issue_operations() {
        let repo = MockRepo {
            issues: vec![IssueSummary {
                title: "Crash on start".into(),
                number: 7,
                opened_by: "alice".into(),
            }],
            ..MockRepo::with_files(&[])
        };
        let kit = toolkit(repo);

        let listed = kit.execute(&ToolCall::new("get_issues")).await.render();
        assert!(listed.starts_with("Found 1 issues:\n"));

        let issue = kit
            .execute(&ToolCall::new("get_issue").with_arg("issue_number", "7"))
            .await;
        let value: serde_json::Value = serde_json::from_str(&issue.render()).unwrap();
        assert_eq!(value["opened_by"], "alice");
        assert_eq!(value["comments"][0]["user"], "bob");

        let commented = kit
            .execute(&ToolCall::new("comment_on_issue").with_arg("comment_query", "7\n\nOn it"))
            .await;
        assert_eq!(commented.render(), "Commented on issue 7");
    }

    #[tokio::test]
    async fn test_empty_listings() {
        let kit = toolkit(MockRepo::with_files(&[]));
        assert_eq!(
            kit.execute(&ToolCall::new("get_issues")).await.render(),
            "No open issues available"
        );
        assert_eq!(
            kit.execute(&ToolCall::new("list_open_pull_requests")).await.render(),
            "No open pull requests available"
        );
    }

    #[tokio::test]
    async fn test_issue_number_with_hash_prefix() {
        let kit = toolkit(MockRepo::with_files(&[]));
        let issue = kit
            .execute(&ToolCall::new("get_issue").with_arg("issue_number", "#7"))
            .await;

        assert!(issue.is_success(), "{}", issue.render());
        let value: serde_json::Value = serde_json::from_str(&issue.render()).unwrap();
        assert_eq!(value["number"], 7);
    }

    #[tokio::test]
    async fn test_invalid_arguments() {
        let kit = toolkit(MockRepo::with_files(&[]));
        let result = kit
            .execute(&ToolCall::new("get_issue").with_arg("issue_number", "seven"))
            .await;
        assert_eq!(result.error().unwrap().code, ToolError::INVALID_ARGUMENT);
        assert!(kit.port().calls().is_empty());
    }
}
