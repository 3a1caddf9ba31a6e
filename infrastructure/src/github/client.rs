//! GitHub REST client
//!
//! [`GitHubRestClient`] implements [`GitHubPort`] over the v3 REST API. It is
//! bound to one repository when connected and never re-authenticates.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use toolkits_application::GitHubPort;
use toolkits_domain::RemoteError;
use toolkits_domain::github::{
    Contents, FileCommit, IssueDetails, IssueSummary, NewPullRequest, PullRequestDetails,
    PullRequestFile, PullRequestSummary, RepoFile,
};
use tracing::{debug, info};

use super::auth;
use super::models::{
    Blob, Branch, BranchDetails, Comment, CommentBody, ContentItem, ContentsBody, ContentsResponse,
    Created, Issue, Pull, PullBody, PullFile, RefBody, Repository,
};
use crate::config::{GitHubAuth, GitHubSettings, HttpSettings};
use crate::error::{ConnectError, Result};
use crate::http::{build_client, encode_path, expect_success, read_json, transport};

const API_VERSION: &str = "2022-11-28";
const PER_PAGE: usize = 100;
/// Upper bound on pages fetched by one listing call
const MAX_PAGES: usize = 10;
/// Comments included with an issue or pull request
const COMMENT_LIMIT: usize = 10;

#[derive(Clone)]
enum Credential {
    Bearer(String),
    Basic { username: String, password: String },
    None,
}

/// Authenticated client bound to one repository
pub struct GitHubRestClient {
    client: Client,
    base_url: String,
    repository: String,
    credential: Credential,
}

impl GitHubRestClient {
    /// Authenticate with the configured strategy and bind to the repository.
    ///
    /// App identities are exchanged for an installation token first. Any
    /// failure here is a construction error.
    pub async fn connect(settings: &GitHubSettings, http: &HttpSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            HeaderName::from_static("x-github-api-version"),
            HeaderValue::from_static(API_VERSION),
        );
        let client = build_client(http, headers)?;

        let credential = match &settings.auth {
            GitHubAuth::Token(token) => Credential::Bearer(token.clone()),
            GitHubAuth::Login { username, password } => Credential::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            GitHubAuth::App { app_id, private_key } => Credential::Bearer(
                auth::installation_token(&client, &settings.base_url, app_id, private_key).await?,
            ),
            GitHubAuth::Anonymous => Credential::None,
        };

        let mut this = Self {
            client,
            base_url: settings.base_url.clone(),
            repository: settings.repository.clone(),
            credential,
        };

        let repo: Repository = this
            .get_json(&this.repo_url(""))
            .await
            .map_err(ConnectError::remote("load repository"))?;
        info!(
            "Connected to GitHub repository {} ({} auth)",
            repo.full_name,
            settings.auth.kind()
        );
        this.repository = repo.full_name;
        Ok(this)
    }

    fn repo_url(&self, suffix: &str) -> String {
        format!("{}/repos/{}{}", self.base_url, self.repository, suffix)
    }

    fn contents_url(&self, path: &str) -> String {
        let path = encode_path(path);
        if path.is_empty() {
            self.repo_url("/contents")
        } else {
            self.repo_url(&format!("/contents/{}", path))
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credential {
            Credential::Bearer(token) => request.bearer_auth(token),
            Credential::Basic { username, password } => request.basic_auth(username, Some(password)),
            Credential::None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> std::result::Result<T, RemoteError> {
        self.get_query(url, &[]).await
    }

    async fn get_query<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> std::result::Result<T, RemoteError> {
        debug!("GET {}", url);
        let response = self
            .authorize(self.client.get(url).query(query))
            .send()
            .await
            .map_err(transport)?;
        read_json(response).await
    }

    /// Follow `page=` until a short page or the page cap.
    async fn get_paged<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> std::result::Result<Vec<T>, RemoteError> {
        let mut items = Vec::new();
        for page in 1..=MAX_PAGES {
            let mut params = query.to_vec();
            params.push(("per_page", PER_PAGE.to_string()));
            params.push(("page", page.to_string()));

            let batch: Vec<T> = self.get_query(url, &params).await?;
            let done = batch.len() < PER_PAGE;
            items.extend(batch);
            if done {
                break;
            }
        }
        Ok(items)
    }

    async fn send_json<B: serde::Serialize + ?Sized>(
        &self,
        request: RequestBuilder,
        body: &B,
    ) -> std::result::Result<reqwest::Response, RemoteError> {
        let response = self
            .authorize(request.json(body))
            .send()
            .await
            .map_err(transport)?;
        expect_success(response).await
    }

    async fn comments(&self, number: u64) -> std::result::Result<Vec<Comment>, RemoteError> {
        let url = self.repo_url(&format!("/issues/{}/comments", number));
        let mut comments: Vec<Comment> = self
            .get_query(&url, &[("per_page", COMMENT_LIMIT.to_string())])
            .await?;
        comments.truncate(COMMENT_LIMIT);
        Ok(comments)
    }

    async fn file_content(&self, item: ContentItem) -> std::result::Result<RepoFile, RemoteError> {
        let content = match (item.encoding.as_deref(), item.content.as_deref()) {
            (Some("base64"), Some(encoded)) => decode_base64(encoded)?,
            // Large files come back without inline content
            _ => {
                let blob: Blob = self
                    .get_json(&self.repo_url(&format!("/git/blobs/{}", item.sha)))
                    .await?;
                match blob.encoding.as_str() {
                    "base64" => decode_base64(&blob.content)?,
                    _ => blob.content.into_bytes(),
                }
            }
        };
        Ok(RepoFile {
            path: item.path,
            sha: item.sha,
            content,
        })
    }
}

fn decode_base64(encoded: &str) -> std::result::Result<Vec<u8>, RemoteError> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD
        .decode(compact)
        .map_err(|e| RemoteError::Decode(format!("invalid base64 content: {}", e)))
}

#[async_trait]
impl GitHubPort for GitHubRestClient {
    fn repository(&self) -> &str {
        &self.repository
    }

    async fn open_issues(&self) -> std::result::Result<Vec<IssueSummary>, RemoteError> {
        let issues: Vec<Issue> = self
            .get_paged(&self.repo_url("/issues"), &[("state", "open".to_string())])
            .await?;
        Ok(issues
            .iter()
            .filter(|issue| !issue.is_pull_request())
            .map(Issue::summary)
            .collect())
    }

    async fn issue(&self, number: u64) -> std::result::Result<IssueDetails, RemoteError> {
        let issue: Issue = self.get_json(&self.repo_url(&format!("/issues/{}", number))).await?;
        let comments = self.comments(number).await?;
        Ok(issue.into_details(comments))
    }

    async fn comment_on_issue(&self, number: u64, body: &str) -> std::result::Result<(), RemoteError> {
        let url = self.repo_url(&format!("/issues/{}/comments", number));
        debug!("POST {}", url);
        self.send_json(self.client.post(&url), &CommentBody { body }).await?;
        Ok(())
    }

    async fn open_pull_requests(&self) -> std::result::Result<Vec<PullRequestSummary>, RemoteError> {
        let pulls: Vec<Pull> = self
            .get_paged(&self.repo_url("/pulls"), &[("state", "open".to_string())])
            .await?;
        Ok(pulls.iter().map(Pull::summary).collect())
    }

    async fn pull_request(&self, number: u64) -> std::result::Result<PullRequestDetails, RemoteError> {
        let pull: Pull = self.get_json(&self.repo_url(&format!("/pulls/{}", number))).await?;
        let comments = self.comments(number).await?;
        Ok(pull.into_details(comments))
    }

    async fn pull_request_files(&self, number: u64) -> std::result::Result<Vec<PullRequestFile>, RemoteError> {
        let files: Vec<PullFile> = self
            .get_paged(&self.repo_url(&format!("/pulls/{}/files", number)), &[])
            .await?;
        Ok(files.into_iter().map(PullRequestFile::from).collect())
    }

    async fn create_pull_request(&self, request: &NewPullRequest) -> std::result::Result<u64, RemoteError> {
        let url = self.repo_url("/pulls");
        debug!("POST {} ({} -> {})", url, request.head, request.base);
        let body = PullBody {
            title: &request.title,
            body: &request.body,
            head: &request.head,
            base: &request.base,
        };
        let response = self.send_json(self.client.post(&url), &body).await?;
        let created: Created = response
            .json()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))?;
        Ok(created.number)
    }

    async fn contents(&self, path: &str, reference: &str) -> std::result::Result<Contents, RemoteError> {
        let response: ContentsResponse = self
            .get_query(&self.contents_url(path), &[("ref", reference.to_string())])
            .await?;
        match response {
            ContentsResponse::Directory(items) => {
                Ok(Contents::Directory(items.iter().map(ContentItem::entry).collect()))
            }
            ContentsResponse::Item(item) => Ok(Contents::File(self.file_content(item).await?)),
        }
    }

    async fn put_file(&self, commit: &FileCommit) -> std::result::Result<(), RemoteError> {
        let url = self.contents_url(&commit.path);
        debug!("PUT {} on {}", url, commit.branch);
        let body = ContentsBody {
            message: &commit.message,
            branch: &commit.branch,
            content: Some(STANDARD.encode(commit.content.as_deref().unwrap_or_default())),
            sha: commit.sha.as_deref(),
        };
        self.send_json(self.client.put(&url), &body).await?;
        Ok(())
    }

    async fn delete_file(&self, commit: &FileCommit) -> std::result::Result<(), RemoteError> {
        let url = self.contents_url(&commit.path);
        debug!("DELETE {} on {}", url, commit.branch);
        let body = ContentsBody {
            message: &commit.message,
            branch: &commit.branch,
            content: None,
            sha: commit.sha.as_deref(),
        };
        self.send_json(self.client.delete(&url), &body).await?;
        Ok(())
    }

    async fn branches(&self) -> std::result::Result<Vec<String>, RemoteError> {
        let branches: Vec<Branch> = self.get_paged(&self.repo_url("/branches"), &[]).await?;
        Ok(branches.into_iter().map(|b| b.name).collect())
    }

    async fn branch_head(&self, branch: &str) -> std::result::Result<String, RemoteError> {
        let url = self.repo_url(&format!("/branches/{}", urlencoding::encode(branch)));
        let details: BranchDetails = self.get_json(&url).await?;
        Ok(details.commit.sha)
    }

    async fn create_branch_ref(&self, branch: &str, sha: &str) -> std::result::Result<(), RemoteError> {
        let url = self.repo_url("/git/refs");
        debug!("POST {} refs/heads/{}", url, branch);
        let body = RefBody {
            name: format!("refs/heads/{}", branch),
            sha,
        };
        self.send_json(self.client.post(&url), &body).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use toolkits_domain::github::{EntryKind, RepoEntry};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(server: &MockServer, auth: GitHubAuth) -> GitHubSettings {
        GitHubSettings {
            repository: "octo/repo".into(),
            base_url: server.uri(),
            auth,
            active_branch: "ai".into(),
            base_branch: "main".into(),
        }
    }

    fn http() -> HttpSettings {
        HttpSettings {
            timeout: Duration::from_secs(5),
            user_agent: "agent-toolkits-test".into(),
        }
    }

    async fn connected(server: &MockServer) -> GitHubRestClient {
        Mock::given(method("GET"))
            .and(path("/repos/octo/repo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"full_name": "octo/repo"})))
            .mount(server)
            .await;
        GitHubRestClient::connect(&settings(server, GitHubAuth::Token("tok".into())), &http())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_connect_sends_token_and_api_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/repo"))
            .and(header("authorization", "Bearer tok"))
            .and(header("x-github-api-version", API_VERSION))
            .and(header("user-agent", "agent-toolkits-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"full_name": "Octo/Repo"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = GitHubRestClient::connect(&settings(&server, GitHubAuth::Token("tok".into())), &http())
            .await
            .unwrap();
        assert_eq!(client.repository(), "Octo/Repo");
    }

    #[tokio::test]
    async fn test_connect_as_app_uses_installation_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/app/installations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 99}])))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/app/installations/99/access_tokens"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"token": "ghs_abc"})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/repo"))
            .and(header("authorization", "Bearer ghs_abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"full_name": "octo/repo"})))
            .expect(1)
            .mount(&server)
            .await;

        let auth = GitHubAuth::App {
            app_id: "42".into(),
            private_key: include_str!("../../testdata/github_app_key.pem").into(),
        };
        let client = GitHubRestClient::connect(&settings(&server, auth), &http())
            .await
            .unwrap();
        assert_eq!(client.repository(), "octo/repo");
    }

    #[tokio::test]
    async fn test_connect_as_app_without_installation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/app/installations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let auth = GitHubAuth::App {
            app_id: "42".into(),
            private_key: include_str!("../../testdata/github_app_key.pem").into(),
        };
        let err = GitHubRestClient::connect(&settings(&server, auth), &http())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ConnectError::NoInstallation { .. }));
        assert_eq!(err.to_string(), "GitHub App 42 has no installations");
    }

    #[tokio::test]
    async fn test_connect_with_login_sends_basic_auth() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/repo"))
            .and(header("authorization", "Basic dXNlcjpwYXNz"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"full_name": "octo/repo"})))
            .expect(1)
            .mount(&server)
            .await;

        let auth = GitHubAuth::Login {
            username: "user".into(),
            password: "pass".into(),
        };
        let client = GitHubRestClient::connect(&settings(&server, auth), &http()).await;
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_connect_fails_for_missing_repository() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/repo"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
            .mount(&server)
            .await;

        let err = GitHubRestClient::connect(&settings(&server, GitHubAuth::Anonymous), &http())
            .await
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "Failed to load repository: status code 404, Not Found"
        );
    }

    #[tokio::test]
    async fn test_open_issues_excludes_pull_requests() {
        let server = MockServer::start().await;
        let client = connected(&server).await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/repo/issues"))
            .and(query_param("state", "open"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"number": 1, "title": "Bug", "user": {"login": "alice"}},
                {"number": 2, "title": "Fix", "user": {"login": "bob"}, "pull_request": {"url": "x"}}
            ])))
            .mount(&server)
            .await;

        let issues = client.open_issues().await.unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].number, 1);
        assert_eq!(issues[0].opened_by, "alice");
    }

    #[tokio::test]
    async fn test_issue_includes_comments() {
        let server = MockServer::start().await;
        let client = connected(&server).await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/repo/issues/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "number": 7, "title": "Crash", "body": null, "user": {"login": "alice"}
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/repo/issues/7/comments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"body": "same here", "user": {"login": "bob"}}
            ])))
            .mount(&server)
            .await;

        let issue = client.issue(7).await.unwrap();
        assert_eq!(issue.body, "");
        assert_eq!(issue.comments.len(), 1);
        assert_eq!(issue.comments[0].user, "bob");
    }

    #[tokio::test]
    async fn test_contents_directory_and_file() {
        let server = MockServer::start().await;
        let client = connected(&server).await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/repo/contents"))
            .and(query_param("ref", "ai"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"type": "file", "path": "a.txt", "sha": "1"},
                {"type": "dir", "path": "dir1", "sha": "2"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/repo/contents/dir1/my%20notes.md"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "type": "file", "path": "dir1/my notes.md", "sha": "3",
                "encoding": "base64", "content": "aGVsbG8g\nd29ybGQ=\n"
            })))
            .mount(&server)
            .await;

        let Contents::Directory(entries) = client.contents("", "ai").await.unwrap() else {
            panic!("expected directory");
        };
        assert_eq!(entries, vec![RepoEntry::file("a.txt"), RepoEntry::dir("dir1")]);
        assert_eq!(entries[1].kind, EntryKind::Dir);

        let Contents::File(file) = client.contents("dir1/my notes.md", "ai").await.unwrap() else {
            panic!("expected file");
        };
        assert_eq!(file.content, b"hello world");
        assert_eq!(file.sha, "3");
    }

    #[tokio::test]
    async fn test_large_file_falls_back_to_blob() {
        let server = MockServer::start().await;
        let client = connected(&server).await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/repo/contents/big.bin"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "type": "file", "path": "big.bin", "sha": "abc", "encoding": "none", "content": ""
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/repo/git/blobs/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": "Ymln", "encoding": "base64"
            })))
            .mount(&server)
            .await;

        let Contents::File(file) = client.contents("big.bin", "main").await.unwrap() else {
            panic!("expected file");
        };
        assert_eq!(file.content, b"big");
    }

    #[tokio::test]
    async fn test_put_file_encodes_content() {
        let server = MockServer::start().await;
        let client = connected(&server).await;
        Mock::given(method("PUT"))
            .and(path("/repos/octo/repo/contents/notes.txt"))
            .and(body_json(json!({
                "message": "Create notes.txt",
                "branch": "ai",
                "content": "aGk="
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client
            .put_file(&FileCommit::create("notes.txt", "hi", "ai"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_branch_ref_reports_conflict() {
        let server = MockServer::start().await;
        let client = connected(&server).await;
        Mock::given(method("POST"))
            .and(path("/repos/octo/repo/git/refs"))
            .and(body_json(json!({"ref": "refs/heads/feature", "sha": "abc"})))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({"message": "Reference already exists"})),
            )
            .mount(&server)
            .await;

        let err = client.create_branch_ref("feature", "abc").await.unwrap_err();
        assert!(err.is_unprocessable());
        assert_eq!(err.to_string(), "status code 422, Reference already exists");
    }

    #[tokio::test]
    async fn test_branches_follow_pages() {
        let server = MockServer::start().await;
        let client = connected(&server).await;
        let first: Vec<_> = (0..PER_PAGE).map(|i| json!({"name": format!("b{}", i)})).collect();
        Mock::given(method("GET"))
            .and(path("/repos/octo/repo/branches"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(first)))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/repo/branches"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": "main"}])))
            .mount(&server)
            .await;

        let branches = client.branches().await.unwrap();
        assert_eq!(branches.len(), PER_PAGE + 1);
        assert_eq!(branches.last().map(String::as_str), Some("main"));
    }

    #[tokio::test]
    async fn test_create_pull_request_returns_number() {
        let server = MockServer::start().await;
        let client = connected(&server).await;
        Mock::given(method("POST"))
            .and(path("/repos/octo/repo/pulls"))
            .and(body_json(json!({"title": "T", "body": "B", "head": "ai", "base": "main"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"number": 12})))
            .mount(&server)
            .await;

        let number = client
            .create_pull_request(&NewPullRequest {
                title: "T".into(),
                body: "B".into(),
                head: "ai".into(),
                base: "main".into(),
            })
            .await
            .unwrap();
        assert_eq!(number, 12);
    }
}
