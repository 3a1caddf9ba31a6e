//! GitHub configuration from TOML (`[github]` section)

use serde::{Deserialize, Serialize};

use super::{lenient_string, lenient_text};

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGitHubConfig {
    /// Repository in `owner/name` form (required to enable the adapter)
    #[serde(deserialize_with = "lenient_string")]
    pub repository: Option<String>,
    /// Personal access token. Takes priority over every other credential.
    #[serde(deserialize_with = "lenient_string")]
    pub access_token: Option<String>,
    /// Basic-auth username, used together with `password`
    #[serde(deserialize_with = "lenient_string")]
    pub username: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub password: Option<String>,
    /// GitHub App id, used together with `app_private_key`
    #[serde(deserialize_with = "lenient_string")]
    pub app_id: Option<String>,
    /// PEM private key of the GitHub App, or a path to a file holding it
    #[serde(deserialize_with = "lenient_string")]
    pub app_private_key: Option<String>,
    /// REST API root (GitHub Enterprise: `https://host/api/v3`)
    #[serde(deserialize_with = "lenient_text")]
    pub base_url: String,
    /// Working branch for reads and commits
    #[serde(deserialize_with = "lenient_text")]
    pub active_branch: String,
    /// Protected branch that pull requests target
    #[serde(deserialize_with = "lenient_text")]
    pub base_branch: String,
}

impl Default for FileGitHubConfig {
    fn default() -> Self {
        Self {
            repository: None,
            access_token: None,
            username: None,
            password: None,
            app_id: None,
            app_private_key: None,
            base_url: DEFAULT_GITHUB_API_URL.to_string(),
            active_branch: "ai".to_string(),
            base_branch: "main".to_string(),
        }
    }
}
