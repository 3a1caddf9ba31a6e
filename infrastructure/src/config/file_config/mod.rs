//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every field is optional in the file; defaults fill the gaps.
//!
//! ```toml
//! [github]
//! repository = "octo/repo"
//! access_token = "ghp_..."
//!
//! [sharepoint]
//! site_url = "https://contoso.sharepoint.com/sites/team"
//!
//! [tools]
//! selected = ["read_file", "read_document"]
//! ```

mod github;
mod http;
mod sharepoint;

pub use github::FileGitHubConfig;
pub use http::FileHttpConfig;
pub use sharepoint::FileSharePointConfig;

use serde::{Deserialize, Deserializer, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// GitHub adapter settings
    pub github: FileGitHubConfig,
    /// SharePoint adapter settings
    pub sharepoint: FileSharePointConfig,
    /// Operation selection
    pub tools: FileToolsConfig,
    /// HTTP client settings shared by both adapters
    pub http: FileHttpConfig,
}

impl FileConfig {
    /// The GitHub adapter is configured once a repository is named
    pub fn github_enabled(&self) -> bool {
        is_set(&self.github.repository)
    }

    /// The SharePoint adapter is configured once a site is named
    pub fn sharepoint_enabled(&self) -> bool {
        is_set(&self.sharepoint.site_url)
    }
}

/// `[tools]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolsConfig {
    /// Exposed operation names. Empty exposes every operation.
    pub selected: Vec<String>,
}

/// A value counts as set only when it is present and not blank.
pub(crate) fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

/// Accept numbers and booleans where a string is expected.
///
/// Environment values such as `GITHUB_APP_ID=12345` arrive as integers.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_text))
}

/// [`lenient_string`] for fields that always carry a value,
/// e.g. `ACTIVE_BRANCH=2024`.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(Scalar::into_text)
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Flag(b) => b.to_string(),
        }
    }
}
