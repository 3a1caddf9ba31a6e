//! SharePoint configuration from TOML (`[sharepoint]` section)

use serde::{Deserialize, Serialize};

use super::lenient_string;

pub const DEFAULT_ACS_URL: &str = "https://accounts.accesscontrol.windows.net";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSharePointConfig {
    /// Absolute site URL (required to enable the adapter)
    #[serde(deserialize_with = "lenient_string")]
    pub site_url: Option<String>,
    /// App-only principal id
    #[serde(deserialize_with = "lenient_string")]
    pub client_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub client_secret: Option<String>,
    /// Document library listed by `get_all_files` (default: "Documents")
    #[serde(deserialize_with = "lenient_string")]
    pub root_folder: Option<String>,
    /// Access control service that issues app-only tokens
    pub acs_url: String,
}

impl Default for FileSharePointConfig {
    fn default() -> Self {
        Self {
            site_url: None,
            client_id: None,
            client_secret: None,
            root_folder: None,
            acs_url: DEFAULT_ACS_URL.to_string(),
        }
    }
}
