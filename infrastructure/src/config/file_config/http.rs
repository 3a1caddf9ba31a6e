//! HTTP client configuration from TOML (`[http]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHttpConfig {
    /// Per-request timeout (default: 30)
    pub timeout_seconds: u64,
    /// Sent as `User-Agent`; GitHub rejects requests without one
    pub user_agent: String,
}

impl Default for FileHttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: concat!("agent-toolkits/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
