//! Configuration loading for agent-toolkits
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./toolkits.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/agent-toolkits/config.toml`
//! 4. Environment fallbacks such as `GITHUB_REPOSITORY`
//! 5. Default values
//!
//! Settings resolution then validates the merged sections into what the clients need.

mod error;
mod file_config;
mod loader;
mod settings;

pub use error::ConfigError;
pub use file_config::{
    FileConfig, FileGitHubConfig, FileHttpConfig, FileSharePointConfig, FileToolsConfig,
};
pub use loader::ConfigLoader;
pub use settings::{GitHubAuth, GitHubSettings, HttpSettings, SharePointSettings};
