//! Configuration file loader with multi-source merging

use super::error::ConfigError;
use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "agent-toolkits";
const PROJECT_FILE: &str = "toolkits.toml";

/// Environment variables consulted as fallbacks, with the config key each one fills
const ENV_FALLBACKS: &[(&str, &str)] = &[
    ("GITHUB_REPOSITORY", "github.repository"),
    ("GITHUB_ACCESS_TOKEN", "github.access_token"),
    ("GITHUB_USERNAME", "github.username"),
    ("GITHUB_PASSWORD", "github.password"),
    ("GITHUB_APP_ID", "github.app_id"),
    ("GITHUB_APP_PRIVATE_KEY", "github.app_private_key"),
    ("GITHUB_BASE_URL", "github.base_url"),
    ("ACTIVE_BRANCH", "github.active_branch"),
    ("GITHUB_BASE_BRANCH", "github.base_branch"),
    ("SHAREPOINT_SITE_URL", "sharepoint.site_url"),
    ("SHAREPOINT_CLIENT_ID", "sharepoint.client_id"),
    ("SHAREPOINT_CLIENT_SECRET", "sharepoint.client_secret"),
    ("SHAREPOINT_ROOT_FOLDER", "sharepoint.root_folder"),
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./toolkits.toml`
    /// 3. Global: `$XDG_CONFIG_HOME/agent-toolkits/config.toml`
    /// 4. Environment fallbacks (`GITHUB_REPOSITORY`, `SHAREPOINT_SITE_URL`, ...)
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        let mut figment = Self::base();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(project_path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(project_path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Defaults plus environment fallbacks, ignoring every file (for --no-config)
    pub fn load_without_files() -> Result<FileConfig, ConfigError> {
        Self::base()
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }

    fn base() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Self::env_fallbacks())
    }

    fn env_fallbacks() -> Env {
        Env::raw().filter_map(|key| {
            ENV_FALLBACKS
                .iter()
                .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
                .map(|(_, path)| (*path).into())
        })
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/agent-toolkits/config.toml if set,
    /// otherwise falls back to ~/.config/agent-toolkits/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        let path = PathBuf::from(PROJECT_FILE);
        path.exists().then_some(path)
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./{}", PROJECT_FILE);
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", mark, path.display());
        }

        let set: Vec<&str> = ENV_FALLBACKS
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| std::env::var_os(name).is_some())
            .collect();
        if set.is_empty() {
            println!("  [     ] Environment: no fallback variables set");
        } else {
            println!("  [FOUND] Environment: {}", set.join(", "));
        }

        println!("  [     ] Default: built-in defaults");
    }
}
