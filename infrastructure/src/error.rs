//! Error types for adapter construction

use thiserror::Error;
use toolkits_domain::RemoteError;

use crate::config::ConfigError;

/// Result type alias for adapter construction
pub type Result<T> = std::result::Result<T, ConnectError>;

/// Errors that can occur while authenticating and binding an adapter
#[derive(Error, Debug)]
pub enum ConnectError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid GitHub App private key: {0}")]
    InvalidKey(#[from] jsonwebtoken::errors::Error),

    #[error("GitHub App {app_id} has no installations")]
    NoInstallation { app_id: String },

    #[error("SharePoint did not advertise an authentication realm")]
    MissingRealm,

    #[error("Failed to {action}: {source}")]
    Remote {
        action: &'static str,
        #[source]
        source: RemoteError,
    },
}

impl ConnectError {
    pub(crate) fn remote(action: &'static str) -> impl FnOnce(RemoteError) -> Self {
        move |source| ConnectError::Remote { action, source }
    }
}
