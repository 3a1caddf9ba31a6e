//! Infrastructure layer for agent-toolkits
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: REST clients for GitHub and SharePoint,
//! `.docx` text extraction, the tool registry, and configuration loading.

pub mod config;
pub mod error;
pub mod github;
mod http;
pub mod sharepoint;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileConfig, GitHubAuth, GitHubSettings, HttpSettings,
    SharePointSettings,
};
pub use error::ConnectError;
pub use github::GitHubRestClient;
pub use sharepoint::{DocxTextExtractor, SharePointRestClient};
pub use tools::{JsonSchemaToolConverter, RegisteredOperation, RegistryStats, ToolRegistry};
