//! Application layer for agent-toolkits
//!
//! This crate contains the remote-service ports and the toolkits that turn
//! them into tool adapters. It depends only on the domain layer.

pub mod ports;
pub mod toolkits;

// Re-export commonly used types
pub use ports::{
    document::DocumentTextPort, github::GitHubPort, sharepoint::SharePointPort,
    tool_executor::ToolExecutorPort, tool_schema::ToolSchemaPort,
};
pub use toolkits::{BranchContext, GitHubToolkit, SharePointToolkit};
