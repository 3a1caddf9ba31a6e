//! Domain layer for agent-toolkits
//!
//! This crate contains the tool abstractions and the static description of
//! every adapter. It performs no I/O and has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tools
//!
//! An adapter exposes a remote service as a fixed, ordered set of named
//! operations. Each operation is described by a [`ToolDefinition`] so an
//! agent can pick it, and invoked with a [`ToolCall`] that produces a
//! [`ToolResult`].
//!
//! ## Adapters
//!
//! - **GitHub**: issues, pull requests, files and branches of one repository,
//!   with a protected-branch guard on commits
//! - **SharePoint**: lists, document libraries and text extraction for one site

pub mod github;
pub mod remote;
pub mod sharepoint;
pub mod tool;

// Re-export commonly used types
pub use github::{BranchSnapshot, GitHubFailure, GitHubOperation, github_tool_spec};
pub use remote::RemoteError;
pub use sharepoint::{SharePointFailure, SharePointOperation, sharepoint_tool_spec};
pub use tool::{
    adapter::ToolAdapter,
    entities::{ArgumentError, ParamSpec, RiskLevel, ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult, ToolResultMetadata, UnknownOperation},
};
