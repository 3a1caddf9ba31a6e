//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod document;
pub mod github;
pub mod sharepoint;
pub mod tool_executor;
pub mod tool_schema;
