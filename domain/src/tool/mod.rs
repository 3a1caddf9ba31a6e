//! Tool domain module
//!
//! Core abstractions shared by every adapter: how an operation is described
//! to a calling agent, how it is invoked, and what comes back.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (ordered)    │    │ (invocation) │    │ (output)     │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`ToolSpec`]: Ordered table of [`ToolDefinition`]s with unique names
//! - [`ToolDefinition`]: Name, description, risk level and parameters
//! - [`ToolCall`]: Invocation request; [`ToolCall::parse_args`] turns the
//!   argument map into an operation's declared parameter struct
//! - [`ToolResult`]: Output or typed [`ToolError`]; [`ToolResult::render`]
//!   gives the plain string an agent reads
//! - [`ToolValidator`]: Argument validation before dispatch
//! - [`ToolAdapter`]: One remote service exposed as a set of tools

pub mod adapter;
pub mod args;
pub mod entities;
pub mod traits;
pub mod value_objects;

pub use adapter::ToolAdapter;
pub use entities::{
    ArgumentError, ParamSpec, RiskLevel, ToolCall, ToolDefinition, ToolParameter, ToolSpec,
};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolResult, ToolResultMetadata, UnknownOperation};
