//! Tool adapters built on the remote ports
//!
//! Each toolkit owns a port, publishes its operation table and implements
//! [`ToolAdapter`](toolkits_domain::ToolAdapter). Dispatch always goes
//! through [`resolve`]: name lookup first, then argument validation, and
//! only then a remote call.

pub mod branch_context;
pub mod github;
pub mod sharepoint;

use std::str::FromStr;
use std::time::Instant;

use toolkits_domain::tool::{
    DefaultToolValidator, ToolCall, ToolError, ToolSpec, ToolValidator, UnknownOperation,
};

pub use branch_context::BranchContext;
pub use github::GitHubToolkit;
pub use sharepoint::SharePointToolkit;

/// Map a call onto an operation of `spec` and validate its arguments.
pub(crate) fn resolve<Op>(spec: &ToolSpec, call: &ToolCall) -> Result<Op, ToolError>
where
    Op: FromStr<Err = UnknownOperation>,
{
    let operation = call.tool_name.parse::<Op>()?;
    let definition = spec
        .get(&call.tool_name)
        .ok_or_else(|| UnknownOperation(call.tool_name.clone()))?;
    DefaultToolValidator
        .validate(call, definition)
        .map_err(ToolError::invalid_argument)?;
    Ok(operation)
}

pub(crate) fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
