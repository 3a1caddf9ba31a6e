//! Tool Executor port
//!
//! The surface callers see once adapters are aggregated: which operations
//! are exposed, which adapter serves each one, and how to run a call.

use async_trait::async_trait;
use toolkits_domain::tool::{
    entities::{ToolCall, ToolSpec},
    value_objects::ToolResult,
};

/// Routing surface over one or more tool adapters
///
/// Implemented by the infrastructure `ToolRegistry`.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Exposed operations, in listing order
    fn tool_spec(&self) -> &ToolSpec;

    /// Id of the adapter serving `name`, if the operation is exposed
    fn adapter_of(&self, name: &str) -> Option<&str>;

    fn has_tool(&self, name: &str) -> bool {
        self.adapter_of(name).is_some()
    }

    fn available_tools(&self) -> Vec<&str> {
        self.tool_spec().names().collect()
    }

    /// Whether `name` writes to the remote service. Callers gate these
    /// behind confirmation.
    fn is_mutating(&self, name: &str) -> bool {
        self.tool_spec()
            .get(name)
            .is_some_and(|definition| definition.is_mutating())
    }

    /// Run one call. Unknown names come back as a `NOT_FOUND` result.
    async fn execute(&self, call: &ToolCall) -> ToolResult;

    /// Blocking variant of [`execute`](Self::execute).
    ///
    /// Must not be called from inside an async runtime.
    fn execute_sync(&self, call: &ToolCall) -> ToolResult;
}
