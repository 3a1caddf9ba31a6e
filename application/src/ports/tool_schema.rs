//! Tool schema conversion port.
//!
//! Separates "which operations exist" (domain) from "how an external agent
//! expects them serialized" (infrastructure).

use toolkits_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Port for converting tool definitions to JSON Schema.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to provider-neutral JSON Schema.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert all tools to a JSON Schema array, keeping table order.
    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value>;
}
