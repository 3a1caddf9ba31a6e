//! Tool adapter abstraction
//!
//! A [`ToolAdapter`] binds one remote service to the uniform tool interface:
//! it publishes a fixed, ordered table of operations and executes calls by
//! name.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 ToolRegistry                 │
//! │   (aggregates adapters, routes by name)      │
//! └──────────────────────────────────────────────┘
//!             │                      │
//!             ▼                      ▼
//!      ┌─────────────┐        ┌──────────────┐
//!      │   GitHub    │        │  SharePoint  │
//!      │   toolkit   │        │   toolkit    │
//!      └─────────────┘        └──────────────┘
//! ```
//!
//! Adapters never return a Rust error across this boundary. Every outcome,
//! including an unknown operation name, comes back as a [`ToolResult`].

use async_trait::async_trait;

use super::entities::{ToolCall, ToolDefinition, ToolSpec};
use super::value_objects::ToolResult;

#[async_trait]
pub trait ToolAdapter: Send + Sync {
    /// Stable identifier, e.g. "github" or "sharepoint"
    fn id(&self) -> &str;

    /// The adapter's operations in their fixed declaration order.
    ///
    /// Side-effect free; repeated calls return the same table.
    fn operations(&self) -> &ToolSpec;

    /// Execute one call.
    ///
    /// Unknown names produce a `NOT_FOUND` failure without touching the
    /// remote service.
    async fn execute(&self, call: &ToolCall) -> ToolResult;

    fn has_operation(&self, name: &str) -> bool {
        self.operations().contains(name)
    }

    fn operation(&self, name: &str) -> Option<&ToolDefinition> {
        self.operations().get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::RiskLevel;
    use crate::tool::value_objects::UnknownOperation;

    struct EchoAdapter {
        spec: ToolSpec,
    }

    impl EchoAdapter {
        fn new() -> Self {
            Self {
                spec: ToolSpec::new()
                    .register(ToolDefinition::new("echo", "Echo input", RiskLevel::Low))
                    .register(ToolDefinition::new("shout", "Echo loudly", RiskLevel::Low)),
            }
        }
    }

    #[async_trait]
    impl ToolAdapter for EchoAdapter {
        fn id(&self) -> &str {
            "echo"
        }

        fn operations(&self) -> &ToolSpec {
            &self.spec
        }

        async fn execute(&self, call: &ToolCall) -> ToolResult {
            let text = call.get_string("text").unwrap_or_default();
            match call.tool_name.as_str() {
                "echo" => ToolResult::success("echo", text),
                "shout" => ToolResult::success("shout", text.to_uppercase()),
                other => ToolResult::failure(other, UnknownOperation(other.to_string())),
            }
        }
    }

    #[test]
    fn test_adapter_operations_are_stable() {
        let adapter = EchoAdapter::new();
        let first: Vec<_> = adapter.operations().names().map(String::from).collect();
        let second: Vec<_> = adapter.operations().names().map(String::from).collect();
        assert_eq!(first, second);
        assert!(adapter.has_operation("shout"));
        assert!(adapter.operation("whisper").is_none());
    }

    #[tokio::test]
    async fn test_adapter_execute() {
        let adapter = EchoAdapter::new();
        let result = adapter
            .execute(&ToolCall::new("shout").with_arg("text", "hi"))
            .await;
        assert_eq!(result.render(), "HI");
    }

    #[tokio::test]
    async fn test_adapter_unknown_operation() {
        let adapter = EchoAdapter::new();
        let result = adapter.execute(&ToolCall::new("whisper")).await;
        assert!(!result.is_success());
        assert!(result.error().unwrap().is_not_found());
    }
}
