//! Output formatter trait

use toolkits_domain::{ToolDefinition, ToolResult};

/// One exposed operation together with the adapter serving it
pub type OperationEntry<'a> = (&'a str, &'a ToolDefinition);

/// Trait for formatting operation listings and invocation results
pub trait OutputFormatter {
    /// Human-readable listing
    fn format_operations(&self, operations: &[OperationEntry<'_>]) -> String;

    /// Listing as JSON
    fn format_operations_json(&self, operations: &[OperationEntry<'_>]) -> String;

    /// The plain result string of one invocation
    fn format_result(&self, result: &ToolResult) -> String;
}
