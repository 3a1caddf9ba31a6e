//! Console output formatter for operation listings and results

use crate::output::formatter::{OperationEntry, OutputFormatter};
use colored::Colorize;
use serde_json::json;
use toolkits_domain::{ToolError, ToolResult};

/// Formats listings and results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the operation listing, grouped by adapter in registration order
    pub fn format_operations(operations: &[OperationEntry<'_>]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Available Operations"));
        output.push('\n');

        if operations.is_empty() {
            output.push_str(&format!("\n{}\n", "No operations exposed.".dimmed()));
            output.push_str(&Self::footer());
            return output;
        }

        let mut current_adapter: Option<&str> = None;
        for (adapter, definition) in operations {
            if current_adapter != Some(*adapter) {
                output.push_str(&Self::section_header(adapter));
                current_adapter = Some(*adapter);
            }

            let name = if definition.is_mutating() {
                format!("{} {}", definition.name.yellow().bold(), "(mutating)".yellow())
            } else {
                definition.name.green().bold().to_string()
            };
            output.push_str(&format!("\n{}\n", name));

            let summary = definition.description.lines().next().unwrap_or_default();
            output.push_str(&format!("  {}\n", summary.dimmed()));

            for param in &definition.parameters {
                let required = if param.required { "required" } else { "optional" };
                output.push_str(&format!(
                    "    {} {} {}\n",
                    format!("- {}", param.name).cyan(),
                    format!("({}, {})", param.param_type, required).dimmed(),
                    Self::first_line(&param.description)
                ));
            }
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Total:".cyan().bold(),
            operations.len()
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Format the listing as JSON
    pub fn format_operations_json(operations: &[OperationEntry<'_>]) -> String {
        let entries: Vec<_> = operations
            .iter()
            .map(|(adapter, definition)| {
                json!({
                    "adapter": adapter,
                    "name": definition.name,
                    "description": definition.description,
                    "risk_level": definition.risk_level,
                    "parameters": definition.parameters,
                })
            })
            .collect();
        serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string())
    }

    /// The result string handed back to callers, success or failure alike
    pub fn format_result(result: &ToolResult) -> String {
        result.render()
    }

    /// Short colored banner for stderr describing a failure
    pub fn format_error_banner(error: &ToolError) -> String {
        format!("{} {}", "error:".red().bold(), error.code.dimmed())
    }

    fn first_line(text: &str) -> &str {
        text.lines().next().unwrap_or_default()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_operations(&self, operations: &[OperationEntry<'_>]) -> String {
        Self::format_operations(operations)
    }

    fn format_operations_json(&self, operations: &[OperationEntry<'_>]) -> String {
        Self::format_operations_json(operations)
    }

    fn format_result(&self, result: &ToolResult) -> String {
        Self::format_result(result)
    }
}
