//! Tool domain traits
//!
//! Pure validation of a call against its definition, run before any
//! arguments are deserialized or any remote call is made.

use super::args::is_number_like;
use super::entities::{ToolCall, ToolDefinition};

/// Validator for tool calls
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String>;
}

/// Default implementation of ToolValidator
///
/// Checks required parameters, rejects unknown ones, and makes sure
/// `integer` parameters hold what the parameter structs can decode: a
/// non-negative number or numeric text such as `"42"` or `"#42"`.
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String> {
        for param in &definition.parameters {
            if param.required && !call.arguments.contains_key(&param.name) {
                return Err(format!(
                    "Missing required parameter '{}' for tool '{}'",
                    param.name, definition.name
                ));
            }
        }

        for (arg_name, value) in &call.arguments {
            let Some(param) = definition.parameter(arg_name) else {
                return Err(format!(
                    "Unknown parameter '{}' for tool '{}'",
                    arg_name, definition.name
                ));
            };

            if param.param_type == "integer" && !is_number_like(value) {
                return Err(format!(
                    "Parameter '{}' for tool '{}' must be an integer, got {}",
                    arg_name, definition.name, value
                ));
            }
        }

        Ok(())
    }
}
