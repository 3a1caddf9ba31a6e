//! JSON Schema export of the operation table.
//!
//! External agent frameworks consume each operation as
//! `{name, description, input_schema}`; `risk_level` rides along so callers
//! can gate mutating operations behind confirmation.

use serde_json::{Map, Value, json};
use toolkits_application::ports::tool_schema::ToolSchemaPort;
use toolkits_domain::tool::entities::{ToolDefinition, ToolParameter, ToolSpec};

/// Provider-neutral JSON Schema converter.
///
/// Operations keep their table order so output is deterministic.
pub struct JsonSchemaToolConverter;

fn json_type(param: &ToolParameter) -> &'static str {
    match param.param_type.as_str() {
        "integer" => "integer",
        "number" => "number",
        "boolean" => "boolean",
        _ => "string",
    }
}

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> Value {
        let properties: Map<String, Value> = tool
            .parameters
            .iter()
            .map(|param| {
                (
                    param.name.clone(),
                    json!({ "type": json_type(param), "description": param.description }),
                )
            })
            .collect();
        let required: Vec<&str> = tool
            .parameters
            .iter()
            .filter(|param| param.required)
            .map(|param| param.name.as_str())
            .collect();

        json!({
            "name": tool.name,
            "description": tool.description,
            "risk_level": tool.risk_level.as_str(),
            "input_schema": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        })
    }

    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<Value> {
        spec.all().map(|tool| self.tool_to_schema(tool)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolkits_domain::github::GitHubOperation;
    use toolkits_domain::sharepoint::sharepoint_tool_spec;

    #[test]
    fn test_tool_to_schema() {
        let schema = JsonSchemaToolConverter.tool_to_schema(&GitHubOperation::CreateFile.definition());

        assert_eq!(schema["name"], "create_file");
        assert_eq!(schema["risk_level"], "high");
        assert_eq!(schema["input_schema"]["type"], "object");
        assert_eq!(
            schema["input_schema"]["properties"]["file_path"]["type"],
            "string"
        );
        assert_eq!(
            schema["input_schema"]["required"],
            json!(["file_path", "file_contents"])
        );
    }

    #[test]
    fn test_optional_integer_parameter() {
        let schema = JsonSchemaToolConverter.tool_to_schema(&GitHubOperation::GetIssue.definition());
        assert_eq!(
            schema["input_schema"]["properties"]["issue_number"]["type"],
            "integer"
        );
        assert_eq!(schema["input_schema"]["required"], json!([]));
    }

    #[test]
    fn test_all_tools_keep_table_order() {
        let tools = JsonSchemaToolConverter.all_tools_schema(&sharepoint_tool_spec());
        let names: Vec<&str> = tools.iter().filter_map(|t| t["name"].as_str()).collect();
        assert_eq!(
            names,
            vec!["read_list", "get_all_files", "get_all_files_in_folder", "read_document"]
        );
    }
}
