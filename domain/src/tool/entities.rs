//! Tool domain entities

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Risk level of a tool operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Read-only against the remote service (e.g., read_file, get_issues)
    Low,
    /// Mutates remote state (e.g., create_file, create_pull_request)
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::High => "high",
        }
    }

    pub fn is_mutating(&self) -> bool {
        matches!(self, RiskLevel::High)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Definition of a tool that an agent can invoke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "read_file")
    pub name: String,
    /// Human-readable description, written for the calling agent
    pub description: String,
    /// Risk level of this tool
    pub risk_level: RiskLevel,
    /// Parameter specifications, in declaration order
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type hint (e.g., "string", "integer")
    pub param_type: String,
}

/// Compile-time parameter descriptor used by the static operation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub param_type: &'static str,
}

impl ParamSpec {
    pub const fn required(name: &'static str, param_type: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: true,
            param_type,
        }
    }

    pub const fn optional(name: &'static str, param_type: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: false,
            param_type,
        }
    }
}

impl From<&ParamSpec> for ToolParameter {
    fn from(spec: &ParamSpec) -> Self {
        ToolParameter::new(spec.name, spec.description, spec.required).with_type(spec.param_type)
    }
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            risk_level,
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    pub fn with_parameters<'a>(mut self, params: impl IntoIterator<Item = &'a ParamSpec>) -> Self {
        self.parameters.extend(params.into_iter().map(ToolParameter::from));
        self
    }

    pub fn is_mutating(&self) -> bool {
        self.risk_level.is_mutating()
    }

    pub fn parameter(&self, name: &str) -> Option<&ToolParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }
}

/// Ordered set of tool definitions.
///
/// Iteration follows registration order, so listing the same spec twice
/// always yields the same sequence. Names are unique: registering a name
/// that already exists replaces the definition in its original slot.
#[derive(Debug, Clone, Default)]
pub struct ToolSpec {
    tools: Vec<ToolDefinition>,
    index: HashMap<String, usize>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn register(mut self, tool: ToolDefinition) -> Self {
        match self.index.get(&tool.name) {
            Some(&slot) => self.tools[slot] = tool,
            None => {
                self.index.insert(tool.name.clone(), self.tools.len());
                self.tools.push(tool);
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.index.get(name).map(|&slot| &self.tools[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl FromIterator<ToolDefinition> for ToolSpec {
    fn from_iter<I: IntoIterator<Item = ToolDefinition>>(iter: I) -> Self {
        iter.into_iter().fold(ToolSpec::new(), ToolSpec::register)
    }
}

/// Arguments could not be converted into an operation's parameter type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid arguments for `{tool}`: {reason}")]
pub struct ArgumentError {
    pub tool: String,
    pub reason: String,
}

/// A call to a tool with arguments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool
    #[serde(default)]
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: HashMap::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    pub fn with_arguments(mut self, arguments: serde_json::Map<String, serde_json::Value>) -> Self {
        self.arguments.extend(arguments);
        self
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Deserialize all arguments into an operation's parameter type
    pub fn parse_args<T: DeserializeOwned>(&self) -> Result<T, ArgumentError> {
        let object: serde_json::Map<String, serde_json::Value> = self
            .arguments
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        serde_json::from_value(serde_json::Value::Object(object)).map_err(|e| ArgumentError {
            tool: self.tool_name.clone(),
            reason: e.to_string(),
        })
    }
}
