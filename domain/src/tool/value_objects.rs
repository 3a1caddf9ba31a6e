//! Tool domain value objects: immutable result and error types
//!
//! Every invocation produces a [`ToolResult`]. Failures carry a [`ToolError`]
//! whose `code` keeps the failure class machine-readable while `message` holds
//! the sentence shown to the calling agent. [`ToolResult::render`] collapses a
//! result back into the plain-string contract agents consume.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error that occurred during tool execution.
///
/// | Code | Description |
/// |------|-------------|
/// | `NOT_FOUND` | Unknown tool, or a remote resource that does not exist |
/// | `INVALID_ARGUMENT` | Missing or malformed parameters |
/// | `POLICY_REFUSED` | Refused by an adapter policy (protected branch) |
/// | `CONFLICT` | Target already exists / content mismatch |
/// | `UNSUPPORTED` | Request outside what the adapter handles (file type) |
/// | `EXECUTION_FAILED` | Remote call failed (network, permission, server) |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "NOT_FOUND", "POLICY_REFUSED")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ToolError {
    pub const NOT_FOUND: &'static str = "NOT_FOUND";
    pub const INVALID_ARGUMENT: &'static str = "INVALID_ARGUMENT";
    pub const POLICY_REFUSED: &'static str = "POLICY_REFUSED";
    pub const CONFLICT: &'static str = "CONFLICT";
    pub const UNSUPPORTED: &'static str = "UNSUPPORTED";
    pub const EXECUTION_FAILED: &'static str = "EXECUTION_FAILED";

    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(Self::NOT_FOUND, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(Self::INVALID_ARGUMENT, message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new(Self::EXECUTION_FAILED, message)
    }

    pub fn is_not_found(&self) -> bool {
        self.code == Self::NOT_FOUND
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ToolError {}

/// The requested operation name is not part of the adapter's table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl From<UnknownOperation> for ToolError {
    fn from(err: UnknownOperation) -> Self {
        ToolError::not_found(err.to_string())
    }
}

/// Result of a tool execution, carrying output or error information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was executed
    pub tool_name: String,
    /// Whether the execution was successful
    pub success: bool,
    /// Output content (for successful execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Error information (for failed execution)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
    /// Metadata about the execution
    #[serde(default)]
    pub metadata: ToolResultMetadata,
}

/// Structured metadata about tool execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResultMetadata {
    /// Duration of execution in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Number of bytes returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    /// Adapter that handled the call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adapter: Option<String>,
}

impl ToolResult {
    /// Create a successful result
    pub fn success(tool_name: impl Into<String>, output: impl Into<String>) -> Self {
        let output = output.into();
        Self {
            tool_name: tool_name.into(),
            success: true,
            metadata: ToolResultMetadata {
                bytes: Some(output.len()),
                ..Default::default()
            },
            output: Some(output),
            error: None,
        }
    }

    /// Create a failed result
    pub fn failure(tool_name: impl Into<String>, error: impl Into<ToolError>) -> Self {
        Self {
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error.into()),
            metadata: ToolResultMetadata::default(),
        }
    }

    /// Build a result from an operation outcome
    pub fn from_outcome<E: Into<ToolError>>(
        tool_name: impl Into<String>,
        outcome: Result<String, E>,
    ) -> Self {
        match outcome {
            Ok(output) => Self::success(tool_name, output),
            Err(e) => Self::failure(tool_name, e),
        }
    }

    /// Add duration metadata
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.metadata.duration_ms = Some(duration_ms);
        self
    }

    /// Record which adapter produced the result
    pub fn with_adapter(mut self, adapter: impl Into<String>) -> Self {
        self.metadata.adapter = Some(adapter.into());
        self
    }

    /// Check if execution was successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get the output content
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Get the error
    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }

    /// Plain-string form handed back to the agent: the output on success,
    /// the failure sentence otherwise.
    pub fn render(&self) -> String {
        match (&self.output, &self.error) {
            (Some(output), _) => output.clone(),
            (None, Some(error)) => error.message.clone(),
            (None, None) => String::new(),
        }
    }
}
