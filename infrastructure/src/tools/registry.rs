//! Tool Registry
//!
//! The [`ToolRegistry`] aggregates tool adapters and implements
//! [`ToolExecutorPort`]. It owns the merged operation table and routes each
//! call to the adapter that registered the operation.
//!
//! # Usage
//!
//! ```ignore
//! use toolkits_infrastructure::tools::ToolRegistry;
//!
//! let registry = ToolRegistry::new()
//!     .with_selection(["read_file", "list_branches_in_repo"])
//!     .register(github_toolkit)
//!     .register(sharepoint_toolkit);
//!
//! let call = ToolCall::new("read_file").with_arg("file_path", "README.md");
//! let result = registry.execute(&call).await;
//! println!("{}", result.render());
//! ```
//!
//! # Conflict Resolution
//!
//! Operation names must be unique across the registry. Adapters are merged
//! in registration order and the first adapter to offer a name keeps it;
//! later duplicates are logged and ignored.
//!
//! # Selection
//!
//! A non-empty selection restricts the exposed operations to the named ones.
//! Unselected operations are neither listed nor executable.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use toolkits_application::ports::tool_executor::ToolExecutorPort;
use toolkits_domain::tool::{
    adapter::ToolAdapter,
    entities::{ToolCall, ToolDefinition, ToolSpec},
    value_objects::{ToolError, ToolResult, UnknownOperation},
};

/// Tool registry that aggregates adapters
pub struct ToolRegistry {
    /// Registered adapters, in registration order
    adapters: Vec<Arc<dyn ToolAdapter>>,
    /// Operation name -> index into `adapters`
    tool_mapping: HashMap<String, usize>,
    /// Merged operation table
    tool_spec: ToolSpec,
    /// Exposed operation names; empty means all
    selection: Vec<String>,
}

/// One exposed operation and the adapter that serves it
#[derive(Debug, Clone, Copy)]
pub struct RegisteredOperation<'a> {
    pub adapter: &'a str,
    pub definition: &'a ToolDefinition,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            adapters: Vec::new(),
            tool_mapping: HashMap::new(),
            tool_spec: ToolSpec::new(),
            selection: Vec::new(),
        }
    }

    /// Register a tool adapter
    pub fn register<A: ToolAdapter + 'static>(self, adapter: A) -> Self {
        self.register_arc(Arc::new(adapter))
    }

    /// Register a tool adapter (Arc version)
    pub fn register_arc(mut self, adapter: Arc<dyn ToolAdapter>) -> Self {
        self.adapters.push(adapter);
        self.rebuild();
        self
    }

    /// Restrict the exposed operations to `names`. An empty selection
    /// exposes everything.
    pub fn with_selection<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection = names.into_iter().map(Into::into).collect();
        self.rebuild();
        self
    }

    fn is_selected(&self, name: &str) -> bool {
        self.selection.is_empty() || self.selection.iter().any(|s| s == name)
    }

    fn rebuild(&mut self) {
        let mut tool_spec = ToolSpec::new();
        let mut tool_mapping = HashMap::new();

        for (index, adapter) in self.adapters.iter().enumerate() {
            for tool in adapter.operations().all() {
                if !self.is_selected(&tool.name) {
                    continue;
                }
                if let Some(&owner) = tool_mapping.get(&tool.name) {
                    let owner: &Arc<dyn ToolAdapter> = &self.adapters[owner];
                    tracing::warn!(
                        tool = %tool.name,
                        adapter = adapter.id(),
                        registered_by = owner.id(),
                        "Operation already registered, ignoring duplicate"
                    );
                    continue;
                }
                tracing::debug!(tool = %tool.name, adapter = adapter.id(), "Registered operation");
                tool_mapping.insert(tool.name.clone(), index);
                tool_spec = tool_spec.register(tool.clone());
            }
        }

        self.tool_spec = tool_spec;
        self.tool_mapping = tool_mapping;
    }

    /// Selected names that no registered adapter offers
    pub fn unmatched_selection(&self) -> Vec<&str> {
        self.selection
            .iter()
            .filter(|name| !self.tool_mapping.contains_key(name.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Get the adapter for a specific operation
    fn adapter_for(&self, tool_name: &str) -> Option<&Arc<dyn ToolAdapter>> {
        let index = *self.tool_mapping.get(tool_name)?;
        self.adapters.get(index)
    }

    /// Exposed operations in deterministic order: adapters in registration
    /// order, each adapter's operations in table order.
    pub fn list_operations(&self) -> Vec<RegisteredOperation<'_>> {
        self.tool_spec
            .all()
            .filter_map(|definition| {
                let adapter = self.adapter_for(&definition.name)?;
                Some(RegisteredOperation {
                    adapter: adapter.id(),
                    definition,
                })
            })
            .collect()
    }

    /// Get a list of registered adapter IDs
    pub fn adapter_ids(&self) -> Vec<&str> {
        self.adapters.iter().map(|a| a.id()).collect()
    }

    /// Get statistics about registered operations
    pub fn stats(&self) -> RegistryStats {
        let mut tools_per_adapter = HashMap::new();
        for &index in self.tool_mapping.values() {
            if let Some(adapter) = self.adapters.get(index) {
                *tools_per_adapter.entry(adapter.id().to_string()).or_insert(0) += 1;
            }
        }

        RegistryStats {
            total_adapters: self.adapters.len(),
            total_tools: self.tool_mapping.len(),
            tools_per_adapter,
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the registry
#[derive(Debug, Clone)]
pub struct RegistryStats {
    pub total_adapters: usize,
    pub total_tools: usize,
    pub tools_per_adapter: HashMap<String, usize>,
}

#[async_trait]
impl ToolExecutorPort for ToolRegistry {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    fn adapter_of(&self, name: &str) -> Option<&str> {
        self.adapter_for(name).map(|adapter| adapter.id())
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        match self.adapter_for(&call.tool_name) {
            Some(adapter) => adapter.execute(call).await,
            None => {
                tracing::warn!(tool = %call.tool_name, "No adapter offers this operation");
                ToolResult::failure(&call.tool_name, UnknownOperation(call.tool_name.clone()))
            }
        }
    }

    fn execute_sync(&self, call: &ToolCall) -> ToolResult {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build();

        match rt {
            Ok(rt) => rt.block_on(self.execute(call)),
            Err(e) => ToolResult::failure(
                &call.tool_name,
                ToolError::execution_failed(format!("Failed to create runtime: {}", e)),
            ),
        }
    }
}
