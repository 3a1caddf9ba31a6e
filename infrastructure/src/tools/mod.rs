//! Tool registry and schema conversion
//!
//! Adapters (the GitHub and SharePoint toolkits) are aggregated by the
//! [`ToolRegistry`], which routes calls by operation name. The
//! [`JsonSchemaToolConverter`] renders the exposed operations as JSON Schema
//! for agent frameworks.

mod registry;
mod schema;

pub use registry::{RegisteredOperation, RegistryStats, ToolRegistry};
pub use schema::JsonSchemaToolConverter;
