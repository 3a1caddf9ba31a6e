//! Presentation layer for agent-toolkits
//!
//! This crate contains CLI definitions, argument-to-call conversion
//! and output formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, ListFormat};
pub use cli::invocation::{InvocationError, build_call};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{OperationEntry, OutputFormatter};
