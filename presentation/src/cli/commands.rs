//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the operation listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Grouped, colored listing
    #[default]
    Text,
    /// Operation descriptors as JSON
    Json,
    /// JSON Schema, as consumed by agent frameworks
    Schema,
}

/// CLI arguments for agent-toolkits
#[derive(Parser, Debug)]
#[command(name = "agent-toolkits")]
#[command(author, version, about = "GitHub and SharePoint operations exposed as agent tools")]
#[command(long_about = r#"
agent-toolkits exposes GitHub repository and SharePoint site operations as a
uniform set of named tools. Each invocation performs exactly one action and
prints a plain result string.

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./toolkits.toml          Project-level config
3. ~/.config/agent-toolkits/config.toml   Global config
Environment variables such as GITHUB_REPOSITORY fill anything left unset.

Example:
  agent-toolkits list
  agent-toolkits invoke get_issues
  agent-toolkits invoke read_file --arg file_path=README.md
  agent-toolkits --tools read_document invoke read_document --args '{"path": "/sites/team/Shared Documents/a.txt"}'
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also write logs to a daily-rotated file in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files (environment still applies)
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Expose only these operations (comma-separated)
    #[arg(long, value_name = "NAMES", value_delimiter = ',', global = true)]
    pub tools: Vec<String>,

    /// Working branch for GitHub operations, overriding configuration
    #[arg(long, value_name = "BRANCH", global = true)]
    pub active_branch: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the exposed operations
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ListFormat,
    },

    /// Invoke one operation and print its result
    Invoke {
        /// Operation name (e.g. read_file, get_all_files)
        tool: String,

        /// Arguments as a JSON object
        #[arg(long, value_name = "JSON")]
        args: Option<String>,

        /// A single string argument; may be repeated and overrides `--args`
        #[arg(long = "arg", value_name = "KEY=VALUE")]
        arg: Vec<String>,
    },
}
