//! CLI entrypoint for agent-toolkits
//!
//! This is the main binary that wires together all layers using
//! dependency injection: configuration is loaded and resolved, each
//! configured adapter connects to its remote service, and the registry
//! routes `list` / `invoke` to them.

mod logging;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use toolkits_application::{GitHubToolkit, SharePointToolkit, ToolExecutorPort, ToolSchemaPort};
use toolkits_infrastructure::{
    ConfigLoader, DocxTextExtractor, FileConfig, GitHubRestClient, GitHubSettings, HttpSettings,
    JsonSchemaToolConverter, SharePointRestClient, SharePointSettings, ToolRegistry,
};
use toolkits_presentation::{Cli, Command, ConsoleFormatter, ListFormat, OperationEntry, build_call};
use tracing::{info, warn};

/// Exit status when the requested operation is not exposed
const EXIT_UNKNOWN_TOOL: u8 = 2;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = logging::init(cli.verbose, cli.log_dir.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::FAILURE);
    };

    info!("Starting agent-toolkits");

    let mut config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
    .context("Failed to load configuration")?;

    if let Some(branch) = cli.active_branch {
        config.github.active_branch = branch;
    }

    let selection = if cli.tools.is_empty() {
        config.tools.selected.clone()
    } else {
        cli.tools
    };

    let registry = build_registry(&config).await?.with_selection(selection);
    for name in registry.unmatched_selection() {
        warn!("Selected operation `{}` is not offered by any configured adapter", name);
    }
    let stats = registry.stats();
    info!(
        "Registry ready: {} adapters, {} operations",
        stats.total_adapters, stats.total_tools
    );

    match command {
        Command::List { format } => {
            list(&registry, format)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Invoke { tool, args, arg } => invoke(&registry, &tool, args.as_deref(), &arg).await,
    }
}

/// Connect every configured adapter and register it, GitHub first.
async fn build_registry(config: &FileConfig) -> Result<ToolRegistry> {
    let http = HttpSettings::from(&config.http);
    let mut registry = ToolRegistry::new();

    if config.github_enabled() {
        let settings = GitHubSettings::resolve(&config.github)?;
        let client = GitHubRestClient::connect(&settings, &http)
            .await
            .context("Failed to connect the GitHub adapter")?;
        registry = registry.register(GitHubToolkit::new(
            client,
            settings.active_branch,
            settings.base_branch,
        ));
    }

    if config.sharepoint_enabled() {
        let settings = SharePointSettings::resolve(&config.sharepoint)?;
        let client = SharePointRestClient::connect(&settings, &http)
            .await
            .context("Failed to connect the SharePoint adapter")?;
        registry = registry.register(
            SharePointToolkit::new(client, DocxTextExtractor::new()).with_root_folder(settings.root_folder),
        );
    }

    if registry.adapter_ids().is_empty() {
        warn!("No adapters configured; set github.repository or sharepoint.site_url");
    }

    Ok(registry)
}

fn list(registry: &ToolRegistry, format: ListFormat) -> Result<()> {
    let operations = registry.list_operations();
    let entries: Vec<OperationEntry<'_>> = operations
        .iter()
        .map(|op| (op.adapter, op.definition))
        .collect();

    let output = match format {
        ListFormat::Text => ConsoleFormatter::format_operations(&entries),
        ListFormat::Json => ConsoleFormatter::format_operations_json(&entries),
        ListFormat::Schema => {
            let schema = JsonSchemaToolConverter.all_tools_schema(registry.tool_spec());
            serde_json::to_string_pretty(&schema)?
        }
    };
    println!("{}", output);
    Ok(())
}

async fn invoke(registry: &ToolRegistry, tool: &str, args: Option<&str>, pairs: &[String]) -> Result<ExitCode> {
    let adapter = registry.adapter_of(tool);
    if let Some(adapter) = adapter {
        info!(adapter, mutating = registry.is_mutating(tool), "Invoking {}", tool);
    }
    let call = build_call(tool, args, pairs)?;

    let result = registry.execute(&call).await;
    println!("{}", ConsoleFormatter::format_result(&result));

    match result.error() {
        None => Ok(ExitCode::SUCCESS),
        Some(error) => {
            eprintln!("{}", ConsoleFormatter::format_error_banner(error));
            if adapter.is_some() {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::from(EXIT_UNKNOWN_TOOL))
            }
        }
    }
}
