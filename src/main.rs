//! Selectr CLI application entry point
//!
//! Browses a resource hierarchy interactively and prints the resolved
//! selection. The stored configuration supplies the server connection;
//! command-line flags override it for a single run.
//!
//! # Usage
//!
//! ```bash
//! # Pick an item (default mode)
//! selectr
//!
//! # Pick the large-image file of an item, print the model as JSON
//! selectr --mode image --json
//!
//! # Declare a new output file under a task folder
//! selectr --mode new-file --channel output --task-folder 5f1a...
//!
//! # Show configuration
//! selectr config show
//! ```
//!
//! # Exit Codes
//!
//! - `0`: selection saved
//! - `1`: selection cancelled
//! - `2`: error

use colored::Colorize;
use selectr::{
    SelectrError,
    cli::{Cli, Commands, ConfigCommands},
    client::{GirderClient, HierarchySource},
    config::{self, SelectrConfig},
    model::{HierarchyNode, ResourceKind, SelectionModel},
    widget::{BrowserOutcome, SelectorSettings, SelectorWidget, TerminalBrowser, TerminalSurface},
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, SelectrError>;

/// Initialise stderr logging; `RUST_LOG` wins over the configured level
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the stored configuration, running setup on first interactive use
fn load_config(cli: &Cli) -> Result<SelectrConfig> {
    match SelectrConfig::load()? {
        Some(config) => Ok(config),
        None if cli.command.is_none() && !cli.quiet => Ok(config::first_time_setup()?),
        None => Ok(SelectrConfig::default()),
    }
}

fn handle_config_command(command: &ConfigCommands, mut config: SelectrConfig) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| ::config::ConfigError::Message(format!("Failed to serialize config: {e}")))?;
            print!("{rendered}");
        }
        ConfigCommands::Path => {
            println!("{}", SelectrConfig::config_path()?.display());
        }
        ConfigCommands::SetApiUrl { url } => {
            config.set_api_url(url.clone())?;
            println!("{} API URL set to {url}", "✓".green());
        }
        ConfigCommands::SetToken { token } => {
            config.set_token(token.clone())?;
            if config.token.is_some() {
                println!("{} Token stored", "✓".green());
            } else {
                println!("{} Token cleared", "✓".green());
            }
        }
    }
    Ok(())
}

async fn lookup_folder(client: &GirderClient, id: Option<&str>) -> Result<Option<HierarchyNode>> {
    match id {
        Some(id) => Ok(Some(client.node(ResourceKind::Folder, id).await?)),
        None => Ok(None),
    }
}

fn print_model(model: &SelectionModel, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(model)?);
        return Ok(());
    }

    let mut segments = model.path.clone().unwrap_or_default();
    if let Some(value) = &model.value {
        segments.push(value.name().to_string());
    }
    println!("{}", segments.join("/"));
    Ok(())
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let stored = load_config(&cli)?;
    init_logging(&stored.log_level);

    if let Some(Commands::Config { command }) = &cli.command {
        handle_config_command(command, stored)?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = cli.apply_overrides(stored);
    let client = GirderClient::new(config.api_url.clone(), config.token.clone())?;

    let settings = SelectorSettings {
        model: Some(SelectionModel::new(cli.channel, cli.mode)),
        task_folder: lookup_folder(&client, config.task_folder.as_deref()).await?,
        root_path: lookup_folder(&client, config.root_folder.as_deref()).await?,
    };

    let surface = TerminalSurface::new(cli.quiet);
    let mut widget = SelectorWidget::new(settings, client.clone(), surface).await?;
    let mut browser = TerminalBrowser::new(&client, config.page_limit);

    match browser.run(&mut widget).await? {
        BrowserOutcome::Saved(model) => {
            print_model(&model, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        BrowserOutcome::Cancelled => {
            if !cli.quiet {
                eprintln!("{}", "Selection cancelled".dimmed());
            }
            Ok(ExitCode::from(1))
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            ExitCode::from(2)
        }
    }
}
