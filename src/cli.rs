//! Command-line interface definitions and parsing
//!
//! Defines the CLI structure for selectr using the `clap` crate. Running
//! without a subcommand starts an interactive selection; flags override
//! the stored configuration for that run.
//!
//! # Examples
//!
//! ```bash
//! # Pick a file from one of your items
//! selectr --mode file
//!
//! # Choose an output directory under a task folder, print JSON
//! selectr --mode directory --channel output --task-folder 5f1a... --json
//!
//! # Store the server URL
//! selectr config set-api-url https://data.example.org/api/v1
//! ```

use crate::config::SelectrConfig;
use crate::model::{Channel, SelectionMode};
use clap::{Parser, Subcommand};

/// Resolve a selection from a resource hierarchy
#[derive(Parser, Debug)]
#[command(name = "selectr", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// What to select: item, file, image, directory, new-file, new-file-item
    #[arg(short, long, default_value_t = SelectionMode::Item)]
    pub mode: SelectionMode,

    /// Which side of a task the selection feeds: input or output
    #[arg(short, long, default_value_t = Channel::Input)]
    pub channel: Channel,

    /// API root URL (overrides config)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Authentication token (overrides config)
    #[arg(long)]
    pub token: Option<String>,

    /// Folder id to root output selections at (overrides config)
    #[arg(long)]
    pub task_folder: Option<String>,

    /// Folder id to browse from instead of the current user (overrides config)
    #[arg(long)]
    pub root_folder: Option<String>,

    /// Print the saved model as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress informational output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Inspect or change the stored configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Store the API root URL
    SetApiUrl { url: String },
    /// Store the authentication token; omit to clear it
    SetToken { token: Option<String> },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Apply flag overrides on top of the stored configuration
    #[must_use]
    pub fn apply_overrides(&self, mut config: SelectrConfig) -> SelectrConfig {
        if let Some(url) = &self.api_url {
            config.api_url.clone_from(url);
        }
        if self.token.is_some() {
            config.token.clone_from(&self.token);
        }
        if self.task_folder.is_some() {
            config.task_folder.clone_from(&self.task_folder);
        }
        if self.root_folder.is_some() {
            config.root_folder.clone_from(&self.root_folder);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["selectr"]).unwrap();
        assert_eq!(cli.mode, SelectionMode::Item);
        assert_eq!(cli.channel, Channel::Input);
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_mode_and_channel_flags() {
        let cli = Cli::try_parse_from(["selectr", "--mode", "new-file-item", "-c", "output"]).unwrap();
        assert_eq!(cli.mode, SelectionMode::NewFileItem);
        assert_eq!(cli.channel, Channel::Output);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["selectr", "--mode", "folder"]).is_err());
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::try_parse_from(["selectr", "config", "set-api-url", "https://x/api/v1"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommands::SetApiUrl {
                    url: "https://x/api/v1".into()
                }
            })
        );
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let cli = Cli::try_parse_from([
            "selectr",
            "--api-url",
            "https://other/api/v1",
            "--task-folder",
            "t1",
        ])
        .unwrap();
        let config = cli.apply_overrides(SelectrConfig {
            token: Some("keep".into()),
            ..SelectrConfig::default()
        });

        assert_eq!(config.api_url, "https://other/api/v1");
        assert_eq!(config.task_folder.as_deref(), Some("t1"));
        assert_eq!(config.token.as_deref(), Some("keep"));
    }
}
