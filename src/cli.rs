//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for postdeck using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive post browser (default)
//! - **list**: Print one page of posts and exit
//! - **config**: Show or change settings
//! - **completions**: Generate shell completion scripts
//!
//! Global flags (`--endpoint`, `--page-size`, `--debounce-ms`, `--keep-stale`)
//! override the config file for a single run.
//!
//! # Examples
//!
//! ```
//! use postdeck::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["postdeck", "list", "--search", "love", "--tags", "history,crime"]);
//! match cli.get_command() {
//!     Commands::List { query, .. } => assert_eq!(query.tags, vec!["history", "crime"]),
//!     _ => unreachable!(),
//! }
//! ```

use crate::config::PostdeckConfig;
use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

/// Initial view of a `browse` or `list` run
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryArgs {
    /// Search text sent to the endpoint
    #[arg(short = 's', long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Only show posts carrying all of these tags (comma separated or repeated)
    #[arg(short = 't', long = "tags", value_name = "TAG", value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Page to open, starting at 1
    #[arg(short = 'p', long = "page", value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "postdeck")]
#[command(about = "Browse a searchable, tag-filterable post feed", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Search endpoint (overrides config)
    #[arg(long = "endpoint", value_name = "URL", global = true)]
    pub endpoint: Option<String>,

    /// Posts per page (overrides config)
    #[arg(long = "page-size", value_name = "N", global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Search debounce in milliseconds (overrides config)
    #[arg(long = "debounce-ms", value_name = "MS", global = true)]
    pub debounce_ms: Option<u64>,

    /// Apply every response, even one older than what is shown
    #[arg(long = "keep-stale", global = true)]
    pub keep_stale: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive browser (default)
    #[command(visible_alias = "b")]
    Browse {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Print one page of posts and exit
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        query: QueryArgs,

        /// Print the posts as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Print one setting
    Get {
        /// Setting name
        key: String,
    },
    /// Change one setting
    Set {
        /// Setting as key=value (e.g. page_size=20)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },
    /// Interactively write a config file
    Init,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            query: QueryArgs::default(),
        })
    }

    /// Apply command-line overrides on top of loaded settings
    pub fn apply_overrides(&self, config: &mut PostdeckConfig) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.debounce_ms = debounce_ms;
        }
        if self.keep_stale {
            config.discard_stale_responses = false;
        }
        if self.quiet {
            config.quiet = true;
        }
        match self.verbose {
            0 => {}
            1 => config.log_level = Some("debug".to_string()),
            _ => config.log_level = Some("trace".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_browse() {
        let cli = Cli::try_parse_from(["postdeck"]).unwrap();
        assert_eq!(
            cli.get_command(),
            Commands::Browse {
                query: QueryArgs::default()
            }
        );
    }

    #[test]
    fn test_parse_browse_with_query() {
        let cli =
            Cli::try_parse_from(["postdeck", "b", "-s", "love", "-t", "history", "-t", "crime", "-p", "3"])
                .unwrap();
        let Commands::Browse { query } = cli.get_command() else {
            panic!("Expected Browse command");
        };
        assert_eq!(query.search.as_deref(), Some("love"));
        assert_eq!(query.tags, vec!["history", "crime"]);
        assert_eq!(query.page, Some(3));
    }

    #[test]
    fn test_parse_list_json_with_comma_tags() {
        let cli = Cli::try_parse_from(["postdeck", "list", "--tags", "a,b", "--json"]).unwrap();
        let Commands::List { query, json } = cli.get_command() else {
            panic!("Expected List command");
        };
        assert!(json);
        assert_eq!(query.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_page_must_be_positive() {
        assert!(Cli::try_parse_from(["postdeck", "list", "--page", "0"]).is_err());
        assert!(Cli::try_parse_from(["postdeck", "--page-size", "0"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["postdeck", "list", "-q", "-vv", "--page-size", "20"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.page_size, Some(20));
    }

    #[test]
    fn test_parse_config_set() {
        let cli = Cli::try_parse_from(["postdeck", "config", "set", "page_size=20"]).unwrap();
        assert_eq!(
            cli.get_command(),
            Commands::Config {
                command: ConfigCommands::Set {
                    setting: "page_size=20".into()
                }
            }
        );
    }

    #[test]
    fn test_parse_completions() {
        let cli = Cli::try_parse_from(["postdeck", "completions", "zsh"]).unwrap();
        assert_eq!(cli.get_command(), Commands::Completions { shell: Shell::Zsh });
        assert!(Cli::try_parse_from(["postdeck", "completions", "tcsh"]).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let cli = Cli::try_parse_from([
            "postdeck",
            "--endpoint",
            "http://localhost:9000/search",
            "--debounce-ms",
            "100",
            "--keep-stale",
            "-v",
        ])
        .unwrap();
        let mut config = PostdeckConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.endpoint, "http://localhost:9000/search");
        assert_eq!(config.debounce_ms, 100);
        assert!(!config.discard_stale_responses);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.page_size, PostdeckConfig::default().page_size);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
