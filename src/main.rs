//! Postdeck CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! postdeck
//! postdeck browse --search love --tags history,crime
//!
//! # Print one page and exit
//! postdeck list --page 2 --page-size 20
//! postdeck -q list --tags fiction --json
//!
//! # Settings
//! postdeck config show
//! postdeck config set debounce_ms=300
//!
//! # Shell completions
//! postdeck completions zsh > _postdeck
//! ```
//!
//! # Configuration
//!
//! Settings are read from the user's config directory
//! (`~/.config/postdeck/config.toml` on Linux), then `POSTDECK_*` environment
//! variables, then command-line flags. Logs are written to
//! `<data dir>/postdeck/logs`.

use clap::CommandFactory;
use postdeck::{
    PostdeckError,
    api::HttpPostSource,
    cli::{Cli, Commands},
    commands, completions,
    config::PostdeckConfig,
    logging,
    ui::{OutputWriter, StdoutWriter},
};
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

type Result<T> = std::result::Result<T, PostdeckError>;

/// Start file logging; failures are reported but do not stop the program
fn init_logging(config: &PostdeckConfig, out: &dyn OutputWriter) {
    let level = config
        .log_level
        .as_deref()
        .unwrap_or(logging::default_log_level());
    let result = logging::default_log_dir().and_then(|dir| logging::init_logging(level, &dir));
    if let Err(e) = result {
        out.warning(&format!("logging disabled: {e}"));
    }
}

fn run(cli: &Cli, out: &StdoutWriter) -> Result<()> {
    let command = cli.get_command();

    if let Commands::Completions { shell } = &command {
        completions::generate_static(*shell, &mut Cli::command(), &mut io::stdout());
        return Ok(());
    }

    let config_path = PostdeckConfig::config_path()?;
    let mut config = PostdeckConfig::load_from(&config_path)?;
    cli.apply_overrides(&mut config);

    let out = out.quiet(config.quiet);
    init_logging(&config, &out);

    match &command {
        Commands::Browse { query } => commands::browse(&config, query),
        Commands::List { query, json } => {
            let source = HttpPostSource::with_timeout(&config.endpoint, config.timeout())?;
            commands::list(Arc::new(source), &config, query, *json, &out)
        }
        Commands::Config { command } => commands::config(&config, &config_path, command, &out),
        Commands::Completions { .. } => Ok(()),
    }
}

/// Main entry point for the postdeck application
///
/// Parses command-line arguments, loads configuration and dispatches to the
/// appropriate command handler. Errors are printed to stderr and turn into a
/// non-zero exit status.
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let out = StdoutWriter::new().quiet(cli.quiet);

    match run(&cli, &out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("event=command_failed module=main error={e}");
            out.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
