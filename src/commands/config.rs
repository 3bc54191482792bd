//! Config command - inspect and change settings

use crate::{
    PostdeckError,
    cli::ConfigCommands,
    config::{PostdeckConfig, interactive_init},
    ui::OutputWriter,
};
use std::path::Path;

type Result<T> = std::result::Result<T, PostdeckError>;

/// Execute a config subcommand
///
/// `effective` is the configuration after environment and flag overrides;
/// `show` and `get` report it. `set` and `init` start from what is stored in
/// `path` so overrides are never written back.
///
/// # Errors
/// Returns an error if the key or value is invalid, or the file cannot be
/// read or written.
pub fn execute(
    effective: &PostdeckConfig,
    path: &Path,
    command: &ConfigCommands,
    out: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let text = toml::to_string_pretty(effective)
                .map_err(|e| PostdeckError::InvalidInput(format!("Failed to serialize config: {e}")))?;
            out.write(text.trim_end());
        }
        ConfigCommands::Path => out.write(&path.display().to_string()),
        ConfigCommands::Get { key } => out.write(&effective.get(key.trim())?),
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                PostdeckError::InvalidInput(
                    "Invalid format. Use: postdeck config set key=value".into(),
                )
            })?;
            let key = key.trim();

            let mut stored = PostdeckConfig::load_file(path)?;
            stored.set(key, value)?;
            stored.save_to(path)?;

            log::info!("event=config_set module=commands key={key}");
            out.success(&format!("Set {key} = {}", stored.get(key)?));
        }
        ConfigCommands::Init => {
            let stored = PostdeckConfig::load_file(path)?;
            interactive_init(&stored, path, out)?;
        }
    }
    Ok(())
}
