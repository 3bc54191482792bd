//! Interactive configuration wizard
//!
//! Backs `postdeck config init`: prompts for the handful of settings most
//! users change and writes them to the config file.

use super::PostdeckConfig;
use crate::ui::OutputWriter;
use config::ConfigError;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::path::Path;

/// Raw answers to the wizard prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupAnswers {
    pub endpoint: String,
    pub page_size: String,
    pub debounce_ms: String,
    pub discard_stale_responses: bool,
}

fn read_error(e: dialoguer::Error) -> ConfigError {
    ConfigError::Message(format!("Failed to read input: {e}"))
}

fn prompt(theme: &ColorfulTheme, label: &str, default: String) -> Result<String, ConfigError> {
    Input::with_theme(theme)
        .with_prompt(label)
        .default(default)
        .interact_text()
        .map_err(read_error)
}

/// Ask for each setting, offering the values of `base` as defaults
fn prompt_answers(base: &PostdeckConfig) -> Result<SetupAnswers, ConfigError> {
    let theme = ColorfulTheme::default();
    Ok(SetupAnswers {
        endpoint: prompt(&theme, "Search endpoint", base.endpoint.clone())?,
        page_size: prompt(&theme, "Posts per page", base.page_size.to_string())?,
        debounce_ms: prompt(&theme, "Search debounce (ms)", base.debounce_ms.to_string())?,
        discard_stale_responses: Confirm::with_theme(&theme)
            .with_prompt("Ignore responses that arrive out of order?")
            .default(base.discard_stale_responses)
            .interact()
            .map_err(read_error)?,
    })
}

/// Validate `answers` on top of `base` and write the result to `path`
///
/// Every answer goes through [`PostdeckConfig::set`], so a bad answer
/// returns an error before anything is written.
///
/// # Errors
///
/// Returns `ConfigError` if an answer is not valid for its setting or the
/// file cannot be written.
pub fn apply_answers(
    base: &PostdeckConfig,
    answers: &SetupAnswers,
    path: &Path,
) -> Result<PostdeckConfig, ConfigError> {
    let mut config = base.clone();
    config.set("endpoint", &answers.endpoint)?;
    config.set("page_size", &answers.page_size)?;
    config.set("debounce_ms", &answers.debounce_ms)?;
    config.discard_stale_responses = answers.discard_stale_responses;
    config.save_to(path)?;
    Ok(config)
}

/// Prompt for endpoint, page size, debounce delay and stale handling, then
/// save to `path`
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - User input cannot be read
/// - An answer is not a valid value for its setting
/// - The configuration cannot be saved
pub fn interactive_init(
    base: &PostdeckConfig,
    path: &Path,
    out: &dyn OutputWriter,
) -> Result<PostdeckConfig, ConfigError> {
    out.info("Let's configure postdeck.");
    let answers = prompt_answers(base)?;
    let config = apply_answers(base, &answers, path)?;
    log::info!("event=config_init module=config path={}", path.display());
    out.success(&format!("Configuration saved to {}", path.display()));
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn answers(page_size: &str) -> SetupAnswers {
        SetupAnswers {
            endpoint: "http://localhost:9000/posts/search".into(),
            page_size: page_size.into(),
            debounce_ms: "250".into(),
            discard_stale_responses: false,
        }
    }

    #[test]
    fn test_apply_answers_saves_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("postdeck").join("config.toml");
        let base = PostdeckConfig {
            quiet: true,
            ..PostdeckConfig::default()
        };

        let config = apply_answers(&base, &answers("25"), &path).unwrap();

        assert_eq!(config.page_size, 25);
        assert_eq!(config.debounce_ms, 250);
        assert!(!config.discard_stale_responses);
        assert!(config.quiet);
        assert_eq!(PostdeckConfig::load_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_answer_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let err = apply_answers(&PostdeckConfig::default(), &answers("0"), &path).unwrap_err();

        assert!(err.to_string().contains("page_size"));
        assert!(!path.exists());
    }
}
