//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::request::Mode;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => {
            presenter.output(&store.path().to_string_lossy());
            Ok(())
        }
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;
    store.save(&config).await?;

    presenter.success(&format!("{} = {}", key, value));
    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    presenter.output(read_value(&config, key).as_deref().unwrap_or(NOT_SET));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, read_value(&config, key).as_deref().unwrap_or(NOT_SET));
    }

    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

/// Current value of a key as displayed to the user
fn read_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "mode" => config.mode.clone(),
        "codec" => config.codec.clone(),
        "quality" => config.quality.clone(),
        "resolution" => config.resolution.map(|r| r.to_string()),
        "output_dir" => config.output_dir.clone(),
        "yt_dlp_path" => config.yt_dlp_path.clone(),
        "ffmpeg_path" => config.ffmpeg_path.clone(),
        _ => None,
    }
}

/// Validate `value` for `key` and store it
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    let value = value.trim();
    if value.is_empty() {
        return Err(invalid("Value must not be empty".to_string()));
    }

    match key {
        "mode" => {
            let mode = value
                .parse::<Mode>()
                .map_err(|e| invalid(e.to_string()))?;
            config.mode = Some(mode.to_string());
        }
        "codec" => config.codec = Some(value.to_string()),
        "quality" => config.quality = Some(value.to_string()),
        "resolution" => {
            let height = value
                .parse::<u32>()
                .ok()
                .filter(|h| *h > 0)
                .ok_or_else(|| invalid("Value must be a positive integer".to_string()))?;
            config.resolution = Some(height);
        }
        "output_dir" => config.output_dir = Some(value.to_string()),
        "yt_dlp_path" => config.yt_dlp_path = Some(value.to_string()),
        "ffmpeg_path" => config.ffmpeg_path = Some(value.to_string()),
        _ => return Err(invalid("Unknown key".to_string())),
    }

    Ok(())
}
