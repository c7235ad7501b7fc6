//! TOML configuration discovery for the CLI.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use lumo::{LumoError, config::AppConfig};

/// Problems with the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for LumoError {
    fn from(err: ConfigError) -> Self {
        LumoError::Config(err.to_string())
    }
}

/// Locate and load the layout configuration.
///
/// Looks in order at `explicit_path`, `lumo/config.toml` under the working
/// directory, and `config.toml` in the platform config directory (for
/// example `~/.config/lumo/` on Linux). The first file found wins. Without
/// any file the defaults are used.
///
/// # Errors
///
/// Returns [`LumoError::Config`] when `explicit_path` does not exist, or when
/// the chosen file is not valid TOML or holds invalid values.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, LumoError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("lumo/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    match ProjectDirs::from("com", "lumo", "lumo") {
        Some(dirs) => {
            let system_config = dirs.config_dir().join("config.toml");
            if system_config.exists() {
                info!(
                    path = system_config.display().to_string();
                    "Loading configuration from system path"
                );
                return load_config_file(system_config);
            }
            debug!(
                path = system_config.display().to_string();
                "System configuration file not found"
            );
        }
        None => debug!("Could not determine platform-specific config directory"),
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and validate configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, LumoError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    config
        .layout()
        .validate()
        .map_err(ConfigError::Validation)?;

    debug!(layout:? = config.layout(); "Configuration loaded");
    Ok(config)
}
