use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::{ResponderError, Result};

pub const CONFIG_FILE_NAME: &str = "cgi-echo.json";
pub const CONFIG_ENV_VAR: &str = "CGI_ECHO_CONFIG";

pub const DEFAULT_BODY_PREVIEW_LIMIT: usize = 50;
pub const DEFAULT_MESSAGE: &str = "Hello from Python!";
pub const DEFAULT_SERVER_NAME: &str = "Caffeine-Test-Suite";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ResponderConfig {
    pub body_preview_limit: usize,
    pub message: String,
    pub server_name: String,
    pub log_level: String,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            body_preview_limit: DEFAULT_BODY_PREVIEW_LIMIT,
            message: DEFAULT_MESSAGE.to_string(),
            server_name: DEFAULT_SERVER_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ResponderConfig,
    pub path: PathBuf,
}

/// Loads `cgi-echo.json` from `target`, which may name the file itself or the
/// directory holding it. A missing file is not an error.
pub fn load_config(target: &Path) -> Result<Option<LoadedConfig>> {
    let file_path = if target.is_dir() {
        target.join(CONFIG_FILE_NAME)
    } else {
        target.to_path_buf()
    };

    if !file_path.exists() {
        return Ok(None);
    }

    let contents =
        fs::read_to_string(&file_path).map_err(|err| ResponderError::config(&file_path, err))?;
    let config: ResponderConfig =
        serde_json::from_str(&contents).map_err(|err| ResponderError::config(&file_path, err))?;

    Ok(Some(LoadedConfig {
        config,
        path: file_path,
    }))
}

/// Resolves the config location from `override_path` (normally
/// `$CGI_ECHO_CONFIG`) or falls back to `cwd`, then loads it or returns the
/// defaults.
pub fn resolve_config(override_path: Option<&str>, cwd: &Path) -> Result<ResponderConfig> {
    let target = match override_path.filter(|value| !value.trim().is_empty()) {
        Some(value) => {
            let candidate = Path::new(value);
            if candidate.is_absolute() {
                candidate.to_path_buf()
            } else {
                cwd.join(candidate)
            }
        }
        None => cwd.to_path_buf(),
    };

    Ok(load_config(&target)?
        .map(|loaded| loaded.config)
        .unwrap_or_default())
}
