//! Default path helpers.
//! Config lookup order: `--config` flag, then `DIRCULESE_CONFIG`, then `$HOME/.dirculese.json`.

use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "DIRCULESE_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = ".dirculese.json";
pub const DEFAULT_LOG_FILE: &str = "dirculese.log";

/// Where the config path came from; only the implicit default gets a template written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Flag,
    Env,
    Default,
}

pub fn user_home() -> Result<PathBuf> {
    dirs::home_dir().filter(|h| !h.as_os_str().is_empty()).ok_or_else(|| {
        anyhow!(
            "can't find your home directory (try using the --config flag with the full path to your config file)"
        )
    })
}

/// Config path from the environment override or the home directory.
pub fn default_config_path() -> Result<PathBuf> {
    if let Some(p) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(p));
    }
    Ok(user_home()?.join(DEFAULT_CONFIG_FILE))
}

/// Resolve the config path honoring an explicit flag first.
pub fn resolve_config_path(flag: Option<&Path>) -> Result<(PathBuf, ConfigSource)> {
    if let Some(p) = flag {
        return Ok((p.to_path_buf(), ConfigSource::Flag));
    }
    let env_set = std::env::var_os(CONFIG_ENV).is_some_and(|p| !p.is_empty());
    let path = default_config_path()?;
    let source = if env_set { ConfigSource::Env } else { ConfigSource::Default };
    Ok((path, source))
}

/// `$HOME/dirculese.log`.
pub fn default_log_path() -> Result<PathBuf> {
    Ok(user_home()?.join(DEFAULT_LOG_FILE))
}
