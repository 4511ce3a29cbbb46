//! Configuration: types, default paths, JSON/XML loading and conversion into rules.

mod build;
pub mod json;
pub mod paths;
pub mod types;
pub mod xml;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

pub use json::{load_config_from_json_path, parse_json_config, sample_config};
pub use paths::{
    default_config_path, default_log_path, resolve_config_path, user_home, ConfigSource,
    CONFIG_ENV, DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILE,
};
pub use types::{Config, DirectoryConfig, LogLevel, RuleConfig};
pub use xml::{load_config_from_xml_path, parse_xml_config};

use crate::platform::{path_has_symlink_ancestor, write_config_secure_new};

/// Load a config file, choosing the parser by extension (`.xml` → XML, anything else → JSON).
pub fn load_config(path: &Path) -> Result<Config> {
    let is_xml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xml"));
    if is_xml {
        load_config_from_xml_path(path)
    } else {
        load_config_from_json_path(path)
    }
}

#[derive(Debug)]
pub enum LoadResult {
    Loaded(Config),
    /// No config existed at the default location; a template was written there.
    CreatedTemplate(PathBuf),
}

/// Load the config at `path`, or write a template when the implicit default is missing.
/// Explicit paths (flag or env) are never created.
pub fn load_or_init(path: &Path, source: ConfigSource) -> Result<LoadResult> {
    if source == ConfigSource::Default && !path.exists() {
        create_template_config(path)?;
        return Ok(LoadResult::CreatedTemplate(path.to_path_buf()));
    }
    load_config(path).map(LoadResult::Loaded)
}

pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        anyhow::bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }
    write_config_secure_new(path, sample_config().as_bytes())
        .with_context(|| format!("write template config '{}'", path.display()))?;
    info!("Created template config at {}", path.display());
    Ok(())
}
