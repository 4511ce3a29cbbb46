//! JSON configuration (the primary format).

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::{Config, DirectoryConfig, RuleConfig};

pub fn parse_json_config(contents: &str) -> Result<Config> {
    serde_json::from_str(contents).context("the JSON in your configuration file cannot be parsed")
}

pub fn load_config_from_json_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    parse_json_config(&contents).with_context(|| format!("parse config '{}'", path.display()))
}

/// A minimal working configuration, used for the template file and error hints.
pub fn sample_config() -> String {
    let sample = Config {
        directories: vec![DirectoryConfig {
            path: "/path/to/a/source/directory/that/you/want/to/keep/organized/with/dirculese/rules"
                .into(),
            rules: vec![RuleConfig {
                target: "/path/to/a/destination/directory/where/items/matching/your/rule/will/be/moved"
                    .into(),
                delete: false,
                handler: "ExtensionHandler".into(),
                extensions: vec!["png".into()],
                ..RuleConfig::default()
            }],
        }],
        ..Config::default()
    };
    // Serializing plain strings, bools and integers cannot fail.
    serde_json::to_string_pretty(&sample).unwrap_or_default()
}
