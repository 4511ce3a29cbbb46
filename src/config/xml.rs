//! XML configuration support (quick_xml + serde), selected by a `.xml` file extension.
//!
//! ```xml
//! <config>
//!   <log_level>normal</log_level>
//!   <directory>
//!     <path>/home/me/Downloads</path>
//!     <rule>
//!       <target>/home/me/Pictures</target>
//!       <handler>ExtensionHandler</handler>
//!       <extension>png</extension>
//!       <extension>jpg</extension>
//!     </rule>
//!   </directory>
//! </config>
//! ```
//!
//! Repeated elements (`directory`, `rule`, `extension`, ...) must be listed
//! contiguously. Unknown elements are rejected.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::types::{Config, DirectoryConfig, LogLevel, RuleConfig};

#[derive(Debug, Deserialize)]
#[serde(rename = "config", deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "directory", default)]
    directories: Vec<XmlDirectory>,
    log_level: Option<String>,
    log_file: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct XmlDirectory {
    path: String,
    #[serde(rename = "rule", default)]
    rules: Vec<XmlRule>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct XmlRule {
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    delete: Option<bool>,
    handler: String,
    #[serde(rename = "extension", default)]
    extensions: Vec<String>,
    #[serde(rename = "prefix_delimiter", default)]
    prefix_delimiters: Vec<String>,
    #[serde(rename = "suffix_delimiter", default)]
    suffix_delimiters: Vec<String>,
}

fn trimmed_path(s: &str) -> PathBuf {
    PathBuf::from(s.trim())
}

fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let log_level = parsed
        .log_level
        .as_deref()
        .map(str::parse::<LogLevel>)
        .transpose()
        .map_err(anyhow::Error::msg)?;
    let log_file = parsed
        .log_file
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from);

    let directories = parsed
        .directories
        .into_iter()
        .map(|d| DirectoryConfig {
            path: trimmed_path(&d.path),
            rules: d
                .rules
                .into_iter()
                .map(|r| RuleConfig {
                    target: r.target.as_deref().map(trimmed_path).unwrap_or_default(),
                    delete: r.delete.unwrap_or(false),
                    handler: r.handler.trim().to_string(),
                    extensions: r.extensions,
                    prefix_delimiters: r.prefix_delimiters,
                    suffix_delimiters: r.suffix_delimiters,
                    ..RuleConfig::default()
                })
                .collect(),
        })
        .collect();

    Ok(Config {
        directories,
        log_level,
        log_file,
    })
}

pub fn parse_xml_config(contents: &str) -> Result<Config> {
    let parsed: XmlConfig =
        from_xml_str(contents).context("the XML in your configuration file cannot be parsed")?;
    xml_to_config(parsed)
}

pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    parse_xml_config(&contents).with_context(|| format!("parse config xml '{}'", path.display()))
}
