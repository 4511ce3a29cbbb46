//! Core library for `dirculese`.
//!
//! A managed directory carries an ordered list of rules. Each rule matches the
//! directory's immediate files by extension, prefix delimiter or suffix
//! delimiter, then moves them into a target directory (numbering the name when
//! it is already taken) or deletes them.

pub mod cli;
pub mod config;
pub mod errors;
pub mod organize;
pub mod output;
pub mod platform;
pub mod shutdown;

pub use config::{
    default_config_path, default_log_path, load_config, sample_config, Config, LogLevel,
};
pub use errors::DirculeseError;
pub use organize::{
    apply_rule, match_name, run_rules, Location, ManagedDirectory, MatchResult, Outcome, Rule,
    RuleKind,
};
pub use platform::path_has_symlink_ancestor;
