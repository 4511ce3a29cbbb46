//! Rule matching and relocation.
//!
//! Control flow: [`ManagedDirectory::run`] → [`apply_rule`] → [`match_name`] →
//! [`collision::resolve`] → filesystem.

pub mod collision;
mod engine;
mod location;
pub mod matcher;
mod sequencer;

pub use collision::{Resolution, MAX_COLLISION_ATTEMPTS};
pub use engine::{apply_rule, Outcome, Rule, SkipReason};
pub use location::Location;
pub use matcher::{match_name, MatchResult, RuleKind};
pub use sequencer::{run_rules, ManagedDirectory};
