//! Ordered execution of a managed directory's rules.
//! The first failing rule stops the sequence; later rules do not run.

use tracing::{debug, error};

use crate::errors::DirculeseError;

use super::engine::{apply_rule, Outcome, Rule};
use super::location::Location;

/// Run `rules` in order, stopping at (and returning) the first error.
pub fn run_rules(rules: &[Rule]) -> Result<Vec<Outcome>, DirculeseError> {
    let mut outcomes = Vec::new();
    for (index, rule) in rules.iter().enumerate() {
        match apply_rule(rule) {
            Ok(mut done) => {
                debug!(rule = index, handler = %rule.kind(), actions = done.len(), "rule finished");
                outcomes.append(&mut done);
            }
            Err(e) => {
                error!(
                    rule = index,
                    handler = %rule.kind(),
                    code = e.code(),
                    error = %e,
                    skipped_rules = rules.len() - index - 1,
                    "rule failed; remaining rules for this directory were not run"
                );
                return Err(e);
            }
        }
    }
    Ok(outcomes)
}

/// A directory kept organized by an ordered list of rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedDirectory {
    location: Location,
    rules: Vec<Rule>,
}

impl ManagedDirectory {
    pub fn new(location: Location, rules: Vec<Rule>) -> Self {
        Self { location, rules }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn run(&self) -> Result<Vec<Outcome>, DirculeseError> {
        debug!(path = %self.location.path().display(), rules = self.rules.len(), "organizing directory");
        run_rules(&self.rules)
    }
}
