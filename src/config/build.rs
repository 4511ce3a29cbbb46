//! Turn a parsed [`Config`] into runnable [`ManagedDirectory`] values.
//!
//! Handler names are resolved here so an unknown name fails before anything runs.
//! Empty criteria pass through; they are reported when the rule runs.

use tracing::warn;

use crate::errors::DirculeseError;
use crate::organize::{Location, ManagedDirectory, Rule, RuleKind};

use super::types::{Config, DirectoryConfig, RuleConfig};

impl RuleConfig {
    /// Criteria list for this rule's kind; the other lists are ignored.
    fn criteria_for(&self, kind: RuleKind) -> &[String] {
        match kind {
            RuleKind::Extension => &self.extensions,
            RuleKind::Prefix => &self.prefix_delimiters,
            RuleKind::Suffix => &self.suffix_delimiters,
        }
    }

    fn uses_reserved_filters(&self) -> bool {
        self.size_max != 0 || self.size_min != 0 || self.date_max != 0 || self.date_min != 0
    }

    pub fn to_rule(&self, source: &Location) -> Result<Rule, DirculeseError> {
        let kind: RuleKind = self.handler.parse()?;
        if self.uses_reserved_filters() {
            warn!(
                handler = %kind,
                source = %source.path().display(),
                "size/date filters are not implemented; ignoring SizeMax/SizeMin/DateMax/DateMin"
            );
        }
        let criteria = self.criteria_for(kind).to_vec();
        Ok(if self.delete {
            Rule::deleting(source.clone(), kind, criteria)
        } else {
            Rule::moving(source.clone(), Location::new(&self.target), kind, criteria)
        })
    }
}

impl DirectoryConfig {
    pub fn to_managed(&self) -> Result<ManagedDirectory, DirculeseError> {
        let location = Location::new(&self.path);
        let rules = self
            .rules
            .iter()
            .enumerate()
            .map(|(i, r)| {
                r.to_rule(&location).map_err(|e| {
                    DirculeseError::config(format!(
                        "rule {} of directory '{}': {e}",
                        i + 1,
                        self.path.display()
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ManagedDirectory::new(location, rules))
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), DirculeseError> {
        if self.directories.is_empty() {
            return Err(DirculeseError::config(
                "your configuration file should include at least one directory",
            ));
        }
        Ok(())
    }

    pub fn managed_directories(&self) -> Result<Vec<ManagedDirectory>, DirculeseError> {
        self.validate()?;
        self.directories.iter().map(DirectoryConfig::to_managed).collect()
    }
}
