//! File name matching for the three rule kinds.
//!
//! Pure functions only: nothing here touches the filesystem.
//!
//! - Extension: the text after the last '.' (empty when there is none) must be one
//!   of the criteria. Comparison is case-sensitive and criteria carry no leading dot.
//! - Prefix/Suffix: the base name (extension removed) is split on the first
//!   occurrence of a delimiter. Delimiters are tried in the order given and the
//!   first one that splits wins. Prefix rules keep the text before the delimiter,
//!   suffix rules the text after it; that text names the destination subdirectory.

use std::fmt;
use std::str::FromStr;

use crate::errors::DirculeseError;

/// Matching strategy of a rule; one variant per recognized handler name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Extension,
    Prefix,
    Suffix,
}

impl RuleKind {
    /// Handler name as written in configuration files.
    pub fn handler_name(self) -> &'static str {
        match self {
            RuleKind::Extension => "ExtensionHandler",
            RuleKind::Prefix => "PrefixHandler",
            RuleKind::Suffix => "SuffixHandler",
        }
    }

    fn empty_criteria_message(self) -> &'static str {
        match self {
            RuleKind::Extension => "you need to specify at least one extension",
            RuleKind::Prefix => "you need to specify at least one prefix delimiter",
            RuleKind::Suffix => "you need to specify at least one suffix delimiter",
        }
    }

    /// Fail with a config error when a rule of this kind has nothing to match on.
    pub fn ensure_criteria(self, criteria: &[String]) -> Result<(), DirculeseError> {
        if criteria.is_empty() {
            return Err(DirculeseError::config(self.empty_criteria_message()));
        }
        Ok(())
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.handler_name())
    }
}

impl FromStr for RuleKind {
    type Err = DirculeseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ExtensionHandler" => Ok(RuleKind::Extension),
            "PrefixHandler" => Ok(RuleKind::Prefix),
            "SuffixHandler" => Ok(RuleKind::Suffix),
            other => Err(DirculeseError::config(format!(
                "unrecognized handler '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    NoMatch,
    /// Extension rules carry no destination token.
    Matched,
    /// Prefix/suffix rules: the token naming the destination subdirectory.
    Delimited { subdirectory: String },
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        !matches!(self, MatchResult::NoMatch)
    }
}

/// Split a file name into (base name, extension) at the last '.'.
/// The extension excludes the dot and is empty when the name has none.
pub fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(idx) => (&file_name[..idx], &file_name[idx + 1..]),
        None => (file_name, ""),
    }
}

/// Decide whether `file_name` satisfies a rule of `kind` with the given criteria.
pub fn match_name(
    kind: RuleKind,
    criteria: &[String],
    file_name: &str,
) -> Result<MatchResult, DirculeseError> {
    kind.ensure_criteria(criteria)?;
    let (base, ext) = split_extension(file_name);

    let result = match kind {
        RuleKind::Extension => {
            if criteria.iter().any(|c| c == ext) {
                MatchResult::Matched
            } else {
                MatchResult::NoMatch
            }
        }
        RuleKind::Prefix | RuleKind::Suffix => criteria
            .iter()
            // An empty delimiter cannot split anything meaningfully.
            .filter(|d| !d.is_empty())
            .find_map(|d| base.split_once(d.as_str()))
            .map(|(before, after)| {
                let token = if kind == RuleKind::Prefix { before } else { after };
                MatchResult::Delimited {
                    subdirectory: token.to_string(),
                }
            })
            .unwrap_or(MatchResult::NoMatch),
    };
    Ok(result)
}
