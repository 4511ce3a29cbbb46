//! Rule application: one rule against the current contents of its source directory.
//!
//! Entries are handled one at a time in listing order. A config, path or
//! filesystem failure aborts the rule immediately; actions already taken for
//! earlier entries stay done. Running out of collision candidates only skips
//! the affected file.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

use crate::errors::DirculeseError;
use crate::shutdown;

use super::collision::{self, Resolution};
use super::location::Location;
use super::matcher::{match_name, MatchResult, RuleKind};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Disposition {
    Move { target: Location },
    Delete,
}

/// A configured rule. Built once per configuration load and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    source: Location,
    disposition: Disposition,
    kind: RuleKind,
    criteria: Vec<String>,
}

impl Rule {
    /// Matching files are moved into `target` (or a subdirectory of it for prefix/suffix rules).
    pub fn moving(source: Location, target: Location, kind: RuleKind, criteria: Vec<String>) -> Self {
        Self {
            source,
            disposition: Disposition::Move { target },
            kind,
            criteria,
        }
    }

    /// Matching files are removed; no target is ever touched.
    pub fn deleting(source: Location, kind: RuleKind, criteria: Vec<String>) -> Self {
        Self {
            source,
            disposition: Disposition::Delete,
            kind,
            criteria,
        }
    }

    pub fn source(&self) -> &Location {
        &self.source
    }

    pub fn target(&self) -> Option<&Location> {
        match &self.disposition {
            Disposition::Move { target } => Some(target),
            Disposition::Delete => None,
        }
    }

    pub fn deletes(&self) -> bool {
        self.disposition == Disposition::Delete
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Every numbered alternative name in the destination was taken.
    TooManyCollisions { dest_dir: PathBuf },
    /// The extracted token would leave the target directory ("..").
    InvalidSubdirectory(String),
}

/// What happened to one matching file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Deleted {
        file: PathBuf,
    },
    Moved {
        from: PathBuf,
        to: PathBuf,
        renamed: bool,
    },
    Skipped {
        file: PathBuf,
        reason: SkipReason,
    },
}

fn name_of(p: &Path) -> String {
    p.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn parent_of(p: &Path) -> String {
    p.parent().map(|d| d.display().to_string()).unwrap_or_default()
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Deleted { file } => write!(
                f,
                "Deleted the file {} in the path {}.",
                name_of(file),
                parent_of(file)
            ),
            Outcome::Moved { from, to, renamed: false } => write!(
                f,
                "Moved the file {} from the path {} to {}.",
                name_of(from),
                parent_of(from),
                parent_of(to)
            ),
            Outcome::Moved { from, to, renamed: true } => write!(
                f,
                "Moved the file {} from the path {} to {} (renamed to {}) because a file with the same name already exists there.",
                name_of(from),
                parent_of(from),
                parent_of(to),
                name_of(to)
            ),
            Outcome::Skipped { file, reason: SkipReason::TooManyCollisions { dest_dir } } => write!(
                f,
                "Didn't move the file {} from the path {} to {} because too many files with the same name already exist there.",
                name_of(file),
                parent_of(file),
                dest_dir.display()
            ),
            Outcome::Skipped { file, reason: SkipReason::InvalidSubdirectory(token) } => write!(
                f,
                "Didn't move the file {} from the path {} because '{}' is not a usable subdirectory name.",
                name_of(file),
                parent_of(file),
                token
            ),
        }
    }
}

impl Outcome {
    fn log(&self) {
        match self {
            Outcome::Deleted { file } => info!(file = %file.display(), "{}", self),
            Outcome::Moved { from, to, renamed } => {
                info!(source = %from.display(), dest = %to.display(), renamed, "{}", self)
            }
            Outcome::Skipped { file, .. } => warn!(file = %file.display(), "{}", self),
        }
    }
}

/// Destination directory for a delimited match. An empty or "." token names the
/// target itself; ".." is refused.
fn subdirectory_of(target: &Path, token: &str) -> Option<PathBuf> {
    match token {
        ".." => None,
        "" | "." => Some(target.to_path_buf()),
        _ => Some(target.join(token)),
    }
}

fn delete_file(src: &Path) -> Result<Outcome, DirculeseError> {
    fs::remove_file(src).map_err(DirculeseError::filesystem("remove file", src))?;
    Ok(Outcome::Deleted {
        file: src.to_path_buf(),
    })
}

fn move_into(src: &Path, dest_dir: &Path, name: &str) -> Result<Outcome, DirculeseError> {
    let desired = dest_dir.join(name);
    let (to, renamed) = match collision::resolve(&desired) {
        Resolution::Free(p) => (p, false),
        Resolution::Renamed(p) => (p, true),
        Resolution::Exhausted => {
            return Ok(Outcome::Skipped {
                file: src.to_path_buf(),
                reason: SkipReason::TooManyCollisions {
                    dest_dir: dest_dir.to_path_buf(),
                },
            });
        }
    };
    fs::rename(src, &to).map_err(DirculeseError::filesystem("move file", src))?;
    Ok(Outcome::Moved {
        from: src.to_path_buf(),
        to,
        renamed,
    })
}

/// Apply `rule` to the immediate contents of its source directory.
///
/// Returns one outcome per matching regular file, in the order they were handled.
pub fn apply_rule(rule: &Rule) -> Result<Vec<Outcome>, DirculeseError> {
    rule.kind.ensure_criteria(&rule.criteria)?;

    let target = rule.target();
    if let Some(t) = target {
        t.check_path()?;
    }

    let entries = rule.source.contents()?;
    debug!(
        source = %rule.source.path().display(),
        handler = %rule.kind,
        entries = entries.len(),
        delete = rule.deletes(),
        "applying rule"
    );

    let mut outcomes = Vec::new();
    for entry in entries {
        if shutdown::is_requested() {
            return Err(DirculeseError::Interrupted);
        }

        let src = entry.path();
        match entry.file_type() {
            Ok(ft) if ft.is_file() => {}
            Ok(_) => {
                trace!(path = %src.display(), "not a regular file; skipping");
                continue;
            }
            Err(e) => {
                debug!(path = %src.display(), error = %e, "entry vanished before it could be inspected");
                continue;
            }
        }

        let os_name = entry.file_name();
        let Some(name) = os_name.to_str() else {
            warn!(path = %src.display(), "file name is not valid UTF-8; skipping");
            continue;
        };

        let outcome = match (match_name(rule.kind, &rule.criteria, name)?, target) {
            (MatchResult::NoMatch, _) => continue,
            (_, None) => delete_file(&src)?,
            (MatchResult::Matched, Some(t)) => move_into(&src, t.path(), name)?,
            (MatchResult::Delimited { subdirectory }, Some(t)) => {
                match subdirectory_of(t.path(), &subdirectory) {
                    Some(dest_dir) => {
                        fs::create_dir_all(&dest_dir)
                            .map_err(DirculeseError::filesystem("create directory", &dest_dir))?;
                        move_into(&src, &dest_dir, name)?
                    }
                    None => Outcome::Skipped {
                        file: src,
                        reason: SkipReason::InvalidSubdirectory(subdirectory),
                    },
                }
            }
        };

        outcome.log();
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
