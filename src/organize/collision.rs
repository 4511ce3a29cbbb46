//! Destination collision resolution.
//!
//! Policy:
//! - A free destination is used as-is.
//! - An occupied destination `stem.ext` is retried as `stem0.ext`, `stem1.ext`, ...
//!   in the same directory, up to [`MAX_COLLISION_ATTEMPTS`] candidates.
//! - Running out of candidates is not an error: the caller leaves the file where it is.
//!
//! Notes:
//! - Existence checks and the later rename are not atomic. Another process writing
//!   into the destination between the two can still cause an overwrite or a failed move.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

use super::matcher::split_extension;

/// Numeric suffixes tried before giving up (0..=9998).
pub const MAX_COLLISION_ATTEMPTS: u32 = 9999;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The desired path was free.
    Free(PathBuf),
    /// The desired path was taken; this numbered sibling is free.
    Renamed(PathBuf),
    /// Every candidate was taken.
    Exhausted,
}

/// Anything that exists at `path`, including dangling symlinks, counts as occupied.
fn is_occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Pick the final destination for `desired` against the current directory snapshot.
pub fn resolve(desired: &Path) -> Resolution {
    resolve_with_limit(desired, MAX_COLLISION_ATTEMPTS)
}

pub(crate) fn resolve_with_limit(desired: &Path, max_attempts: u32) -> Resolution {
    if !is_occupied(desired) {
        return Resolution::Free(desired.to_path_buf());
    }

    let Some(name) = desired.file_name() else {
        return Resolution::Exhausted;
    };
    let name = name.to_string_lossy();
    let (stem, ext) = split_extension(&name);
    let dot = if name.len() > stem.len() { "." } else { "" };

    for i in 0..max_attempts {
        let mut candidate_name = OsString::from(stem);
        candidate_name.push(i.to_string());
        candidate_name.push(dot);
        candidate_name.push(ext);
        let candidate = desired.with_file_name(&candidate_name);
        if !is_occupied(&candidate) {
            if i >= 3 {
                trace!(dest = %candidate.display(), attempts = i + 1, "collision: found free name after several attempts");
            }
            return Resolution::Renamed(candidate);
        }
    }
    Resolution::Exhausted
}
