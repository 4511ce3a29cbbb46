//! Typed error definitions for dirculese.
//! One variant per failure class the rule engine can surface; callers decide exit behavior.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirculeseError {
    /// Caller fault: empty criteria, unknown handler, malformed config. Never retried.
    #[error("{0}")]
    Config(String),

    /// A location is missing, not a directory, or unreachable.
    #[error("{}: {reason}", .path.display())]
    Path { path: PathBuf, reason: String },

    /// A create/rename/remove call failed after earlier actions may have succeeded.
    #[error("failed to {op} '{}': {source}{}", .path.display(), io_hint(.source))]
    Filesystem {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("interrupted by user")]
    Interrupted,
}

impl DirculeseError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Path {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Returns a closure for `.map_err(...)` that wraps an io::Error with op/path context.
    pub fn filesystem(
        op: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Filesystem { op, path, source }
    }

    /// Stable short kind name for structured log fields.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "config_error",
            Self::Path { .. } => "path_error",
            Self::Filesystem { .. } => "filesystem_error",
            Self::Interrupted => "interrupted",
        }
    }
}

/// Short actionable hint for common OS failures; empty when nothing useful applies.
fn io_hint(e: &io::Error) -> &'static str {
    #[cfg(unix)]
    {
        match e.raw_os_error() {
            Some(libc::EACCES) | Some(libc::EPERM) => {
                return " (permission denied; check ownership and write permissions)";
            }
            Some(libc::EXDEV) => return " (cross-filesystem rename is not supported)",
            Some(libc::EBUSY) => return " (resource busy)",
            Some(libc::ENOSPC) => return " (no space left on device)",
            Some(libc::EROFS) => return " (read-only filesystem)",
            Some(libc::ENAMETOOLONG) => return " (file name or path too long)",
            _ => {}
        }
    }
    match e.kind() {
        io::ErrorKind::PermissionDenied => " (permission denied)",
        io::ErrorKind::NotFound => " (path not found; it may have been removed during the run)",
        _ => "",
    }
}
