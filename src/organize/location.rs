//! Filesystem location handle.
//! A plain value wrapping a directory path; validation is repeated before each use
//! because the directory can change between checks.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::DirculeseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: PathBuf,
}

impl Location {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the path is non-empty and points at an existing directory.
    pub fn check_path(&self) -> Result<(), DirculeseError> {
        if self.path.as_os_str().is_empty() {
            return Err(DirculeseError::path(
                &self.path,
                "empty paths are not valid",
            ));
        }
        let meta = fs::metadata(&self.path)
            .map_err(|e| DirculeseError::path(&self.path, e.to_string()))?;
        if !meta.is_dir() {
            return Err(DirculeseError::path(&self.path, "is not a directory"));
        }
        Ok(())
    }

    /// Immediate entries of the directory, in whatever order the filesystem returns them.
    pub fn contents(&self) -> Result<Vec<fs::DirEntry>, DirculeseError> {
        let read = fs::read_dir(&self.path)
            .map_err(|e| DirculeseError::path(&self.path, e.to_string()))?;
        read.collect::<Result<Vec<_>, _>>()
            .map_err(|e| DirculeseError::path(&self.path, e.to_string()))
    }
}

impl From<&Path> for Location {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
