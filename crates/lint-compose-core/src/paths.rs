//! Caller-relative resolution of project metadata directories.

use std::io;
use std::path::{Path, PathBuf};

/// Identifies where the configuration module making a request lives.
///
/// Relative project directories are resolved against this location, never
/// against the process working directory, so independent configuration
/// modules in one run each resolve relative to themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerLocation {
    dir: PathBuf,
}

impl CallerLocation {
    /// Anchors at the directory containing a configuration module file.
    ///
    /// A bare file name with no parent anchors at the working directory of
    /// the moment the location is created.
    #[must_use]
    pub fn from_module_file(path: impl AsRef<Path>) -> Self {
        let dir = match path.as_ref().parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self {
            dir: absolute(dir),
        }
    }

    /// Anchors directly at a directory.
    ///
    /// Relative directories are made absolute immediately, so later changes
    /// of the working directory do not move the anchor.
    #[must_use]
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: absolute(dir.into()),
        }
    }

    /// Returns the absolute anchor directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Joins a relative path onto the current working directory.
///
/// If the working directory cannot be read the path is kept as given.
fn absolute(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(e) => {
            tracing::debug!("Cannot read working directory ({e}), keeping {}", path.display());
            path
        }
    }
}

/// Computes the absolute directory holding the project descriptor.
///
/// `relative_dir` is joined onto the caller's directory (absolute values
/// are used as is) and canonicalized.
///
/// # Errors
///
/// Returns the underlying filesystem error if the joined path does not
/// exist or cannot be canonicalized.
pub fn resolve_project_dir(caller: &CallerLocation, relative_dir: &str) -> io::Result<PathBuf> {
    let joined = caller.dir().join(relative_dir);
    let resolved = std::fs::canonicalize(&joined)?;
    tracing::debug!(
        "Resolved project dir {} -> {}",
        joined.display(),
        resolved.display()
    );
    Ok(resolved)
}
