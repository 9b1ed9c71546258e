//! File-set directives and their expansion into inclusion globs.
//!
//! ```text
//! "all"               -> **/*.<ext>          for every supported extension
//! "all-inside:<dir>"  -> <dir>/**/*.<ext>    for every supported extension
//! ["a/**", "b.ts"]    -> passed through unchanged
//! ```

use crate::error::ComposeError;
use serde::Deserialize;
use std::fmt;

/// Source file extensions the host tool lints.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx", "ts", "mts", "cts", "tsx"];

const ALL: &str = "all";
const ALL_INSIDE_PREFIX: &str = "all-inside:";

/// A directive written as either one string or a list of strings.
///
/// This is the boundary shape; it is normalized into [`FilesDirective`] or
/// [`IgnoresDirective`] before any other logic sees it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawDirective {
    /// A single string.
    One(String),
    /// A list of strings.
    Many(Vec<String>),
}

impl fmt::Display for RawDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(s) => write!(f, "{s}"),
            Self::Many(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<&str> for RawDirective {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<Vec<String>> for RawDirective {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

/// Which files the resolved configuration applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilesDirective {
    /// Every supported source file at any depth.
    #[default]
    All,
    /// Every supported source file at any depth under one directory.
    AllInside(String),
    /// Explicit glob strings, used verbatim.
    Globs(Vec<String>),
}

impl FilesDirective {
    /// Normalizes a raw directive.
    ///
    /// A single string must be `"all"` or `"all-inside:<dir>"`; explicit
    /// globs are always written as a list.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::InvalidFilesDirective`] naming the value if it
    /// does not match the grammar.
    pub fn parse(raw: &RawDirective) -> Result<Self, ComposeError> {
        let invalid = |reason: &str| ComposeError::InvalidFilesDirective {
            value: raw.to_string(),
            reason: reason.to_string(),
        };

        match raw {
            RawDirective::One(s) if s == ALL => Ok(Self::All),
            RawDirective::One(s) => {
                let Some(dir) = s.strip_prefix(ALL_INSIDE_PREFIX) else {
                    return Err(invalid("expected \"all\" or \"all-inside:<dir>\""));
                };
                if dir.trim().is_empty() {
                    return Err(invalid("directory after \"all-inside:\" must not be empty"));
                }
                let dir = normalize_dir(dir);
                // The subtree root is every file.
                if dir.is_empty() || dir == "." {
                    return Ok(Self::All);
                }
                Ok(Self::AllInside(dir))
            }
            RawDirective::Many(items) if items.is_empty() => {
                Err(invalid("glob list must not be empty"))
            }
            RawDirective::Many(items) if items.iter().any(|g| g.trim().is_empty()) => {
                Err(invalid("glob entries must be non-empty strings"))
            }
            RawDirective::Many(items) => Ok(Self::Globs(items.clone())),
        }
    }

    /// Expands the directive into concrete inclusion globs.
    #[must_use]
    pub fn expand(&self) -> Vec<String> {
        match self {
            Self::All => SUPPORTED_EXTENSIONS
                .iter()
                .map(|ext| format!("**/*.{ext}"))
                .collect(),
            Self::AllInside(dir) => SUPPORTED_EXTENSIONS
                .iter()
                .map(|ext| format!("{dir}/**/*.{ext}"))
                .collect(),
            Self::Globs(globs) => globs.clone(),
        }
    }
}

/// Strips `./` prefixes and trailing separators from a directory directive.
fn normalize_dir(dir: &str) -> String {
    let mut dir = dir.trim().trim_end_matches('/');
    while let Some(rest) = dir.strip_prefix("./") {
        dir = rest.trim_start_matches('/');
    }
    dir.to_string()
}

/// Which files the host tool skips entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoresDirective(Vec<String>);

impl IgnoresDirective {
    /// Normalizes a raw directive into an ordered glob list.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::InvalidIgnoresDirective`] if any pattern is
    /// empty.
    pub fn parse(raw: &RawDirective) -> Result<Self, ComposeError> {
        let patterns = match raw {
            RawDirective::One(s) => vec![s.clone()],
            RawDirective::Many(items) => items.clone(),
        };
        if patterns.iter().any(|p| p.trim().is_empty()) {
            return Err(ComposeError::InvalidIgnoresDirective {
                value: raw.to_string(),
            });
        }
        Ok(Self(patterns))
    }

    /// Returns the ignore globs.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.0
    }
}
