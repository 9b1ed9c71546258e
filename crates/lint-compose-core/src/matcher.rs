//! Matching relative paths against a resolved file set.

use crate::types::ResolvedConfig;
use glob::{MatchOptions, Pattern, PatternError};
use std::path::Path;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Compiled `files`/`ignores` globs of a [`ResolvedConfig`].
///
/// A path is selected when it matches at least one inclusion glob and no
/// ignore glob. Patterns are compiled once at construction.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    include: Vec<Pattern>,
    ignore: Vec<Pattern>,
    ignore_dirs: Vec<Pattern>,
}

impl FileMatcher {
    /// Compiles the globs of a resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any glob has invalid syntax.
    pub fn new(config: &ResolvedConfig) -> Result<Self, PatternError> {
        let dirs: Vec<String> = config
            .ignores
            .iter()
            .filter_map(|g| directory_of(g))
            .map(str::to_string)
            .collect();
        Ok(Self {
            include: compile(&config.files)?,
            ignore: compile(&config.ignores)?,
            ignore_dirs: compile(&dirs)?,
        })
    }

    /// Tests whether a path relative to the project root would be linted.
    #[must_use]
    pub fn is_selected(&self, path: &Path) -> bool {
        let included = self
            .include
            .iter()
            .any(|p| p.matches_path_with(path, MATCH_OPTIONS));
        included && !self.is_ignored(path)
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self
            .ignore
            .iter()
            .any(|p| p.matches_path_with(path, MATCH_OPTIONS))
        {
            return true;
        }
        path.ancestors()
            .skip(1)
            .filter(|dir| !dir.as_os_str().is_empty())
            .any(|dir| {
                self.ignore_dirs
                    .iter()
                    .any(|p| p.matches_path_with(dir, MATCH_OPTIONS))
            })
    }
}

fn compile(globs: &[String]) -> Result<Vec<Pattern>, PatternError> {
    globs.iter().map(|g| Pattern::new(g)).collect()
}

/// Directory part of a `dir/**` or `dir/` ignore, which covers everything beneath `dir`.
fn directory_of(glob: &str) -> Option<&str> {
    let dir = glob
        .strip_suffix("/**")
        .or_else(|| glob.strip_suffix('/'))?
        .trim_end_matches('/');
    (!dir.is_empty()).then_some(dir)
}
