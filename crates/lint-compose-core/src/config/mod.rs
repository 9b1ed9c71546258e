//! Composition requests driven by a `lint-compose.toml` file.
//!
//! # Architecture
//!
//! ```text
//! TOML text
//!   ↓ serde (DTO layer)
//! config_dto types
//!   ↓ validate + convert
//! ComposeConfig (caller location + selection + options + local fragments)
//!   ↓ request() / preset builder
//! SelectionRequest
//! ```
//!
//! The caller location of a file-backed config is the file itself, so the
//! `[project] dir` is resolved relative to wherever the TOML lives.

use crate::fragment::FragmentName;
use crate::paths::CallerLocation;
use crate::registry::FragmentRegistry;
use crate::request::{ResolveOptions, SelectionRequest};
use std::path::{Path, PathBuf};

pub mod config_dto;
pub mod loader;

pub use loader::LoadError;

/// Which fragments a config selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// An explicit, ordered list of fragment names.
    Fragments(Vec<FragmentName>),
    /// A preset to be expanded by a preset builder.
    Preset(PresetSpec),
}

/// Uninterpreted `[preset]` settings.
///
/// Kinds and flags are validated by the preset builders; unset flags fall
/// back to the builder's own defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetSpec {
    /// Preset kind name.
    pub kind: String,
    /// Base environment name.
    pub base: Option<String>,
    /// TypeScript support.
    pub typescript: Option<bool>,
    /// Prettier integration.
    pub prettier: Option<bool>,
    /// Test-file rules.
    pub tests: Option<bool>,
    /// `JSDoc` rules.
    pub jsdoc: Option<bool>,
    /// Explicit module-system fragment.
    pub esm: Option<bool>,
}

/// A validated composition config.
#[derive(Debug, Clone)]
pub struct ComposeConfig {
    caller: CallerLocation,
    selection: Selection,
    options: ResolveOptions,
    fragments: FragmentRegistry,
}

impl ComposeConfig {
    /// Loads a config from a TOML file, anchored at that file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let anchored = std::fs::canonicalize(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, CallerLocation::from_module_file(anchored))
    }

    /// Parses a config from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or fails validation.
    pub fn parse(content: &str, caller: CallerLocation) -> Result<Self, ConfigError> {
        let dto: config_dto::ComposeConfigDto =
            toml::from_str(content).map_err(|e| ConfigError::Parse {
                message: e.to_string(),
            })?;
        Ok(loader::load(dto, caller)?)
    }

    /// Returns the caller location requests are anchored at.
    #[must_use]
    pub fn caller(&self) -> &CallerLocation {
        &self.caller
    }

    /// Returns the fragment selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the resolve options.
    #[must_use]
    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Returns the project-local fragments.
    #[must_use]
    pub fn fragments(&self) -> &FragmentRegistry {
        &self.fragments
    }

    /// Builds the selection request for an explicit selection.
    ///
    /// Returns `None` for preset selections, which need a preset builder.
    #[must_use]
    pub fn request(&self) -> Option<SelectionRequest> {
        match &self.selection {
            Selection::Fragments(names) => Some(SelectionRequest {
                caller: self.caller.clone(),
                fragments: names.clone(),
                options: self.options.clone(),
            }),
            Selection::Preset(_) => None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Config parsed but failed validation.
    #[error("Invalid config: {0}")]
    Load(#[from] LoadError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn from_file_anchors_at_the_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lint-compose.toml");
        fs::write(&path, r#"select = ["node"]"#).unwrap();

        let config = ComposeConfig::from_file(&path).unwrap();
        assert_eq!(config.caller().dir(), fs::canonicalize(tmp.path()).unwrap());

        let request = config.request().unwrap();
        assert_eq!(request.fragments.len(), 1);
        assert_eq!(request.caller, *config.caller());
    }

    #[test]
    fn preset_config_has_no_direct_request() {
        let config = ComposeConfig::parse(
            "[preset]\nkind = \"generic\"",
            CallerLocation::from_dir("."),
        )
        .unwrap();
        assert!(config.request().is_none());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = ComposeConfig::from_file(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let result = ComposeConfig::parse("select = [", CallerLocation::from_dir("."));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
