//! Configuration file resolution.
//!
//! Resolves the configuration file path using a deterministic priority order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `{project}/lint-compose.toml` or `.lint-compose.toml`
//! 3. No config found

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// No config found.
    Missing,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) => Some(p),
            Self::Missing => None,
        }
    }
}

/// Project-level config file names, checked in order.
pub const PROJECT_CONFIG_NAMES: &[&str] = &["lint-compose.toml", ".lint-compose.toml"];

/// Resolves the configuration file path.
///
/// See module-level docs for resolution order.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    for name in PROJECT_CONFIG_NAMES {
        let candidate = project_dir.join(name);
        if candidate.exists() {
            tracing::debug!("Found project config: {}", candidate.display());
            return ConfigSource::Project(candidate);
        }
    }

    ConfigSource::Missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_takes_priority_over_project() {
        let tmp = TempDir::new().unwrap();
        let explicit = tmp.path().join("custom.toml");
        fs::write(&explicit, "").unwrap();

        let project = tmp.path().join("project");
        fs::create_dir(&project).unwrap();
        fs::write(project.join("lint-compose.toml"), "").unwrap();

        let result = resolve(&project, Some(&explicit));
        assert_eq!(result, ConfigSource::Explicit(explicit));
    }

    #[test]
    fn explicit_does_not_check_existence() {
        // Missing explicit files are reported when loading
        let result = resolve(Path::new("/tmp"), Some(Path::new("/nonexistent.toml")));
        assert_eq!(
            result,
            ConfigSource::Explicit(PathBuf::from("/nonexistent.toml"))
        );
    }

    #[test]
    fn project_lint_compose_toml_found() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("lint-compose.toml"), "").unwrap();

        let result = resolve(tmp.path(), None);
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join("lint-compose.toml"))
        );
    }

    #[test]
    fn project_dot_lint_compose_toml_found() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".lint-compose.toml"), "").unwrap();

        let result = resolve(tmp.path(), None);
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join(".lint-compose.toml"))
        );
    }

    #[test]
    fn plain_name_preferred_over_dot_prefix() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("lint-compose.toml"), "").unwrap();
        fs::write(tmp.path().join(".lint-compose.toml"), "").unwrap();

        let result = resolve(tmp.path(), None);
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join("lint-compose.toml"))
        );
    }

    #[test]
    fn dot_config_feeds_composition_anchored_at_the_project() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("web")).unwrap();
        fs::write(
            tmp.path().join(".lint-compose.toml"),
            "select = [\"node\"]\n\n[project]\ndir = \"./web\"\n",
        )
        .unwrap();

        let source = resolve(tmp.path(), None);
        let config = lint_compose::compose_file(source.path().unwrap()).unwrap();

        assert_eq!(
            config.language_options.parser_options.tsconfig_root_dir,
            fs::canonicalize(tmp.path().join("web")).unwrap()
        );
    }

    #[test]
    fn no_config_returns_missing() {
        let project = TempDir::new().unwrap();
        assert_eq!(resolve(project.path(), None), ConfigSource::Missing);
        assert!(ConfigSource::Missing.path().is_none());
    }
}
