//! Files command implementation.
//!
//! Walks the project (respecting `.gitignore`) and prints every file the
//! resolved `files`/`ignores` globs select.

use anyhow::{Context, Result};
use lint_compose::FileMatcher;
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;

/// Directories the host never lints, whether or not they are gitignored.
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git"];

/// Runs the files command.
pub fn run(source: &ConfigSource) -> Result<()> {
    let (config, resolved) = super::compose(source)?;
    let matcher = FileMatcher::new(&resolved).context("Invalid glob in resolved config")?;

    let root = config.caller().dir();
    let files = discover_files(root, &matcher)?;

    tracing::info!("{} files selected under {}", files.len(), root.display());

    let paths: Vec<&Path> = files.iter().map(PathBuf::as_path).collect();
    super::output::print_paths(&paths)
}

/// Returns selected files as paths relative to `root`, sorted.
fn discover_files(root: &Path, matcher: &FileMatcher) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(true)
        .filter_entry(|entry| !SKIPPED_DIRS.iter().any(|d| entry.file_name() == *d));

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        if matcher.is_selected(rel) {
            files.push(rel.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lint_compose::{CallerLocation, ComposeConfig};
    use std::fs;
    use tempfile::TempDir;

    fn matcher(tmp: &TempDir, toml: &str) -> FileMatcher {
        let config = ComposeConfig::parse(toml, CallerLocation::from_dir(tmp.path())).unwrap();
        let resolved = lint_compose::compose(&config).unwrap();
        FileMatcher::new(&resolved).unwrap()
    }

    #[test]
    fn selects_sources_inside_subtree_only() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src/nested")).unwrap();
        fs::write(tmp.path().join("src/index.ts"), "").unwrap();
        fs::write(tmp.path().join("src/nested/view.tsx"), "").unwrap();
        fs::write(tmp.path().join("src/readme.md"), "").unwrap();
        fs::write(tmp.path().join("build.js"), "").unwrap();

        let matcher = matcher(
            &tmp,
            r#"
select = ["node"]
files = "all-inside:src"
"#,
        );
        let files = discover_files(tmp.path(), &matcher).unwrap();

        assert_eq!(
            files,
            [
                PathBuf::from("src/index.ts"),
                PathBuf::from("src/nested/view.tsx")
            ]
        );
    }

    #[test]
    fn skips_dependency_and_vcs_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("node_modules/pkg")).unwrap();
        fs::create_dir_all(tmp.path().join(".git/hooks")).unwrap();
        fs::write(tmp.path().join("node_modules/pkg/index.js"), "").unwrap();
        fs::write(tmp.path().join(".git/hooks/pre-commit.js"), "").unwrap();
        fs::write(tmp.path().join("index.js"), "").unwrap();

        let matcher = matcher(&tmp, r#"select = ["node"]"#);
        let files = discover_files(tmp.path(), &matcher).unwrap();

        assert_eq!(files, [PathBuf::from("index.js")]);
    }

    #[test]
    fn ignores_remove_whole_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src")).unwrap();
        fs::create_dir_all(tmp.path().join("dist")).unwrap();
        fs::write(tmp.path().join("src/main.js"), "").unwrap();
        fs::write(tmp.path().join("dist/main.js"), "").unwrap();

        let matcher = matcher(
            &tmp,
            r#"
select = ["node"]
files = ["**/*.js"]
ignores = ["dist/**"]
"#,
        );
        let files = discover_files(tmp.path(), &matcher).unwrap();

        assert_eq!(files, [PathBuf::from("src/main.js")]);
    }
}
