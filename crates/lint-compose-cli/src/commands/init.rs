//! Init command implementation.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

const CONFIG_NAME: &str = "lint-compose.toml";

const DEFAULT_CONFIG: &str = r#"# lint-compose configuration
# Run `lint-compose list-fragments` to see what can be selected.

# Files the configuration applies to: "all", "all-inside:<dir>", or a list of globs
files = "all"
# ignores = ["dist/**"]

# source-type = "module"  # module | commonjs | script
# module-system = true    # append the esm fragment unless selected

# Either an explicit, ordered selection...
# select = ["node-ts", "tests"]

# ...or a preset.
[preset]
kind = "generic"        # generic | react | nextjs
base = "node"           # node | browser
typescript = true
prettier = false
tests = false
# jsdoc = true
# esm = true

[project]
descriptor = "tsconfig.json"
dir = "./"

# [allowlist]
# bundled-dependencies = []

# [[fragment]]
# name = "local-overrides"
# entries = [{ rules = { "no-console" = "off" } }]
"#;

/// Runs the init command, writing the config into `dir`.
pub fn run(dir: &Path, force: bool) -> Result<()> {
    let config_path = write_config(dir, force)?;

    println!("Created {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_NAME} to choose fragments");
    println!("  2. Run: lint-compose resolve --pretty");

    Ok(())
}

fn write_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_NAME);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    Ok(config_path)
}
