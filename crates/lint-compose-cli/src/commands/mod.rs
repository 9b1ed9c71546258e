//! Subcommand implementations.

pub mod files;
pub mod init;
pub mod list_fragments;
pub mod output;
pub mod resolve;

use crate::config_resolver::ConfigSource;
use anyhow::{anyhow, bail, Context, Result};
use lint_compose::presets::PresetError;
use lint_compose::{ComposeConfig, Error, ResolvedConfig};

/// Loads the config named by `source` and resolves it.
pub fn compose(source: &ConfigSource) -> Result<(ComposeConfig, ResolvedConfig)> {
    let Some(path) = source.path() else {
        bail!("No lint-compose.toml found. Run `lint-compose init` to create one.");
    };
    tracing::debug!("Using config: {}", path.display());

    let config = ComposeConfig::from_file(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    match lint_compose::compose(&config) {
        Ok(resolved) => Ok((config, resolved)),
        Err(Error::Compose(e) | Error::Preset(PresetError::Compose(e))) => {
            Err(anyhow!("{:?}", miette::Report::new(e)))
                .with_context(|| format!("Failed to resolve {}", path.display()))
        }
        Err(e) => Err(e).with_context(|| format!("Failed to resolve {}", path.display())),
    }
}
