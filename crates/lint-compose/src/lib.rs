//! # lint-compose
//!
//! Compose a host lint configuration from named, reusable fragments.
//!
//! This is the main facade crate that re-exports the core engine and the
//! built-in presets, and wires `lint-compose.toml` files to both.
//!
//! ## Quick Start
//!
//! ```toml
//! # lint-compose.toml
//! [preset]
//! kind = "react"
//! prettier = true
//!
//! [allowlist]
//! bundled-dependencies = ["internal-ui"]
//! ```
//!
//! ```rust,ignore
//! let config = lint_compose::compose_file("lint-compose.toml".as_ref())?;
//! println!("{}", serde_json::to_string_pretty(&config)?);
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use lint_compose::{presets::PresetBuilder, CallerLocation};
//!
//! let config = PresetBuilder::generic()
//!     .tests(true)
//!     .prettier(true)
//!     .resolve(CallerLocation::from_dir("."))?;
//! ```

#![forbid(unsafe_code)]

// Re-export core types and functions
pub use lint_compose_core::*;

/// Built-in fragments and presets.
pub mod presets {
    pub use lint_compose_presets::*;
}

use lint_compose_presets::{PresetBuilder, PresetError};
use std::path::Path;
use tracing::debug;

/// Errors from composing a config file end to end.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The config file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The preset could not be built or resolved.
    #[error(transparent)]
    Preset(#[from] PresetError),

    /// The selection could not be resolved.
    #[error(transparent)]
    Compose(#[from] ComposeError),
}

/// Loads a config file and resolves it.
///
/// # Errors
///
/// Returns an error if the file is invalid or resolution fails.
pub fn compose_file(path: &Path) -> Result<ResolvedConfig, Error> {
    let config = ComposeConfig::from_file(path)?;
    compose(&config)
}

/// Resolves a loaded config.
///
/// Explicit selections resolve against every built-in fragment plus the
/// config's own fragments. A preset resolves against its kind's registry
/// plus the config's fragments, which are appended after the preset's
/// selection in name order.
///
/// # Errors
///
/// Returns an error if a local fragment shadows a built-in one, or if
/// resolution fails.
pub fn compose(config: &ComposeConfig) -> Result<ResolvedConfig, Error> {
    let (registry, request) = match config.selection() {
        Selection::Fragments(names) => {
            let registry = with_local(presets::builtin_registry()?, config.fragments())?;
            let request = SelectionRequest {
                caller: config.caller().clone(),
                fragments: names.clone(),
                options: config.options().clone(),
            };
            (registry, request)
        }
        Selection::Preset(spec) => {
            let builder = PresetBuilder::from_spec(spec, config.options().clone())?;
            let registry = with_local(builder.kind().registry()?, config.fragments())?;
            let mut request = builder.build(config.caller().clone())?;
            request
                .fragments
                .extend(config.fragments().fragments().map(|f| f.name().clone()));
            (registry, request)
        }
    };

    debug!(
        "Composing {} fragments from {}",
        request.fragments.len(),
        config.caller().dir().display()
    );
    Ok(resolve(&registry, &request)?)
}

fn with_local(
    builtin: &FragmentRegistry,
    local: &FragmentRegistry,
) -> Result<FragmentRegistry, ComposeError> {
    if local.is_empty() {
        return Ok(builtin.clone());
    }
    FragmentRegistry::union(&[builtin, local])
}
