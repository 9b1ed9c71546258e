//! Resolve command implementation.

use anyhow::Result;

use crate::config_resolver::ConfigSource;

/// Runs the resolve command.
pub fn run(source: &ConfigSource, pretty: bool) -> Result<()> {
    let (_, resolved) = super::compose(source)?;
    tracing::debug!("Resolved {} extends entries", resolved.extends.len());
    super::output::print_config(&resolved, pretty)
}
