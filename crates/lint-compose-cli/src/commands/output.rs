//! Shared output formatting.

use anyhow::Result;
use lint_compose::ResolvedConfig;
use std::io::Write;
use std::path::Path;

/// Prints a resolved configuration as JSON on stdout.
pub fn print_config(config: &ResolvedConfig, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(config)?
    } else {
        serde_json::to_string(config)?
    };
    println!("{json}");
    Ok(())
}

/// Prints one path per line, relative to the project root.
pub fn print_paths(paths: &[&Path]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for path in paths {
        writeln!(stdout, "{}", path.display())?;
    }
    Ok(())
}
