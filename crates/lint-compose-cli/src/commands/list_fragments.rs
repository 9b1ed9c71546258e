//! List fragments command implementation.

use anyhow::Result;
use lint_compose::presets::{generic_registry, nextjs_registry, react_registry, PresetKind};
use lint_compose::FragmentRegistry;

/// Runs the list-fragments command.
pub fn run() -> Result<()> {
    let generic = generic_registry()?;

    println!("Available fragments:\n");
    println!("{:<30} {:<10} Entries", "Name", "Registry");
    println!("{}", "-".repeat(50));

    print_registry("generic", generic, None);
    print_registry("react", react_registry()?, Some(generic));
    print_registry("nextjs", nextjs_registry()?, Some(generic));

    println!("\nPresets:");
    for kind in [PresetKind::Generic, PresetKind::React, PresetKind::Nextjs] {
        let name = kind.to_string();
        let framework = kind.framework_fragment().unwrap_or("-");
        println!("  {name:<10} framework fragment: {framework}");
    }

    println!("\nSelect fragments in lint-compose.toml, e.g.:");
    println!("  select = [\"node-ts\", \"react\"]");
    println!("  [preset]\n  kind = \"react\"\n  prettier = true");

    Ok(())
}

/// Prints the fragments of `registry` not already printed from `base`.
fn print_registry(label: &str, registry: &FragmentRegistry, base: Option<&FragmentRegistry>) {
    for fragment in registry.fragments() {
        if base.is_some_and(|b| b.contains(fragment.name())) {
            continue;
        }
        println!(
            "{:<30} {:<10} {}",
            fragment.name().as_str(),
            label,
            fragment.entries().len()
        );
    }
}
