//! Meta-framework fragments.

use lint_compose_core::{ComposeError, ConfigEntry, FragmentRegistry};

/// Next.js application rules, including the React rules it builds on.
pub const NEXTJS: &str = "nextjs";

/// Builds the Next.js registry.
///
/// # Errors
///
/// Returns an error if two fragments share a name.
pub fn build() -> Result<FragmentRegistry, ComposeError> {
    let mut entries = super::react::react();
    entries.extend([
        ConfigEntry::new().plugin("@next/next", "@next/eslint-plugin-next"),
        ConfigEntry::new()
            .rule("@next/next/no-html-link-for-pages", "error")
            .rule("@next/next/no-img-element", "warn")
            .rule("@next/next/no-sync-scripts", "error"),
        ConfigEntry::new().ignores([".next/**", "out/**"]),
    ]);
    FragmentRegistry::builder().fragment(NEXTJS, entries).build()
}
