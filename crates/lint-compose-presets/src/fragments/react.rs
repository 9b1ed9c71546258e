//! UI-component-framework fragments.

use lint_compose_core::{ComposeError, ConfigEntry, FragmentRegistry};
use serde_json::json;

/// React component rules.
pub const REACT: &str = "react";

/// Builds the React registry.
///
/// # Errors
///
/// Returns an error if two fragments share a name.
pub fn build() -> Result<FragmentRegistry, ComposeError> {
    FragmentRegistry::builder().fragment(REACT, react()).build()
}

pub(crate) fn react() -> Vec<ConfigEntry> {
    vec![
        ConfigEntry::new()
            .plugin("react", "eslint-plugin-react")
            .plugin("react-hooks", "eslint-plugin-react-hooks"),
        ConfigEntry::new()
            .set("settings", json!({ "react": { "version": "detect" } }))
            .set(
                "languageOptions",
                json!({ "parserOptions": { "ecmaFeatures": { "jsx": true } } }),
            ),
        ConfigEntry::new()
            .rule("react/jsx-key", "error")
            .rule("react/react-in-jsx-scope", "off")
            .rule("react-hooks/rules-of-hooks", "error")
            .rule("react-hooks/exhaustive-deps", "warn"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_defines_only_react() {
        let registry = build().unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), [REACT]);
    }

    #[test]
    fn plugins_come_first() {
        let entries = react();
        let plugins = entries[0].plugins().unwrap();
        assert!(plugins.contains_key("react"));
        assert!(plugins.contains_key("react-hooks"));
        assert!(entries[0].rules().is_none());
    }
}
