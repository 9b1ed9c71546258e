//! Generic project fragments: runtime bases, TypeScript, tests, formatting.
//!
//! Bundled fragments (`node-ts-with-prettier` and friends) are plain
//! concatenations of the building blocks below, so every bundle registers
//! its plugins before any entry that uses their rules.

use lint_compose_core::{ComposeError, ConfigEntry, FragmentRegistry};
use serde_json::json;

/// Node.js runtime rules.
pub const NODE: &str = "node";
/// Node.js with TypeScript.
pub const NODE_TS: &str = "node-ts";
/// Node.js with TypeScript and Prettier.
pub const NODE_TS_WITH_PRETTIER: &str = "node-ts-with-prettier";
/// Node.js with TypeScript, test-file rules, and Prettier.
pub const NODE_TS_TESTS_WITH_PRETTIER: &str = "node-ts-tests-with-prettier";
/// Browser runtime rules.
pub const BROWSER: &str = "browser";
/// Browser runtime rules with Prettier.
pub const BROWSER_WITH_PRETTIER: &str = "browser-with-prettier";
/// Standalone TypeScript rules.
pub const TS: &str = "ts";
/// Test-file rules.
pub const TESTS: &str = "tests";
/// Prettier integration.
pub const PRETTIER: &str = "prettier";
/// ES module parsing and import resolution.
pub const ESM: &str = lint_compose_core::MODULE_SYSTEM_FRAGMENT;
/// `JSDoc` rules.
pub const JSDOC: &str = "jsdoc";

/// Builds the generic registry.
///
/// # Errors
///
/// Returns an error if two fragments share a name.
pub fn build() -> Result<FragmentRegistry, ComposeError> {
    FragmentRegistry::builder()
        .fragment(NODE, [javascript(), node()].concat())
        .fragment(NODE_TS, node_ts())
        .fragment(NODE_TS_WITH_PRETTIER, [node_ts(), prettier()].concat())
        .fragment(
            NODE_TS_TESTS_WITH_PRETTIER,
            [node_ts(), tests(), prettier()].concat(),
        )
        .fragment(BROWSER, [javascript(), browser()].concat())
        .fragment(
            BROWSER_WITH_PRETTIER,
            [javascript(), browser(), prettier()].concat(),
        )
        .fragment(TS, typescript())
        .fragment(TESTS, tests())
        .fragment(PRETTIER, prettier())
        .fragment(ESM, esm())
        .fragment(JSDOC, jsdoc())
        .build()
}

fn javascript() -> Vec<ConfigEntry> {
    vec![ConfigEntry::new()
        .rule("eqeqeq", json!(["error", "smart"]))
        .rule("no-var", "error")
        .rule("prefer-const", "error")
        .rule("no-unused-vars", "error")]
}

fn node() -> Vec<ConfigEntry> {
    vec![
        ConfigEntry::new().plugin("n", "eslint-plugin-n"),
        ConfigEntry::new().set(
            "languageOptions",
            json!({
                "ecmaVersion": "latest",
                "globals": { "process": "readonly", "Buffer": "readonly", "__dirname": "readonly" }
            }),
        ),
        ConfigEntry::new()
            .rule("n/no-missing-import", "error")
            .rule("n/no-extraneous-import", "error")
            .rule("n/no-process-exit", "error"),
    ]
}

fn typescript() -> Vec<ConfigEntry> {
    vec![
        ConfigEntry::new().plugin("@typescript-eslint", "@typescript-eslint/eslint-plugin"),
        ConfigEntry::new().set(
            "languageOptions",
            json!({ "parser": "@typescript-eslint/parser" }),
        ),
        ConfigEntry::new()
            .rule("no-unused-vars", "off")
            .rule("@typescript-eslint/no-unused-vars", "error")
            .rule("@typescript-eslint/no-explicit-any", "warn")
            .rule("@typescript-eslint/consistent-type-imports", "error"),
    ]
}

fn node_ts() -> Vec<ConfigEntry> {
    let mut entries = [javascript(), node(), typescript()].concat();
    // The TypeScript resolver reports missing modules itself.
    entries.push(ConfigEntry::new().rule("n/no-missing-import", "off"));
    entries
}

fn browser() -> Vec<ConfigEntry> {
    vec![ConfigEntry::new()
        .set(
            "languageOptions",
            json!({
                "ecmaVersion": "latest",
                "globals": { "window": "readonly", "document": "readonly", "navigator": "readonly" }
            }),
        )
        .rule("no-restricted-globals", json!(["error", "event", "name"]))]
}

fn tests() -> Vec<ConfigEntry> {
    vec![
        ConfigEntry::new().plugin("vitest", "@vitest/eslint-plugin"),
        ConfigEntry::new()
            .files(["**/*.test.*", "**/*.spec.*", "tests/**"])
            .rule("vitest/expect-expect", "error")
            .rule("vitest/no-focused-tests", "error")
            .rule("@typescript-eslint/no-explicit-any", "off"),
    ]
}

fn prettier() -> Vec<ConfigEntry> {
    vec![
        ConfigEntry::new().plugin("prettier", "eslint-plugin-prettier"),
        ConfigEntry::new()
            .rule("prettier/prettier", "error")
            .rule("arrow-body-style", "off")
            .rule("prefer-arrow-callback", "off"),
    ]
}

fn esm() -> Vec<ConfigEntry> {
    vec![
        ConfigEntry::new().plugin("import", "eslint-plugin-import"),
        ConfigEntry::new()
            .set("languageOptions", json!({ "sourceType": "module" }))
            .rule("import/extensions", json!(["error", "ignorePackages"]))
            .rule("import/no-commonjs", "error"),
    ]
}

fn jsdoc() -> Vec<ConfigEntry> {
    vec![
        ConfigEntry::new().plugin("jsdoc", "eslint-plugin-jsdoc"),
        ConfigEntry::new()
            .rule("jsdoc/require-jsdoc", json!(["warn", { "publicOnly": true }]))
            .rule("jsdoc/check-param-names", "error"),
    ]
}
