//! TOML deserialization types (DTO layer).
//!
//! These types exist solely for serde deserialization.
//! They are converted to domain types via the loader.

use crate::files::RawDirective;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Raw TOML representation of `lint-compose.toml`.
///
/// Unknown keys are rejected so a misspelled option is never silently
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ComposeConfigDto {
    /// Explicit fragment selection (mutually exclusive with `preset`).
    #[serde(default)]
    pub select: Option<Vec<String>>,

    /// Preset selection (mutually exclusive with `select`).
    #[serde(default)]
    pub preset: Option<PresetDto>,

    /// Files directive: `"all"`, `"all-inside:<dir>"`, or a glob list.
    #[serde(default)]
    pub files: Option<RawDirective>,

    /// Ignore globs: one string or a list.
    #[serde(default)]
    pub ignores: Option<RawDirective>,

    /// Source type (default: "module").
    #[serde(default)]
    pub source_type: Option<String>,

    /// Whether to auto-include the module-system fragment (default: true).
    #[serde(default)]
    pub module_system: Option<bool>,

    /// Project descriptor location.
    #[serde(default)]
    pub project: ProjectDto,

    /// Bundled dependency allowlist.
    #[serde(default)]
    pub allowlist: Option<AllowlistDto>,

    /// Project-local fragment definitions.
    #[serde(rename = "fragment", default)]
    pub fragments: Vec<FragmentDto>,
}

/// TOML representation of the `[preset]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PresetDto {
    /// Preset kind (e.g., "generic", "react", "nextjs").
    pub kind: String,
    /// Base environment (e.g., "node", "browser").
    #[serde(default)]
    pub base: Option<String>,
    /// TypeScript support.
    #[serde(default)]
    pub typescript: Option<bool>,
    /// Prettier integration.
    #[serde(default)]
    pub prettier: Option<bool>,
    /// Test-file rules.
    #[serde(default)]
    pub tests: Option<bool>,
    /// `JSDoc` rules.
    #[serde(default)]
    pub jsdoc: Option<bool>,
    /// Explicit module-system fragment.
    #[serde(default)]
    pub esm: Option<bool>,
}

/// TOML representation of the `[project]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ProjectDto {
    /// Descriptor file name (default: "tsconfig.json").
    #[serde(default)]
    pub descriptor: Option<String>,
    /// Descriptor directory relative to the config file (default: "./").
    #[serde(default)]
    pub dir: Option<String>,
}

/// TOML representation of the `[allowlist]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AllowlistDto {
    /// Package names exempt from the extraneous-dependency diagnostic.
    #[serde(default)]
    pub bundled_dependencies: Vec<String>,
}

/// TOML representation of a `[[fragment]]` definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FragmentDto {
    /// Fragment name.
    pub name: String,
    /// Ordered partial configuration objects.
    #[serde(default)]
    pub entries: Vec<Map<String, Value>>,
}
