//! Synthesized overrides for intentionally bundled dependencies.

use crate::types::ConfigEntry;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// The diagnostic reporting imports of packages not declared as dependencies.
pub const EXTRANEOUS_IMPORT_RULE: &str = "n/no-extraneous-import";

/// Packages that are deliberately bundled and may be imported without
/// being declared as dependencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyAllowlist {
    /// Package names to allow.
    #[serde(default)]
    pub bundled_dependencies: Vec<String>,
}

impl DependencyAllowlist {
    /// Creates an allowlist from package names.
    #[must_use]
    pub fn new<I, S>(packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            bundled_dependencies: packages.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if no packages are listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundled_dependencies.is_empty()
    }
}

/// Builds the override entry for an allowlist.
///
/// Returns `None` when the allowlist is absent or empty; callers add
/// nothing in that case. Otherwise the single returned entry touches only
/// [`EXTRANEOUS_IMPORT_RULE`] and lists the packages in their original
/// order with repeats collapsed.
#[must_use]
pub fn build(allowlist: Option<&DependencyAllowlist>) -> Option<ConfigEntry> {
    let allowlist = allowlist.filter(|a| !a.is_empty())?;

    let mut packages: Vec<&str> = Vec::with_capacity(allowlist.bundled_dependencies.len());
    for name in &allowlist.bundled_dependencies {
        if !packages.contains(&name.as_str()) {
            packages.push(name);
        }
    }

    tracing::debug!("Allowing bundled dependencies: {}", packages.join(", "));

    let allow_modules: Vec<Value> = packages.into_iter().map(Value::from).collect();
    Some(ConfigEntry::new().rule(
        EXTRANEOUS_IMPORT_RULE,
        json!(["error", { "allowModules": allow_modules }]),
    ))
}
