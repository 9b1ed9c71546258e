//! Composition of a selection request into one resolved configuration.
//!
//! # Order of `extends`
//!
//! ```text
//! selected fragments, in selection order (each expanded verbatim)
//!   ↓
//! module-system fragment (only if enabled and not already selected)
//!   ↓
//! dependency allowlist override (only if the allowlist is non-empty)
//! ```
//!
//! Conflicting rule keys across fragments are not merged here; the host
//! tool layers the `extends` list itself and the later entry wins.

use crate::allowlist;
use crate::error::ComposeError;
use crate::files::SUPPORTED_EXTENSIONS;
use crate::fragment::{FragmentName, MODULE_SYSTEM_FRAGMENT};
use crate::paths;
use crate::registry::FragmentRegistry;
use crate::request::SelectionRequest;
use crate::types::{LanguageOptions, ParserOptions, ResolvedConfig};

use serde_json::{json, Map, Value};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// Settings key the host's import plugin reads resolver options from.
pub const IMPORT_RESOLVER_SETTING: &str = "import/resolver";

/// Resolves a request against a registry.
///
/// The result is a pure function of the two inputs: equal requests against
/// equal registries (and an unchanged filesystem) always produce equal
/// configurations. Nothing is cached between calls.
///
/// # Errors
///
/// - [`ComposeError::UnknownFragment`] if a selected name, or the
///   auto-included module-system fragment, is missing from `registry`.
/// - [`ComposeError::DuplicateSelection`] if a name is selected twice.
/// - [`ComposeError::Io`] if the project directory does not exist.
pub fn resolve(
    registry: &FragmentRegistry,
    request: &SelectionRequest,
) -> Result<ResolvedConfig, ComposeError> {
    let options = &request.options;
    let mut extends = Vec::new();
    let mut seen = BTreeSet::new();

    for name in &request.fragments {
        if !seen.insert(name) {
            return Err(ComposeError::DuplicateSelection {
                name: name.to_string(),
            });
        }
        let entries = registry.expand(name)?;
        debug!("Expanding fragment `{name}` ({} entries)", entries.len());
        extends.extend_from_slice(entries);
    }

    if options.include_module_system_fragment && !request.selects_module_system() {
        let name = FragmentName::new(MODULE_SYSTEM_FRAGMENT)?;
        let entries = registry.expand(&name)?;
        debug!("Auto-including `{name}` ({} entries)", entries.len());
        extends.extend_from_slice(entries);
    }

    let project_dir =
        paths::resolve_project_dir(&request.caller, &options.project_descriptor_dir)?;

    let files = options.files.expand();
    let ignores = options
        .ignores
        .as_ref()
        .map(|i| i.patterns().to_vec())
        .unwrap_or_default();

    if let Some(entry) = allowlist::build(options.extraneous_dependency_allowlist.as_ref()) {
        extends.push(entry);
    }

    let settings =
        module_resolution_settings(&project_dir.join(&options.project_descriptor_name));

    debug!(
        "Resolved {} fragments into {} entries",
        request.fragments.len(),
        extends.len()
    );

    Ok(ResolvedConfig {
        files,
        ignores,
        extends,
        language_options: LanguageOptions {
            source_type: options.source_type,
            parser_options: ParserOptions {
                project: options.project_descriptor_name.clone(),
                tsconfig_root_dir: project_dir,
            },
        },
        settings,
    })
}

/// Builds the import-resolver settings pointing at the project descriptor.
fn module_resolution_settings(project_path: &Path) -> Map<String, Value> {
    let extensions: Vec<String> = SUPPORTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect();

    let mut settings = Map::new();
    settings.insert(
        IMPORT_RESOLVER_SETTING.to_string(),
        json!({
            "typescript": { "project": project_path.to_string_lossy() },
            "node": { "extensions": extensions },
        }),
    );
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::CallerLocation;
    use crate::types::ConfigEntry;
    use tempfile::TempDir;

    fn registry() -> FragmentRegistry {
        FragmentRegistry::builder()
            .fragment(
                "node",
                [
                    ConfigEntry::new().plugin("n", "eslint-plugin-n"),
                    ConfigEntry::new().rule("n/no-missing-import", "error"),
                ],
            )
            .fragment("esm", [ConfigEntry::new().rule("import/extensions", "error")])
            .build()
            .unwrap()
    }

    #[test]
    fn settings_point_at_the_descriptor() {
        let tmp = TempDir::new().unwrap();
        let request = SelectionRequest::with_names(CallerLocation::from_dir(tmp.path()), ["node"])
            .unwrap();

        let config = resolve(&registry(), &request).unwrap();
        let project = config.settings[IMPORT_RESOLVER_SETTING]["typescript"]["project"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(project.ends_with("tsconfig.json"));
        assert_eq!(project, config.project_path().to_string_lossy());
    }

    #[test]
    fn unknown_name_stops_before_touching_the_filesystem() {
        let request = SelectionRequest::with_names(
            CallerLocation::from_dir("/definitely/not/here"),
            ["does-not-exist"],
        )
        .unwrap();

        let err = resolve(&registry(), &request).unwrap_err();
        assert!(matches!(err, ComposeError::UnknownFragment { ref name, .. } if name == "does-not-exist"));
    }

    #[test]
    fn missing_project_dir_is_an_io_error() {
        let request =
            SelectionRequest::with_names(CallerLocation::from_dir("/definitely/not/here"), ["node"])
                .unwrap();
        assert!(matches!(resolve(&registry(), &request), Err(ComposeError::Io(_))));
    }

    #[test]
    fn duplicate_selection_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let request = SelectionRequest::with_names(
            CallerLocation::from_dir(tmp.path()),
            ["node", "node"],
        )
        .unwrap();
        assert!(matches!(
            resolve(&registry(), &request),
            Err(ComposeError::DuplicateSelection { .. })
        ));
    }

    #[test]
    fn missing_module_system_fragment_is_unknown() {
        let tmp = TempDir::new().unwrap();
        let registry = FragmentRegistry::builder()
            .fragment("node", [ConfigEntry::new()])
            .build()
            .unwrap();
        let request =
            SelectionRequest::with_names(CallerLocation::from_dir(tmp.path()), ["node"]).unwrap();

        let err = resolve(&registry, &request).unwrap_err();
        assert!(matches!(err, ComposeError::UnknownFragment { ref name, .. } if name == "esm"));
    }
}
