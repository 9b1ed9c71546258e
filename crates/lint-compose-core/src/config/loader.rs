//! DTO → domain conversion with validation.

use super::config_dto::{AllowlistDto, ComposeConfigDto, FragmentDto, PresetDto};
use super::{ComposeConfig, PresetSpec, Selection};
use crate::allowlist::DependencyAllowlist;
use crate::error::ComposeError;
use crate::files::{FilesDirective, IgnoresDirective};
use crate::fragment::FragmentName;
use crate::paths::CallerLocation;
use crate::registry::FragmentRegistry;
use crate::request::ResolveOptions;
use crate::types::{ConfigEntry, SourceType};

/// Errors during DTO → domain conversion.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A field-level validation error.
    #[error("{context}: {source}")]
    Validation {
        /// Where the error occurred (e.g., "select[1]").
        context: String,
        /// The underlying composition error.
        source: ComposeError,
    },

    /// The `select` and `[preset]` keys are both set or both missing.
    #[error("exactly one of `select` or `[preset]` must be set")]
    AmbiguousSelection,

    /// Unknown source type string.
    #[error("source-type: {message}")]
    UnknownSourceType {
        /// Why the value was rejected.
        message: String,
    },
}

/// Converts a `ComposeConfigDto` into a validated [`ComposeConfig`].
///
/// # Errors
///
/// Returns the first error encountered during conversion.
pub fn load(dto: ComposeConfigDto, caller: CallerLocation) -> Result<ComposeConfig, LoadError> {
    let selection = match (dto.select, dto.preset) {
        (Some(names), None) => Selection::Fragments(convert_names(&names)?),
        (None, Some(preset)) => Selection::Preset(convert_preset(preset)),
        _ => return Err(LoadError::AmbiguousSelection),
    };

    let mut options = ResolveOptions::default();

    if let Some(raw) = &dto.files {
        options.files = FilesDirective::parse(raw).map_err(|e| validation("files", e))?;
    }
    if let Some(raw) = &dto.ignores {
        options.ignores = Some(IgnoresDirective::parse(raw).map_err(|e| validation("ignores", e))?);
    }
    if let Some(value) = &dto.source_type {
        options.source_type = value
            .parse::<SourceType>()
            .map_err(|message| LoadError::UnknownSourceType { message })?;
    }
    if let Some(include) = dto.module_system {
        options.include_module_system_fragment = include;
    }
    if let Some(descriptor) = dto.project.descriptor {
        options.project_descriptor_name = descriptor;
    }
    if let Some(dir) = dto.project.dir {
        options.project_descriptor_dir = dir;
    }
    options.extraneous_dependency_allowlist = dto.allowlist.map(convert_allowlist);

    let fragments = convert_fragments(dto.fragments)?;

    Ok(ComposeConfig {
        caller,
        selection,
        options,
        fragments,
    })
}

fn validation(context: impl Into<String>, source: ComposeError) -> LoadError {
    LoadError::Validation {
        context: context.into(),
        source,
    }
}

fn convert_names(names: &[String]) -> Result<Vec<FragmentName>, LoadError> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| FragmentName::new(n).map_err(|e| validation(format!("select[{i}]"), e)))
        .collect()
}

fn convert_preset(dto: PresetDto) -> PresetSpec {
    PresetSpec {
        kind: dto.kind,
        base: dto.base,
        typescript: dto.typescript,
        prettier: dto.prettier,
        tests: dto.tests,
        jsdoc: dto.jsdoc,
        esm: dto.esm,
    }
}

fn convert_allowlist(dto: AllowlistDto) -> DependencyAllowlist {
    DependencyAllowlist::new(dto.bundled_dependencies)
}

fn convert_fragments(dtos: Vec<FragmentDto>) -> Result<FragmentRegistry, LoadError> {
    dtos.into_iter()
        .fold(FragmentRegistry::builder(), |builder, dto| {
            builder.fragment(dto.name, dto.entries.into_iter().map(ConfigEntry::from))
        })
        .build()
        .map_err(|e| validation("fragment", e))
}
