//! Built-in fragment registries.
//!
//! Each registry is built on first use and then shared read-only for the
//! rest of the process.

use crate::presets::PresetError;
use lint_compose_core::{ComposeError, FragmentRegistry};
use std::sync::OnceLock;

pub mod generic;
pub mod nextjs;
pub mod react;

type Cached = OnceLock<Result<FragmentRegistry, ComposeError>>;

static GENERIC: Cached = OnceLock::new();
static REACT: Cached = OnceLock::new();
static NEXTJS: Cached = OnceLock::new();
static BUILTIN: Cached = OnceLock::new();

fn cached(
    cell: &'static Cached,
    init: impl FnOnce() -> Result<FragmentRegistry, ComposeError>,
) -> Result<&'static FragmentRegistry, PresetError> {
    cell.get_or_init(init)
        .as_ref()
        .map_err(|e| PresetError::Registry {
            message: e.to_string(),
        })
}

/// Generic project fragments.
///
/// # Errors
///
/// Returns an error if the built-in fragment table is inconsistent.
pub fn generic_registry() -> Result<&'static FragmentRegistry, PresetError> {
    cached(&GENERIC, generic::build)
}

/// Generic fragments plus `react`.
///
/// # Errors
///
/// Returns an error if the built-in fragment table is inconsistent.
pub fn react_registry() -> Result<&'static FragmentRegistry, PresetError> {
    cached(&REACT, || {
        FragmentRegistry::union(&[&generic::build()?, &react::build()?])
    })
}

/// Generic fragments plus `nextjs`.
///
/// # Errors
///
/// Returns an error if the built-in fragment table is inconsistent.
pub fn nextjs_registry() -> Result<&'static FragmentRegistry, PresetError> {
    cached(&NEXTJS, || {
        FragmentRegistry::union(&[&generic::build()?, &nextjs::build()?])
    })
}

/// Every built-in fragment, for explicit selections.
///
/// # Errors
///
/// Returns an error if the built-in fragment table is inconsistent.
pub fn builtin_registry() -> Result<&'static FragmentRegistry, PresetError> {
    cached(&BUILTIN, || {
        FragmentRegistry::union(&[&generic::build()?, &react::build()?, &nextjs::build()?])
    })
}
