//! # lint-compose-core
//!
//! Core engine for composing lint configurations from named fragments.
//!
//! This crate provides the building blocks the presets and the CLI sit on:
//!
//! - [`FragmentRegistry`] for immutable name → fragment lookup
//! - [`SelectionRequest`] and [`ResolveOptions`] describing one output
//! - [`resolve`] for turning a request into a [`ResolvedConfig`]
//! - [`FilesDirective`] / [`IgnoresDirective`] for file-set expansion
//! - [`CallerLocation`] for caller-relative project paths
//! - [`ComposeConfig`] for requests loaded from `lint-compose.toml`
//!
//! ## Example
//!
//! ```ignore
//! use lint_compose_core::{resolve, CallerLocation, ConfigEntry, FragmentRegistry, SelectionRequest};
//!
//! let registry = FragmentRegistry::builder()
//!     .fragment("node", [ConfigEntry::new().plugin("n", "eslint-plugin-n")])
//!     .fragment("esm", [ConfigEntry::new().rule("import/extensions", "error")])
//!     .build()?;
//!
//! let request = SelectionRequest::with_names(CallerLocation::from_dir("."), ["node"])?;
//! let config = resolve(&registry, &request)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod fragment;
mod matcher;
mod registry;
mod request;
mod resolver;
mod types;

/// Dependency allowlist overrides.
pub mod allowlist;
/// TOML configuration files.
pub mod config;
/// File-set directives.
pub mod files;
/// Caller-relative path resolution.
pub mod paths;

pub use allowlist::DependencyAllowlist;
pub use config::{ComposeConfig, ConfigError, PresetSpec, Selection};
pub use error::ComposeError;
pub use files::{FilesDirective, IgnoresDirective, RawDirective};
pub use fragment::{Fragment, FragmentName, MODULE_SYSTEM_FRAGMENT};
pub use matcher::FileMatcher;
pub use paths::CallerLocation;
pub use registry::{FragmentRegistry, RegistryBuilder};
pub use request::{ResolveOptions, SelectionRequest};
pub use resolver::{resolve, IMPORT_RESOLVER_SETTING};
pub use types::{ConfigEntry, LanguageOptions, ParserOptions, ResolvedConfig, SourceType};
