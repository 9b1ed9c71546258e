//! # lint-compose-presets
//!
//! Built-in fragments and preset builders for lint-compose.
//!
//! ## Available Fragments
//!
//! | Name | Registry | Description |
//! |------|----------|-------------|
//! | `node` | generic | Node.js runtime rules |
//! | `node-ts` | generic | Node.js with TypeScript |
//! | `node-ts-with-prettier` | generic | `node-ts` plus Prettier |
//! | `node-ts-tests-with-prettier` | generic | `node-ts`, test files, and Prettier |
//! | `browser` | generic | Browser runtime rules |
//! | `browser-with-prettier` | generic | `browser` plus Prettier |
//! | `ts` | generic | Standalone TypeScript rules |
//! | `tests` | generic | Test-file rules |
//! | `prettier` | generic | Prettier integration |
//! | `esm` | generic | ES module parsing and import resolution |
//! | `jsdoc` | generic | `JSDoc` rules |
//! | `react` | react | React component rules |
//! | `nextjs` | nextjs | Next.js application rules |
//!
//! ## Usage
//!
//! ```ignore
//! use lint_compose_core::CallerLocation;
//! use lint_compose_presets::PresetBuilder;
//!
//! let config = PresetBuilder::react()
//!     .prettier(true)
//!     .tests(true)
//!     .resolve(CallerLocation::from_module_file("eslint.config.js"))?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fragments;
mod presets;

pub use fragments::{builtin_registry, generic_registry, nextjs_registry, react_registry};
pub use presets::{base_selection, Base, PresetBuilder, PresetError, PresetFlags, PresetKind};

/// Re-export core types for convenience.
pub use lint_compose_core::{CallerLocation, ResolveOptions, ResolvedConfig};
