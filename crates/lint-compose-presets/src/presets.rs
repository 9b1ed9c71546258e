//! Preset builders for generic, React, and Next.js projects.
//!
//! A preset turns a handful of flags into an ordered fragment selection
//! using a fixed table, then hands the request to the core resolver:
//!
//! | base | typescript | prettier | tests | selection |
//! |------|-----------|----------|-------|-----------|
//! | node | no  | no  | -   | `node` (+ `tests`) |
//! | node | no  | yes | -   | `node`, `prettier` (+ `tests`) |
//! | node | yes | no  | -   | `node-ts` (+ `tests`) |
//! | node | yes | yes | no  | `node-ts-with-prettier` |
//! | node | yes | yes | yes | `node-ts-tests-with-prettier` |
//! | browser | - | yes | - | `browser-with-prettier` (+ `tests`, + `ts`) |
//! | browser | - | no  | - | `browser` (+ `tests`, + `ts`) |
//!
//! Framework presets then append their framework fragment, followed by
//! `jsdoc` and `esm` when requested.

use crate::fragments::{self, generic, nextjs, react};
use lint_compose_core::{
    resolve, CallerLocation, ComposeError, FragmentName, FragmentRegistry, PresetSpec,
    ResolveOptions, ResolvedConfig, SelectionRequest,
};
use std::fmt;
use std::str::FromStr;

/// Errors from interpreting or running a preset.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    /// Unknown preset kind string.
    #[error("unknown preset kind `{value}`, expected: generic, react, nextjs")]
    UnknownKind {
        /// The invalid value.
        value: String,
    },

    /// Unknown base string.
    #[error("unknown preset base `{value}`, expected: node, browser")]
    UnknownBase {
        /// The invalid value.
        value: String,
    },

    /// A built-in registry failed to build.
    #[error("built-in fragment registry is invalid: {message}")]
    Registry {
        /// The underlying error message.
        message: String,
    },

    /// Composition failed.
    #[error(transparent)]
    Compose(#[from] ComposeError),
}

/// Runtime environment a preset targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Base {
    /// Node.js.
    #[default]
    Node,
    /// Web browsers.
    Browser,
}

impl FromStr for Base {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "node" => Ok(Self::Node),
            "browser" => Ok(Self::Browser),
            other => Err(PresetError::UnknownBase {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node => write!(f, "node"),
            Self::Browser => write!(f, "browser"),
        }
    }
}

/// Which preset family to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetKind {
    /// Plain projects.
    Generic,
    /// React component projects.
    React,
    /// Next.js applications.
    Nextjs,
}

impl PresetKind {
    /// Returns the framework fragment appended after the base selection.
    #[must_use]
    pub fn framework_fragment(self) -> Option<&'static str> {
        match self {
            Self::Generic => None,
            Self::React => Some(react::REACT),
            Self::Nextjs => Some(nextjs::NEXTJS),
        }
    }

    /// Returns the registry this preset resolves against.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in fragment table is inconsistent.
    pub fn registry(self) -> Result<&'static FragmentRegistry, PresetError> {
        match self {
            Self::Generic => fragments::generic_registry(),
            Self::React => fragments::react_registry(),
            Self::Nextjs => fragments::nextjs_registry(),
        }
    }
}

impl FromStr for PresetKind {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generic" => Ok(Self::Generic),
            "react" => Ok(Self::React),
            "nextjs" => Ok(Self::Nextjs),
            other => Err(PresetError::UnknownKind {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PresetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => write!(f, "generic"),
            Self::React => write!(f, "react"),
            Self::Nextjs => write!(f, "nextjs"),
        }
    }
}

/// Flags consulted by the selection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PresetFlags {
    /// Runtime environment (default: node).
    pub base: Base,
    /// TypeScript support (default: true).
    pub typescript: bool,
    /// Prettier integration (default: false).
    pub prettier: bool,
    /// Test-file rules (default: false).
    pub tests: bool,
}

impl Default for PresetFlags {
    fn default() -> Self {
        Self {
            base: Base::Node,
            typescript: true,
            prettier: false,
            tests: false,
        }
    }
}

/// Looks up the base fragment selection for a set of flags.
#[must_use]
pub fn base_selection(flags: PresetFlags) -> &'static [&'static str] {
    use generic::{
        BROWSER, BROWSER_WITH_PRETTIER, NODE, NODE_TS, NODE_TS_TESTS_WITH_PRETTIER,
        NODE_TS_WITH_PRETTIER, PRETTIER, TESTS, TS,
    };

    let PresetFlags {
        base,
        typescript,
        prettier,
        tests,
    } = flags;

    match (base, typescript, prettier, tests) {
        (Base::Node, false, false, false) => &[NODE],
        (Base::Node, false, false, true) => &[NODE, TESTS],
        (Base::Node, false, true, false) => &[NODE, PRETTIER],
        (Base::Node, false, true, true) => &[NODE, PRETTIER, TESTS],
        (Base::Node, true, false, false) => &[NODE_TS],
        (Base::Node, true, false, true) => &[NODE_TS, TESTS],
        (Base::Node, true, true, false) => &[NODE_TS_WITH_PRETTIER],
        (Base::Node, true, true, true) => &[NODE_TS_TESTS_WITH_PRETTIER],
        (Base::Browser, false, true, false) => &[BROWSER_WITH_PRETTIER],
        (Base::Browser, false, true, true) => &[BROWSER_WITH_PRETTIER, TESTS],
        (Base::Browser, true, true, false) => &[BROWSER_WITH_PRETTIER, TS],
        (Base::Browser, true, true, true) => &[BROWSER_WITH_PRETTIER, TESTS, TS],
        (Base::Browser, false, false, false) => &[BROWSER],
        (Base::Browser, false, false, true) => &[BROWSER, TESTS],
        (Base::Browser, true, false, false) => &[BROWSER, TS],
        (Base::Browser, true, false, true) => &[BROWSER, TESTS, TS],
    }
}

/// Builds selection requests for one preset kind.
///
/// Everything other than the fragment list is carried in
/// [`ResolveOptions`] and passed to the resolver unchanged.
#[derive(Debug, Clone)]
pub struct PresetBuilder {
    kind: PresetKind,
    flags: PresetFlags,
    jsdoc: bool,
    esm: bool,
    options: ResolveOptions,
}

impl PresetBuilder {
    /// Creates a builder with default flags and options.
    #[must_use]
    pub fn new(kind: PresetKind) -> Self {
        Self {
            kind,
            flags: PresetFlags::default(),
            jsdoc: false,
            esm: false,
            options: ResolveOptions::default(),
        }
    }

    /// Creates a generic preset builder.
    #[must_use]
    pub fn generic() -> Self {
        Self::new(PresetKind::Generic)
    }

    /// Creates a React preset builder.
    #[must_use]
    pub fn react() -> Self {
        Self::new(PresetKind::React)
    }

    /// Creates a Next.js preset builder.
    #[must_use]
    pub fn nextjs() -> Self {
        Self::new(PresetKind::Nextjs)
    }

    /// Creates a builder from uninterpreted `[preset]` settings.
    ///
    /// Unset flags keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the kind or base is unknown.
    pub fn from_spec(spec: &PresetSpec, options: ResolveOptions) -> Result<Self, PresetError> {
        let mut builder = Self::new(spec.kind.parse()?).options(options);
        if let Some(base) = &spec.base {
            builder = builder.base(base.parse()?);
        }
        if let Some(typescript) = spec.typescript {
            builder = builder.typescript(typescript);
        }
        if let Some(prettier) = spec.prettier {
            builder = builder.prettier(prettier);
        }
        if let Some(tests) = spec.tests {
            builder = builder.tests(tests);
        }
        if let Some(jsdoc) = spec.jsdoc {
            builder = builder.jsdoc(jsdoc);
        }
        if let Some(esm) = spec.esm {
            builder = builder.esm(esm);
        }
        Ok(builder)
    }

    /// Sets the base environment.
    #[must_use]
    pub fn base(mut self, base: Base) -> Self {
        self.flags.base = base;
        self
    }

    /// Sets TypeScript support.
    #[must_use]
    pub fn typescript(mut self, enabled: bool) -> Self {
        self.flags.typescript = enabled;
        self
    }

    /// Sets Prettier integration.
    #[must_use]
    pub fn prettier(mut self, enabled: bool) -> Self {
        self.flags.prettier = enabled;
        self
    }

    /// Sets test-file rules.
    #[must_use]
    pub fn tests(mut self, enabled: bool) -> Self {
        self.flags.tests = enabled;
        self
    }

    /// Appends the `jsdoc` fragment.
    #[must_use]
    pub fn jsdoc(mut self, enabled: bool) -> Self {
        self.jsdoc = enabled;
        self
    }

    /// Appends the `esm` fragment explicitly.
    ///
    /// The resolver will then not auto-include it a second time.
    #[must_use]
    pub fn esm(mut self, enabled: bool) -> Self {
        self.esm = enabled;
        self
    }

    /// Replaces the options passed through to the resolver.
    #[must_use]
    pub fn options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the preset kind.
    #[must_use]
    pub fn kind(&self) -> PresetKind {
        self.kind
    }

    /// Returns the table flags.
    #[must_use]
    pub fn flags(&self) -> PresetFlags {
        self.flags
    }

    /// Returns the ordered fragment selection.
    #[must_use]
    pub fn selection(&self) -> Vec<&'static str> {
        let mut names = base_selection(self.flags).to_vec();
        names.extend(self.kind.framework_fragment());
        if self.jsdoc {
            names.push(generic::JSDOC);
        }
        if self.esm {
            names.push(generic::ESM);
        }
        names
    }

    /// Builds the selection request.
    ///
    /// # Errors
    ///
    /// Returns an error if a selected name is not a valid fragment name.
    pub fn build(&self, caller: CallerLocation) -> Result<SelectionRequest, ComposeError> {
        let selection = self.selection();
        tracing::debug!(
            "Preset {} ({}) selects: {}",
            self.kind,
            self.flags.base,
            selection.join(", ")
        );
        let fragments = selection
            .into_iter()
            .map(FragmentName::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SelectionRequest {
            caller,
            fragments,
            options: self.options.clone(),
        })
    }

    /// Builds the request and resolves it against this preset's registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is invalid or resolution fails.
    pub fn resolve(&self, caller: CallerLocation) -> Result<ResolvedConfig, PresetError> {
        let registry = self.kind.registry()?;
        let request = self.build(caller)?;
        Ok(resolve(registry, &request)?)
    }
}
