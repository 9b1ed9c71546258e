//! Selection requests: which fragments to compose, and how.

use crate::allowlist::DependencyAllowlist;
use crate::error::ComposeError;
use crate::files::{FilesDirective, IgnoresDirective};
use crate::fragment::FragmentName;
use crate::paths::CallerLocation;
use crate::types::SourceType;

/// Default project descriptor file name.
pub const DEFAULT_PROJECT_DESCRIPTOR: &str = "tsconfig.json";

/// Default project descriptor directory, relative to the caller.
pub const DEFAULT_PROJECT_DIR: &str = "./";

/// Everything about a request except the caller and fragment list.
///
/// Every default lives in the [`Default`] impl; preset builders pass this
/// struct through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Which files the configuration applies to.
    pub files: FilesDirective,
    /// Which files are skipped entirely.
    pub ignores: Option<IgnoresDirective>,
    /// Project descriptor file name.
    pub project_descriptor_name: String,
    /// Project descriptor directory, relative to the caller.
    pub project_descriptor_dir: String,
    /// Whether to append the module-system fragment when not selected.
    pub include_module_system_fragment: bool,
    /// Source type recorded in the language options.
    pub source_type: SourceType,
    /// Packages exempt from the extraneous-dependency diagnostic.
    pub extraneous_dependency_allowlist: Option<DependencyAllowlist>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            files: FilesDirective::All,
            ignores: None,
            project_descriptor_name: DEFAULT_PROJECT_DESCRIPTOR.to_string(),
            project_descriptor_dir: DEFAULT_PROJECT_DIR.to_string(),
            include_module_system_fragment: true,
            source_type: SourceType::Module,
            extraneous_dependency_allowlist: None,
        }
    }
}

impl ResolveOptions {
    /// Sets the files directive.
    #[must_use]
    pub fn files(mut self, files: FilesDirective) -> Self {
        self.files = files;
        self
    }

    /// Sets the ignores directive.
    #[must_use]
    pub fn ignores(mut self, ignores: IgnoresDirective) -> Self {
        self.ignores = Some(ignores);
        self
    }

    /// Sets the project descriptor file name.
    #[must_use]
    pub fn project_descriptor_name(mut self, name: impl Into<String>) -> Self {
        self.project_descriptor_name = name.into();
        self
    }

    /// Sets the project descriptor directory.
    #[must_use]
    pub fn project_descriptor_dir(mut self, dir: impl Into<String>) -> Self {
        self.project_descriptor_dir = dir.into();
        self
    }

    /// Sets whether the module-system fragment is auto-included.
    #[must_use]
    pub fn include_module_system_fragment(mut self, include: bool) -> Self {
        self.include_module_system_fragment = include;
        self
    }

    /// Sets the source type.
    #[must_use]
    pub fn source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = source_type;
        self
    }

    /// Sets the dependency allowlist.
    #[must_use]
    pub fn extraneous_dependency_allowlist(mut self, allowlist: DependencyAllowlist) -> Self {
        self.extraneous_dependency_allowlist = Some(allowlist);
        self
    }
}

/// The inputs describing one configuration output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest {
    /// Where the requesting configuration module lives.
    pub caller: CallerLocation,
    /// Fragments to compose, in order.
    pub fragments: Vec<FragmentName>,
    /// Remaining options.
    pub options: ResolveOptions,
}

impl SelectionRequest {
    /// Creates a request with default options and no fragments.
    #[must_use]
    pub fn new(caller: CallerLocation) -> Self {
        Self {
            caller,
            fragments: Vec::new(),
            options: ResolveOptions::default(),
        }
    }

    /// Creates a request selecting fragments by name.
    ///
    /// # Errors
    ///
    /// Returns an error if any name is not a valid fragment name.
    pub fn with_names<I, S>(caller: CallerLocation, names: I) -> Result<Self, ComposeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fragments = names
            .into_iter()
            .map(|n| FragmentName::new(n.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            caller,
            fragments,
            options: ResolveOptions::default(),
        })
    }

    /// Appends a fragment to the selection.
    #[must_use]
    pub fn fragment(mut self, name: FragmentName) -> Self {
        self.fragments.push(name);
        self
    }

    /// Replaces the options.
    #[must_use]
    pub fn options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns `true` if the module-system fragment was explicitly selected.
    #[must_use]
    pub fn selects_module_system(&self) -> bool {
        self.fragments.iter().any(FragmentName::is_module_system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_enumerated() {
        let options = ResolveOptions::default();
        assert_eq!(options.files, FilesDirective::All);
        assert!(options.ignores.is_none());
        assert_eq!(options.project_descriptor_name, "tsconfig.json");
        assert_eq!(options.project_descriptor_dir, "./");
        assert!(options.include_module_system_fragment);
        assert_eq!(options.source_type, SourceType::Module);
        assert!(options.extraneous_dependency_allowlist.is_none());
    }

    #[test]
    fn with_names_validates_each_name() {
        let caller = CallerLocation::from_dir(".");
        assert!(SelectionRequest::with_names(caller.clone(), ["node-ts", "react"]).is_ok());
        assert!(SelectionRequest::with_names(caller, ["node_ts"]).is_err());
    }

    #[test]
    fn detects_explicit_module_system_selection() {
        let caller = CallerLocation::from_dir(".");
        let plain = SelectionRequest::with_names(caller.clone(), ["node-ts"]).unwrap();
        let explicit = SelectionRequest::with_names(caller, ["node-ts", "esm"]).unwrap();
        assert!(!plain.selects_module_system());
        assert!(explicit.selects_module_system());
    }
}
