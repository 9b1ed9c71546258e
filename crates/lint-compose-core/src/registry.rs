//! Immutable fragment registries.

use crate::error::ComposeError;
use crate::fragment::{Fragment, FragmentName};
use crate::types::ConfigEntry;
use std::collections::BTreeMap;
use tracing::debug;

/// Builder for a [`FragmentRegistry`].
///
/// Name validation and duplicate detection are deferred to [`build`](Self::build)
/// so fragment tables can be written as one chained expression.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    fragments: Vec<(String, Vec<ConfigEntry>)>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fragment with its ordered entries.
    #[must_use]
    pub fn fragment<I>(mut self, name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = ConfigEntry>,
    {
        self.fragments
            .push((name.into(), entries.into_iter().collect()));
        self
    }

    /// Adds an already constructed fragment.
    #[must_use]
    pub fn fragment_value(mut self, fragment: Fragment) -> Self {
        self.fragments.push((
            fragment.name().as_str().to_string(),
            fragment.entries().to_vec(),
        ));
        self
    }

    /// Builds the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is invalid or defined twice.
    pub fn build(self) -> Result<FragmentRegistry, ComposeError> {
        let mut fragments = BTreeMap::new();
        for (raw, entries) in self.fragments {
            let name = FragmentName::new(&raw)?;
            if fragments.contains_key(&name) {
                return Err(ComposeError::DuplicateFragment { name: raw });
            }
            fragments.insert(name.clone(), Fragment::new(name, entries));
        }
        debug!("Built registry with {} fragments", fragments.len());
        Ok(FragmentRegistry { fragments })
    }
}

/// An immutable mapping from fragment name to its expansion.
///
/// Built once and only ever read afterwards, so a shared reference can be
/// consulted by any number of resolutions at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentRegistry {
    fragments: BTreeMap<FragmentName, Fragment>,
}

impl FragmentRegistry {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Combines several registries into one.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::DuplicateFragment`] if two registries define
    /// the same name; one registry never silently shadows another.
    pub fn union(registries: &[&FragmentRegistry]) -> Result<Self, ComposeError> {
        let mut fragments = BTreeMap::new();
        for registry in registries {
            for (name, fragment) in &registry.fragments {
                if fragments.contains_key(name) {
                    return Err(ComposeError::DuplicateFragment {
                        name: name.to_string(),
                    });
                }
                fragments.insert(name.clone(), fragment.clone());
            }
        }
        debug!(
            "Combined {} registries into {} fragments",
            registries.len(),
            fragments.len()
        );
        Ok(Self { fragments })
    }

    /// Looks up a fragment by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Fragment> {
        let name = FragmentName::new(name).ok()?;
        self.fragments.get(&name)
    }

    /// Returns the entries of a fragment.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::UnknownFragment`] naming the missing key.
    pub fn expand(&self, name: &FragmentName) -> Result<&[ConfigEntry], ComposeError> {
        self.fragments
            .get(name)
            .map(Fragment::entries)
            .ok_or_else(|| ComposeError::UnknownFragment {
                name: name.to_string(),
                available: self.names().collect::<Vec<_>>().join(", "),
            })
    }

    /// Returns `true` if the registry defines `name`.
    #[must_use]
    pub fn contains(&self, name: &FragmentName) -> bool {
        self.fragments.contains_key(name)
    }

    /// Returns all fragment names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fragments.keys().map(FragmentName::as_str)
    }

    /// Returns all fragments in name order.
    pub fn fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.values()
    }

    /// Returns the number of fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns `true` if no fragments are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
