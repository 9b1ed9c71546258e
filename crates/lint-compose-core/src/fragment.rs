//! Named configuration fragments.

use crate::error::ComposeError;
use crate::types::ConfigEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the fragment that enables ES-module-aware parsing and resolution.
pub const MODULE_SYSTEM_FRAGMENT: &str = "esm";

/// A validated fragment name (non-empty, `[a-z0-9-]` only).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FragmentName(String);

impl FragmentName {
    /// Creates a new fragment name.
    ///
    /// # Errors
    ///
    /// Returns error if the name is empty or contains invalid characters.
    pub fn new(name: &str) -> Result<Self, ComposeError> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid {
            return Err(ComposeError::InvalidFragmentName {
                name: name.to_string(),
            });
        }
        Ok(Self(name.to_string()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the module-system fragment.
    #[must_use]
    pub fn is_module_system(&self) -> bool {
        self.0 == MODULE_SYSTEM_FRAGMENT
    }
}

impl fmt::Display for FragmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for FragmentName {
    type Error = ComposeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<FragmentName> for String {
    fn from(name: FragmentName) -> Self {
        name.0
    }
}

/// A named, ordered bundle of partial configuration entries.
///
/// Entry order encodes plugin-registration-before-rule-usage and is kept
/// verbatim wherever the fragment is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    name: FragmentName,
    entries: Vec<ConfigEntry>,
}

impl Fragment {
    /// Creates a fragment from its name and entries.
    #[must_use]
    pub fn new(name: FragmentName, entries: Vec<ConfigEntry>) -> Self {
        Self { name, entries }
    }

    /// Returns the fragment name.
    #[must_use]
    pub fn name(&self) -> &FragmentName {
        &self.name
    }

    /// Returns the entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[ConfigEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_kebab_case_names() {
        assert!(FragmentName::new("node-ts-with-prettier").is_ok());
        assert!(FragmentName::new("es2024").is_ok());
    }

    #[test]
    fn rejects_empty_and_uppercase_names() {
        assert!(matches!(
            FragmentName::new(""),
            Err(ComposeError::InvalidFragmentName { .. })
        ));
        assert!(FragmentName::new("React").is_err());
        assert!(FragmentName::new("node ts").is_err());
    }

    #[test]
    fn module_system_name_is_detected() {
        assert!(FragmentName::new("esm").unwrap().is_module_system());
        assert!(!FragmentName::new("node").unwrap().is_module_system());
    }
}
