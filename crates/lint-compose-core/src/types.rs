//! Core types for configuration entries and resolved output.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// One partial configuration object: plugin bindings, rule settings,
/// language options, path-matching settings, or ignore patterns.
///
/// Serializes transparently as a JSON object so it can be handed to the
/// host tool without further transformation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigEntry(Map<String, Value>);

impl ConfigEntry {
    /// Creates an empty entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a JSON value, returning `None` unless it is an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Sets a top-level key, replacing any previous value.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Binds a plugin alias to the package that provides it.
    #[must_use]
    pub fn plugin(mut self, alias: impl Into<String>, package: impl Into<String>) -> Self {
        self.update_object("plugins", |plugins| {
            plugins.insert(alias.into(), Value::String(package.into()));
        });
        self
    }

    /// Sets a single rule, e.g. `("no-console", "off")`.
    #[must_use]
    pub fn rule(mut self, name: impl Into<String>, setting: impl Into<Value>) -> Self {
        self.update_object("rules", |rules| {
            rules.insert(name.into(), setting.into());
        });
        self
    }

    /// Restricts the entry to the given file globs.
    #[must_use]
    pub fn files<I, S>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set("files", string_array(patterns))
    }

    /// Adds ignore globs to the entry.
    #[must_use]
    pub fn ignores<I, S>(self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set("ignores", string_array(patterns))
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the `rules` object, if present.
    #[must_use]
    pub fn rules(&self) -> Option<&Map<String, Value>> {
        self.0.get("rules").and_then(Value::as_object)
    }

    /// Returns the `plugins` object, if present.
    #[must_use]
    pub fn plugins(&self) -> Option<&Map<String, Value>> {
        self.0.get("plugins").and_then(Value::as_object)
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Returns `true` if the entry has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn update_object(&mut self, key: &str, f: impl FnOnce(&mut Map<String, Value>)) {
        let mut object = match self.0.remove(key) {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        f(&mut object);
        self.0.insert(key.to_string(), Value::Object(object));
    }
}

impl From<Map<String, Value>> for ConfigEntry {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn string_array<I, S>(items: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Value::Array(
        items
            .into_iter()
            .map(|s| Value::String(s.into()))
            .collect(),
    )
}

/// How the host tool should parse source files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// ECMAScript modules.
    #[default]
    Module,
    /// `CommonJS` modules.
    Commonjs,
    /// Classic scripts.
    Script,
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module => write!(f, "module"),
            Self::Commonjs => write!(f, "commonjs"),
            Self::Script => write!(f, "script"),
        }
    }
}

impl FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "module" => Ok(Self::Module),
            "commonjs" => Ok(Self::Commonjs),
            "script" => Ok(Self::Script),
            other => Err(format!(
                "unknown source type `{other}`, expected: module, commonjs, script"
            )),
        }
    }
}

/// Parser options pointing the host at the project descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserOptions {
    /// Project descriptor file name (e.g. `tsconfig.json`).
    pub project: String,
    /// Absolute directory containing the descriptor.
    pub tsconfig_root_dir: PathBuf,
}

/// Language options recorded in the resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOptions {
    /// Source type the host parses files as.
    pub source_type: SourceType,
    /// Project descriptor location.
    pub parser_options: ParserOptions,
}

/// The final, flattened configuration handed to the host tool.
///
/// Field names and nesting match the host's configuration object exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    /// Inclusion globs.
    pub files: Vec<String>,
    /// Ignore globs.
    pub ignores: Vec<String>,
    /// Partial configuration objects in composition order.
    pub extends: Vec<ConfigEntry>,
    /// Project path and source type.
    pub language_options: LanguageOptions,
    /// Module-resolution settings.
    pub settings: Map<String, Value>,
}

impl ResolvedConfig {
    /// Returns the absolute path of the project descriptor.
    #[must_use]
    pub fn project_path(&self) -> PathBuf {
        let options = &self.language_options.parser_options;
        options.tsconfig_root_dir.join(&options.project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_builder_nests_plugins_and_rules() {
        let entry = ConfigEntry::new()
            .plugin("n", "eslint-plugin-n")
            .rule("n/no-missing-import", "error")
            .rule("no-console", json!(["warn", { "allow": ["error"] }]));

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "plugins": { "n": "eslint-plugin-n" },
                "rules": {
                    "n/no-missing-import": "error",
                    "no-console": ["warn", { "allow": ["error"] }]
                }
            })
        );
        assert_eq!(entry.rules().map(Map::len), Some(2));
    }

    #[test]
    fn entry_from_value_rejects_non_objects() {
        assert!(ConfigEntry::from_value(json!(["a"])).is_none());
        assert!(ConfigEntry::from_value(json!({ "rules": {} })).is_some());
    }

    #[test]
    fn source_type_round_trips_through_str() {
        assert_eq!("commonjs".parse::<SourceType>(), Ok(SourceType::Commonjs));
        assert_eq!(SourceType::default().to_string(), "module");
        assert!("esm".parse::<SourceType>().is_err());
    }

    #[test]
    fn resolved_config_uses_host_field_names() {
        let config = ResolvedConfig {
            files: vec!["**/*.ts".to_string()],
            ignores: vec![],
            extends: vec![ConfigEntry::new().rule("eqeqeq", "error")],
            language_options: LanguageOptions {
                source_type: SourceType::Module,
                parser_options: ParserOptions {
                    project: "tsconfig.json".to_string(),
                    tsconfig_root_dir: PathBuf::from("/repo"),
                },
            },
            settings: Map::new(),
        };

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["languageOptions"]["sourceType"], "module");
        assert_eq!(
            value["languageOptions"]["parserOptions"]["tsconfigRootDir"],
            "/repo"
        );
        assert_eq!(value["extends"][0]["rules"]["eqeqeq"], "error");
        assert_eq!(config.project_path(), PathBuf::from("/repo/tsconfig.json"));
    }
}
