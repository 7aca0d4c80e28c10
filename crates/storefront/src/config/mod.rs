//! # Configuration
//!
//! Flat key/value configuration addressed by slash separated paths such as
//! `client/html/email/from-name`. Nested TOML tables are flattened, so
//!
//! ```toml
//! [client.html.email]
//! from-name = "Demo shop"
//! ```
//!
//! and `"client/html/email/from-name" = "Demo shop"` are the same entry.

use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use thiserror::Error;
use toml::Value;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Sample configuration shipped with the crate.
pub const DEFAULT_CONFIG: &str = include_str!("../../config/storefront.toml");

#[derive(Debug, Clone, Default)]
pub struct Config {
    entries: BTreeMap<String, Value>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = source.parse()?;
        let mut config = Self::new();
        flatten("", Value::Table(table), &mut config.entries);
        Ok(config)
    }

    /// Sets or replaces one entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// String value of `key`. Entries of another type read as absent.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn get_str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_str(key).unwrap_or(default)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Deserializes the entry at `key`, e.g. an array of tables.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        self.entries
            .get(key)
            .map(|value| value.clone().try_into())
            .transpose()
            .map_err(ConfigError::from)
    }

    /// List value of `key`. A single string is read as a one element list and
    /// non-string array members are skipped.
    pub fn get_list(&self, key: &str) -> Option<Vec<String>> {
        match self.entries.get(key)? {
            Value::Array(values) => Some(
                values
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
            ),
            Value::String(value) => Some(vec![value.clone()]),
            _ => None,
        }
    }

    pub fn get_list_or(&self, key: &str, default: &[&str]) -> Vec<String> {
        self.get_list(key)
            .unwrap_or_else(|| default.iter().map(|s| s.to_string()).collect())
    }

    /// Two-level lookup: the feature specific key wins when it is set, otherwise the
    /// generic key is used.
    pub fn resolve(&self, specific: &str, generic: &str) -> Option<&str> {
        self.get_str(specific).or_else(|| self.get_str(generic))
    }
}

fn flatten(prefix: &str, value: Value, entries: &mut BTreeMap<String, Value>) {
    match value {
        Value::Table(table) => {
            for (key, value) in table {
                let path = if prefix.is_empty() {
                    key
                } else {
                    format!("{prefix}/{key}")
                };
                flatten(&path, value, entries);
            }
        }
        value => {
            entries.insert(prefix.to_string(), value);
        }
    }
}
