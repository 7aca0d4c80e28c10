//! Declarative definitions of plugin configuration attributes and their validation.

use super::error::ConfigViolation;
use serde::Serialize;
use serde_json::{Map, Value};

/// Value type a configuration attribute must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigKind {
    String,
    /// Array of strings. A single string stands for a one-element list.
    List,
    Boolean,
    Number,
}

impl ConfigKind {
    fn accepts(self, value: &Value) -> bool {
        match self {
            ConfigKind::String => value.is_string(),
            ConfigKind::List => {
                value.is_string()
                    || value
                        .as_array()
                        .is_some_and(|items| items.iter().all(Value::is_string))
            }
            ConfigKind::Boolean => value.is_boolean(),
            ConfigKind::Number => value.is_number(),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            ConfigKind::String => "a string",
            ConfigKind::List => "a list of strings",
            ConfigKind::Boolean => "a boolean",
            ConfigKind::Number => "a number",
        }
    }
}

/// Describes one attribute for the administration interface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigDefinition {
    pub code: &'static str,
    pub label: &'static str,
    pub kind: ConfigKind,
    pub default: Value,
    pub required: bool,
}

/// Checks `attributes` against `definitions`.
///
/// Returns one violation per defined attribute that is required but missing (or null)
/// or present with the wrong type. Attributes without a definition are ignored.
pub fn check_config(definitions: &[ConfigDefinition], attributes: &Map<String, Value>) -> Vec<ConfigViolation> {
    definitions
        .iter()
        .filter_map(|def| match attributes.get(def.code) {
            None | Some(Value::Null) if def.required => Some(ConfigViolation {
                code: def.code.to_string(),
                message: "Configuration value is required".to_string(),
            }),
            None | Some(Value::Null) => None,
            Some(value) if !def.kind.accepts(value) => Some(ConfigViolation {
                code: def.code.to_string(),
                message: format!("Configuration value must be {}", def.kind.describe()),
            }),
            Some(_) => None,
        })
        .collect()
}
