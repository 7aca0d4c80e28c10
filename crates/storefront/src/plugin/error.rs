//! Error types for order plugins.

use crate::product_actor::ProductError;
use std::fmt::Display;
use thiserror::Error;

/// One configuration attribute that failed its definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigViolation {
    pub code: String,
    pub message: String,
}

impl Display for ConfigViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

#[derive(Debug, Error)]
pub enum PluginError {
    /// The notification carried a value of a shape the plugin cannot handle.
    #[error("Plugin {plugin} expects a {expected} payload, got {found}")]
    TypeMismatch {
        plugin: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid plugin configuration: {}", join(.0))]
    Validation(Vec<ConfigViolation>),

    #[error("Unknown plugin provider {0:?}")]
    UnknownProvider(String),

    #[error(transparent)]
    Catalog(#[from] ProductError),
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
