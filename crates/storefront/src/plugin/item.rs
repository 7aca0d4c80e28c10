use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A configured plugin instance as the shop owner set it up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginItem {
    pub id: u32,
    /// Name of the provider implementation, e.g. `PropertyAdd`.
    pub provider: String,
    pub label: String,
    /// Registration order; lower positions see notifications first.
    pub position: i32,
    /// Disabled items are not registered.
    pub status: bool,
    #[serde(default)]
    pub config: Map<String, Value>,
}

impl PluginItem {
    pub fn new(id: u32, provider: impl Into<String>, config: Map<String, Value>) -> Self {
        let provider = provider.into();
        Self {
            id,
            label: provider.clone(),
            provider,
            position: 0,
            status: true,
            config,
        }
    }

    /// Configured list of strings for `key`. A single string reads as a one-element list;
    /// anything else reads as empty.
    pub fn config_list(&self, key: &str) -> Vec<String> {
        match self.config.get(key) {
            Some(Value::String(value)) => vec![value.clone()],
            Some(Value::Array(values)) => values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }
}
