//! # Order Plugins
//!
//! Providers that hook into the [`Basket`](crate::observer::Basket) through the
//! [`Publisher`]. Each provider is configured by a [`PluginItem`] and subscribes itself to
//! the events it needs in [`PluginProvider::register`].
//!
//! ## Providers
//!
//! - [`PropertyAdd`] - copies catalog product properties onto order line items

pub mod config;
pub mod error;
pub mod item;
pub mod property_add;

pub use config::{check_config, ConfigDefinition, ConfigKind};
pub use error::{ConfigViolation, PluginError};
pub use item::PluginItem;
pub use property_add::PropertyAdd;

use crate::clients::ProductClient;
use crate::observer::{OrderListener, Publisher};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info};

/// An order listener built from a [`PluginItem`].
pub trait PluginProvider: OrderListener {
    fn item(&self) -> &PluginItem;

    /// Validates configuration attributes entered by the shop owner.
    fn check_config_be(&self, attributes: &Map<String, Value>) -> Vec<ConfigViolation>;

    /// Subscribes the provider to its events.
    fn register(self: Arc<Self>, publisher: &mut Publisher);
}

/// Builds the provider named by `item`.
pub fn create(item: PluginItem, catalog: &ProductClient) -> Result<Arc<dyn PluginProvider>, PluginError> {
    match item.provider.as_str() {
        property_add::PROVIDER => Ok(Arc::new(PropertyAdd::new(item, catalog.clone()))),
        other => Err(PluginError::UnknownProvider(other.to_string())),
    }
}

/// Builds and registers all enabled plugin items in ascending position.
///
/// Nothing is registered unless every enabled item names a known provider and has a
/// valid configuration.
pub fn register_all(
    items: &[PluginItem],
    catalog: &ProductClient,
    publisher: &mut Publisher,
) -> Result<Vec<Arc<dyn PluginProvider>>, PluginError> {
    let mut enabled: Vec<&PluginItem> = items.iter().filter(|item| item.status).collect();
    enabled.sort_by_key(|item| item.position);

    let mut providers = Vec::with_capacity(enabled.len());
    for item in enabled {
        let provider = create(item.clone(), catalog)?;
        let violations = provider.check_config_be(&item.config);
        if !violations.is_empty() {
            return Err(PluginError::Validation(violations));
        }
        providers.push(provider);
    }

    for provider in &providers {
        debug!(plugin = provider.name(), id = provider.item().id, "Registering");
        provider.clone().register(publisher);
    }
    info!(count = providers.len(), "Order plugins registered");
    Ok(providers)
}
