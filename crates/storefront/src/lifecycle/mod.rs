use crate::clients::{OrderClient, ProductClient};
use crate::config::{Config, ConfigError};
use crate::html::{ClientRegistry, HtmlContext, TemplateSet, ViewError};
use crate::observer::Basket;
use crate::plugin::{self, PluginError, PluginItem};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    View(#[from] ViewError),
}

/// Starts the stores and wires the HTML clients to them.
///
/// # Example
///
/// ```ignore
/// let shop = Storefront::new(Config::from_toml_str(DEFAULT_CONFIG)?)?;
///
/// let mut basket = shop.basket("EUR")?;
/// basket.add_product(item).await?;
/// drop(basket);
///
/// shop.shutdown().await?;
/// ```
pub struct Storefront {
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    pub html: HtmlContext,
    plugins: Vec<PluginItem>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Storefront {
    /// Spawns the catalog and order actors and builds the default client tree.
    ///
    /// Plugin items are read from the `plugins` array of the configuration.
    pub fn new(config: Config) -> Result<Self, StorefrontError> {
        let plugins = config
            .get_as::<Vec<PluginItem>>("plugins")?
            .unwrap_or_default();
        Ok(Self::with_templates(config, TemplateSet::bundled()?, plugins))
    }

    pub fn with_templates(
        config: Config,
        templates: TemplateSet,
        plugins: Vec<PluginItem>,
    ) -> Self {
        let (product_actor, product_client) = crate::product_actor::new();
        let (order_actor, order_client) = crate::order_actor::new();

        let product_handle = tokio::spawn(product_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(()));

        let order_client = OrderClient::new(order_client);
        let html = HtmlContext {
            config: Arc::new(config),
            templates: Arc::new(templates),
            registry: Arc::new(ClientRegistry::with_defaults()),
            orders: order_client.clone(),
        };

        info!(plugins = plugins.len(), "Storefront started");
        Self {
            product_client: ProductClient::new(product_client),
            order_client,
            html,
            plugins,
            handles: vec![product_handle, order_handle],
        }
    }

    /// A new basket with all enabled plugins registered.
    ///
    /// The plugins hold catalog clients; drop the basket before [`shutdown`](Self::shutdown).
    pub fn basket(&self, currency_id: &str) -> Result<Basket, PluginError> {
        let mut basket = Basket::new(currency_id);
        plugin::register_all(&self.plugins, &self.product_client, basket.publisher_mut())?;
        Ok(basket)
    }

    /// Closes all store channels and waits for the actors to finish.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        drop(self.html);
        drop(self.order_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
