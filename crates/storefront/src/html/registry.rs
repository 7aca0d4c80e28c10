//! Resolution of `(path, variant)` pairs to client implementations.

use super::client::HtmlClient;
use super::error::ViewError;
use super::template::TemplateSet;
use crate::clients::OrderClient;
use crate::config::Config;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_VARIANT: &str = "Default";

type Factory = Arc<dyn Fn(&HtmlContext, &str) -> Result<Box<dyn HtmlClient>, ViewError> + Send + Sync>;

/// Everything a client needs besides the per-request view.
#[derive(Clone)]
pub struct HtmlContext {
    pub config: Arc<Config>,
    pub templates: Arc<TemplateSet>,
    pub registry: Arc<ClientRegistry>,
    pub orders: OrderClient,
}

impl HtmlContext {
    pub fn create(&self, path: &str, variant: Option<&str>) -> Result<Box<dyn HtmlClient>, ViewError> {
        self.registry.create(self, path, variant)
    }

    /// Template resolved from `client/html/<path>/default/<conf>` or `defaults`.
    pub(crate) fn template(&self, path: &str, conf: &str, defaults: &[&str]) -> Result<String, ViewError> {
        self.templates.resolve(
            &self.config,
            &format!("client/html/{path}/default/{conf}"),
            defaults,
        )
    }
}

/// Maps `(path, variant)` to the factory building that client.
#[derive(Default)]
pub struct ClientRegistry {
    factories: HashMap<(String, String), Factory>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with all built-in clients under the [`DEFAULT_VARIANT`].
    pub fn with_defaults() -> Self {
        use super::{account_history_detail as detail, email_delivery as delivery, leaf::LeafClient};

        let mut registry = Self::new();
        registry.register(detail::PATH, DEFAULT_VARIANT, |ctx, _| {
            Ok(Box::new(detail::AccountHistoryDetail::new(ctx)?))
        });
        for part in detail::SUBPARTS {
            registry.register(&format!("{}/{part}", detail::PATH), DEFAULT_VARIANT, |ctx, path| {
                Ok(Box::new(LeafClient::new(ctx, path)))
            });
        }

        registry.register(delivery::PATH, DEFAULT_VARIANT, |ctx, _| {
            Ok(Box::new(delivery::EmailDelivery::new(ctx)?))
        });
        registry.register(&format!("{}/text", delivery::PATH), DEFAULT_VARIANT, |ctx, path| {
            Ok(Box::new(LeafClient::text_part(ctx, path)))
        });
        registry.register(&format!("{}/html", delivery::PATH), DEFAULT_VARIANT, |ctx, path| {
            Ok(Box::new(LeafClient::html_part(ctx, path)))
        });
        registry
    }

    /// Registers or replaces the factory for `(path, variant)`.
    pub fn register<F>(&mut self, path: &str, variant: &str, factory: F)
    where
        F: Fn(&HtmlContext, &str) -> Result<Box<dyn HtmlClient>, ViewError> + Send + Sync + 'static,
    {
        self.factories
            .insert((path.to_string(), variant.to_string()), Arc::new(factory));
    }

    /// Builds the client for `path`.
    ///
    /// The variant is taken from `variant`, else from the configuration key
    /// `client/html/<path>/name`, else it is [`DEFAULT_VARIANT`].
    pub fn create(
        &self,
        ctx: &HtmlContext,
        path: &str,
        variant: Option<&str>,
    ) -> Result<Box<dyn HtmlClient>, ViewError> {
        let configured = format!("client/html/{path}/name");
        let variant = variant
            .or_else(|| ctx.config.get_str(&configured))
            .unwrap_or(DEFAULT_VARIANT);

        let factory = self
            .factories
            .get(&(path.to_string(), variant.to_string()))
            .ok_or_else(|| ViewError::UnknownClient {
                path: path.to_string(),
                variant: variant.to_string(),
            })?;
        debug!(path, variant, "Creating HTML client");
        factory(ctx, path)
    }
}
