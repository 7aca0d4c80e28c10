//! Copies catalog product properties onto order line items.
//!
//! Configuration:
//! - `types`: property type codes to copy, e.g. `["package-length", "package-weight"]`
//!
//! Every listed property found for the line item's product becomes an order product
//! attribute of type [`PRODUCT_PROPERTY_TYPE`] with the property type as its code.

use super::config::{check_config, ConfigDefinition, ConfigKind};
use super::error::{ConfigViolation, PluginError};
use super::item::PluginItem;
use super::PluginProvider;
use crate::clients::ProductClient;
use crate::model::{
    AttributeValue, OrderProduct, OrderProductAttribute, Product, ProductDomain, ProductSearch,
    PRODUCT_PROPERTY_TYPE,
};
use crate::observer::{OrderEvent, OrderListener, Payload, Publisher};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use shop_framework::ActorClient;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::debug;

pub const PROVIDER: &str = "PropertyAdd";

pub struct PropertyAdd {
    item: PluginItem,
    catalog: ProductClient,
}

impl PropertyAdd {
    pub fn new(item: PluginItem, catalog: ProductClient) -> Self {
        Self { item, catalog }
    }

    pub fn config_be() -> Vec<ConfigDefinition> {
        vec![ConfigDefinition {
            code: "types",
            label: "Property type codes",
            kind: ConfigKind::List,
            default: json!([]),
            required: true,
        }]
    }

    fn types(&self) -> Vec<String> {
        self.item.config_list("types")
    }

    /// Enriches a single line item.
    pub async fn add_to_product(&self, product: OrderProduct) -> Result<OrderProduct, PluginError> {
        let mut products = self.add_to_products(vec![product]).await?;
        products.pop().ok_or_else(|| PluginError::TypeMismatch {
            plugin: PROVIDER.to_string(),
            expected: "product",
            found: "product list",
        })
    }

    /// Enriches all line items with a single catalog query.
    pub async fn add_to_products(
        &self,
        mut products: Vec<OrderProduct>,
    ) -> Result<Vec<OrderProduct>, PluginError> {
        let types = self.types();
        if types.is_empty() || products.is_empty() {
            return Ok(products);
        }

        let ids: BTreeSet<_> = products.iter().filter_map(|p| p.product_id.clone()).collect();
        let codes: BTreeSet<_> = products.iter().map(|p| p.product_code.clone()).collect();
        debug!(?types, items = products.len(), codes = codes.len(), "Adding product properties");

        let catalog = self.properties(ids.into_iter().collect(), codes.into_iter().collect()).await?;

        for product in &mut products {
            if let Some(source) = catalog.get(&product.product_code) {
                add_attributes(product, source, &types);
            }
        }
        Ok(products)
    }

    /// Products matching any of the ids or codes, with their properties, keyed by code.
    async fn properties(
        &self,
        ids: Vec<crate::model::ProductId>,
        codes: Vec<String>,
    ) -> Result<HashMap<String, Product>, PluginError> {
        let filter = ProductSearch {
            ids,
            codes,
            domains: vec![ProductDomain::Property],
        };
        let hits = self.catalog.search(filter).await?;
        Ok(hits.into_iter().map(|p| (p.code.clone(), p)).collect())
    }
}

fn add_attributes(item: &mut OrderProduct, source: &Product, types: &[String]) {
    for type_code in types {
        let Some(value) = AttributeValue::from_values(source.property_values(type_code)) else {
            continue;
        };

        let attribute = match item.attribute_item(type_code, PRODUCT_PROPERTY_TYPE) {
            Some(existing) => OrderProductAttribute {
                value,
                ..existing.clone()
            },
            None => OrderProductAttribute::new(PRODUCT_PROPERTY_TYPE, type_code.as_str(), value),
        };
        item.set_attribute_item(attribute);
    }
}

#[async_trait]
impl OrderListener for PropertyAdd {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn on_notify(&self, event: OrderEvent, payload: Payload) -> Result<Payload, PluginError> {
        if self.types().is_empty() {
            return Ok(payload);
        }

        debug!(%event, "Notified");
        match payload {
            Payload::Product(product) => self.add_to_product(product).await.map(Payload::Product),
            Payload::Products(products) => self.add_to_products(products).await.map(Payload::Products),
            other => Err(PluginError::TypeMismatch {
                plugin: PROVIDER.to_string(),
                expected: "product or product list",
                found: other.kind(),
            }),
        }
    }
}

impl PluginProvider for PropertyAdd {
    fn item(&self) -> &PluginItem {
        &self.item
    }

    fn check_config_be(&self, attributes: &Map<String, Value>) -> Vec<ConfigViolation> {
        check_config(&Self::config_be(), attributes)
    }

    fn register(self: Arc<Self>, publisher: &mut Publisher) {
        let listener: Arc<dyn OrderListener> = self;
        publisher.attach(listener.clone(), OrderEvent::AddProductBefore);
        publisher.attach(listener, OrderEvent::SetProductsBefore);
    }
}
