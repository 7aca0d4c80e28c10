//! # Product Client
//!
//! High-level API for the catalog store. Wraps a `ResourceClient<Product>` and exposes
//! catalog-specific methods.
use crate::model::{Product, ProductCreate, ProductId, ProductProperty};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use shop_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            e => ProductError::ActorCommunicationError(e.to_string()),
        }
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Appends a property to a product and returns its new property count.
    #[instrument(skip(self))]
    pub async fn add_property(
        &self,
        id: ProductId,
        property: ProductProperty,
    ) -> Result<usize, ProductError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::AddProperty(property))
            .await
        {
            Ok(ProductActionResult::AddProperty(count)) => Ok(count),
            Ok(other) => Err(ProductError::ActorCommunicationError(format!(
                "unexpected result {other:?}"
            ))),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Removes all properties of one type and returns how many were removed.
    #[instrument(skip(self))]
    pub async fn remove_properties(
        &self,
        id: ProductId,
        type_code: &str,
    ) -> Result<usize, ProductError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, ProductAction::RemoveProperties(type_code.to_string()))
            .await
        {
            Ok(ProductActionResult::RemoveProperties(count)) => Ok(count),
            Ok(other) => Err(ProductError::ActorCommunicationError(format!(
                "unexpected result {other:?}"
            ))),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
