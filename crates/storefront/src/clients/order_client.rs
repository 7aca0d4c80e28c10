//! # Order Client
use crate::model::{CustomerId, DeliveryStatus, Order, OrderCreate, OrderId, OrderSearch, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use shop_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, order))]
    pub async fn create_order(&self, order: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?order, "create_order called");
        info!(customer = %order.customer_id, "Sending create_order to actor");
        self.inner.create(order).await.map_err(Self::map_error)
    }

    /// Returns the order only if it exists **and** belongs to `customer`.
    #[instrument(skip(self))]
    pub async fn find_for_customer(
        &self,
        id: OrderId,
        customer: CustomerId,
    ) -> Result<Option<Order>, OrderError> {
        let filter = OrderSearch {
            ids: Some(vec![id]),
            customer_id: Some(customer),
        };
        let hits = self.inner.search(filter).await.map_err(Self::map_error)?;
        Ok(hits.into_iter().next())
    }

    #[instrument(skip(self))]
    pub async fn set_delivery_status(
        &self,
        id: OrderId,
        status: DeliveryStatus,
    ) -> Result<Order, OrderError> {
        let update = OrderUpdate {
            delivery_status: Some(status),
            payment_status: None,
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            e => OrderError::ActorCommunicationError(e.to_string()),
        }
    }
}
