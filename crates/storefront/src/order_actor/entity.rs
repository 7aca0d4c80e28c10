//! [`ActorEntity`] implementation for the [`Order`] domain type.

use super::error::OrderError;
use crate::model::{
    DeliveryStatus, Order, OrderCreate, OrderId, OrderSearch, OrderUpdate, PaymentStatus,
};
use async_trait::async_trait;
use shop_framework::ActorEntity;

/// Orders have no custom actions; status changes go through updates.
#[derive(Debug)]
pub enum OrderAction {}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = ();
    type Filter = OrderSearch;
    type Context = ();
    type Error = OrderError;

    /// Stores a new order with pending delivery and payment.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.base.products.is_empty() {
            return Err(OrderError::ValidationError(
                "order contains no products".to_string(),
            ));
        }
        Ok(Order {
            id,
            customer_id: params.customer_id,
            base: params.base,
            delivery_status: DeliveryStatus::Pending,
            payment_status: PaymentStatus::Pending,
        })
    }

    fn matches(&self, filter: &OrderSearch) -> bool {
        let id_ok = filter.ids.as_ref().is_none_or(|ids| ids.contains(&self.id));
        let customer_ok = filter
            .customer_id
            .as_ref()
            .is_none_or(|customer| customer == &self.customer_id);
        id_ok && customer_ok
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(status) = update.delivery_status {
            self.delivery_status = status;
        }
        if let Some(status) = update.payment_status {
            self.payment_status = status;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: OrderAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
