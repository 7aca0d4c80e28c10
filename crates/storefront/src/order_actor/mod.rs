//! # Order Actor
//!
//! Stores placed orders. Lookups for the customer account pages go through
//! [`OrderClient::find_for_customer`](crate::clients::OrderClient::find_for_customer), which
//! combines the order id with the owning customer in one search.

pub mod entity;
pub mod error;

pub use entity::OrderAction;
pub use error::*;

use crate::model::Order;
use shop_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new() -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(32)
}
