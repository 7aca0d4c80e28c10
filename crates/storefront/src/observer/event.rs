//! Order-building lifecycle events and the payloads they carry.

use crate::model::{OrderAddress, OrderProduct, OrderService};
use std::fmt::Display;

/// Lifecycle events published by the [`Basket`](super::Basket).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrderEvent {
    AddProductBefore,
    AddProductAfter,
    SetProductsBefore,
    SetProductsAfter,
    DeleteProductBefore,
    DeleteProductAfter,
    AddAddressBefore,
    AddServiceBefore,
}

impl OrderEvent {
    /// Stable event name, used in logs and plugin documentation.
    pub fn name(self) -> &'static str {
        match self {
            OrderEvent::AddProductBefore => "addProduct.before",
            OrderEvent::AddProductAfter => "addProduct.after",
            OrderEvent::SetProductsBefore => "setProducts.before",
            OrderEvent::SetProductsAfter => "setProducts.after",
            OrderEvent::DeleteProductBefore => "deleteProduct.before",
            OrderEvent::DeleteProductAfter => "deleteProduct.after",
            OrderEvent::AddAddressBefore => "addAddress.before",
            OrderEvent::AddServiceBefore => "addService.before",
        }
    }
}

impl Display for OrderEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Value handed through the listeners of one notification.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Product(OrderProduct),
    Products(Vec<OrderProduct>),
    Address(OrderAddress),
    Service(OrderService),
    /// Position of a line item, e.g. the one about to be deleted.
    Position(usize),
}

impl Payload {
    /// Short name of the payload shape for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Product(_) => "product",
            Payload::Products(_) => "product list",
            Payload::Address(_) => "address",
            Payload::Service(_) => "service",
            Payload::Position(_) => "position",
        }
    }
}
