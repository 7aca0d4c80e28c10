/// Represents a placed customer order.
///
/// # Store
/// This struct implements the [`ActorEntity`](shop_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](shop_framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Update parameters ([`OrderUpdate`])
/// - Search criteria ([`OrderSearch`])
use crate::model::OrderProduct;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

impl std::str::FromStr for OrderId {
    type Err = std::num::ParseIntError;

    /// Accepts both the bare number and the `order_<n>` display form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("order_").unwrap_or(s).parse().map(OrderId)
    }
}

/// Identifier of the customer (the authenticated principal) an order belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub String);

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Delivery state of an order. The numeric codes are part of template paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Unfinished,
    Deleted,
    Pending,
    Progress,
    Dispatched,
    Delivered,
    Lost,
    Refused,
    Returned,
}

impl DeliveryStatus {
    pub fn code(self) -> i8 {
        match self {
            DeliveryStatus::Unfinished => -1,
            DeliveryStatus::Deleted => 0,
            DeliveryStatus::Pending => 1,
            DeliveryStatus::Progress => 2,
            DeliveryStatus::Dispatched => 3,
            DeliveryStatus::Delivered => 4,
            DeliveryStatus::Lost => 5,
            DeliveryStatus::Refused => 6,
            DeliveryStatus::Returned => 7,
        }
    }
}

/// Payment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Unfinished,
    Pending,
    Authorized,
    Received,
    Refused,
    Refund,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    Payment,
    Delivery,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderAddress {
    pub address_type: AddressType,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub street: String,
    pub postal: String,
    pub city: String,
    pub country_id: String,
}

impl OrderAddress {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Payment,
    Delivery,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderService {
    pub service_type: ServiceType,
    pub code: String,
    pub name: String,
}

/// The basket contents of an order: line items, addresses and services.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderBase {
    pub products: Vec<OrderProduct>,
    pub addresses: Vec<OrderAddress>,
    pub services: Vec<OrderService>,
    pub currency_id: String,
}

impl OrderBase {
    pub fn address(&self, address_type: AddressType) -> Option<&OrderAddress> {
        self.addresses.iter().find(|a| a.address_type == address_type)
    }

    pub fn service(&self, service_type: ServiceType) -> Option<&OrderService> {
        self.services.iter().find(|s| s.service_type == service_type)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub base: OrderBase,
    pub delivery_status: DeliveryStatus,
    pub payment_status: PaymentStatus,
}

/// Payload for storing a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
    pub base: OrderBase,
}

/// Payload for status changes of an existing order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub delivery_status: Option<DeliveryStatus>,
    pub payment_status: Option<PaymentStatus>,
}

/// Order query. Present criteria are combined with AND.
#[derive(Debug, Clone, Default)]
pub struct OrderSearch {
    pub ids: Option<Vec<OrderId>>,
    pub customer_id: Option<CustomerId>,
}
