//! # HTML Clients
//!
//! Views are rendered by trees of [`HtmlClient`]s. A composite node asks its ordered
//! [`Subparts`] for their header and body fragments, stores the concatenation in the
//! [`ViewContext`] and renders its own template around it.
//!
//! Which implementation renders a path is decided by the [`ClientRegistry`]: the variant
//! `client/html/<path>/name` from the configuration, or `Default`.
//!
//! ```text
//! account/history/detail          email/delivery
//! ├── address                     ├── text
//! ├── service                     └── html
//! └── basket
//! ```

pub mod account_history_detail;
pub mod client;
pub mod email_delivery;
pub mod error;
pub mod leaf;
pub mod mail;
pub mod registry;
pub mod subparts;
pub mod template;
pub mod view;

pub use account_history_detail::AccountHistoryDetail;
pub use client::HtmlClient;
pub use email_delivery::EmailDelivery;
pub use error::ViewError;
pub use leaf::LeafClient;
pub use mail::{MailMessage, Mailbox};
pub use registry::{ClientRegistry, HtmlContext, DEFAULT_VARIANT};
pub use subparts::Subparts;
pub use template::TemplateSet;
pub use view::ViewContext;

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::clients::OrderClient;
    use crate::config::Config;
    use crate::model::{
        AddressType, CustomerId, DeliveryStatus, Order, OrderAddress, OrderBase, OrderId, OrderProduct,
        OrderService, PaymentStatus, ServiceType,
    };
    use shop_framework::mock::MockClient;
    use std::sync::Arc;

    pub fn context(config: Config, orders: &MockClient<Order>) -> HtmlContext {
        context_with(config, TemplateSet::bundled().unwrap(), ClientRegistry::with_defaults(), orders)
    }

    pub fn context_with(
        config: Config,
        templates: TemplateSet,
        registry: ClientRegistry,
        orders: &MockClient<Order>,
    ) -> HtmlContext {
        HtmlContext {
            config: Arc::new(config),
            templates: Arc::new(templates),
            registry: Arc::new(registry),
            orders: OrderClient::new(orders.client()),
        }
    }

    pub fn order(id: u32, customer: &str, status: DeliveryStatus) -> Order {
        let mut product = OrderProduct::new(None, "SKU1", 2);
        product.name = "Shipping box".into();
        Order {
            id: OrderId(id),
            customer_id: CustomerId(customer.into()),
            base: OrderBase {
                products: vec![product],
                addresses: vec![OrderAddress {
                    address_type: AddressType::Payment,
                    first_name: "Ada".into(),
                    last_name: "Lovelace".into(),
                    email: "ada@example.com".into(),
                    street: "Main St 1".into(),
                    postal: "12345".into(),
                    city: "Springfield".into(),
                    country_id: "US".into(),
                }],
                services: vec![OrderService {
                    service_type: ServiceType::Delivery,
                    code: "ups".into(),
                    name: "UPS Standard".into(),
                }],
                currency_id: "EUR".into(),
            },
            delivery_status: status,
            payment_status: PaymentStatus::Received,
        }
    }
}
