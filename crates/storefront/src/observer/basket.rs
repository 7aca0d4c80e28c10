//! The order builder. Every change to the basket is announced to the attached
//! listeners, which may rewrite the value before it is stored.

use super::event::{OrderEvent, Payload};
use super::publisher::{OrderListener, Publisher};
use crate::model::{OrderAddress, OrderBase, OrderProduct, OrderService};
use crate::plugin::PluginError;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum BasketError {
    #[error(transparent)]
    Plugin(#[from] PluginError),

    #[error("No product at position {0}")]
    InvalidPosition(usize),

    #[error("Listener of {event} returned a {found} payload")]
    UnexpectedPayload { event: OrderEvent, found: &'static str },
}

/// An order under construction.
#[derive(Default)]
pub struct Basket {
    publisher: Publisher,
    base: OrderBase,
}

impl Basket {
    pub fn new(currency_id: impl Into<String>) -> Self {
        Self {
            publisher: Publisher::new(),
            base: OrderBase {
                currency_id: currency_id.into(),
                ..OrderBase::default()
            },
        }
    }

    pub fn publisher_mut(&mut self) -> &mut Publisher {
        &mut self.publisher
    }

    /// Shortcut for `publisher_mut().attach(..)`.
    pub fn attach(&mut self, listener: Arc<dyn OrderListener>, event: OrderEvent) {
        self.publisher.attach(listener, event);
    }

    pub fn base(&self) -> &OrderBase {
        &self.base
    }

    pub fn products(&self) -> &[OrderProduct] {
        &self.base.products
    }

    /// Adds a line item and returns its position.
    pub async fn add_product(&mut self, product: OrderProduct) -> Result<usize, BasketError> {
        let event = OrderEvent::AddProductBefore;
        let product = match self.publisher.notify(event, Payload::Product(product)).await? {
            Payload::Product(product) => product,
            other => return Err(unexpected(event, &other)),
        };

        debug!(code = %product.product_code, quantity = product.quantity, "Adding product");
        self.base.products.push(product.clone());
        self.publisher
            .notify(OrderEvent::AddProductAfter, Payload::Product(product))
            .await?;
        Ok(self.base.products.len() - 1)
    }

    /// Replaces all line items at once.
    pub async fn set_products(&mut self, products: Vec<OrderProduct>) -> Result<(), BasketError> {
        let event = OrderEvent::SetProductsBefore;
        let products = match self.publisher.notify(event, Payload::Products(products)).await? {
            Payload::Products(products) => products,
            other => return Err(unexpected(event, &other)),
        };

        debug!(count = products.len(), "Replacing products");
        self.base.products = products.clone();
        self.publisher
            .notify(OrderEvent::SetProductsAfter, Payload::Products(products))
            .await?;
        Ok(())
    }

    /// Removes the line item at `position` and returns it.
    pub async fn delete_product(&mut self, position: usize) -> Result<OrderProduct, BasketError> {
        if position >= self.base.products.len() {
            return Err(BasketError::InvalidPosition(position));
        }

        let event = OrderEvent::DeleteProductBefore;
        let position = match self.publisher.notify(event, Payload::Position(position)).await? {
            Payload::Position(p) if p < self.base.products.len() => p,
            Payload::Position(p) => return Err(BasketError::InvalidPosition(p)),
            other => return Err(unexpected(event, &other)),
        };

        let removed = self.base.products.remove(position);
        self.publisher
            .notify(OrderEvent::DeleteProductAfter, Payload::Product(removed.clone()))
            .await?;
        Ok(removed)
    }

    /// Sets the address of its type, replacing a previous one.
    pub async fn add_address(&mut self, address: OrderAddress) -> Result<(), BasketError> {
        let event = OrderEvent::AddAddressBefore;
        let address = match self.publisher.notify(event, Payload::Address(address)).await? {
            Payload::Address(address) => address,
            other => return Err(unexpected(event, &other)),
        };

        self.base
            .addresses
            .retain(|a| a.address_type != address.address_type);
        self.base.addresses.push(address);
        Ok(())
    }

    /// Sets the service of its type, replacing a previous one.
    pub async fn add_service(&mut self, service: OrderService) -> Result<(), BasketError> {
        let event = OrderEvent::AddServiceBefore;
        let service = match self.publisher.notify(event, Payload::Service(service)).await? {
            Payload::Service(service) => service,
            other => return Err(unexpected(event, &other)),
        };

        self.base
            .services
            .retain(|s| s.service_type != service.service_type);
        self.base.services.push(service);
        Ok(())
    }

    /// Finishes building and hands out the basket contents.
    pub fn into_base(self) -> OrderBase {
        self.base
    }
}

fn unexpected(event: OrderEvent, payload: &Payload) -> BasketError {
    BasketError::UnexpectedPayload {
        event,
        found: payload.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AddressType, ServiceType};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<OrderEvent>>,
    }

    #[async_trait]
    impl OrderListener for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        async fn on_notify(&self, event: OrderEvent, payload: Payload) -> Result<Payload, PluginError> {
            self.events.lock().unwrap().push(event);
            Ok(payload)
        }
    }

    /// Multiplies the quantity of every added line item.
    struct Doubler;

    #[async_trait]
    impl OrderListener for Doubler {
        fn name(&self) -> &str {
            "doubler"
        }

        async fn on_notify(&self, _event: OrderEvent, payload: Payload) -> Result<Payload, PluginError> {
            match payload {
                Payload::Product(mut p) => {
                    p.quantity *= 2;
                    Ok(Payload::Product(p))
                }
                other => Ok(other),
            }
        }
    }

    fn address(address_type: AddressType, last_name: &str) -> OrderAddress {
        OrderAddress {
            address_type,
            first_name: "Ada".into(),
            last_name: last_name.into(),
            email: "ada@example.com".into(),
            street: "Main St 1".into(),
            postal: "12345".into(),
            city: "Springfield".into(),
            country_id: "US".into(),
        }
    }

    #[tokio::test]
    async fn test_basket_announces_every_change() {
        let recorder = Arc::new(Recorder::default());
        let mut basket = Basket::new("EUR");
        for event in [
            OrderEvent::AddProductBefore,
            OrderEvent::AddProductAfter,
            OrderEvent::DeleteProductBefore,
            OrderEvent::DeleteProductAfter,
            OrderEvent::AddAddressBefore,
        ] {
            basket.attach(recorder.clone(), event);
        }

        basket.add_product(OrderProduct::new(None, "SKU1", 1)).await.unwrap();
        basket.add_address(address(AddressType::Payment, "L")).await.unwrap();
        let removed = basket.delete_product(0).await.unwrap();

        assert_eq!(removed.product_code, "SKU1");
        assert_eq!(
            *recorder.events.lock().unwrap(),
            vec![
                OrderEvent::AddProductBefore,
                OrderEvent::AddProductAfter,
                OrderEvent::AddAddressBefore,
                OrderEvent::DeleteProductBefore,
                OrderEvent::DeleteProductAfter,
            ]
        );
    }

    #[tokio::test]
    async fn test_listener_result_is_stored() {
        let mut basket = Basket::new("EUR");
        basket.attach(Arc::new(Doubler), OrderEvent::AddProductBefore);

        let pos = basket.add_product(OrderProduct::new(None, "SKU1", 3)).await.unwrap();
        assert_eq!(basket.products()[pos].quantity, 6);
    }

    #[tokio::test]
    async fn test_addresses_and_services_replace_same_type() {
        let mut basket = Basket::new("EUR");
        basket.add_address(address(AddressType::Payment, "A")).await.unwrap();
        basket.add_address(address(AddressType::Delivery, "B")).await.unwrap();
        basket.add_address(address(AddressType::Payment, "C")).await.unwrap();
        basket
            .add_service(OrderService {
                service_type: ServiceType::Delivery,
                code: "ups".into(),
                name: "UPS".into(),
            })
            .await
            .unwrap();

        let base = basket.into_base();
        assert_eq!(base.addresses.len(), 2);
        assert_eq!(base.address(AddressType::Payment).unwrap().last_name, "C");
        assert_eq!(base.service(ServiceType::Delivery).unwrap().code, "ups");
        assert_eq!(base.currency_id, "EUR");
    }

    #[tokio::test]
    async fn test_delete_out_of_range_is_rejected() {
        let mut basket = Basket::new("EUR");
        let result = basket.delete_product(0).await;
        assert!(matches!(result, Err(BasketError::InvalidPosition(0))));
    }
}
