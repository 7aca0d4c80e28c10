//! Listener registration and notification.

use super::event::{OrderEvent, Payload};
use crate::plugin::PluginError;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// A unit that wants to see, and possibly change, basket values while the order is built.
#[async_trait]
pub trait OrderListener: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Receives `payload` for `event` and returns the (possibly modified) value.
    async fn on_notify(&self, event: OrderEvent, payload: Payload) -> Result<Payload, PluginError>;
}

/// Subscription table: for every event the listeners in the order they were attached.
#[derive(Default, Clone)]
pub struct Publisher {
    listeners: BTreeMap<OrderEvent, Vec<Arc<dyn OrderListener>>>,
}

impl Publisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes `listener` to `event`.
    ///
    /// Attaching the same listener instance to the same event again has no effect.
    pub fn attach(&mut self, listener: Arc<dyn OrderListener>, event: OrderEvent) {
        let subscribed = self.listeners.entry(event).or_default();
        if subscribed.iter().any(|l| Arc::ptr_eq(l, &listener)) {
            return;
        }
        debug!(listener = listener.name(), %event, "Attached");
        subscribed.push(listener);
    }

    /// Number of listeners subscribed to `event`.
    pub fn listener_count(&self, event: OrderEvent) -> usize {
        self.listeners.get(&event).map_or(0, Vec::len)
    }

    /// Passes `payload` through all listeners of `event` in subscription order.
    ///
    /// Each listener receives the value returned by the previous one. The first error ends
    /// the notification and is returned unchanged.
    pub async fn notify(&self, event: OrderEvent, payload: Payload) -> Result<Payload, PluginError> {
        let Some(listeners) = self.listeners.get(&event) else {
            return Ok(payload);
        };

        let mut value = payload;
        for listener in listeners {
            debug!(listener = listener.name(), %event, payload = value.kind(), "Notify");
            value = listener.on_notify(event, value).await?;
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderProduct;
    use std::sync::Mutex;

    /// Appends its tag to the product name and records the events it saw.
    struct Tagger {
        tag: &'static str,
        seen: Mutex<Vec<OrderEvent>>,
    }

    impl Tagger {
        fn new(tag: &'static str) -> Arc<Self> {
            Arc::new(Self {
                tag,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl OrderListener for Tagger {
        fn name(&self) -> &str {
            self.tag
        }

        async fn on_notify(&self, event: OrderEvent, payload: Payload) -> Result<Payload, PluginError> {
            self.seen.lock().unwrap().push(event);
            match payload {
                Payload::Product(mut product) => {
                    product.name.push_str(self.tag);
                    Ok(Payload::Product(product))
                }
                other => Err(PluginError::TypeMismatch {
                    plugin: self.tag.to_string(),
                    expected: "product",
                    found: other.kind(),
                }),
            }
        }
    }

    fn product() -> Payload {
        let mut product = OrderProduct::new(None, "SKU1", 1);
        product.name.clear();
        Payload::Product(product)
    }

    #[tokio::test]
    async fn test_notify_runs_listeners_in_attach_order() {
        let mut publisher = Publisher::new();
        publisher.attach(Tagger::new("a"), OrderEvent::AddProductBefore);
        publisher.attach(Tagger::new("b"), OrderEvent::AddProductBefore);
        publisher.attach(Tagger::new("c"), OrderEvent::AddProductBefore);

        let result = publisher
            .notify(OrderEvent::AddProductBefore, product())
            .await
            .unwrap();

        match result {
            Payload::Product(p) => assert_eq!(p.name, "abc"),
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_attach_is_idempotent_per_instance_and_event() {
        let tagger = Tagger::new("a");
        let mut publisher = Publisher::new();
        publisher.attach(tagger.clone(), OrderEvent::AddProductBefore);
        publisher.attach(tagger.clone(), OrderEvent::AddProductBefore);
        publisher.attach(tagger.clone(), OrderEvent::SetProductsBefore);

        assert_eq!(publisher.listener_count(OrderEvent::AddProductBefore), 1);
        assert_eq!(publisher.listener_count(OrderEvent::SetProductsBefore), 1);
        assert_eq!(publisher.listener_count(OrderEvent::DeleteProductBefore), 0);

        publisher
            .notify(OrderEvent::AddProductBefore, product())
            .await
            .unwrap();
        assert_eq!(*tagger.seen.lock().unwrap(), vec![OrderEvent::AddProductBefore]);
    }

    #[tokio::test]
    async fn test_events_without_listeners_pass_through() {
        let publisher = Publisher::new();
        let result = publisher
            .notify(OrderEvent::DeleteProductBefore, Payload::Position(3))
            .await
            .unwrap();
        assert_eq!(result, Payload::Position(3));
    }

    #[tokio::test]
    async fn test_first_error_stops_notification() {
        let first = Tagger::new("a");
        let second = Tagger::new("b");
        let mut publisher = Publisher::new();
        publisher.attach(first.clone(), OrderEvent::DeleteProductBefore);
        publisher.attach(second.clone(), OrderEvent::DeleteProductBefore);

        let result = publisher
            .notify(OrderEvent::DeleteProductBefore, Payload::Position(0))
            .await;

        assert!(matches!(result, Err(PluginError::TypeMismatch { .. })));
        assert_eq!(first.seen.lock().unwrap().len(), 1);
        assert!(second.seen.lock().unwrap().is_empty());
    }
}
