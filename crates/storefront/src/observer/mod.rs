//! # Order Observer Bus
//!
//! Typed publish/subscribe between the [`Basket`] and the order plugins.
//! Listeners subscribe per [`OrderEvent`]; a notification hands a [`Payload`] through
//! every listener of the event in subscription order and returns the final value.

pub mod basket;
pub mod event;
pub mod publisher;

pub use basket::{Basket, BasketError};
pub use event::{OrderEvent, Payload};
pub use publisher::{OrderListener, Publisher};
