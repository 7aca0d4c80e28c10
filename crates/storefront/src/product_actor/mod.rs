//! # Product Actor
//!
//! The catalog store. It owns all [`Product`]s and answers the OR-combined id/code
//! searches the order plugins use to look up product properties.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](shop_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`] for property maintenance
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use storefront::product_actor;
//! use storefront::clients::ProductClient;
//! use storefront::model::{ProductCreate, ProductProperty};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new();
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create_product(ProductCreate {
//!         code: "SKU1".to_string(),
//!         label: "Box".to_string(),
//!         properties: vec![],
//!     }).await?;
//!
//!     client.add_property(id, ProductProperty::new("package-weight", "2.5")).await?;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Product;
use shop_framework::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new() -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(32)
}
