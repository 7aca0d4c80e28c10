//! Custom actions for the Product actor.
//!
//! These are the catalog maintenance operations on a [`Product`](crate::model::Product)
//! that go beyond plain updates. They are handled by
//! [`ActorEntity::handle_action`](shop_framework::ActorEntity::handle_action).

use crate::model::ProductProperty;

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Appends a property to the product.
    AddProperty(ProductProperty),
    /// Removes every property of the given type code.
    RemoveProperties(String),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Number of properties the product has afterwards.
    AddProperty(usize),
    /// Number of properties removed.
    RemoveProperties(usize),
}
