/// Represents a product in the catalog.
///
/// # Store
/// This struct implements the [`ActorEntity`](shop_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](shop_framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`])
/// - Update parameters ([`ProductUpdate`])
/// - Search criteria ([`ProductSearch`])
/// - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// A catalog-defined characteristic of a product, e.g. `package-weight = 2.5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductProperty {
    /// Property type code such as `package-length`.
    pub type_code: String,
    /// Language the value is written in, `None` for language independent values.
    pub language_id: Option<String>,
    pub value: String,
}

impl ProductProperty {
    pub fn new(type_code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            type_code: type_code.into(),
            language_id: None,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Unique stock keeping unit.
    pub code: String,
    pub label: String,
    pub properties: Vec<ProductProperty>,
}

impl Product {
    pub fn new(id: ProductId, code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            label: label.into(),
            properties: Vec::new(),
        }
    }

    /// Values of all properties of the given type, in catalog order.
    pub fn property_values(&self, type_code: &str) -> Vec<String> {
        self.properties
            .iter()
            .filter(|p| p.type_code == type_code)
            .map(|p| p.value.clone())
            .collect()
    }
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub code: String,
    pub label: String,
    pub properties: Vec<ProductProperty>,
}

/// Payload for updating an existing product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub label: Option<String>,
    pub properties: Option<Vec<ProductProperty>>,
}

/// Sub-resources that a product search can include in its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductDomain {
    Property,
}

/// Catalog query: products whose id **or** code is in the given sets.
///
/// Empty sets select nothing. Properties are only returned when
/// [`ProductDomain::Property`] is requested.
#[derive(Debug, Clone, Default)]
pub struct ProductSearch {
    pub ids: Vec<ProductId>,
    pub codes: Vec<String>,
    pub domains: Vec<ProductDomain>,
}

impl ProductSearch {
    pub fn includes(&self, domain: ProductDomain) -> bool {
        self.domains.contains(&domain)
    }
}
