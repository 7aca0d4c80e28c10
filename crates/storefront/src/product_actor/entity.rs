//! [`ActorEntity`] implementation for the [`Product`] domain type.
//!
//! Products are searched by id **or** code; properties are part of the result only when
//! the search asks for the property domain.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductDomain, ProductId, ProductSearch, ProductUpdate};
use async_trait::async_trait;
use shop_framework::ActorEntity;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Filter = ProductSearch;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        if params.code.trim().is_empty() {
            return Err(ProductError::ValidationError(
                "product code must not be empty".to_string(),
            ));
        }
        let mut product = Product::new(id, params.code, params.label);
        product.properties = params.properties;
        Ok(product)
    }

    fn matches(&self, filter: &ProductSearch) -> bool {
        filter.ids.contains(&self.id) || filter.codes.contains(&self.code)
    }

    fn project(&self, filter: &ProductSearch) -> Self {
        let mut product = self.clone();
        if !filter.includes(ProductDomain::Property) {
            product.properties.clear();
        }
        product
    }

    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(label) = update.label {
            self.label = label;
        }
        if let Some(properties) = update.properties {
            self.properties = properties;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::AddProperty(property) => {
                if property.type_code.is_empty() {
                    return Err(ProductError::ValidationError(
                        "property type must not be empty".to_string(),
                    ));
                }
                self.properties.push(property);
                Ok(ProductActionResult::AddProperty(self.properties.len()))
            }
            ProductAction::RemoveProperties(type_code) => {
                let before = self.properties.len();
                self.properties.retain(|p| p.type_code != type_code);
                Ok(ProductActionResult::RemoveProperties(
                    before - self.properties.len(),
                ))
            }
        }
    }
}
