//! Order line items and their attributes.

use crate::model::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Attribute type under which product properties are copied onto line items.
pub const PRODUCT_PROPERTY_TYPE: &str = "product/property";

/// Value of a line item attribute: a single value or an ordered list of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Scalar(String),
    List(Vec<String>),
}

impl AttributeValue {
    /// Scalar for exactly one value, list otherwise. `None` when there are no values.
    pub fn from_values(mut values: Vec<String>) -> Option<Self> {
        match values.len() {
            0 => None,
            1 => values.pop().map(AttributeValue::Scalar),
            _ => Some(AttributeValue::List(values)),
        }
    }
}

impl Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::Scalar(value) => f.write_str(value),
            AttributeValue::List(values) => f.write_str(&values.join(", ")),
        }
    }
}

/// Key/value annotation attached to one order line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderProductAttribute {
    /// Namespace of the attribute, e.g. [`PRODUCT_PROPERTY_TYPE`].
    pub attr_type: String,
    pub code: String,
    pub name: Option<String>,
    pub value: AttributeValue,
}

impl OrderProductAttribute {
    pub fn new(attr_type: impl Into<String>, code: impl Into<String>, value: AttributeValue) -> Self {
        Self {
            attr_type: attr_type.into(),
            code: code.into(),
            name: None,
            value,
        }
    }
}

/// One product entry within an order or basket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderProduct {
    pub product_id: Option<ProductId>,
    pub product_code: String,
    pub name: String,
    pub quantity: u32,
    pub attributes: Vec<OrderProductAttribute>,
}

impl OrderProduct {
    pub fn new(product_id: Option<ProductId>, product_code: impl Into<String>, quantity: u32) -> Self {
        let product_code = product_code.into();
        Self {
            product_id,
            name: product_code.clone(),
            product_code,
            quantity,
            attributes: Vec::new(),
        }
    }

    /// Returns the attribute with the given code inside the given type namespace.
    pub fn attribute_item(&self, code: &str, attr_type: &str) -> Option<&OrderProductAttribute> {
        self.attributes
            .iter()
            .find(|a| a.code == code && a.attr_type == attr_type)
    }

    /// Attributes of one type namespace.
    pub fn attribute_items<'a>(
        &'a self,
        attr_type: &'a str,
    ) -> impl Iterator<Item = &'a OrderProductAttribute> + 'a {
        self.attributes.iter().filter(move |a| a.attr_type == attr_type)
    }

    /// Stores `attribute`, replacing an existing one with the same type and code.
    pub fn set_attribute_item(&mut self, attribute: OrderProductAttribute) {
        match self
            .attributes
            .iter_mut()
            .find(|a| a.code == attribute.code && a.attr_type == attribute.attr_type)
        {
            Some(existing) => *existing = attribute,
            None => self.attributes.push(attribute),
        }
    }
}
