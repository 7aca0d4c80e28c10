//! # Storefront Library
//!
//! Product catalog and order stores built on `shop_framework`, the order observer bus with
//! its plugins, and the HTML clients rendering the account history and transactional mails.
//!
//! ## Module Tour
//!
//! - [`model`] - products, orders and order line items
//! - [`product_actor`], [`order_actor`] - the stores
//! - [`clients`] - typed clients for the stores
//! - [`observer`] - [`Basket`](observer::Basket) and the [`Publisher`](observer::Publisher) plugins listen on
//! - [`plugin`] - order plugins such as [`PropertyAdd`](plugin::PropertyAdd)
//! - [`html`] - the HTML client trees
//! - [`config`] - slash-keyed configuration
//! - [`lifecycle`] - [`Storefront`](lifecycle::Storefront), which starts and stops everything

pub mod clients;
pub mod config;
pub mod html;
pub mod lifecycle;
pub mod model;
pub mod observer;
pub mod order_actor;
pub mod plugin;
pub mod product_actor;
