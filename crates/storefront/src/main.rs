//! # Storefront Demo
//!
//! 1. Seeds the catalog with products carrying package properties.
//! 2. Builds a basket with the configured plugins, which copy those properties onto the
//!    line items, and stores it as an order.
//! 3. Renders the account history detail page and the delivery e-mail for that order.
//!
//! Run with `RUST_LOG=debug` to follow the requests through the stores.

use shop_framework::tracing::setup_tracing;
use storefront::config::{Config, DEFAULT_CONFIG};
use storefront::html::{HtmlClient, ViewContext};
use storefront::lifecycle::Storefront;
use storefront::model::{
    AddressType, CustomerId, DeliveryStatus, OrderAddress, OrderCreate, OrderProduct, OrderService,
    ProductCreate, ProductProperty, ServiceType,
};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting storefront demo");

    let config = Config::from_toml_str(DEFAULT_CONFIG).map_err(|e| e.to_string())?;
    let shop = Storefront::new(config).map_err(|e| e.to_string())?;

    // Catalog
    let span = tracing::info_span!("catalog");
    let box_id = async {
        shop.product_client
            .create_product(ProductCreate {
                code: "BOX-S".to_string(),
                label: "Shipping box S".to_string(),
                properties: vec![
                    ProductProperty::new("package-length", "30"),
                    ProductProperty::new("package-width", "20"),
                    ProductProperty::new("package-weight", "0.4"),
                ],
            })
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let tape_id = shop
        .product_client
        .create_product(ProductCreate {
            code: "TAPE".to_string(),
            label: "Packing tape".to_string(),
            properties: vec![
                ProductProperty::new("package-length", "5"),
                ProductProperty::new("package-length", "10"),
            ],
        })
        .await
        .map_err(|e| e.to_string())?;

    info!(%box_id, %tape_id, "Catalog seeded");

    // Basket
    let customer = CustomerId("alice".to_string());
    let span = tracing::info_span!("basket");
    let base = async {
        let mut basket = shop.basket("EUR").map_err(|e| e.to_string())?;
        basket
            .add_product(OrderProduct::new(Some(box_id.clone()), "BOX-S", 3))
            .await
            .map_err(|e| e.to_string())?;
        basket
            .add_product(OrderProduct::new(None, "TAPE", 1))
            .await
            .map_err(|e| e.to_string())?;
        basket
            .add_address(OrderAddress {
                address_type: AddressType::Payment,
                first_name: "Alice".to_string(),
                last_name: "Example".to_string(),
                email: "alice@example.com".to_string(),
                street: "1 Market Street".to_string(),
                postal: "94105".to_string(),
                city: "San Francisco".to_string(),
                country_id: "US".to_string(),
            })
            .await
            .map_err(|e| e.to_string())?;
        basket
            .add_service(OrderService {
                service_type: ServiceType::Delivery,
                code: "ups".to_string(),
                name: "UPS Ground".to_string(),
            })
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>(basket.into_base())
    }
    .instrument(span)
    .await?;

    for product in &base.products {
        for attribute in &product.attributes {
            info!(product = %product.product_code, code = %attribute.code, value = %attribute.value, "Line item attribute");
        }
    }

    let order_id = shop
        .order_client
        .create_order(OrderCreate {
            customer_id: customer.clone(),
            base,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(%order_id, "Order stored");

    // Account history detail
    let detail = shop
        .html
        .create("account/history/detail", None)
        .map_err(|e| e.to_string())?;
    let mut view = ViewContext::new()
        .with_param("h-action", "detail")
        .with_param("h-order-id", order_id.to_string())
        .with_principal(customer);
    let body = detail.body(&mut view).await.map_err(|e| e.to_string())?;
    println!("{body}");

    // Delivery e-mail
    let order = shop
        .order_client
        .set_delivery_status(order_id, DeliveryStatus::Dispatched)
        .await
        .map_err(|e| e.to_string())?;
    let delivery = shop
        .html
        .create("email/delivery", None)
        .map_err(|e| e.to_string())?;
    let mut view = ViewContext::new().with_order(order);
    delivery.header(&mut view).await.map_err(|e| e.to_string())?;
    delivery.body(&mut view).await.map_err(|e| e.to_string())?;
    let mail = view.take_mail();
    info!(subject = ?mail.subject, to = ?mail.to, from = ?mail.from, "Delivery mail assembled");
    if let Some(text) = &mail.text_body {
        println!("{text}");
    }

    drop(detail);
    drop(delivery);
    shop.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
