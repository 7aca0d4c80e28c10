use storefront::config::{Config, DEFAULT_CONFIG};
use storefront::html::{HtmlClient, ViewContext, ViewError};
use storefront::lifecycle::Storefront;
use storefront::model::{
    AddressType, AttributeValue, CustomerId, OrderAddress, OrderCreate, OrderProduct, ProductCreate,
    ProductProperty, PRODUCT_PROPERTY_TYPE,
};
use storefront::observer::OrderEvent;

async fn seeded() -> Storefront {
    let shop = Storefront::new(Config::from_toml_str(DEFAULT_CONFIG).unwrap()).unwrap();
    shop.product_client
        .create_product(ProductCreate {
            code: "BOX".into(),
            label: "Box".into(),
            properties: vec![
                ProductProperty::new("package-length", "10"),
                ProductProperty::new("package-length", "12"),
                ProductProperty::new("package-weight", "2.5"),
            ],
        })
        .await
        .unwrap();
    shop.product_client
        .create_product(ProductCreate {
            code: "TAPE".into(),
            label: "Tape".into(),
            properties: vec![],
        })
        .await
        .unwrap();
    shop
}

fn payment_address() -> OrderAddress {
    OrderAddress {
        address_type: AddressType::Payment,
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        street: "Main St 1".into(),
        postal: "12345".into(),
        city: "Springfield".into(),
        country_id: "US".into(),
    }
}

#[tokio::test]
async fn test_basket_plugins_enrich_line_items() {
    let shop = seeded().await;

    let mut basket = shop.basket("EUR").unwrap();
    assert_eq!(basket.publisher_mut().listener_count(OrderEvent::AddProductBefore), 1);

    basket.add_product(OrderProduct::new(None, "BOX", 1)).await.unwrap();
    basket
        .set_products(vec![
            OrderProduct::new(None, "BOX", 2),
            OrderProduct::new(None, "TAPE", 1),
        ])
        .await
        .unwrap();

    let products = basket.products();
    let length = products[0]
        .attribute_item("package-length", PRODUCT_PROPERTY_TYPE)
        .unwrap();
    assert_eq!(
        length.value,
        AttributeValue::List(vec!["10".into(), "12".into()])
    );
    let weight = products[0]
        .attribute_item("package-weight", PRODUCT_PROPERTY_TYPE)
        .unwrap();
    assert_eq!(weight.value, AttributeValue::Scalar("2.5".into()));
    assert!(products[1].attributes.is_empty());

    drop(basket);
    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_account_history_detail_end_to_end() {
    let shop = seeded().await;

    let mut basket = shop.basket("EUR").unwrap();
    basket.add_product(OrderProduct::new(None, "BOX", 1)).await.unwrap();
    basket.add_address(payment_address()).await.unwrap();
    let base = basket.into_base();

    let order_id = shop
        .order_client
        .create_order(OrderCreate {
            customer_id: CustomerId("ada".into()),
            base,
        })
        .await
        .unwrap();

    let detail = shop.html.create("account/history/detail", None).unwrap();
    let mut view = ViewContext::new()
        .with_param("h-action", "detail")
        .with_param("h-order-id", order_id.to_string())
        .with_principal(CustomerId("ada".into()));
    let body = detail.body(&mut view).await.unwrap();
    assert!(body.contains("Ada Lovelace"));
    assert!(body.contains("package-length: 10, 12"));
    assert!(body.contains("package-weight: 2.5"));

    let other = shop.html.create("account/history/detail", None).unwrap();
    let mut view = ViewContext::new()
        .with_param("h-action", "detail")
        .with_param("h-order-id", order_id.to_string())
        .with_principal(CustomerId("mallory".into()));
    assert!(matches!(other.body(&mut view).await, Err(ViewError::NotFound(_))));

    drop(detail);
    drop(other);
    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delivery_mail_uses_configured_senders() {
    let shop = seeded().await;

    let mut basket = shop.basket("EUR").unwrap();
    basket.add_product(OrderProduct::new(None, "TAPE", 1)).await.unwrap();
    basket.add_address(payment_address()).await.unwrap();
    let order_id = shop
        .order_client
        .create_order(OrderCreate {
            customer_id: CustomerId("ada".into()),
            base: basket.into_base(),
        })
        .await
        .unwrap();
    let order = shop
        .order_client
        .set_delivery_status(order_id, storefront::model::DeliveryStatus::Dispatched)
        .await
        .unwrap();

    let delivery = shop.html.create("email/delivery", None).unwrap();
    let mut view = ViewContext::new().with_order(order);
    delivery.header(&mut view).await.unwrap();
    delivery.body(&mut view).await.unwrap();
    let mail = view.take_mail();

    assert_eq!(mail.from[0].email, "shop@example.com");
    assert_eq!(mail.from[0].name.as_deref(), Some("Demo Shop"));
    assert_eq!(mail.reply_to[0].email, "support@example.com");
    assert_eq!(mail.reply_to[0].name.as_deref(), Some("Demo Shop"));
    assert_eq!(mail.bcc[0].email, "orders@example.com");
    assert!(mail.subject.unwrap().contains("dispatched"));
    assert!(mail.text_body.unwrap().contains("1x TAPE"));

    drop(delivery);
    shop.shutdown().await.unwrap();
}
