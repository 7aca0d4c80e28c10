//! Order detail page of the customer's account history.
//!
//! Renders only for `h-action=detail`. With `h-order-id` set, the order is looked up once per
//! client instance, restricted to the requesting customer, and its basket is published to
//! the templates as `summary_basket`.

use super::client::HtmlClient;
use super::error::ViewError;
use super::registry::HtmlContext;
use super::subparts::Subparts;
use super::view::ViewContext;
use crate::model::{OrderBase, OrderId};
use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

pub const PATH: &str = "account/history/detail";
pub const SUBPARTS: &[&str] = &["address", "service", "basket"];

const ACTION_PARAM: &str = "h-action";
const ACTION: &str = "detail";
const ORDER_PARAM: &str = "h-order-id";

pub struct AccountHistoryDetail {
    ctx: HtmlContext,
    subparts: Subparts,
    summary: OnceCell<Option<OrderBase>>,
}

impl AccountHistoryDetail {
    pub fn new(ctx: &HtmlContext) -> Result<Self, ViewError> {
        Ok(Self {
            ctx: ctx.clone(),
            subparts: Subparts::new(ctx, PATH, SUBPARTS)?,
            summary: OnceCell::new(),
        })
    }

    pub fn subparts(&self) -> &Subparts {
        &self.subparts
    }

    fn is_active(view: &ViewContext) -> bool {
        view.param(ACTION_PARAM) == Some(ACTION)
    }

    async fn set_view_params(&self, view: &mut ViewContext) -> Result<(), ViewError> {
        let summary = self
            .summary
            .get_or_try_init(|| self.load_summary(&*view))
            .await?;
        if let Some(base) = summary {
            view.set("summary_basket", base)?;
        }
        Ok(())
    }

    async fn load_summary(&self, view: &ViewContext) -> Result<Option<OrderBase>, ViewError> {
        let Some(raw_id) = view.param(ORDER_PARAM) else {
            return Ok(None);
        };
        let not_found = || ViewError::NotFound(format!("Order with ID \"{raw_id}\" not found"));

        let id: OrderId = raw_id.parse().map_err(|_| not_found())?;
        let customer = view.principal().cloned().ok_or_else(not_found)?;

        debug!(%id, %customer, "Loading order summary");
        let order = self
            .ctx
            .orders
            .find_for_customer(id, customer)
            .await?
            .ok_or_else(not_found)?;
        Ok(Some(order.base))
    }
}

#[async_trait]
impl HtmlClient for AccountHistoryDetail {
    fn path(&self) -> &str {
        PATH
    }

    fn context(&self) -> &HtmlContext {
        &self.ctx
    }

    async fn header(&self, view: &mut ViewContext) -> Result<String, ViewError> {
        if !Self::is_active(view) {
            return Ok(String::new());
        }
        self.set_view_params(view).await?;

        let html = self.subparts.header(view).await?;
        view.set("detail_header", &html)?;

        let name = self.ctx.template(
            PATH,
            "template-header",
            &["account/history/detail-header-default.html"],
        )?;
        self.ctx.templates.render(&name, view)
    }

    async fn body(&self, view: &mut ViewContext) -> Result<String, ViewError> {
        if !Self::is_active(view) {
            return Ok(String::new());
        }
        self.set_view_params(view).await?;

        let html = self.subparts.body(view).await?;
        view.set("detail_body", &html)?;

        let name = self.ctx.template(
            PATH,
            "template-body",
            &["account/history/detail-body-default.html"],
        )?;
        self.ctx.templates.render(&name, view)
    }

    async fn process(&self, view: &mut ViewContext) -> Result<(), ViewError> {
        self.subparts.process(view).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::html::test_support::{context, context_with, order};
    use crate::html::{ClientRegistry, TemplateSet, DEFAULT_VARIANT};
    use crate::model::{CustomerId, DeliveryStatus, Order};
    use shop_framework::mock::MockClient;

    /// Renders its own path as marker.
    struct Marker {
        ctx: HtmlContext,
        path: String,
    }

    #[async_trait]
    impl HtmlClient for Marker {
        fn path(&self) -> &str {
            &self.path
        }

        fn context(&self) -> &HtmlContext {
            &self.ctx
        }

        async fn header(&self, _view: &mut ViewContext) -> Result<String, ViewError> {
            Ok(format!("[{}]", self.path))
        }

        async fn body(&self, _view: &mut ViewContext) -> Result<String, ViewError> {
            Ok(format!("<{}>", self.path))
        }
    }

    fn marker_registry() -> ClientRegistry {
        let mut registry = ClientRegistry::with_defaults();
        for part in ["address", "service", "basket"] {
            registry.register(&format!("{PATH}/{part}"), DEFAULT_VARIANT, |ctx, path| {
                Ok(Box::new(Marker {
                    ctx: ctx.clone(),
                    path: path.to_string(),
                }))
            });
        }
        registry
    }

    fn detail_view(order_id: Option<&str>) -> ViewContext {
        let view = ViewContext::new()
            .with_param("h-action", "detail")
            .with_principal(CustomerId("ada".into()));
        match order_id {
            Some(id) => view.with_param("h-order-id", id),
            None => view,
        }
    }

    #[tokio::test]
    async fn test_other_actions_render_nothing() {
        let mock = MockClient::<Order>::new();
        let client = AccountHistoryDetail::new(&context(Config::new(), &mock)).unwrap();

        for mut view in [
            ViewContext::new().with_param("h-order-id", "1"),
            ViewContext::new()
                .with_param("h-action", "list")
                .with_param("h-order-id", "1"),
        ] {
            assert_eq!(client.header(&mut view).await.unwrap(), "");
            assert_eq!(client.body(&mut view).await.unwrap(), "");
        }
        mock.verify();
    }

    #[tokio::test]
    async fn test_fragments_follow_configured_order() {
        let mock = MockClient::<Order>::new();
        let mut config = Config::new();
        config.set(
            "client/html/account/history/detail/default/subparts",
            vec!["basket", "address", "service"],
        );
        let ctx = context_with(config, TemplateSet::bundled().unwrap(), marker_registry(), &mock);
        let client = AccountHistoryDetail::new(&ctx).unwrap();

        let mut view = detail_view(None);
        let body = client.body(&mut view).await.unwrap();
        let header = client.header(&mut view).await.unwrap();

        let basket = body.find("<account/history/detail/basket>").unwrap();
        let address = body.find("<account/history/detail/address>").unwrap();
        let service = body.find("<account/history/detail/service>").unwrap();
        assert!(basket < address && address < service);
        assert!(body.starts_with("<section class=\"account-history-detail\">"));
        assert_eq!(
            header.trim(),
            "[account/history/detail/basket][account/history/detail/address][account/history/detail/service]"
        );
    }

    #[tokio::test]
    async fn test_order_is_loaded_once_and_rendered() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_search()
            .return_ok(vec![order(7, "ada", DeliveryStatus::Pending)]);
        let client = AccountHistoryDetail::new(&context(Config::new(), &mock)).unwrap();

        let mut view = detail_view(Some("7"));
        let header = client.header(&mut view).await.unwrap();
        let body = client.body(&mut view).await.unwrap();

        assert!(header.contains("basket.css"));
        assert!(body.contains("Ada Lovelace, Main St 1, 12345 Springfield"));
        assert!(body.contains("UPS Standard"));
        assert!(body.contains("<td>2</td><td>Shipping box</td>"));
        assert!(view.get("summary_basket").is_some());
        mock.verify();
    }

    #[tokio::test]
    async fn test_foreign_order_is_not_found() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_search().return_ok(vec![]);
        let client = AccountHistoryDetail::new(&context(Config::new(), &mock)).unwrap();

        let mut view = detail_view(Some("7"));
        let result = client.body(&mut view).await;
        assert!(matches!(result, Err(ViewError::NotFound(msg)) if msg.contains("\"7\"")));
    }

    #[tokio::test]
    async fn test_unparsable_id_or_anonymous_request_is_not_found() {
        let mock = MockClient::<Order>::new();
        let ctx = context(Config::new(), &mock);

        let client = AccountHistoryDetail::new(&ctx).unwrap();
        let mut view = detail_view(Some("abc"));
        assert!(matches!(client.body(&mut view).await, Err(ViewError::NotFound(_))));

        let client = AccountHistoryDetail::new(&ctx).unwrap();
        let mut view = ViewContext::new()
            .with_param("h-action", "detail")
            .with_param("h-order-id", "7");
        assert!(matches!(client.header(&mut view).await, Err(ViewError::NotFound(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_sub_client_resolves_below_own_path() {
        let mock = MockClient::<Order>::new();
        let ctx = context_with(Config::new(), TemplateSet::bundled().unwrap(), marker_registry(), &mock);
        let client = AccountHistoryDetail::new(&ctx).unwrap();

        let sub = client.sub_client("basket", None).unwrap();
        assert_eq!(sub.path(), "account/history/detail/basket");
        assert!(matches!(
            client.sub_client("basket", Some("Fancy")),
            Err(ViewError::UnknownClient { .. })
        ));
        assert_eq!(
            client.subparts().paths(),
            vec![
                "account/history/detail/address",
                "account/history/detail/service",
                "account/history/detail/basket"
            ]
        );
    }
}
