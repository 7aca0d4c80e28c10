//! Delivery status e-mail.
//!
//! Needs the order in the view ([`ViewContext::with_order`]). Besides the rendered parts,
//! the header step fills the mail's sender and recipient fields. Each sender field is read
//! from `client/html/email/delivery/<field>` with `client/html/email/<field>` as fallback.
//! An unset reply-to falls back to the generic sender, never to the delivery-specific one.

use super::client::HtmlClient;
use super::error::ViewError;
use super::mail::Mailbox;
use super::registry::HtmlContext;
use super::subparts::Subparts;
use super::view::ViewContext;
use crate::config::Config;
use crate::model::{AddressType, Order};
use async_trait::async_trait;

pub const PATH: &str = "email/delivery";
pub const SUBPARTS: &[&str] = &["text", "html"];

pub const MAIL_GENERATOR: &str = "Storefront";

pub struct EmailDelivery {
    ctx: HtmlContext,
    subparts: Subparts,
}

impl EmailDelivery {
    pub fn new(ctx: &HtmlContext) -> Result<Self, ViewError> {
        Ok(Self {
            ctx: ctx.clone(),
            subparts: Subparts::new(ctx, PATH, SUBPARTS)?,
        })
    }

    fn set_view_params(view: &mut ViewContext) -> Result<Order, ViewError> {
        let order = view.order().cloned().ok_or(ViewError::MissingData("order"))?;
        view.set("order", &order)?;
        if let Some(address) = order.base.address(AddressType::Payment) {
            view.set("payment_address", address)?;
        }
        Ok(order)
    }

    /// Template name for `kind` (`header` or `body`), preferring the layout of the
    /// order's delivery status.
    fn template(&self, kind: &str, order: &Order) -> Result<String, ViewError> {
        let by_status = format!("{PATH}/{}/{kind}-default.html", order.delivery_status.code());
        let fallback = format!("{PATH}/{kind}-default.html");
        self.ctx.template(
            PATH,
            &format!("template-{kind}"),
            &[by_status.as_str(), fallback.as_str()],
        )
    }

    fn address_mail(config: &Config, view: &mut ViewContext, order: &Order) -> Result<(), ViewError> {
        let address = order
            .base
            .address(AddressType::Payment)
            .ok_or_else(|| ViewError::NotFound(format!("No payment address for order {}", order.id)))?;

        let field = |name: &str| {
            config.resolve(
                &format!("client/html/email/delivery/{name}"),
                &format!("client/html/email/{name}"),
            )
        };
        let from_name = field("from-name");
        let from_email = field("from-email");
        let reply_name =
            field("reply-name").or_else(|| config.get_str("client/html/email/from-name"));
        let reply_email =
            field("reply-email").or_else(|| config.get_str("client/html/email/from-email"));

        let mail = view.mail_mut();
        mail.set_header("X-MailGenerator", MAIL_GENERATOR);
        mail.add_to(Mailbox::new(&address.email, Some(&address.full_name())));
        if let Some(email) = from_email {
            mail.add_from(Mailbox::new(email, from_name));
        }
        if let Some(email) = reply_email {
            mail.add_reply_to(Mailbox::new(email, reply_name));
        }
        if let Some(email) = field("bcc-email") {
            mail.add_bcc(Mailbox::new(email, None));
        }
        Ok(())
    }
}

#[async_trait]
impl HtmlClient for EmailDelivery {
    fn path(&self) -> &str {
        PATH
    }

    fn context(&self) -> &HtmlContext {
        &self.ctx
    }

    async fn header(&self, view: &mut ViewContext) -> Result<String, ViewError> {
        let order = Self::set_view_params(view)?;

        let content = self.subparts.header(view).await?;
        view.set("delivery_header", &content)?;
        Self::address_mail(&self.ctx.config, view, &order)?;

        let name = self.template("header", &order)?;
        let header = self.ctx.templates.render(&name, view)?;
        let subject = header.trim();
        if !subject.is_empty() {
            view.mail_mut().subject = Some(subject.to_string());
        }
        Ok(header)
    }

    async fn body(&self, view: &mut ViewContext) -> Result<String, ViewError> {
        let order = Self::set_view_params(view)?;

        let content = self.subparts.body(view).await?;
        view.set("delivery_body", &content)?;

        let name = self.template("body", &order)?;
        self.ctx.templates.render(&name, view)
    }

    async fn process(&self, view: &mut ViewContext) -> Result<(), ViewError> {
        self.subparts.process(view).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::test_support::{context, order};
    use crate::model::DeliveryStatus;
    use shop_framework::mock::MockClient;

    fn client(config: Config, mock: &MockClient<Order>) -> EmailDelivery {
        EmailDelivery::new(&context(config, mock)).unwrap()
    }

    #[tokio::test]
    async fn test_sender_fields_use_delivery_overrides() {
        let mock = MockClient::<Order>::new();
        let mut config = Config::new();
        config.set("client/html/email/from-name", "A");
        config.set("client/html/email/from-email", "shop@example.com");
        config.set("client/html/email/delivery/from-name", "B");
        config.set("client/html/email/bcc-email", "copy@example.com");
        let client = client(config, &mock);

        let mut view = ViewContext::new().with_order(order(3, "ada", DeliveryStatus::Pending));
        client.header(&mut view).await.unwrap();
        let mail = view.mail();

        assert_eq!(mail.header("X-MailGenerator"), Some(MAIL_GENERATOR));
        assert_eq!(mail.to, vec![Mailbox::new("ada@example.com", Some("Ada Lovelace"))]);
        assert_eq!(mail.from, vec![Mailbox::new("shop@example.com", Some("B"))]);
        assert_eq!(mail.reply_to, vec![Mailbox::new("shop@example.com", Some("A"))]);
        assert_eq!(mail.bcc, vec![Mailbox::new("copy@example.com", None)]);
    }

    #[tokio::test]
    async fn test_reply_to_falls_back_to_generic_sender() {
        let mock = MockClient::<Order>::new();
        let mut config = Config::new();
        config.set("client/html/email/from-name", "A");
        config.set("client/html/email/from-email", "generic@example.com");
        config.set("client/html/email/delivery/from-name", "B");
        config.set("client/html/email/delivery/from-email", "delivery@example.com");
        let client = client(config, &mock);

        let mut view = ViewContext::new().with_order(order(3, "ada", DeliveryStatus::Pending));
        client.header(&mut view).await.unwrap();
        let mail = view.mail();

        assert_eq!(mail.from, vec![Mailbox::new("delivery@example.com", Some("B"))]);
        assert_eq!(mail.reply_to, vec![Mailbox::new("generic@example.com", Some("A"))]);
    }

    #[tokio::test]
    async fn test_unset_sender_adds_no_from() {
        let mock = MockClient::<Order>::new();
        let client = client(Config::new(), &mock);

        let mut view = ViewContext::new().with_order(order(3, "ada", DeliveryStatus::Pending));
        client.header(&mut view).await.unwrap();

        assert!(view.mail().from.is_empty());
        assert!(view.mail().reply_to.is_empty());
        assert!(view.mail().bcc.is_empty());
        assert_eq!(view.mail().to.len(), 1);
    }

    #[tokio::test]
    async fn test_status_template_with_fallback() {
        let mock = MockClient::<Order>::new();
        let client = client(Config::new(), &mock);

        let mut dispatched = ViewContext::new().with_order(order(3, "ada", DeliveryStatus::Dispatched));
        client.header(&mut dispatched).await.unwrap();
        assert_eq!(
            dispatched.mail().subject.as_deref(),
            Some("Your order 3 has been dispatched")
        );

        let mut pending = ViewContext::new().with_order(order(4, "ada", DeliveryStatus::Pending));
        client.header(&mut pending).await.unwrap();
        assert_eq!(
            pending.mail().subject.as_deref(),
            Some("Delivery status update for your order 4")
        );
    }

    #[tokio::test]
    async fn test_body_fills_text_and_html_parts() {
        let mock = MockClient::<Order>::new();
        let client = client(Config::new(), &mock);

        let mut view = ViewContext::new().with_order(order(3, "ada", DeliveryStatus::Pending));
        let body = client.body(&mut view).await.unwrap();

        let text = view.mail().text_body.clone().unwrap();
        let html = view.mail().html_body.clone().unwrap();
        assert!(text.starts_with("Dear Ada Lovelace,"));
        assert!(text.contains("- 2x Shipping box"));
        assert!(html.contains("<li>2x Shipping box</li>"));
        assert!(body.find("Dear Ada").unwrap() < body.find("<html>").unwrap());
    }

    #[tokio::test]
    async fn test_missing_data_is_reported() {
        let mock = MockClient::<Order>::new();
        let client = client(Config::new(), &mock);

        let mut view = ViewContext::new();
        assert!(matches!(
            client.body(&mut view).await,
            Err(ViewError::MissingData("order"))
        ));

        let mut without_address = order(3, "ada", DeliveryStatus::Pending);
        without_address.base.addresses.clear();
        let mut view = ViewContext::new().with_order(without_address);
        assert!(matches!(client.header(&mut view).await, Err(ViewError::NotFound(_))));
    }
}
