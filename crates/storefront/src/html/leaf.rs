use super::client::HtmlClient;
use super::error::ViewError;
use super::registry::HtmlContext;
use super::view::ViewContext;
use async_trait::async_trait;

/// Where a mail part stores its rendered body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MailPart {
    Text,
    Html,
}

/// A node without children that renders `<path>-header-default` and
/// `<path>-body-default` (overridable through `template-header` / `template-body`).
///
/// A missing header template yields an empty header. Mail parts additionally store their
/// body in the view's mail.
pub struct LeafClient {
    ctx: HtmlContext,
    path: String,
    extension: &'static str,
    mail_part: Option<MailPart>,
}

impl LeafClient {
    pub fn new(ctx: &HtmlContext, path: &str) -> Self {
        Self {
            ctx: ctx.clone(),
            path: path.to_string(),
            extension: "html",
            mail_part: None,
        }
    }

    /// Plain text mail body. Its templates are not HTML-escaped.
    pub fn text_part(ctx: &HtmlContext, path: &str) -> Self {
        Self {
            extension: "txt",
            mail_part: Some(MailPart::Text),
            ..Self::new(ctx, path)
        }
    }

    pub fn html_part(ctx: &HtmlContext, path: &str) -> Self {
        Self {
            mail_part: Some(MailPart::Html),
            ..Self::new(ctx, path)
        }
    }
}

#[async_trait]
impl HtmlClient for LeafClient {
    fn path(&self) -> &str {
        &self.path
    }

    fn context(&self) -> &HtmlContext {
        &self.ctx
    }

    async fn header(&self, view: &mut ViewContext) -> Result<String, ViewError> {
        let default = format!("{}-header-default.{}", self.path, self.extension);
        let conf_key = format!("client/html/{}/default/template-header", self.path);
        match self
            .ctx
            .templates
            .resolve_optional(&self.ctx.config, &conf_key, &[default.as_str()])
        {
            Some(name) => self.ctx.templates.render(&name, view),
            None => Ok(String::new()),
        }
    }

    async fn body(&self, view: &mut ViewContext) -> Result<String, ViewError> {
        let default = format!("{}-body-default.{}", self.path, self.extension);
        let name = self.ctx.template(&self.path, "template-body", &[default.as_str()])?;
        let content = self.ctx.templates.render(&name, view)?;

        match self.mail_part {
            Some(MailPart::Text) => view.mail_mut().text_body = Some(content.clone()),
            Some(MailPart::Html) => view.mail_mut().html_body = Some(content.clone()),
            None => {}
        }
        Ok(content)
    }
}
