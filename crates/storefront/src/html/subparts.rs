use super::client::HtmlClient;
use super::error::ViewError;
use super::registry::HtmlContext;
use super::view::ViewContext;

/// The ordered sub-clients of a composite node.
///
/// The names come from `client/html/<path>/default/subparts` or the node's defaults; each
/// child is created as `<path>/<name>`, so `client/html/<path>/<name>/name` selects its
/// variant.
pub struct Subparts {
    children: Vec<Box<dyn HtmlClient>>,
}

impl Subparts {
    pub fn new(ctx: &HtmlContext, path: &str, defaults: &[&str]) -> Result<Self, ViewError> {
        let names = ctx
            .config
            .get_list_or(&format!("client/html/{path}/default/subparts"), defaults);
        let children = names
            .iter()
            .map(|name| ctx.create(&format!("{path}/{name}"), None))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { children })
    }

    /// Paths of the children in render order.
    pub fn paths(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.path()).collect()
    }

    pub async fn header(&self, view: &mut ViewContext) -> Result<String, ViewError> {
        let mut html = String::new();
        for child in &self.children {
            html.push_str(&child.header(view).await?);
        }
        Ok(html)
    }

    pub async fn body(&self, view: &mut ViewContext) -> Result<String, ViewError> {
        let mut html = String::new();
        for child in &self.children {
            html.push_str(&child.body(view).await?);
        }
        Ok(html)
    }

    pub async fn process(&self, view: &mut ViewContext) -> Result<(), ViewError> {
        for child in &self.children {
            child.process(view).await?;
        }
        Ok(())
    }
}
