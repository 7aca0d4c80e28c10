use super::error::ViewError;
use super::registry::HtmlContext;
use super::view::ViewContext;
use async_trait::async_trait;

/// A node of an HTML client tree.
///
/// A node renders a header fragment and a body fragment into the shared [`ViewContext`].
/// Composite nodes delegate to their sub-clients first and hand the concatenated
/// fragments to their own template.
#[async_trait]
pub trait HtmlClient: Send + Sync {
    /// Hierarchical path of the node, e.g. `account/history/detail`.
    fn path(&self) -> &str;

    fn context(&self) -> &HtmlContext;

    async fn header(&self, view: &mut ViewContext) -> Result<String, ViewError>;

    async fn body(&self, view: &mut ViewContext) -> Result<String, ViewError>;

    /// Handles request input before rendering. Nodes without input do nothing.
    async fn process(&self, _view: &mut ViewContext) -> Result<(), ViewError> {
        Ok(())
    }

    /// Creates the sub-client `<path>/<kind>`, see [`ClientRegistry::create`](super::ClientRegistry::create).
    fn sub_client(&self, kind: &str, variant: Option<&str>) -> Result<Box<dyn HtmlClient>, ViewError> {
        let ctx = self.context();
        ctx.create(&format!("{}/{kind}", self.path()), variant)
    }
}
