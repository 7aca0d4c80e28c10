//! Template lookup and rendering on top of Tera.

use super::error::ViewError;
use super::view::ViewContext;
use crate::config::Config;
use tera::Tera;
use tracing::debug;

macro_rules! bundled {
    ($($name:literal),* $(,)?) => {
        &[$(($name, include_str!(concat!("../../templates/", $name)))),*]
    };
}

/// Layouts shipped with the crate.
const BUNDLED: &[(&str, &str)] = bundled![
    "account/history/detail-header-default.html",
    "account/history/detail-body-default.html",
    "account/history/detail/address-body-default.html",
    "account/history/detail/service-body-default.html",
    "account/history/detail/basket-header-default.html",
    "account/history/detail/basket-body-default.html",
    "email/delivery/header-default.html",
    "email/delivery/body-default.html",
    "email/delivery/3/header-default.html",
    "email/delivery/text-body-default.txt",
    "email/delivery/html-body-default.html",
];

/// The named templates a client tree renders with.
pub struct TemplateSet {
    tera: Tera,
}

impl TemplateSet {
    /// A set holding only the bundled layouts.
    pub fn bundled() -> Result<Self, ViewError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(BUNDLED.iter().copied())?;
        Ok(Self { tera })
    }

    /// Adds or replaces a template.
    pub fn add_raw(&mut self, name: &str, content: &str) -> Result<(), ViewError> {
        self.tera.add_raw_template(name, content)?;
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Picks the template to render: the name configured under `conf_key` if set,
    /// otherwise the first of `defaults` that exists.
    pub fn resolve(&self, config: &Config, conf_key: &str, defaults: &[&str]) -> Result<String, ViewError> {
        self.resolve_optional(config, conf_key, defaults)
            .ok_or_else(|| ViewError::TemplateMissing(defaults.join(", ")))
    }

    /// Like [`resolve`](Self::resolve), but `None` when nothing matches.
    pub fn resolve_optional(&self, config: &Config, conf_key: &str, defaults: &[&str]) -> Option<String> {
        if let Some(name) = config.get_str(conf_key) {
            return Some(name.to_string());
        }
        defaults
            .iter()
            .find(|name| self.contains(name))
            .map(|name| name.to_string())
    }

    pub fn render(&self, name: &str, view: &ViewContext) -> Result<String, ViewError> {
        debug!(template = name, "Rendering");
        Ok(self.tera.render(name, &view.tera_context())?)
    }
}
