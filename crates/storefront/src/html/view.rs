//! Per-request state shared by every node of a client tree.

use super::error::ViewError;
use super::mail::MailMessage;
use crate::model::{CustomerId, Order};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Request parameters, the authenticated principal, the variables handed to templates and
/// the mail under construction. Lives for one request.
#[derive(Debug, Default)]
pub struct ViewContext {
    params: HashMap<String, String>,
    principal: Option<CustomerId>,
    vars: Map<String, Value>,
    order: Option<Order>,
    mail: MailMessage,
}

impl ViewContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_principal(mut self, customer: CustomerId) -> Self {
        self.principal = Some(customer);
        self
    }

    /// Puts the order a mail is rendered for into the view.
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn principal(&self) -> Option<&CustomerId> {
        self.principal.as_ref()
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    /// Serializes `value` into the template variable `key`.
    pub fn set(&mut self, key: &str, value: &impl Serialize) -> Result<(), ViewError> {
        self.vars.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.vars.get(key)
    }

    pub fn mail(&self) -> &MailMessage {
        &self.mail
    }

    pub fn mail_mut(&mut self) -> &mut MailMessage {
        &mut self.mail
    }

    /// Takes the assembled mail out of the view.
    pub fn take_mail(&mut self) -> MailMessage {
        std::mem::take(&mut self.mail)
    }

    pub(crate) fn tera_context(&self) -> tera::Context {
        let mut context = tera::Context::new();
        for (key, value) in &self.vars {
            context.insert(key.as_str(), value);
        }
        context.insert("params", &self.params);
        context
    }
}
