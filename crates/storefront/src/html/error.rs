//! Error types for HTML rendering.

use crate::order_actor::OrderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    /// A referenced aggregate is missing or not owned by the requesting principal.
    #[error("{0}")]
    NotFound(String),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("No template found, tried {0}")]
    TemplateMissing(String),

    #[error("No HTML client registered for {path:?} with variant {variant:?}")]
    UnknownClient { path: String, variant: String },

    /// The caller did not put a required value into the view.
    #[error("View data {0:?} is missing")]
    MissingData(&'static str),

    #[error("Failed to serialize view data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] OrderError),
}
