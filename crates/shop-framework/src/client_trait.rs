//! # ActorClient Trait
//!
//! Common interface for resource-specific clients, adding default `get`, `delete` and
//! `search` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard store operations.
///
/// ```rust
/// use shop_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Sku { id: u32 }
/// #[derive(Debug)] struct SkuCreate;
/// #[derive(Debug)] struct SkuUpdate;
/// #[derive(Debug)] enum SkuAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct SkuError(String);
///
/// impl From<String> for SkuError {
///     fn from(s: String) -> Self { SkuError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Sku {
///     type Id = u32; type Create = SkuCreate; type Update = SkuUpdate; type Action = SkuAction;
///     type ActionResult = (); type Filter = (); type Context = (); type Error = SkuError;
///     fn from_create_params(id: u32, _: SkuCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     fn matches(&self, _: &()) -> bool { true }
///     async fn on_update(&mut self, _: SkuUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, a: SkuAction, _: &()) -> Result<(), Self::Error> { match a {} }
/// }
///
/// struct SkuClient { inner: ResourceClient<Sku> }
///
/// #[async_trait]
/// impl ActorClient<Sku> for SkuClient {
///     type Error = SkuError;
///     fn inner(&self) -> &ResourceClient<Sku> { &self.inner }
///     fn map_error(e: FrameworkError) -> Self::Error { SkuError(e.to_string()) }
/// }
///
/// async fn usage(client: SkuClient) {
///     // get(), delete() and search() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.search(()).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Return all entities selected by `filter`.
    #[tracing::instrument(skip(self))]
    async fn search(&self, filter: T::Filter) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().search(filter).await.map_err(Self::map_error)
    }
}
