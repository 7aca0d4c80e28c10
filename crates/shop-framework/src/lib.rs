//! # Shop Framework
//!
//! Building blocks for the resource stores behind the storefront: every stored resource
//! type (products, orders, …) gets its own **actor** that owns the entities and processes
//! requests sequentially, plus a cheap, cloneable **client** that the rest of the shop talks to.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain models, their DTOs, actions and search filters
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing over a Tokio channel
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe requests
//!
//! ## Requests
//!
//! Besides CRUD and custom actions, every store answers **Search** requests: the entity
//! type declares a `Filter` and a `matches` predicate, and the actor returns all hits in
//! id order. A caller that needs several records sends one search instead of one `get`
//! per id.
//!
//! ## Context Injection
//!
//! Dependencies are injected when the actor is started (`actor.run(context)`), not when it
//! is constructed, so stores can be wired together in any order.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`mock::MockClient`] (queued expectations) and raw request
//! receivers for counting and inspecting the requests a component sends.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
