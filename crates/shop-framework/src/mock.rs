//! # Mock Stores & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of expectations instead of a running `ResourceActor`. Use it to test code that
//! *talks to* a store (plugins, HTML clients) without seeding one.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Counting Requests
//!
//! The low-level helpers ([`create_mock_client`], [`expect_search`], …) give you the raw
//! request receiver. That is the tool for asserting *how many* requests were sent, e.g. that
//! a batch operation issues exactly one search:
//!
//! ```rust
//! use shop_framework::mock::{create_mock_client, expect_search};
//! use shop_framework::ActorEntity;
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Sku { id: u32, code: String }
//! #[derive(Debug)] struct SkuCreate;
//! #[derive(Debug)] struct SkuUpdate;
//! #[derive(Debug)] enum SkuAction {}
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct SkuError;
//!
//! #[async_trait]
//! impl ActorEntity for Sku {
//!     type Id = u32; type Create = SkuCreate; type Update = SkuUpdate; type Action = SkuAction;
//!     type ActionResult = (); type Filter = Vec<String>; type Context = (); type Error = SkuError;
//!     fn from_create_params(id: u32, _: SkuCreate) -> Result<Self, Self::Error> { Ok(Self { id, code: String::new() }) }
//!     fn matches(&self, codes: &Vec<String>) -> bool { codes.contains(&self.code) }
//!     async fn on_update(&mut self, _: SkuUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, a: SkuAction, _: &()) -> Result<(), Self::Error> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client::<Sku>(10);
//!     let task = tokio::spawn(async move { client.search(vec!["A1".into()]).await });
//!
//!     let (filter, responder) = expect_search(&mut receiver).await.unwrap();
//!     assert_eq!(filter, vec!["A1".to_string()]);
//!     responder.send(Ok(vec![])).unwrap();
//!
//!     assert!(task.await.unwrap().unwrap().is_empty());
//!     assert!(receiver.try_recv().is_err());
//! }
//! ```
//!
//! ## Testing Failure Scenarios
//!
//! `return_err` lets you simulate store failures that are hard to produce with real actors:
//!
//! ```rust,ignore
//! let mut mock = MockClient::<Product>::new();
//! mock.expect_search().return_err(FrameworkError::ActorClosed);
//! let result = ProductClient::new(mock.client()).search(filter).await;
//! assert!(result.is_err());
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Queued `search` responses.
type Expectations<T> = Arc<Mutex<VecDeque<Result<Vec<T>, FrameworkError>>>>;

fn request_kind<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Get { .. } => "Get",
        ResourceRequest::Create { .. } => "Create",
        ResourceRequest::Update { .. } => "Update",
        ResourceRequest::Delete { .. } => "Delete",
        ResourceRequest::Action { .. } => "Action",
        ResourceRequest::Search { .. } => "Search",
    }
}

/// A mock client that answers `search` requests from a queue of expectations.
///
/// Expectations are answered in the order they were declared. Any other request, or a search
/// with nothing queued, panics the background task, which surfaces to the caller as
/// `FrameworkError::ActorDropped`. Use the low-level helpers to script other request kinds.
///
/// ```ignore
/// let mut mock = MockClient::<Order>::new();
/// mock.expect_search().return_ok(vec![order]);
///
/// let client = OrderClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Search { respond_to, .. }, Some(response)) => {
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        panic!(
                            "Unexpected {} request, expected {}",
                            request_kind(&request),
                            if expectation.is_some() { "Search" } else { "nothing" }
                        );
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `search` operation.
    pub fn expect_search(&mut self) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder that queues one `search` expectation once its response is chosen.
pub struct ExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> ExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Vec<T>) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<T>, FrameworkError>) {
        self.expectations.lock().unwrap().push_back(response);
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it receives requests with the `expect_*` helpers below and
/// answers through the returned responders.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Search request
pub async fn expect_search<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Filter, oneshot::Sender<Result<Vec<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Search { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}
