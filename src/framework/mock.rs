//! # Mock Framework
//!
//! Utilities for testing store clients without spawning a real [`ResourceActor`](super::ResourceActor).
//!
//! Create a [`MockClient`], queue the responses the fake store should give with the
//! `expect_*` builders, hand [`MockClient::client`] to the code under test, then call
//! [`MockClient::verify`]. Responses are consumed strictly in order, which makes it easy
//! to script partial failures ("the second create fails, everything else succeeds").

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request together with the response the mock will give.
enum Expectation<T: ActorEntity> {
    Find(Result<Option<T>, FrameworkError>),
    Create(Result<T, FrameworkError>),
    Update(Result<T, FrameworkError>),
}

impl<T: ActorEntity> Expectation<T> {
    fn name(&self) -> &'static str {
        match self {
            Expectation::Find(_) => "Find",
            Expectation::Create(_) => "Create",
            Expectation::Update(_) => "Update",
        }
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Page>::new();
/// mock.expect_find().return_ok(None);
/// mock.expect_create().return_err(FrameworkError::Custom("disk full".into()));
///
/// let store = PageClient::new(mock.client());
/// // Use store in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to answer requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Find { respond_to, .. }, Some(Expectation::Find(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Update { respond_to, .. }, Some(Expectation::Update(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        panic!(
                            "Unexpected request {:?}, expected {}",
                            request,
                            expectation.as_ref().map_or("nothing", Expectation::name)
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

    /// Expects a `find` operation.
    pub fn expect_find(&mut self) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Find)
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Create)
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Update)
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder that queues the response for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(expectations: Queue<T>, wrap: fn(Result<R, FrameworkError>) -> Expectation<T>) -> Self {
        Self { expectations, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.expectations.lock().unwrap().push_back((self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back((self.wrap)(Err(error)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Page, PageCreate, PageStatus};

    fn login_page() -> Page {
        Page {
            id: "page_1".into(),
            title: "Login".into(),
            body: "[lms_login]".into(),
            slug: "lms-login".into(),
            status: PageStatus::Published,
        }
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Page>::new();
        mock.expect_find().return_ok(None);
        mock.expect_create().return_ok(login_page());
        mock.expect_create().return_err(FrameworkError::Conflict("lms-login".into()));

        let client = mock.client();

        let found = client.find(|p: &Page| p.slug == "lms-login").await.unwrap();
        assert!(found.is_none());

        let params = PageCreate {
            title: "Login".into(),
            body: "[lms_login]".into(),
            slug: "lms-login".into(),
            status: PageStatus::Published,
        };
        let created = client.create(params.clone()).await.unwrap();
        assert_eq!(created, login_page());

        let again = client.create(params).await;
        assert_eq!(again, Err(FrameworkError::Conflict("lms-login".into())));

        // Verify all expectations were met
        mock.verify();
    }
}
