//! # Mock Mailbox
//!
//! Utilities for testing client wrappers (e.g. `PurchaseClient`) without spawning a real actor.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | Mock mailbox | Real Actor |
//! |---------|--------------|------------|
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (scripted replies) | Real handler state |
//! | **Use Case** | Logic *around* the client | The handler itself or the full system |
//! | **Error Injection** | Easy (drop the receiver or the responder) | Hard |
//!
//! Two styles are available:
//!
//! - [`create_mock_client`] + [`expect_request`]: receive the raw envelope and answer it by
//!   hand. Best when the test needs to assert on the request payload.
//! - [`MockClient`]: queue replies up front with a fluent API and check them off with
//!   [`MockClient::verify`].

use crate::framework::client::MailboxClient;
use crate::framework::handler::MessageHandler;
use crate::framework::message::{Envelope, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A mock client that answers requests from a queue of scripted replies.
///
/// # Example
/// ```ignore
/// let mock = MockClient::<PurchaseOrchestrator>::new();
/// mock.expect_request().return_reply(PurchaseReply::CheckProcessed(true));
///
/// let client = PurchaseClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all scripted replies were consumed
/// ```
pub struct MockClient<H: MessageHandler> {
    client: MailboxClient<H>,
    replies: Arc<Mutex<VecDeque<H::Reply>>>,
    received: Arc<Mutex<Vec<H::Request>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<H: MessageHandler> Default for MockClient<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: MessageHandler> MockClient<H> {
    /// Creates a new mock client with no scripted replies.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<Envelope<H>>(100);
        let replies: Arc<Mutex<VecDeque<H::Reply>>> = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let replies_clone = replies.clone();
        let received_clone = received.clone();

        // Answer each request with the next scripted reply
        let handle = tokio::spawn(async move {
            while let Some(Envelope {
                request,
                respond_to,
            }) = receiver.recv().await
            {
                let reply = replies_clone.lock().unwrap().pop_front();
                received_clone.lock().unwrap().push(request);
                match reply {
                    Some(reply) => {
                        let _ = respond_to.send(reply);
                    }
                    None => panic!("Unexpected request: no scripted reply left"),
                }
            }
        });

        Self {
            client: MailboxClient::new(sender),
            replies,
            received,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> MailboxClient<H> {
        self.client.clone()
    }

    /// Expects one more request.
    pub fn expect_request(&self) -> ReplyBuilder<H> {
        ReplyBuilder {
            replies: self.replies.clone(),
        }
    }

    /// Number of requests the mock has received so far.
    pub fn received_count(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    /// Verifies that every scripted reply was consumed.
    pub fn verify(&self) {
        let replies = self.replies.lock().unwrap();
        if !replies.is_empty() {
            panic!("Not all expectations were met. {} remaining", replies.len());
        }
    }
}

/// Builder for a scripted reply.
pub struct ReplyBuilder<H: MessageHandler> {
    replies: Arc<Mutex<VecDeque<H::Reply>>>,
}

impl<H: MessageHandler> ReplyBuilder<H> {
    /// Answers the expected request with `reply`.
    pub fn return_reply(self, reply: H::Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }
}

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// The client sends envelopes to a channel the test controls. The test pulls them off with
/// [`expect_request`], asserts on the payload, and answers (or drops) the responder. Dropping
/// the receiver simulates an actor that has shut down.
pub fn create_mock_client<H: MessageHandler>(
    buffer_size: usize,
) -> (MailboxClient<H>, mpsc::Receiver<Envelope<H>>) {
    let (sender, receiver) = mpsc::channel(buffer_size.max(1));
    (MailboxClient::new(sender), receiver)
}

/// Helper to take the next request off the mock mailbox.
pub async fn expect_request<H: MessageHandler>(
    receiver: &mut mpsc::Receiver<Envelope<H>>,
) -> Option<(H::Request, Response<H::Reply>)> {
    receiver
        .recv()
        .await
        .map(|Envelope { request, respond_to }| (request, respond_to))
}
