//! # MessageHandler Trait
//!
//! The `MessageHandler` trait is the contract a piece of business logic implements to be driven
//! by the generic [`Actor`](crate::framework::Actor). The handler owns its state; the actor owns
//! the handler and feeds it one request at a time.
//!
//! # Architecture Note
//! The actor loop knows nothing about tickets, payments or seats. It only knows how to pull a
//! request off the mailbox, hand it to `handle`, and send the reply back. Everything
//! domain-specific lives behind the associated types below.
//!
//! # Async & Context
//! `handle` is `#[async_trait]` so a handler can await external collaborators. The `Context`
//! type is injected into every call, which allows "Late Binding" of dependencies (passing
//! gateways to `run()` instead of `new()`).

use async_trait::async_trait;
use std::fmt::Debug;

#[async_trait]
pub trait MessageHandler: Send + 'static {
    /// The message type accepted by this handler.
    type Request: Send + Debug + 'static;

    /// The reply sent back to the caller for each request.
    type Reply: Send + Debug + 'static;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync + 'static;

    /// Handle one request. Called strictly sequentially: the next request is not
    /// dequeued until this future completes.
    async fn handle(&mut self, request: Self::Request, ctx: &Self::Context) -> Self::Reply;

    /// Called once after the mailbox has closed and drained.
    fn on_shutdown(&self) {}
}
