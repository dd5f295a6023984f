//! # Single-Worker Actor
//!
//! This module defines the `Actor`, the "Server" half of the Actor Model. It owns a
//! [`MessageHandler`] and the receiver end of a bounded channel, and processes messages
//! sequentially until every client has been dropped.

use crate::framework::client::MailboxClient;
use crate::framework::handler::MessageHandler;
use crate::framework::message::Envelope;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that drives a [`MessageHandler`].
///
/// # Architecture Note
/// This struct owns the handler (and therefore all of the handler's state) and the
/// receiver end of the mailbox.
///
/// **Concurrency Model**:
/// Any number of [`MailboxClient`] clones may send concurrently, but the actor awaits
/// `handle` to completion before it dequeues the next message. Whatever the handler does
/// inside `handle` (including awaiting slow remote calls) is therefore one critical
/// section, with no `Mutex` around the handler's state. The cost is head-of-line
/// blocking: a slow request delays every request queued behind it.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `Actor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// ```rust,ignore
/// let (actor, client) = Actor::new(orchestrator, 32);
/// tokio::spawn(actor.run(context));
/// let reply = client.send(request).await?;
/// ```
pub struct Actor<H: MessageHandler> {
    receiver: mpsc::Receiver<Envelope<H>>,
    handler: H,
    processed: u64,
}

impl<H: MessageHandler> Actor<H> {
    /// Creates a new `Actor` and its associated `MailboxClient`.
    ///
    /// # Arguments
    ///
    /// * `handler` - The business logic this actor will drive.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client wait until there is space. Clamped to at least 1.
    pub fn new(handler: H, buffer_size: usize) -> (Self, MailboxClient<H>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            handler,
            processed: 0,
        };
        (actor, MailboxClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is passed to every `handle` call. This allows the handler
    /// to reach external dependencies that were created *after* the actor was
    /// instantiated but *before* the loop started.
    pub async fn run(mut self, context: H::Context) {
        // Just the type name (e.g., "PurchaseOrchestrator" instead of the full path)
        let handler_type = std::any::type_name::<H>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(handler_type, "Actor started");

        while let Some(Envelope {
            request,
            respond_to,
        }) = self.receiver.recv().await
        {
            debug!(handler_type, ?request, "Request");
            let reply = self.handler.handle(request, &context).await;
            self.processed += 1;
            if respond_to.send(reply).is_err() {
                warn!(handler_type, "Caller went away before reply");
            }
        }

        self.handler.on_shutdown();
        info!(handler_type, processed = self.processed, "Shutdown");
    }
}
