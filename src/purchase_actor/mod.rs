//! # Purchase Actor
//!
//! The purchase orchestrator running behind a single-worker mailbox.
//!
//! ## Structure
//!
//! - [`orchestrator`] - [`PurchaseOrchestrator`], the eight-step purchase sequence, and its
//!   [`MessageHandler`](crate::framework::MessageHandler) implementation
//! - [`validation`] - ordered business rules
//! - [`idempotency`] - [`IdempotencyKey`] and the [`ProcessedRequestStore`] seam
//! - [`actions`] - [`PurchaseCommand`] / [`PurchaseReply`] mailbox messages
//! - [`error`] - [`PurchaseError`] and [`PurchaseErrorKind`]
//! - [`new()`] / [`with_store()`] - factory functions that create the actor and its client
//!
//! ## Why an actor?
//!
//! The duplicate check and the final insert must be atomic with respect to each other, and
//! the charge and reservation in between are remote calls that can block. Running the
//! orchestrator in one task that drains its mailbox one message at a time gives that
//! atomicity without a lock: two identical requests can never both pass the duplicate check.
//! The price is that a hung gateway call stalls every purchase queued behind it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = purchase_actor::new(&PurchaseConfig::default());
//! tokio::spawn(actor.run(PurchaseContext::new(payments, seats)));
//!
//! let outcome = client.purchase(Some(1001), vec![TicketLineItem::adults(2)]).await?;
//! ```

pub mod actions;
pub mod error;
pub mod idempotency;
pub mod orchestrator;
pub mod validation;

pub use actions::*;
pub use error::*;
pub use idempotency::{IdempotencyKey, InMemoryProcessedRequests, ProcessedRequestStore};
pub use orchestrator::{PurchaseContext, PurchaseOrchestrator};

use crate::clients::PurchaseClient;
use crate::framework::Actor;
use crate::lifecycle::PurchaseConfig;

/// Creates a new purchase actor with an in-memory processed-request store, and its client.
pub fn new(config: &PurchaseConfig) -> (Actor<PurchaseOrchestrator>, PurchaseClient) {
    with_store(config, Box::new(InMemoryProcessedRequests::new()))
}

/// Creates a new purchase actor backed by `store`, and its client.
pub fn with_store(
    config: &PurchaseConfig,
    store: Box<dyn ProcessedRequestStore>,
) -> (Actor<PurchaseOrchestrator>, PurchaseClient) {
    let orchestrator = PurchaseOrchestrator::with_store(config, store);
    let (actor, mailbox) = Actor::new(orchestrator, config.mailbox_capacity);
    (actor, PurchaseClient::new(mailbox))
}
