//! Messages accepted by the purchase actor.
//!
//! These are handled by [`PurchaseOrchestrator`](crate::purchase_actor::PurchaseOrchestrator)
//! through the [`MessageHandler`](crate::framework::MessageHandler) implementation.

use crate::model::{PurchaseOutcome, PurchaseRequest};
use crate::purchase_actor::PurchaseError;

/// Requests the purchase actor understands.
#[derive(Debug, Clone)]
pub enum PurchaseCommand {
    /// Validate, charge, reserve and record a purchase.
    Purchase(PurchaseRequest),
    /// Ask whether this request has already been fulfilled. Read-only.
    CheckProcessed(PurchaseRequest),
}

/// Replies from the purchase actor. Variants match 1:1 with [`PurchaseCommand`].
#[derive(Debug, Clone)]
pub enum PurchaseReply {
    Purchase(Result<PurchaseOutcome, PurchaseError>),
    CheckProcessed(bool),
}
