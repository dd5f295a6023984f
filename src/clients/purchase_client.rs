//! # Purchase Client
//!
//! Provides a high-level API for interacting with the purchase actor.
//! It wraps a `MailboxClient<PurchaseOrchestrator>` and exposes domain-specific methods.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, MailboxClient};
use crate::model::{PurchaseOutcome, PurchaseRequest, TicketLineItem};
use crate::purchase_actor::{PurchaseCommand, PurchaseError, PurchaseOrchestrator, PurchaseReply};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the purchase actor. Cheap to clone.
#[derive(Clone)]
pub struct PurchaseClient {
    inner: MailboxClient<PurchaseOrchestrator>,
}

impl PurchaseClient {
    pub fn new(inner: MailboxClient<PurchaseOrchestrator>) -> Self {
        Self { inner }
    }

    /// Purchases `items` for `account_id`.
    ///
    /// Concurrent calls are queued and run one at a time.
    #[instrument(skip(self, items))]
    pub async fn purchase(
        &self,
        account_id: Option<i64>,
        items: Vec<TicketLineItem>,
    ) -> Result<PurchaseOutcome, PurchaseError> {
        debug!(?items, "purchase called");
        let request = PurchaseRequest::new(account_id, items);
        match self.request(PurchaseCommand::Purchase(request)).await? {
            PurchaseReply::Purchase(result) => result,
            other => Err(PurchaseError::ActorCommunication(format!(
                "unexpected reply to Purchase: {other:?}"
            ))),
        }
    }

    /// Whether an identical request (same account, same line items in any order) has
    /// already been fulfilled.
    #[instrument(skip(self, items))]
    pub async fn is_processed(
        &self,
        account_id: Option<i64>,
        items: Vec<TicketLineItem>,
    ) -> Result<bool, PurchaseError> {
        let request = PurchaseRequest::new(account_id, items);
        match self.request(PurchaseCommand::CheckProcessed(request)).await? {
            PurchaseReply::CheckProcessed(processed) => Ok(processed),
            other => Err(PurchaseError::ActorCommunication(format!(
                "unexpected reply to CheckProcessed: {other:?}"
            ))),
        }
    }
}

#[async_trait]
impl ActorClient<PurchaseOrchestrator> for PurchaseClient {
    type Error = PurchaseError;

    fn inner(&self) -> &MailboxClient<PurchaseOrchestrator> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        PurchaseError::ActorCommunication(e.to_string())
    }
}
