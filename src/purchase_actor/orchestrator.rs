//! The purchase orchestrator: validation, pricing, idempotency and the
//! payment-then-reservation sequence with a compensating refund.

use crate::framework::MessageHandler;
use crate::gateways::{GatewayError, PaymentGateway, SeatReservationService};
use crate::lifecycle::PurchaseConfig;
use crate::model::{PurchaseOutcome, PurchaseRequest, TicketPrices};
use crate::purchase_actor::idempotency::{
    IdempotencyKey, InMemoryProcessedRequests, ProcessedRequestStore,
};
use crate::purchase_actor::validation::{validate, ValidatedPurchase};
use crate::purchase_actor::{PurchaseCommand, PurchaseError, PurchaseReply};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Collaborators injected into the purchase actor when it starts.
#[derive(Clone)]
pub struct PurchaseContext {
    pub payments: Arc<dyn PaymentGateway>,
    pub seats: Arc<dyn SeatReservationService>,
}

impl PurchaseContext {
    pub fn new(
        payments: Arc<dyn PaymentGateway>,
        seats: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self { payments, seats }
    }
}

/// Owns the processed-request store and runs purchases one at a time.
///
/// `purchase` takes `&mut self`, so whoever holds the orchestrator has exclusive use of
/// the store for the whole call, remote calls included. In this crate that holder is the
/// purchase actor's single task.
pub struct PurchaseOrchestrator {
    max_tickets: u32,
    prices: TicketPrices,
    store: Box<dyn ProcessedRequestStore>,
}

impl PurchaseOrchestrator {
    pub fn new(config: &PurchaseConfig) -> Self {
        Self::with_store(config, Box::new(InMemoryProcessedRequests::new()))
    }

    pub fn with_store(config: &PurchaseConfig, store: Box<dyn ProcessedRequestStore>) -> Self {
        Self {
            max_tickets: config.max_tickets_per_purchase,
            prices: config.prices,
            store,
        }
    }

    pub fn processed_count(&self) -> usize {
        self.store.len()
    }

    /// Runs one purchase end to end.
    ///
    /// The key is recorded only after both the charge and the reservation succeed, so any
    /// failed request (refunded or not) can be retried with the same arguments.
    #[instrument(skip_all, fields(account_id = ?request.account_id))]
    pub async fn purchase(
        &mut self,
        request: &PurchaseRequest,
        ctx: &PurchaseContext,
    ) -> Result<PurchaseOutcome, PurchaseError> {
        let ValidatedPurchase { account_id, tally } = validate(request, self.max_tickets)?;
        let amount = tally.amount(&self.prices);
        let seats = tally.seats();
        debug!(?tally, amount, seats, "Request validated");

        let key = IdempotencyKey::new(account_id, &request.items);
        if self.store.contains(&key) {
            return Err(PurchaseError::DuplicateRequest { account_id });
        }

        ctx.payments
            .charge(account_id, amount)
            .await
            .map_err(|e| PurchaseError::PaymentFailed {
                reason: e.to_string(),
            })?;
        debug!(amount, "Payment captured");

        if let Err(reservation) = ctx.seats.reserve(account_id, seats).await {
            return Err(compensate(ctx, account_id, amount, reservation).await);
        }
        debug!(seats, "Seats reserved");

        self.store.insert(key);
        Ok(PurchaseOutcome {
            amount_charged: amount,
            seats_reserved: seats,
        })
    }

    /// Whether this request has already been fulfilled. Invalid accounts never have been.
    pub fn is_processed(&self, request: &PurchaseRequest) -> bool {
        match request.account_id {
            Some(account_id) if account_id > 0 => self
                .store
                .contains(&IdempotencyKey::new(account_id, &request.items)),
            _ => false,
        }
    }
}

/// Refunds a captured charge after the reservation failed.
async fn compensate(
    ctx: &PurchaseContext,
    account_id: i64,
    amount: i64,
    reservation: GatewayError,
) -> PurchaseError {
    warn!(account_id, amount, reason = %reservation, "Seat reservation failed, refunding");

    match ctx.payments.charge(account_id, amount.saturating_neg()).await {
        Ok(()) => PurchaseError::ReservationFailed {
            reason: reservation.to_string(),
        },
        Err(refund) => PurchaseError::RefundFailed {
            account_id,
            reservation_reason: reservation.to_string(),
            refund_reason: refund.to_string(),
        },
    }
}

#[async_trait]
impl MessageHandler for PurchaseOrchestrator {
    type Request = PurchaseCommand;
    type Reply = PurchaseReply;
    type Context = PurchaseContext;

    async fn handle(&mut self, request: PurchaseCommand, ctx: &PurchaseContext) -> PurchaseReply {
        match request {
            PurchaseCommand::Purchase(request) => {
                let result = self.purchase(&request, ctx).await;
                match &result {
                    Ok(outcome) => info!(
                        account_id = ?request.account_id,
                        amount = outcome.amount_charged,
                        seats = outcome.seats_reserved,
                        "Purchase complete"
                    ),
                    Err(e) if e.requires_manual_intervention() => error!(
                        account_id = ?request.account_id,
                        error = %e,
                        "Purchase needs manual reconciliation"
                    ),
                    Err(e) => warn!(
                        account_id = ?request.account_id,
                        kind = ?e.kind(),
                        error = %e,
                        "Purchase rejected"
                    ),
                }
                PurchaseReply::Purchase(result)
            }
            PurchaseCommand::CheckProcessed(request) => {
                PurchaseReply::CheckProcessed(self.is_processed(&request))
            }
        }
    }

    fn on_shutdown(&self) {
        info!(processed_requests = self.store.len(), "Purchase orchestrator stopped");
    }
}
