use crate::clients::PurchaseClient;
use crate::gateways::{PaymentGateway, SeatReservationService};
use crate::lifecycle::PurchaseConfig;
use crate::purchase_actor::{self, ProcessedRequestStore, PurchaseContext};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime wrapper around the purchase actor.
///
/// `PurchaseSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the purchase actor
/// - **Dependency Wiring**: injecting the payment and seat collaborators
///
/// # Example
///
/// ```ignore
/// let system = PurchaseSystem::new(&PurchaseConfig::default(), payments, seats);
///
/// let outcome = system
///     .purchase_client
///     .purchase(Some(1001), vec![TicketLineItem::adults(2)])
///     .await?;
///
/// system.shutdown().await?;
/// ```
pub struct PurchaseSystem {
    /// Client for interacting with the purchase actor
    pub purchase_client: PurchaseClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PurchaseSystem {
    /// Starts the purchase actor with an in-memory processed-request store.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(
        config: &PurchaseConfig,
        payments: Arc<dyn PaymentGateway>,
        seats: Arc<dyn SeatReservationService>,
    ) -> Self {
        let (actor, purchase_client) = purchase_actor::new(config);
        Self::start(actor, purchase_client, payments, seats)
    }

    /// Starts the purchase actor backed by `store`.
    pub fn with_store(
        config: &PurchaseConfig,
        store: Box<dyn ProcessedRequestStore>,
        payments: Arc<dyn PaymentGateway>,
        seats: Arc<dyn SeatReservationService>,
    ) -> Self {
        let (actor, purchase_client) = purchase_actor::with_store(config, store);
        Self::start(actor, purchase_client, payments, seats)
    }

    fn start(
        actor: crate::framework::Actor<purchase_actor::PurchaseOrchestrator>,
        purchase_client: PurchaseClient,
        payments: Arc<dyn PaymentGateway>,
        seats: Arc<dyn SeatReservationService>,
    ) -> Self {
        let handle = tokio::spawn(actor.run(PurchaseContext::new(payments, seats)));
        Self {
            purchase_client,
            handles: vec![handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the client, which closes the mailbox once every clone handed out to callers
    /// is gone as well, then waits for the actor to drain and stop.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down purchase system...");

        // Closing the last sender makes the actor's recv() return None
        drop(self.purchase_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Purchase system shutdown complete.");
        Ok(())
    }
}
