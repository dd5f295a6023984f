//! # Ticket Purchase Demo
//!
//! Starts a [`PurchaseSystem`] over in-memory payment and seat services and walks through
//! the main outcomes: a successful purchase, a duplicate, a rule violation and a failed
//! reservation that gets refunded.

use std::sync::Arc;
use ticket_purchase::gateways::{InMemoryPaymentGateway, InMemorySeatReservationService};
use ticket_purchase::lifecycle::{setup_tracing, PurchaseConfig, PurchaseSystem};
use ticket_purchase::model::{PurchaseOutcome, TicketLineItem};
use ticket_purchase::purchase_actor::PurchaseError;
use tracing::{error, info, warn, Instrument};

fn report(step: &str, result: &Result<PurchaseOutcome, PurchaseError>) {
    match result {
        Ok(outcome) => info!(
            step,
            amount = outcome.amount_charged,
            seats = outcome.seats_reserved,
            "Purchase succeeded"
        ),
        Err(e) if e.requires_manual_intervention() => {
            error!(step, error = %e, "Purchase needs manual reconciliation")
        }
        Err(e) => warn!(step, kind = ?e.kind(), error = %e, "Purchase rejected"),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = PurchaseConfig::from_env();
    info!(?config, "Starting ticket purchase system");

    let payments = InMemoryPaymentGateway::new();
    let seats = InMemorySeatReservationService::new(100);
    let system = PurchaseSystem::new(
        &config,
        Arc::new(payments.clone()),
        Arc::new(seats.clone()),
    );
    let client = system.purchase_client.clone();

    let family = vec![
        TicketLineItem::adults(2),
        TicketLineItem::children(1),
        TicketLineItem::infants(1),
    ];

    let result = client
        .purchase(Some(1001), family.clone())
        .instrument(tracing::info_span!("first_purchase"))
        .await;
    report("first_purchase", &result);

    // Same items in a different order
    let reordered: Vec<_> = family.iter().rev().copied().collect();
    let result = client
        .purchase(Some(1001), reordered)
        .instrument(tracing::info_span!("repeat_purchase"))
        .await;
    report("repeat_purchase", &result);

    let result = client
        .purchase(Some(1002), vec![TicketLineItem::children(2)])
        .await;
    report("children_only", &result);

    seats.set_fail_reservations(true);
    let result = client
        .purchase(Some(1003), vec![TicketLineItem::adults(1)])
        .instrument(tracing::info_span!("seat_outage"))
        .await;
    report("seat_outage", &result);
    seats.set_fail_reservations(false);

    info!(
        collected_1001 = payments.collected(1001),
        collected_1003 = payments.collected(1003),
        seats_left = seats.available(),
        transactions = payments.transactions().len(),
        "Ledger summary"
    );

    drop(client);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
