use std::sync::Arc;
use ticket_purchase::clients::PurchaseClient;
use ticket_purchase::gateways::mock::{MockPaymentGateway, MockSeatReservationService};
use ticket_purchase::lifecycle::PurchaseConfig;
use ticket_purchase::model::{PurchaseOutcome, TicketLineItem};
use ticket_purchase::purchase_actor::{self, PurchaseContext, PurchaseError, PurchaseErrorKind};

/// Real purchase actor with scripted payment and seat services.
///
/// Each test spawns the actor, scripts the gateway calls it expects, drives it through the
/// client and finally checks that every scripted call happened and nothing else did.
fn start() -> (
    PurchaseClient,
    MockPaymentGateway,
    MockSeatReservationService,
    tokio::task::JoinHandle<()>,
) {
    let payments = MockPaymentGateway::new();
    let seats = MockSeatReservationService::new();
    let (actor, client) = purchase_actor::new(&PurchaseConfig::default());
    let ctx = PurchaseContext::new(Arc::new(payments.clone()), Arc::new(seats.clone()));
    let handle = tokio::spawn(actor.run(ctx));
    (client, payments, seats, handle)
}

fn family() -> Vec<TicketLineItem> {
    vec![
        TicketLineItem::adults(2),
        TicketLineItem::children(1),
        TicketLineItem::infants(1),
    ]
}

#[tokio::test]
async fn test_successful_purchase_charges_then_reserves() {
    let (client, payments, seats, handle) = start();
    payments.expect_charge(1001, 65).return_ok();
    seats.expect_reserve(1001, 3).return_ok();

    let outcome = client.purchase(Some(1001), family()).await.unwrap();

    assert_eq!(
        outcome,
        PurchaseOutcome {
            amount_charged: 65,
            seats_reserved: 3
        }
    );
    assert!(client.is_processed(Some(1001), family()).await.unwrap());

    payments.verify();
    seats.verify();
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_payment_failure_skips_reservation() {
    let (client, payments, seats, _handle) = start();
    payments.expect_charge(1002, 25).return_err("Card declined");

    let err = client
        .purchase(Some(1002), vec![TicketLineItem::adults(1)])
        .await
        .unwrap_err();

    assert_eq!(
        err,
        PurchaseError::PaymentFailed {
            reason: "Card declined".to_string()
        }
    );
    assert!(seats.calls().is_empty());
    assert!(!client
        .is_processed(Some(1002), vec![TicketLineItem::adults(1)])
        .await
        .unwrap());

    payments.verify();
    seats.verify();
}

#[tokio::test]
async fn test_reservation_failure_refunds_and_allows_retry() {
    let (client, payments, seats, _handle) = start();
    payments.expect_charge(1003, 40).return_ok();
    seats.expect_reserve(1003, 2).return_err("Venue full");
    payments.expect_charge(1003, -40).return_ok();

    let items = vec![TicketLineItem::adults(1), TicketLineItem::children(1)];
    let err = client.purchase(Some(1003), items.clone()).await.unwrap_err();

    assert_eq!(err.kind(), PurchaseErrorKind::ReservationFailed);
    assert!(!err.requires_manual_intervention());
    assert_eq!(payments.calls(), vec![(1003, 40), (1003, -40)]);

    // Not recorded, so the same request may go through again
    payments.expect_charge(1003, 40).return_ok();
    seats.expect_reserve(1003, 2).return_ok();
    let outcome = client.purchase(Some(1003), items).await.unwrap();
    assert_eq!(outcome.amount_charged, 40);

    payments.verify();
    seats.verify();
}

#[tokio::test]
async fn test_refund_failure_needs_manual_intervention() {
    let (client, payments, seats, _handle) = start();
    payments.expect_charge(1004, 25).return_ok();
    seats.expect_reserve(1004, 1).return_err("Venue full");
    payments
        .expect_charge(1004, -25)
        .return_err("Refund service unavailable");

    let err = client
        .purchase(Some(1004), vec![TicketLineItem::adults(1)])
        .await
        .unwrap_err();

    assert_eq!(
        err,
        PurchaseError::RefundFailed {
            account_id: 1004,
            reservation_reason: "Venue full".to_string(),
            refund_reason: "Refund service unavailable".to_string(),
        }
    );
    assert!(err.requires_manual_intervention());

    // A retry is a fresh attempt, not a duplicate
    payments.expect_charge(1004, 25).return_ok();
    seats.expect_reserve(1004, 1).return_ok();
    assert!(client
        .purchase(Some(1004), vec![TicketLineItem::adults(1)])
        .await
        .is_ok());

    payments.verify();
    seats.verify();
}

#[tokio::test]
async fn test_duplicate_detected_regardless_of_item_order() {
    let (client, payments, seats, _handle) = start();
    payments.expect_charge(1005, 65).return_ok();
    seats.expect_reserve(1005, 3).return_ok();

    client.purchase(Some(1005), family()).await.unwrap();

    let reordered: Vec<_> = family().into_iter().rev().collect();
    let err = client.purchase(Some(1005), reordered).await.unwrap_err();

    assert_eq!(err, PurchaseError::DuplicateRequest { account_id: 1005 });
    assert_eq!(payments.calls().len(), 1);
    assert_eq!(seats.calls().len(), 1);

    payments.verify();
    seats.verify();
}

#[tokio::test]
async fn test_validation_failures_touch_no_gateway() {
    let (client, payments, seats, _handle) = start();

    let err = client
        .purchase(Some(1007), vec![TicketLineItem::children(2)])
        .await
        .unwrap_err();
    assert_eq!(err, PurchaseError::MissingAdult);

    let err = client
        .purchase(Some(0), vec![TicketLineItem::adults(1)])
        .await
        .unwrap_err();
    assert_eq!(err.kind(), PurchaseErrorKind::InvalidAccount);

    let err = client
        .purchase(
            Some(1008),
            vec![TicketLineItem::adults(1), TicketLineItem::infants(2)],
        )
        .await
        .unwrap_err();
    assert_eq!(
        err,
        PurchaseError::InfantRatioExceeded {
            infants: 2,
            adults: 1
        }
    );

    assert!(payments.calls().is_empty());
    assert!(seats.calls().is_empty());
}
