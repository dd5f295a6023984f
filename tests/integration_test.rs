use std::sync::Arc;
use ticket_purchase::gateways::{
    InMemoryPaymentGateway, InMemorySeatReservationService, Transaction,
};
use ticket_purchase::lifecycle::{PurchaseConfig, PurchaseSystem};
use ticket_purchase::model::{TicketLineItem, TicketPrices};
use ticket_purchase::purchase_actor::{PurchaseError, PurchaseErrorKind};

/// Full system over the in-memory payment and seat services.
struct Harness {
    system: PurchaseSystem,
    payments: InMemoryPaymentGateway,
    seats: InMemorySeatReservationService,
}

fn harness_with(config: PurchaseConfig, capacity: u32) -> Harness {
    let payments = InMemoryPaymentGateway::new();
    let seats = InMemorySeatReservationService::new(capacity);
    let system = PurchaseSystem::new(
        &config,
        Arc::new(payments.clone()),
        Arc::new(seats.clone()),
    );
    Harness {
        system,
        payments,
        seats,
    }
}

fn harness() -> Harness {
    harness_with(PurchaseConfig::default(), 1_000)
}

#[tokio::test]
async fn test_price_does_not_depend_on_item_order() {
    let h = harness();
    let client = &h.system.purchase_client;

    let a = client
        .purchase(
            Some(1),
            vec![TicketLineItem::adults(2), TicketLineItem::children(3)],
        )
        .await
        .unwrap();
    let b = client
        .purchase(
            Some(2),
            vec![TicketLineItem::children(3), TicketLineItem::adults(2)],
        )
        .await
        .unwrap();

    assert_eq!(a, b);
    assert_eq!(a.amount_charged, 95);
    assert_eq!(a.seats_reserved, 5);
    assert_eq!(h.payments.collected(1), 95);
    assert_eq!(h.seats.reserved_for(2), 5);

    h.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_ticket_limit_is_inclusive() {
    let h = harness();
    let client = &h.system.purchase_client;

    let outcome = client
        .purchase(
            Some(10),
            vec![TicketLineItem::adults(20), TicketLineItem::infants(5)],
        )
        .await
        .unwrap();
    assert_eq!(outcome.amount_charged, 500);
    assert_eq!(outcome.seats_reserved, 20);

    let err = client
        .purchase(
            Some(11),
            vec![TicketLineItem::adults(20), TicketLineItem::children(6)],
        )
        .await
        .unwrap_err();
    assert_eq!(
        err,
        PurchaseError::TooManyTickets {
            requested: 26,
            max: 25
        }
    );
    assert_eq!(h.payments.collected(11), 0);

    h.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_infants_may_equal_adults() {
    let h = harness();

    let outcome = h
        .system
        .purchase_client
        .purchase(
            Some(20),
            vec![TicketLineItem::adults(3), TicketLineItem::infants(3)],
        )
        .await
        .unwrap();

    assert_eq!(outcome.amount_charged, 75);
    assert_eq!(outcome.seats_reserved, 3);

    h.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_identical_requests_charge_once() {
    let h = harness();
    let items = vec![TicketLineItem::adults(1), TicketLineItem::children(1)];

    let tasks: Vec<_> = (0..10)
        .map(|_| {
            let client = h.system.purchase_client.clone();
            let items = items.clone();
            tokio::spawn(async move { client.purchase(Some(30), items).await })
        })
        .collect();

    let mut successes = 0;
    let mut duplicates = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => successes += 1,
            Err(e) => {
                assert_eq!(e.kind(), PurchaseErrorKind::DuplicateRequest);
                duplicates += 1;
            }
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(duplicates, 9);
    assert_eq!(
        h.payments.transactions(),
        vec![Transaction {
            account_id: 30,
            amount: 40
        }]
    );
    assert_eq!(h.seats.reserved_for(30), 2);

    h.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_distinct_accounts_all_succeed() {
    let h = harness();

    let tasks: Vec<_> = (100..110)
        .map(|account_id| {
            let client = h.system.purchase_client.clone();
            tokio::spawn(async move {
                client
                    .purchase(Some(account_id), vec![TicketLineItem::adults(1)])
                    .await
            })
        })
        .collect();

    for task in tasks {
        assert!(task.await.unwrap().is_ok());
    }
    assert_eq!(h.payments.transactions().len(), 10);
    assert_eq!(h.seats.available(), 990);

    h.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sold_out_purchase_is_refunded() {
    let h = harness_with(PurchaseConfig::default(), 2);
    let client = &h.system.purchase_client;

    let err = client
        .purchase(Some(40), vec![TicketLineItem::adults(3)])
        .await
        .unwrap_err();

    assert_eq!(
        err,
        PurchaseError::ReservationFailed {
            reason: "Insufficient seats: requested 3, available 2".to_string()
        }
    );
    assert_eq!(h.payments.collected(40), 0);
    assert_eq!(h.payments.transactions().len(), 2);
    assert_eq!(h.seats.available(), 2);
    assert!(!client
        .is_processed(Some(40), vec![TicketLineItem::adults(3)])
        .await
        .unwrap());

    h.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_failed_refund_keeps_the_money() {
    let h = harness();
    h.seats.set_fail_reservations(true);
    h.payments.set_fail_refunds(true);

    let err = h
        .system
        .purchase_client
        .purchase(Some(50), vec![TicketLineItem::adults(1)])
        .await
        .unwrap_err();

    assert_eq!(err.kind(), PurchaseErrorKind::RefundFailed);
    assert!(err.requires_manual_intervention());
    assert_eq!(h.payments.collected(50), 25);

    h.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_is_processed_tracks_completed_purchases() {
    let h = harness();
    let client = &h.system.purchase_client;
    let items = vec![TicketLineItem::adults(2), TicketLineItem::infants(1)];

    assert!(!client.is_processed(Some(60), items.clone()).await.unwrap());
    client.purchase(Some(60), items.clone()).await.unwrap();
    assert!(client.is_processed(Some(60), items.clone()).await.unwrap());

    let reordered: Vec<_> = items.iter().rev().copied().collect();
    assert!(client.is_processed(Some(60), reordered).await.unwrap());
    assert!(!client.is_processed(Some(61), items.clone()).await.unwrap());
    assert!(!client.is_processed(None, items).await.unwrap());

    h.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_custom_prices_and_limit() {
    let config = PurchaseConfig {
        max_tickets_per_purchase: 4,
        prices: TicketPrices {
            adult: 30,
            child: 10,
            infant: 5,
        },
        mailbox_capacity: 1,
    };
    let h = harness_with(config, 100);
    let client = &h.system.purchase_client;

    let outcome = client
        .purchase(
            Some(70),
            vec![
                TicketLineItem::adults(2),
                TicketLineItem::children(1),
                TicketLineItem::infants(1),
            ],
        )
        .await
        .unwrap();
    assert_eq!(outcome.amount_charged, 75);

    let err = client
        .purchase(Some(71), vec![TicketLineItem::adults(5)])
        .await
        .unwrap_err();
    assert_eq!(err.kind(), PurchaseErrorKind::TooManyTickets);

    h.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_stops_the_actor() {
    let h = harness();
    let client = h.system.purchase_client.clone();

    client
        .purchase(Some(80), vec![TicketLineItem::adults(1)])
        .await
        .unwrap();
    drop(client);

    assert!(h.system.shutdown().await.is_ok());
}
