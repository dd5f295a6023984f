//! In-memory payment and seat services.

use crate::gateways::{GatewayError, PaymentGateway, SeatReservationService};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A single call that reached the payment ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    pub account_id: i64,
    pub amount: i64,
}

#[derive(Debug, Default)]
struct PaymentState {
    balances: HashMap<i64, i64>,
    transactions: Vec<Transaction>,
    fail_charges: bool,
    fail_refunds: bool,
}

/// In-memory payment gateway that keeps a net-collected balance per account.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPaymentGateway {
    state: Arc<Mutex<PaymentState>>,
}

impl InMemoryPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent positive charge fail.
    pub fn set_fail_charges(&self, fail: bool) {
        lock(&self.state).fail_charges = fail;
    }

    /// Makes every subsequent refund (negative charge) fail.
    pub fn set_fail_refunds(&self, fail: bool) {
        lock(&self.state).fail_refunds = fail;
    }

    /// Net amount collected from `account_id` (charges minus refunds).
    pub fn collected(&self, account_id: i64) -> i64 {
        lock(&self.state)
            .balances
            .get(&account_id)
            .copied()
            .unwrap_or(0)
    }

    /// Every successful charge and refund, in the order applied.
    pub fn transactions(&self) -> Vec<Transaction> {
        lock(&self.state).transactions.clone()
    }
}

#[async_trait]
impl PaymentGateway for InMemoryPaymentGateway {
    async fn charge(&self, account_id: i64, amount: i64) -> Result<(), GatewayError> {
        let mut state = lock(&self.state);

        if amount < 0 && state.fail_refunds {
            return Err(GatewayError::new("Refund service unavailable"));
        }
        if amount >= 0 && state.fail_charges {
            return Err(GatewayError::new("Payment declined"));
        }

        *state.balances.entry(account_id).or_insert(0) += amount;
        state.transactions.push(Transaction { account_id, amount });
        debug!(account_id, amount, "Ledger updated");
        Ok(())
    }
}

#[derive(Debug, Default)]
struct SeatState {
    available: u32,
    reserved: HashMap<i64, u32>,
    fail_reservations: bool,
}

/// In-memory seat service backed by a fixed pool of seats.
#[derive(Debug, Clone, Default)]
pub struct InMemorySeatReservationService {
    state: Arc<Mutex<SeatState>>,
}

impl InMemorySeatReservationService {
    pub fn new(capacity: u32) -> Self {
        Self {
            state: Arc::new(Mutex::new(SeatState {
                available: capacity,
                ..SeatState::default()
            })),
        }
    }

    /// Makes every subsequent reservation fail regardless of capacity.
    pub fn set_fail_reservations(&self, fail: bool) {
        lock(&self.state).fail_reservations = fail;
    }

    pub fn available(&self) -> u32 {
        lock(&self.state).available
    }

    /// Seats currently held for `account_id`.
    pub fn reserved_for(&self, account_id: i64) -> u32 {
        lock(&self.state)
            .reserved
            .get(&account_id)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl SeatReservationService for InMemorySeatReservationService {
    async fn reserve(&self, account_id: i64, seat_count: u32) -> Result<(), GatewayError> {
        let mut state = lock(&self.state);

        if state.fail_reservations {
            return Err(GatewayError::new("Seat reservation service unavailable"));
        }
        if seat_count > state.available {
            return Err(GatewayError::new(format!(
                "Insufficient seats: requested {}, available {}",
                seat_count, state.available
            )));
        }

        state.available -= seat_count;
        *state.reserved.entry(account_id).or_insert(0) += seat_count;
        debug!(account_id, seat_count, available = state.available, "Seats held");
        Ok(())
    }
}
