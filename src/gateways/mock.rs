//! # Scripted Gateways
//!
//! Mock collaborators for testing the orchestrator with exact call expectations.
//!
//! Each mock holds a queue of expected calls. A call that matches the head of the queue gets
//! the scripted response; anything else is recorded as a mismatch and answered with an error,
//! so the orchestrator keeps running and [`verify`](MockPaymentGateway::verify) reports the
//! problem at the end of the test.
//!
//! ```ignore
//! let payments = Arc::new(MockPaymentGateway::new());
//! payments.expect_charge(1003, 25).return_ok();
//! payments.expect_charge(1003, -25).return_err("Refund service unavailable");
//!
//! // ... drive the orchestrator ...
//!
//! payments.verify();
//! assert_eq!(payments.calls(), vec![(1003, 25), (1003, -25)]);
//! ```

use crate::gateways::{GatewayError, PaymentGateway, SeatReservationService};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

struct Expectation<A> {
    args: A,
    response: Result<(), GatewayError>,
}

/// Shared bookkeeping for one scripted collaborator.
struct Script<A> {
    expectations: Mutex<VecDeque<Expectation<A>>>,
    calls: Mutex<Vec<A>>,
    mismatches: Mutex<Vec<String>>,
}

impl<A: Copy + PartialEq + std::fmt::Debug> Script<A> {
    fn new() -> Self {
        Self {
            expectations: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            mismatches: Mutex::new(Vec::new()),
        }
    }

    fn push(&self, args: A, response: Result<(), GatewayError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation { args, response });
    }

    fn call(&self, args: A) -> Result<(), GatewayError> {
        self.calls.lock().unwrap().push(args);
        let next = self.expectations.lock().unwrap().pop_front();
        match next {
            Some(expectation) if expectation.args == args => expectation.response,
            Some(expectation) => {
                let msg = format!("expected {:?}, got {:?}", expectation.args, args);
                self.mismatches.lock().unwrap().push(msg.clone());
                Err(GatewayError::new(format!("unexpected call: {msg}")))
            }
            None => {
                let msg = format!("unexpected call {:?}", args);
                self.mismatches.lock().unwrap().push(msg.clone());
                Err(GatewayError::new(msg))
            }
        }
    }

    fn calls(&self) -> Vec<A> {
        self.calls.lock().unwrap().clone()
    }

    fn verify(&self, name: &str) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("{name}: unexpected calls: {:?}", *mismatches);
        }
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("{name}: not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for one expected call.
pub struct ResponseBuilder<A> {
    script: Arc<Script<A>>,
    args: A,
}

impl<A: Copy + PartialEq + std::fmt::Debug> ResponseBuilder<A> {
    /// The expected call succeeds.
    pub fn return_ok(self) {
        self.script.push(self.args, Ok(()));
    }

    /// The expected call fails with `reason`.
    pub fn return_err(self, reason: impl Into<String>) {
        self.script.push(self.args, Err(GatewayError::new(reason)));
    }
}

/// Scripted [`PaymentGateway`]. Calls are recorded as `(account_id, amount)`.
#[derive(Clone)]
pub struct MockPaymentGateway {
    script: Arc<Script<(i64, i64)>>,
}

impl Default for MockPaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self {
            script: Arc::new(Script::new()),
        }
    }

    /// Expects `charge(account_id, amount)` as the next call.
    pub fn expect_charge(&self, account_id: i64, amount: i64) -> ResponseBuilder<(i64, i64)> {
        ResponseBuilder {
            script: self.script.clone(),
            args: (account_id, amount),
        }
    }

    /// Every call received, including unexpected ones.
    pub fn calls(&self) -> Vec<(i64, i64)> {
        self.script.calls()
    }

    /// Panics if any call was unexpected or any expectation is still pending.
    pub fn verify(&self) {
        self.script.verify("MockPaymentGateway");
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn charge(&self, account_id: i64, amount: i64) -> Result<(), GatewayError> {
        self.script.call((account_id, amount))
    }
}

/// Scripted [`SeatReservationService`]. Calls are recorded as `(account_id, seat_count)`.
#[derive(Clone)]
pub struct MockSeatReservationService {
    script: Arc<Script<(i64, u32)>>,
}

impl Default for MockSeatReservationService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSeatReservationService {
    pub fn new() -> Self {
        Self {
            script: Arc::new(Script::new()),
        }
    }

    /// Expects `reserve(account_id, seat_count)` as the next call.
    pub fn expect_reserve(&self, account_id: i64, seat_count: u32) -> ResponseBuilder<(i64, u32)> {
        ResponseBuilder {
            script: self.script.clone(),
            args: (account_id, seat_count),
        }
    }

    /// Every call received, including unexpected ones.
    pub fn calls(&self) -> Vec<(i64, u32)> {
        self.script.calls()
    }

    /// Panics if any call was unexpected or any expectation is still pending.
    pub fn verify(&self) {
        self.script.verify("MockSeatReservationService");
    }
}

#[async_trait]
impl SeatReservationService for MockSeatReservationService {
    async fn reserve(&self, account_id: i64, seat_count: u32) -> Result<(), GatewayError> {
        self.script.call((account_id, seat_count))
    }
}
