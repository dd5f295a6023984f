//! # External Collaborators
//!
//! The purchase orchestrator depends on two remote services it does not own:
//!
//! - [`PaymentGateway`] captures (and, with a negative amount, refunds) money.
//! - [`SeatReservationService`] holds seats for an account.
//!
//! Both are treated as opaque and fallible. Neither is assumed to be idempotent, which is
//! why the orchestrator keeps its own record of processed requests upstream of them.
//!
//! ## Implementations
//!
//! - [`memory`]: in-memory services with a ledger, a seat pool and failure switches. Used by
//!   the demo binary and by full-system tests.
//! - [`mock`]: scripted services with a fluent expectation API, for tests that need to pin
//!   down exactly which calls were made.

pub mod memory;
pub mod mock;

pub use memory::*;

use async_trait::async_trait;
use thiserror::Error;

/// A failure reported by a remote collaborator. The reason is opaque to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct GatewayError {
    reason: String,
}

impl GatewayError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Captures payments. A negative `amount` is a refund of that magnitude.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, account_id: i64, amount: i64) -> Result<(), GatewayError>;
}

/// Reserves seats for an account.
#[async_trait]
pub trait SeatReservationService: Send + Sync {
    async fn reserve(&self, account_id: i64, seat_count: u32) -> Result<(), GatewayError>;
}
