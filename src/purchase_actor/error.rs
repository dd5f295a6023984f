//! Error types for the purchase actor.

use thiserror::Error;

/// Coarse classification of a [`PurchaseError`], for callers that branch on the kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PurchaseErrorKind {
    InvalidAccount,
    EmptyRequest,
    TooManyTickets,
    MissingAdult,
    InfantRatioExceeded,
    DuplicateRequest,
    PaymentFailed,
    ReservationFailed,
    RefundFailed,
    ActorCommunication,
}

/// Errors that can occur while purchasing tickets.
///
/// Every variant except [`PurchaseError::RefundFailed`] leaves the system consistent: either
/// nothing was charged, or the charge was reversed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PurchaseError {
    /// The account id is missing or not a positive integer.
    #[error("Invalid account ID: {0}")]
    InvalidAccount(String),

    /// The request contains no line items.
    #[error("No tickets requested")]
    EmptyRequest,

    /// More tickets than the per-purchase maximum.
    #[error("Cannot purchase more than {max} tickets at a time (requested {requested})")]
    TooManyTickets { requested: u64, max: u32 },

    /// Child or infant tickets without an adult ticket.
    #[error("Must purchase at least one adult ticket when buying child or infant tickets")]
    MissingAdult,

    /// More infants than adults.
    #[error("Infant tickets ({infants}) cannot exceed adult tickets ({adults})")]
    InfantRatioExceeded { infants: u64, adults: u64 },

    /// The same request was already fulfilled.
    #[error("Request has already been processed for account {account_id}")]
    DuplicateRequest { account_id: i64 },

    /// The charge was declined. Nothing was captured.
    #[error("Payment failed: {reason}")]
    PaymentFailed { reason: String },

    /// Seats could not be reserved; the charge was refunded.
    #[error("Seat reservation failed: {reason}")]
    ReservationFailed { reason: String },

    /// Seats could not be reserved and the refund also failed. Money may be held without a
    /// seat; needs manual reconciliation.
    #[error(
        "Refund failed for account {account_id}: {refund_reason} \
         (seat reservation failed: {reservation_reason})"
    )]
    RefundFailed {
        account_id: i64,
        reservation_reason: String,
        refund_reason: String,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl PurchaseError {
    pub fn kind(&self) -> PurchaseErrorKind {
        match self {
            PurchaseError::InvalidAccount(_) => PurchaseErrorKind::InvalidAccount,
            PurchaseError::EmptyRequest => PurchaseErrorKind::EmptyRequest,
            PurchaseError::TooManyTickets { .. } => PurchaseErrorKind::TooManyTickets,
            PurchaseError::MissingAdult => PurchaseErrorKind::MissingAdult,
            PurchaseError::InfantRatioExceeded { .. } => PurchaseErrorKind::InfantRatioExceeded,
            PurchaseError::DuplicateRequest { .. } => PurchaseErrorKind::DuplicateRequest,
            PurchaseError::PaymentFailed { .. } => PurchaseErrorKind::PaymentFailed,
            PurchaseError::ReservationFailed { .. } => PurchaseErrorKind::ReservationFailed,
            PurchaseError::RefundFailed { .. } => PurchaseErrorKind::RefundFailed,
            PurchaseError::ActorCommunication(_) => PurchaseErrorKind::ActorCommunication,
        }
    }

    /// True only when money may be held without a seat.
    pub fn requires_manual_intervention(&self) -> bool {
        matches!(self, PurchaseError::RefundFailed { .. })
    }
}
