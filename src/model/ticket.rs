//! Ticket types, line items and the price table.
//!
//! A [`TicketLineItem`] is an immutable `(type, count)` pair. Counts are stored as `u32`,
//! so a line item that exists is always non-negative; the fallible constructor
//! [`TicketLineItem::new`] is the boundary where untrusted signed counts are checked.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kinds of ticket that can be purchased.
///
/// The derived ordering (`Adult < Child < Infant`) is the canonical sort order used when
/// building idempotency keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    /// Whether a ticket of this type needs a seat. Infants sit on an adult's lap.
    pub fn occupies_seat(self) -> bool {
        !matches!(self, TicketType::Infant)
    }
}

/// Errors raised while constructing model values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// One `(ticket type, count)` pair within a purchase request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TicketLineItem {
    ticket_type: TicketType,
    count: u32,
}

impl TicketLineItem {
    /// Creates a line item from an untrusted count.
    ///
    /// # Errors
    /// [`ModelError::InvalidArgument`] if `count` is negative or does not fit in a `u32`.
    pub fn new(ticket_type: TicketType, count: i64) -> Result<Self, ModelError> {
        let count = u32::try_from(count).map_err(|_| {
            if count < 0 {
                ModelError::InvalidArgument(format!("Ticket count cannot be negative: {count}"))
            } else {
                ModelError::InvalidArgument(format!("Ticket count too large: {count}"))
            }
        })?;
        Ok(Self { ticket_type, count })
    }

    pub fn adults(count: u32) -> Self {
        Self {
            ticket_type: TicketType::Adult,
            count,
        }
    }

    pub fn children(count: u32) -> Self {
        Self {
            ticket_type: TicketType::Child,
            count,
        }
    }

    pub fn infants(count: u32) -> Self {
        Self {
            ticket_type: TicketType::Infant,
            count,
        }
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Price per ticket, in whole currency units.
///
/// Unsigned: a negative amount is a refund on the payment gateway, so a price table must
/// never be able to produce one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPrices {
    pub adult: u32,
    pub child: u32,
    pub infant: u32,
}

impl TicketPrices {
    pub fn price_of(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }
}

impl Default for TicketPrices {
    fn default() -> Self {
        Self {
            adult: 25,
            child: 15,
            infant: 0,
        }
    }
}
