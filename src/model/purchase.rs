use crate::model::{TicketLineItem, TicketPrices, TicketType};
use serde::{Deserialize, Serialize};

/// A purchase as submitted by a caller.
///
/// `account_id` is optional so that a missing account can be reported as a validation
/// failure instead of being unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub account_id: Option<i64>,
    pub items: Vec<TicketLineItem>,
}

impl PurchaseRequest {
    pub fn new(account_id: Option<i64>, items: Vec<TicketLineItem>) -> Self {
        Self { account_id, items }
    }
}

/// Per-type ticket counts summed across every line item of a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketTally {
    pub adults: u64,
    pub children: u64,
    pub infants: u64,
}

impl TicketTally {
    pub fn from_items(items: &[TicketLineItem]) -> Self {
        items.iter().fold(Self::default(), |mut tally, item| {
            let count = u64::from(item.count());
            match item.ticket_type() {
                TicketType::Adult => tally.adults += count,
                TicketType::Child => tally.children += count,
                TicketType::Infant => tally.infants += count,
            }
            tally
        })
    }

    pub fn total(&self) -> u64 {
        self.adults + self.children + self.infants
    }

    /// Number of seats to reserve. Infants never occupy a seat.
    ///
    /// Saturates at `u32::MAX`; a tally that passed validation is bounded by the
    /// per-purchase maximum long before that.
    pub fn seats(&self) -> u32 {
        let seats: u64 = self
            .by_type()
            .filter(|(ticket_type, _)| ticket_type.occupies_seat())
            .map(|(_, count)| count)
            .sum();
        u32::try_from(seats).unwrap_or(u32::MAX)
    }

    /// Total charge for this tally at the given prices. Never negative; saturates at
    /// `i64::MAX`.
    pub fn amount(&self, prices: &TicketPrices) -> i64 {
        self.by_type()
            .map(|(ticket_type, count)| {
                i64::from(prices.price_of(ticket_type))
                    .saturating_mul(i64::try_from(count).unwrap_or(i64::MAX))
            })
            .fold(0i64, i64::saturating_add)
    }

    fn by_type(&self) -> impl Iterator<Item = (TicketType, u64)> {
        [
            (TicketType::Adult, self.adults),
            (TicketType::Child, self.children),
            (TicketType::Infant, self.infants),
        ]
        .into_iter()
    }
}

/// The result of a successful purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOutcome {
    pub amount_charged: i64,
    pub seats_reserved: u32,
}
