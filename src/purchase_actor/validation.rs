//! Request validation.
//!
//! Rules are checked in a fixed order and the first violation wins:
//! account, emptiness, maximum count, adult requirement, infant ratio.

use crate::model::{PurchaseRequest, TicketTally};
use crate::purchase_actor::PurchaseError;

/// A request that passed every business rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedPurchase {
    pub account_id: i64,
    pub tally: TicketTally,
}

pub fn validate(
    request: &PurchaseRequest,
    max_tickets: u32,
) -> Result<ValidatedPurchase, PurchaseError> {
    let account_id = match request.account_id {
        Some(id) if id > 0 => id,
        Some(id) => return Err(PurchaseError::InvalidAccount(id.to_string())),
        None => return Err(PurchaseError::InvalidAccount("missing".to_string())),
    };

    if request.items.is_empty() {
        return Err(PurchaseError::EmptyRequest);
    }

    let tally = TicketTally::from_items(&request.items);

    if tally.total() > u64::from(max_tickets) {
        return Err(PurchaseError::TooManyTickets {
            requested: tally.total(),
            max: max_tickets,
        });
    }

    if tally.children + tally.infants > 0 && tally.adults == 0 {
        return Err(PurchaseError::MissingAdult);
    }

    if tally.infants > tally.adults {
        return Err(PurchaseError::InfantRatioExceeded {
            infants: tally.infants,
            adults: tally.adults,
        });
    }

    Ok(ValidatedPurchase { account_id, tally })
}
