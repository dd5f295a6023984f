//! Purchase configuration loaded from environment variables.

use crate::model::TicketPrices;
use serde::{Deserialize, Serialize};

/// Tunables for the purchase system, with defaults matching the published ticket rules.
///
/// Reads from environment variables:
/// - `TICKET_MAX_PER_PURCHASE`: maximum tickets in one purchase (default: `25`)
/// - `TICKET_PRICE_ADULT`: adult price (default: `25`)
/// - `TICKET_PRICE_CHILD`: child price (default: `15`)
/// - `TICKET_PRICE_INFANT`: infant price (default: `0`)
/// - `TICKET_MAILBOX_CAPACITY`: purchase actor mailbox size (default: `32`)
///
/// Missing, unparsable or negative values fall back to the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseConfig {
    pub max_tickets_per_purchase: u32,
    pub prices: TicketPrices,
    pub mailbox_capacity: usize,
}

impl PurchaseConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let price = |key: &str, default: u32| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u32>().ok())
                .unwrap_or(default)
        };

        Self {
            max_tickets_per_purchase: lookup("TICKET_MAX_PER_PURCHASE")
                .and_then(|v| v.trim().parse::<u32>().ok())
                .unwrap_or(defaults.max_tickets_per_purchase),
            prices: TicketPrices {
                adult: price("TICKET_PRICE_ADULT", defaults.prices.adult),
                child: price("TICKET_PRICE_CHILD", defaults.prices.child),
                infant: price("TICKET_PRICE_INFANT", defaults.prices.infant),
            },
            mailbox_capacity: lookup("TICKET_MAILBOX_CAPACITY")
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|c| *c > 0)
                .unwrap_or(defaults.mailbox_capacity),
        }
    }
}

impl Default for PurchaseConfig {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: 25,
            prices: TicketPrices::default(),
            mailbox_capacity: 32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = PurchaseConfig::default();
        assert_eq!(config.max_tickets_per_purchase, 25);
        assert_eq!(config.prices, TicketPrices::default());
        assert_eq!(config.mailbox_capacity, 32);
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        assert_eq!(
            PurchaseConfig::from_lookup(|_| None),
            PurchaseConfig::default()
        );
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = PurchaseConfig::from_lookup(lookup_from(&[
            ("TICKET_MAX_PER_PURCHASE", "10"),
            ("TICKET_PRICE_ADULT", "30"),
            ("TICKET_PRICE_INFANT", " 2 "),
            ("TICKET_MAILBOX_CAPACITY", "4"),
        ]));
        assert_eq!(config.max_tickets_per_purchase, 10);
        assert_eq!(config.prices.adult, 30);
        assert_eq!(config.prices.child, 15);
        assert_eq!(config.prices.infant, 2);
        assert_eq!(config.mailbox_capacity, 4);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = PurchaseConfig::from_lookup(lookup_from(&[
            ("TICKET_MAX_PER_PURCHASE", "lots"),
            ("TICKET_PRICE_CHILD", "-5"),
            ("TICKET_MAILBOX_CAPACITY", "0"),
        ]));
        assert_eq!(config, PurchaseConfig::default());
    }
}
