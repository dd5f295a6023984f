//! Idempotency keys and the processed-request store.
//!
//! A key is the account id plus the request's line items in canonical order, so requests
//! that differ only in the order of their line items collide on purpose. The key has no
//! notion of occasion: two separate purchases of the same mix by the same account are
//! treated as one.

use crate::model::TicketLineItem;
use std::collections::HashSet;

/// Canonical fingerprint of a purchase request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdempotencyKey {
    account_id: i64,
    items: Vec<TicketLineItem>,
}

impl IdempotencyKey {
    /// Builds the key, sorting line items by ticket type (ties broken by count).
    pub fn new(account_id: i64, items: &[TicketLineItem]) -> Self {
        let mut items = items.to_vec();
        items.sort_by_key(|item| (item.ticket_type(), item.count()));
        Self { account_id, items }
    }
}

/// Set of requests that have been fulfilled.
///
/// Owned by the orchestrator and only touched from inside its critical section, so
/// implementations need no internal synchronization.
pub trait ProcessedRequestStore: Send {
    fn contains(&self, key: &IdempotencyKey) -> bool;

    /// Records `key`. Returns false if it was already present.
    fn insert(&mut self, key: IdempotencyKey) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-lifetime store. Never cleared; lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryProcessedRequests {
    keys: HashSet<IdempotencyKey>,
}

impl InMemoryProcessedRequests {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProcessedRequestStore for InMemoryProcessedRequests {
    fn contains(&self, key: &IdempotencyKey) -> bool {
        self.keys.contains(key)
    }

    fn insert(&mut self, key: IdempotencyKey) -> bool {
        self.keys.insert(key)
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}
