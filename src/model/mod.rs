//! Pure data structures: tickets, requests, tallies and outcomes.

pub mod purchase;
pub mod ticket;

pub use purchase::*;
pub use ticket::*;
