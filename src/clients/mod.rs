//! Type-safe wrappers around [`MailboxClient`](crate::framework::MailboxClient).

pub mod actor_client;
pub mod purchase_client;

pub use actor_client::*;
pub use purchase_client::*;
