//! # System Lifecycle
//!
//! Starting, wiring and stopping the purchase actor, plus the ambient pieces every entry
//! point needs: configuration and tracing setup.
//!
//! ## Dependency Injection via Context
//!
//! The purchase actor is created without its collaborators and receives them when its run
//! loop starts:
//!
//! ```rust,ignore
//! let (actor, client) = purchase_actor::new(&config);
//! tokio::spawn(actor.run(PurchaseContext::new(payments, seats)));
//! ```
//!
//! [`PurchaseSystem`] wraps exactly this and keeps the task handle for shutdown.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the mailbox
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once queued requests are handled
//! 3. **Await completion** - wait for the actor task to finish
//!
//! Clones of the client held elsewhere keep the actor alive, so drop them before calling
//! [`PurchaseSystem::shutdown`].

pub mod config;
pub mod purchase_system;
pub mod tracing;

pub use config::*;
pub use purchase_system::*;
pub use self::tracing::*;
