//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started`, `Shutdown` with the number of messages processed
//! - **Purchases**: one `info` line per completed purchase with `amount` and `seats`; `warn`
//!   for rejected purchases with the error `kind`; `error` when a refund failed and the
//!   purchase needs manual reconciliation
//! - **Request Flow**: `purchase` spans carrying `account_id`, nested under the client span
//!
//! ## Usage Examples
//!
//! ```bash
//! # Purchase outcomes only
//! RUST_LOG=info cargo run
//!
//! # Also show tallies, each gateway step and full request payloads
//! RUST_LOG=debug cargo run
//!
//! # Filter to the orchestrator
//! RUST_LOG=ticket_purchase::purchase_actor=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`** (compact):
//!
//! ```text
//! INFO Actor started handler_type="PurchaseOrchestrator"
//! INFO purchase: Purchase complete account_id=Some(1001) amount=65 seats=3
//! WARN purchase: Purchase rejected account_id=Some(1001) kind=DuplicateRequest error=Request has already been processed for account 1001
//! INFO Purchase orchestrator stopped processed_requests=1
//! INFO Shutdown handler_type="PurchaseOrchestrator" processed=2
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // handler_type and span names carry the context
        .compact()
        .init();
}
