#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Ticket Purchase
//!
//! > **Validate, charge, reserve and compensate, one purchase at a time.**
//!
//! This crate turns a ticket purchase request into a committed side effect on two external
//! collaborators: a payment gateway and a seat reservation service. A purchase either
//! completes (charged and seated), fails cleanly with nothing changed, or is refunded after a
//! failed reservation. Repeating a completed request is rejected as a duplicate.
//!
//! ## 🏗️ Design
//!
//! ### One Actor, One Purchase at a Time
//!
//! All purchases flow through a single [`PurchaseOrchestrator`](purchase_actor::PurchaseOrchestrator)
//! running inside an [`Actor`](framework::Actor). The actor handles one message to
//! completion before reading the next, so the duplicate check and the final "mark processed"
//! step can never interleave between two concurrent callers. No lock guards the
//! processed-request set.
//!
//! ### Context Injection
//!
//! The orchestrator is constructed with configuration only. The payment and seat services are
//! handed to [`Actor::run`](framework::Actor::run) as a
//! [`PurchaseContext`](purchase_actor::PurchaseContext), so tests swap in mocks without
//! touching the orchestrator.
//!
//! ### Type-Safe Errors
//!
//! Every failure is a [`PurchaseError`](purchase_actor::PurchaseError) variant with a stable
//! [`kind`](purchase_actor::PurchaseError::kind). Only
//! [`RefundFailed`](purchase_actor::PurchaseError::RefundFailed) asks for manual intervention:
//! money was taken and no seats are held.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! A generic mailbox actor, its client and a mock client for tests.
//! - **Key items**: [`MessageHandler`](framework::MessageHandler), [`Actor`](framework::Actor),
//!   [`MailboxClient`](framework::MailboxClient).
//!
//! ### 2. The Rules ([`model`], [`purchase_actor`])
//! Ticket types, prices, validation, idempotency keys and the purchase flow itself.
//! - **Key items**: [`TicketLineItem`](model::TicketLineItem),
//!   [`validate`](purchase_actor::validation::validate),
//!   [`IdempotencyKey`](purchase_actor::IdempotencyKey).
//!
//! ### 3. The Collaborators ([`gateways`])
//! Traits for the payment and seat services, with in-memory and scripted mock versions.
//!
//! ### 4. The Interface ([`clients`], [`lifecycle`])
//! [`PurchaseClient`](clients::PurchaseClient) hides message passing;
//! [`PurchaseSystem`](lifecycle::PurchaseSystem) starts and stops the actor.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Override the rules
//! TICKET_MAX_PER_PURCHASE=10 TICKET_PRICE_ADULT=30 RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod gateways;
pub mod lifecycle;
pub mod model;
pub mod purchase_actor;
