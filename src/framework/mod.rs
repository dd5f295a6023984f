//! Generic single-worker actor framework.
//!
//! This module provides the building blocks for running a piece of stateful business logic
//! behind a mailbox so that every request it handles is processed one at a time.
//!
//! # Main Components
//!
//! - [`MessageHandler`] - Trait the business logic implements
//! - [`Actor`] - Generic actor that owns a handler and drains its mailbox sequentially
//! - [`MailboxClient`] - Cloneable, type-safe client for sending requests to an actor
//! - [`FrameworkError`] - Transport errors (actor closed, reply dropped)
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning a real actor.

pub mod actor;
pub mod client;
pub mod error;
pub mod handler;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::Actor;
pub use client::MailboxClient;
pub use error::FrameworkError;
pub use handler::MessageHandler;
pub use message::{Envelope, Response};
