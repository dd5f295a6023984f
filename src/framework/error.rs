//! # Framework Errors
//!
//! Transport-level failures between a client and its actor. These say nothing about
//! whether the business operation succeeded; clients map them into their own error type.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}
