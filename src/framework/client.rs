//! # Generic Client
//!
//! This module defines the generic client for communicating with an [`Actor`](crate::framework::Actor).

use crate::framework::error::FrameworkError;
use crate::framework::handler::MessageHandler;
use crate::framework::message::Envelope;
use tokio::sync::{mpsc, oneshot};

/// ## MailboxClient
///
/// Forwards requests over the actor's mpsc channel and awaits the reply on a oneshot
/// channel. Holds only a sender, so cloning is cheap and clones can be shared across tasks.
/// The actor keeps running for as long as at least one clone is alive.
pub struct MailboxClient<H: MessageHandler> {
    sender: mpsc::Sender<Envelope<H>>,
}

impl<H: MessageHandler> Clone for MailboxClient<H> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<H: MessageHandler> MailboxClient<H> {
    pub fn new(sender: mpsc::Sender<Envelope<H>>) -> Self {
        Self { sender }
    }

    /// Sends a request and waits for the handler's reply.
    ///
    /// Fails with [`FrameworkError::ActorClosed`] if the actor is no longer receiving,
    /// and with [`FrameworkError::ActorDropped`] if it stopped before replying.
    pub async fn send(&self, request: H::Request) -> Result<H::Reply, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(Envelope {
                request,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    /// Returns true once the actor's receiver has been dropped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
