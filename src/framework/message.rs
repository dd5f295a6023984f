//! # Mailbox Messages
//!
//! The envelope type carried over the actor's `mpsc` channel.

use crate::framework::handler::MessageHandler;
use tokio::sync::oneshot;

/// Type alias for the one-shot reply channel used by actors.
pub type Response<T> = oneshot::Sender<T>;

/// A request paired with the channel its reply goes back on.
#[derive(Debug)]
pub struct Envelope<H: MessageHandler> {
    pub request: H::Request,
    pub respond_to: Response<H::Reply>,
}
