use crate::framework::{FrameworkError, MailboxClient, MessageHandler};
use async_trait::async_trait;

/// Trait for domain-specific clients wrapping a [`MailboxClient`].
///
/// Implementors supply the inner client and an error mapping; `request` is provided.
#[async_trait]
pub trait ActorClient<H: MessageHandler>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic MailboxClient.
    fn inner(&self) -> &MailboxClient<H>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Send a request and wait for the reply.
    #[tracing::instrument(skip(self))]
    async fn request(&self, request: H::Request) -> Result<H::Reply, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().send(request).await.map_err(Self::map_error)
    }
}
