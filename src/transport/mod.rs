use std::sync::Arc;
use color_eyre::eyre::Result;

pub mod local;

pub use local::{LocalSubscription, LocalTransport};

/**
 * Invoked by the transport on its own delivery thread, possibly concurrently.
 */
pub type MessageCallback<M> = Arc<dyn Fn(&M) + Send + Sync>;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TransportHints {
    pub tcp_no_delay: bool
}

impl TransportHints {
    pub fn tcp_no_delay(mut self) -> TransportHints {
        self.tcp_no_delay = true;
        self
    }
}

pub trait Transport<M> {
    /// Keeps the registration alive. Dropping it unregisters the callback.
    type Subscription: Send;

    fn subscribe(&self, topic: &str, queue_size: usize, hints: TransportHints, callback: MessageCallback<M>) -> Result<Self::Subscription>;
}
