use std::collections::HashMap;
use std::sync::{Arc, RwLock, Weak, PoisonError};
use std::sync::atomic::{AtomicUsize, Ordering};
use color_eyre::eyre::{eyre, Result};
use log::{debug, info};

use crate::transport::{MessageCallback, Transport, TransportHints};

struct Registration<M> {
    id: usize,
    queue_size: usize,
    hints: TransportHints,
    callback: MessageCallback<M>
}

struct Registry<M> {
    topics: RwLock<HashMap<String, Vec<Registration<M>>>>,
    next_id: AtomicUsize
}

impl<M> Registry<M> {
    fn remove(&self, topic: &str, id: usize) {
        let mut topics = self.topics.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(registrations) = topics.get_mut(topic) {
            registrations.retain(|r| r.id != id);
            if registrations.is_empty() {
                topics.remove(topic);
            }
        }
    }
}

/**
 * In-process topic registry. Delivery is synchronous on the publishing thread,
 * so concurrent publishers give concurrent callback invocations.
 * Clones share the same registry.
 */
pub struct LocalTransport<M> {
    registry: Arc<Registry<M>>
}

impl<M> Clone for LocalTransport<M> {
    fn clone(&self) -> Self {
        LocalTransport { registry: Arc::clone(&self.registry) }
    }
}

impl<M> Default for LocalTransport<M> {
    fn default() -> Self {
        LocalTransport::new()
    }
}

impl<M> LocalTransport<M> {
    pub fn new() -> LocalTransport<M> {
        LocalTransport {
            registry: Arc::new(Registry {
                topics: RwLock::new(HashMap::new()),
                next_id: AtomicUsize::new(0)
            })
        }
    }

    /**
     * Returns the number of callbacks the message was handed to.
     */
    pub fn publish(&self, topic: &str, message: &M) -> usize {
        // Callbacks run outside the registry lock so they may (un)subscribe freely.
        let callbacks = {
            let topics = self.registry.topics.read().unwrap_or_else(PoisonError::into_inner);
            match topics.get(topic) {
                Some(registrations) => registrations.iter().map(|r| Arc::clone(&r.callback)).collect::<Vec<_>>(),
                None => Vec::new()
            }
        };

        for callback in &callbacks {
            (callback.as_ref())(message);
        }
        callbacks.len()
    }

    pub fn subscriber_count(&self, topic: &str) -> usize {
        let topics = self.registry.topics.read().unwrap_or_else(PoisonError::into_inner);
        topics.get(topic).map_or(0, |r| r.len())
    }

    pub fn queue_sizes(&self, topic: &str) -> Vec<usize> {
        let topics = self.registry.topics.read().unwrap_or_else(PoisonError::into_inner);
        topics.get(topic).map_or_else(Vec::new, |r| r.iter().map(|x| x.queue_size).collect())
    }

    pub fn hints(&self, topic: &str) -> Vec<TransportHints> {
        let topics = self.registry.topics.read().unwrap_or_else(PoisonError::into_inner);
        topics.get(topic).map_or_else(Vec::new, |r| r.iter().map(|x| x.hints).collect())
    }
}

impl<M: 'static> Transport<M> for LocalTransport<M> {
    type Subscription = LocalSubscription<M>;

    fn subscribe(&self, topic: &str, queue_size: usize, hints: TransportHints, callback: MessageCallback<M>) -> Result<LocalSubscription<M>> {
        if topic.is_empty() {
            return Err(eyre!("topic name must not be empty"));
        }
        if queue_size == 0 {
            return Err(eyre!("queue size for {} must be positive", topic));
        }

        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        let mut topics = self.registry.topics.write().unwrap_or_else(PoisonError::into_inner);
        topics.entry(topic.to_string()).or_insert_with(Vec::new).push(Registration { id, queue_size, hints, callback });
        info!("subscribed to {} (queue size {}, tcp_no_delay {})", topic, queue_size, hints.tcp_no_delay);

        Ok(LocalSubscription {
            topic: topic.to_string(),
            id,
            registry: Arc::downgrade(&self.registry)
        })
    }
}

pub struct LocalSubscription<M> {
    topic: String,
    id: usize,
    registry: Weak<Registry<M>>
}

impl<M> LocalSubscription<M> {
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

impl<M> Drop for LocalSubscription<M> {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.remove(&self.topic, self.id);
            debug!("unsubscribed from {}", self.topic);
        }
    }
}
