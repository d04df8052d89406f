//! The two-way message channel to the consumer.
//!
//! Inbound messages are raw JSON values fanned out to every subscriber.
//! Each subscriber has its own unbounded queue, so a burst of commands is
//! never dropped however far the receiver falls behind. Outbound messages
//! are typed results posted back to the consumer.

use std::sync::{Mutex, MutexGuard};

use serde_json::Value;
use tokio::sync::mpsc;

use crate::error::{DevreadyError, Result};
use crate::messaging::message::OutboundMessage;

/// A live subscription to inbound messages.
///
/// Dropping it unsubscribes.
pub struct Subscription {
    receiver: mpsc::UnboundedReceiver<Value>,
}

impl Subscription {
    /// Wrap the receiving end of a subscriber queue.
    pub fn new(receiver: mpsc::UnboundedReceiver<Value>) -> Self {
        Self { receiver }
    }

    /// Wait for the next inbound message.
    ///
    /// Returns `None` once the channel is closed and the queue is empty.
    /// Cancel safe.
    pub async fn recv(&mut self) -> Option<Value> {
        self.receiver.recv().await
    }

    /// Take the next inbound message if one is already queued.
    pub fn try_recv(&mut self) -> Option<Value> {
        self.receiver.try_recv().ok()
    }
}

/// A bidirectional message channel.
pub trait MessageChannel: Send + Sync {
    /// Subscribe to inbound messages.
    fn subscribe(&self) -> Subscription;

    /// Post a message to the consumer.
    fn post(&self, message: OutboundMessage) -> Result<()>;
}

/// In-process channel used by `serve` and by tests.
///
/// Inbound messages are injected with [`LocalChannel::send`]; outbound
/// messages arrive on the receiver returned by [`LocalChannel::new`].
pub struct LocalChannel {
    subscribers: Mutex<Vec<mpsc::UnboundedSender<Value>>>,
    outbound: mpsc::UnboundedSender<OutboundMessage>,
}

impl LocalChannel {
    /// Create a channel and the receiving end of its outbound side.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<OutboundMessage>) {
        let (outbound, receiver) = mpsc::unbounded_channel();
        let channel = Self {
            subscribers: Mutex::new(Vec::new()),
            outbound,
        };
        (channel, receiver)
    }

    /// Deliver an inbound message to every current subscriber.
    ///
    /// Returns how many subscribers received it. With no subscriber the
    /// message is discarded.
    pub fn send(&self, message: Value) -> usize {
        let mut subscribers = self.lock_subscribers();
        subscribers.retain(|sender| sender.send(message.clone()).is_ok());
        subscribers.len()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self.lock_subscribers();
        subscribers.retain(|sender| !sender.is_closed());
        subscribers.len()
    }

    fn lock_subscribers(&self) -> MutexGuard<'_, Vec<mpsc::UnboundedSender<Value>>> {
        // The list stays consistent even if a holder panicked.
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MessageChannel for LocalChannel {
    fn subscribe(&self) -> Subscription {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.lock_subscribers().push(sender);
        Subscription::new(receiver)
    }

    fn post(&self, message: OutboundMessage) -> Result<()> {
        self.outbound
            .send(message)
            .map_err(|_| DevreadyError::ChannelClosed)
    }
}
