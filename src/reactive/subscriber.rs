// Copyright (c) 2025 - Cowboy AI, Inc.
//! Subscribers and Subscriptions
//!
//! Subscribing runs a publisher on two tokio tasks joined by a bounded
//! channel:
//!
//! ```text
//! ┌──────────────┐   mpsc (bounded)   ┌──────────────┐
//! │   producer   │ ─────────────────> │   consumer   │
//! │ polls stream │    Next(v) ...     │ on_next(v)   │
//! └──────────────┘   channel closed   └──────────────┘
//!                      = complete            │
//!                                            ▼
//!                                     on_complete()
//!                                     latch released
//! ```
//!
//! Completion is channel closure, observed exactly once by the consumer. If
//! the producer fails instead of finishing, the consumer reports
//! `on_error` and the completion latch stays closed.

use async_trait::async_trait;
use futures::stream::BoxStream;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, error, warn};
use uuid::Uuid;

use super::latch::CountDownLatch;
use crate::config::ReactiveConfig;
use crate::errors::{ReactiveError, ReactiveResult};

/// Unique identifier of a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    /// Generate a new time-ordered identifier
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Receiver of a publisher's signals
///
/// `on_next` is called once per element in emission order, then exactly
/// one of `on_complete` or `on_error`.
#[async_trait]
pub trait Subscriber<T: Send + 'static>: Send {
    /// Called once before any element is delivered
    async fn on_subscribe(&mut self, _id: SubscriptionId) {}

    /// Handle an element
    async fn on_next(&mut self, item: T);

    /// Called once after the last element
    async fn on_complete(&mut self) {}

    /// Called instead of `on_complete` when the publisher failed
    async fn on_error(&mut self, error: &ReactiveError) {
        warn!("Unhandled publisher error: {}", error);
    }
}

/// Adapts a closure into a [`Subscriber`]
pub struct FnSubscriber<F> {
    consumer: F,
}

impl<F> FnSubscriber<F> {
    pub fn new(consumer: F) -> Self {
        Self { consumer }
    }
}

#[async_trait]
impl<T, F> Subscriber<T> for FnSubscriber<F>
where
    T: Send + 'static,
    F: FnMut(T) + Send,
{
    async fn on_next(&mut self, item: T) {
        (self.consumer)(item);
    }
}

/// Handle to a running subscription
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    completion: CountDownLatch,
    producer: AbortHandle,
    consumer: JoinHandle<ReactiveResult<()>>,
}

impl Subscription {
    /// Start the producer and consumer tasks
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<T, S>(
        mut source: BoxStream<'static, T>,
        mut subscriber: S,
        config: &ReactiveConfig,
    ) -> Self
    where
        T: Send + 'static,
        S: Subscriber<T> + 'static,
    {
        let id = SubscriptionId::new();
        let completion = CountDownLatch::new(1);
        let (tx, mut rx) = mpsc::channel::<T>(config.channel_capacity.max(1));

        let producer = tokio::spawn(async move {
            while let Some(item) = source.next().await {
                if tx.send(item).await.is_err() {
                    debug!(subscription = %id, "Consumer gone, stopping producer");
                    return;
                }
            }
            debug!(subscription = %id, "Source exhausted, closing channel");
        });
        let producer_abort = producer.abort_handle();

        let latch = completion.clone();
        let consumer = tokio::spawn(async move {
            debug!(subscription = %id, "Subscribed");
            subscriber.on_subscribe(id).await;

            while let Some(item) = rx.recv().await {
                subscriber.on_next(item).await;
            }

            // Closure alone does not distinguish completion from a failed producer.
            match producer.await {
                Ok(()) => {
                    subscriber.on_complete().await;
                    latch.count_down();
                    debug!(subscription = %id, "Completed");
                    Ok(())
                }
                Err(e) => {
                    let err = if e.is_cancelled() {
                        ReactiveError::Cancelled
                    } else {
                        ReactiveError::Upstream(e.to_string())
                    };
                    error!(subscription = %id, "Publisher failed: {}", err);
                    subscriber.on_error(&err).await;
                    Err(err)
                }
            }
        });

        Self {
            id,
            completion,
            producer: producer_abort,
            consumer,
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Whether `on_complete` has been delivered
    pub fn is_complete(&self) -> bool {
        self.completion.is_released()
    }

    /// A latch released when the subscription completes
    pub fn completion(&self) -> CountDownLatch {
        self.completion.clone()
    }

    /// Wait for the consumer to finish
    ///
    /// Returns `Ok(())` after `on_complete`, or the error delivered to
    /// `on_error`.
    pub async fn await_completion(self) -> ReactiveResult<()> {
        self.consumer.await?
    }

    /// Wait for the consumer to finish, giving up after `timeout`
    ///
    /// On timeout the subscription keeps running in the background.
    pub async fn await_completion_timeout(self, timeout: Duration) -> ReactiveResult<()> {
        tokio::time::timeout(timeout, self.await_completion()).await?
    }

    /// Stop both tasks; no further callbacks are delivered
    pub fn dispose(&self) {
        debug!(subscription = %self.id, "Disposed");
        self.producer.abort();
        self.consumer.abort();
    }

    /// Whether the subscription ended without completing, either disposed or failed
    pub fn is_disposed(&self) -> bool {
        self.consumer.is_finished() && !self.is_complete()
    }
}
