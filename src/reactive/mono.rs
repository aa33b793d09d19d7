// Copyright (c) 2025 - Cowboy AI, Inc.
//! Mono - Single-Value Publisher
//!
//! A `Mono<T>` emits at most one value and then completes. It is a cold
//! publisher: the underlying future is rebuilt for every subscription.
//!
//! ```text
//! Subscribe ──> Next(v)? ──> Complete
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! let command = Mono::just(Person::new("Fiona", "Glenanne"))
//!     .map(PersonCommand::from)
//!     .block()
//!     .await;
//! ```

use futures::future::{self, BoxFuture, FutureExt};
use futures::stream::{self, BoxStream, StreamExt};
use std::fmt::{self, Debug};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info};

use super::flux::Flux;
use super::signal::Publisher;
use super::subscriber::Subscription;

type MonoSource<T> = Arc<dyn Fn() -> BoxFuture<'static, Option<T>> + Send + Sync>;

/// Publisher of zero or one value
pub struct Mono<T> {
    /// Builds a fresh future per subscription
    source: MonoSource<T>,
}

impl<T> Clone for Mono<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<T> Debug for Mono<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mono").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Mono<T> {
    /// Create a mono from a factory invoked once per subscription
    pub fn from_factory<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<T>> + Send + 'static,
    {
        Self {
            source: Arc::new(move || factory().boxed()),
        }
    }

    /// Create a mono that emits `value` and completes
    pub fn just(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_factory(move || future::ready(Some(value.clone())))
    }

    /// Create a mono that completes without emitting
    pub fn empty() -> Self {
        Self::from_factory(|| future::ready(None))
    }

    /// Log every signal at INFO under the given category
    pub fn log(self, category: impl Into<String>) -> Self
    where
        T: Debug,
    {
        let category: Arc<str> = Arc::from(category.into());
        let source = self.source;

        Self::from_factory(move || {
            let category = Arc::clone(&category);
            info!(category = %category, "onSubscribe(Mono)");
            debug!(category = %category, "request(unbounded)");
            let pending = source();

            async move {
                let value = pending.await;
                if let Some(v) = &value {
                    info!(category = %category, "onNext({:?})", v);
                }
                info!(category = %category, "onComplete()");
                value
            }
        })
    }

    /// View this mono as a flux of zero or one element
    pub fn flux(&self) -> Flux<T> {
        let source = Arc::clone(&self.source);
        Flux::from_factory(move || stream::once(source()).filter_map(future::ready))
    }

    /// Subscribe and wait for the value
    pub async fn block(&self) -> Option<T> {
        (self.source)().await
    }

    /// Subscribe with a consumer invoked for the value, if any
    pub fn subscribe<F>(&self, consumer: F) -> Subscription
    where
        F: FnMut(T) + Send + 'static,
    {
        self.flux().subscribe(consumer)
    }
}

impl<T: Send + 'static> Publisher<T> for Mono<T> {
    type Mapped<U: Send + 'static> = Mono<U>;

    fn map<U, F>(self, f: F) -> Mono<U>
    where
        F: Fn(T) -> U + Clone + Send + Sync + 'static,
        U: Send + 'static,
    {
        let source = self.source;
        Mono::from_factory(move || {
            let f = f.clone();
            source().map(move |value| value.map(f))
        })
    }

    fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Clone + Send + Sync + 'static,
    {
        let source = self.source;
        Mono::from_factory(move || {
            let predicate = predicate.clone();
            source().map(move |value| value.filter(|v| predicate(v)))
        })
    }

    fn to_stream(&self) -> BoxStream<'static, T> {
        stream::once((self.source)())
            .filter_map(future::ready)
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_just_emits_value() {
        assert_eq!(Mono::just(42).block().await, Some(42));
    }

    #[tokio::test]
    async fn test_empty_emits_nothing() {
        let empty: Mono<i32> = Mono::empty();
        assert_eq!(empty.block().await, None);
        assert!(empty.to_stream().collect::<Vec<_>>().await.is_empty());
    }

    #[tokio::test]
    async fn test_map_and_filter() {
        let doubled = Mono::just(5).map(|x| x * 2);
        assert_eq!(doubled.clone().block().await, Some(10));

        let rejected = doubled.filter(|x| *x > 100);
        assert_eq!(rejected.block().await, None);
    }

    #[tokio::test]
    async fn test_source_is_cold() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let mono = Mono::from_factory(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            future::ready(Some("hello"))
        });

        assert_eq!(runs.load(Ordering::SeqCst), 0);
        mono.block().await;
        mono.block().await;
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_flux_view() {
        let items: Vec<i32> = Mono::just(3).flux().to_stream().collect().await;
        assert_eq!(items, vec![3]);
    }

    #[tokio::test]
    async fn test_log_passes_value_through() {
        let logged = Mono::just("Axe").log("test");
        assert_eq!(logged.block().await, Some("Axe"));
    }
}
