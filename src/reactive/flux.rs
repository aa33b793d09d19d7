// Copyright (c) 2025 - Cowboy AI, Inc.
//! Flux - Ordered Multi-Value Publisher
//!
//! A `Flux<T>` emits a finite, ordered series of values and then completes.
//! Like [`Mono`](super::Mono) it is cold: the stream is rebuilt for every
//! subscription, so the same flux can be verified, collected and subscribed
//! independently.
//!
//! # Mathematical Model
//!
//! ```text
//! Flux<T> ≅ () → [(delay, T)]
//! ```
//!
//! # Examples
//!
//! ## Ordered delivery
//!
//! ```rust,ignore
//! let people = Flux::just(vec![michael, fiona, sam, jesse]);
//! people.subscribe(|person| info!("{}", person.say_my_name()));
//! ```
//!
//! ## Delay then filter
//!
//! ```rust,ignore
//! let with_i = Flux::just(vec![michael, fiona, sam, jesse])
//!     .delay_elements(Duration::from_secs(1))
//!     .filter(|p| p.first_name().is_some_and(|n| n.contains('i')));
//! // Michael at 1s, Fiona at 2s, complete at 4s
//! ```

use futures::future::{self, FutureExt};
use futures::stream::{self, BoxStream, Stream, StreamExt};
use std::fmt::{self, Debug};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use super::combinators::{materialize, on_exhausted};
use super::mono::Mono;
use super::signal::{Publisher, Signal};
use super::subscriber::{FnSubscriber, Subscriber, Subscription};
use crate::config::ReactiveConfig;

type FluxSource<T> = Arc<dyn Fn() -> BoxStream<'static, T> + Send + Sync>;

/// Publisher of an ordered, finite series of values
pub struct Flux<T> {
    /// Builds a fresh stream per subscription
    source: FluxSource<T>,
}

impl<T> Clone for Flux<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<T> Debug for Flux<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flux").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Flux<T> {
    /// Create a flux from a factory invoked once per subscription
    pub fn from_factory<F, S>(factory: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
        S: Stream<Item = T> + Send + 'static,
    {
        Self {
            source: Arc::new(move || factory().boxed()),
        }
    }

    /// Create a flux emitting `items` in order, then completing
    pub fn just<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone + Sync,
    {
        let items: Arc<[T]> = items.into_iter().collect();
        Self::from_factory(move || stream::iter(items.to_vec()))
    }

    /// Create a flux that completes without emitting
    pub fn empty() -> Self {
        Self::from_factory(stream::empty)
    }

    /// Wait a fixed `delay` before emitting each element
    ///
    /// The delay applies to every element including the first, so `n`
    /// elements take at least `n * delay` to complete.
    pub fn delay_elements(self, delay: Duration) -> Self {
        let source = self.source;
        Self::from_factory(move || {
            source().then(move |item| async move {
                tokio::time::sleep(delay).await;
                item
            })
        })
    }

    /// Run `f` on each element as it passes
    pub fn do_on_next<F>(self, f: F) -> Self
    where
        F: Fn(&T) + Clone + Send + Sync + 'static,
    {
        let source = self.source;
        Self::from_factory(move || source().inspect(f.clone()))
    }

    /// Run `f` once after the last element has been emitted
    ///
    /// For a source that emits nothing, `f` runs as soon as the stream is
    /// polled to its end.
    pub fn do_on_complete<F>(self, f: F) -> Self
    where
        F: Fn() + Clone + Send + Sync + 'static,
    {
        let source = self.source;
        Self::from_factory(move || on_exhausted(source(), f.clone()))
    }

    /// Log every signal at INFO under the given category
    pub fn log(self, category: impl Into<String>) -> Self
    where
        T: Debug,
    {
        let category: Arc<str> = Arc::from(category.into());
        let source = self.source;

        Self::from_factory(move || {
            info!(category = %category, "onSubscribe(Flux)");
            debug!(category = %category, "request(unbounded)");

            let on_next = Arc::clone(&category);
            let on_complete = Arc::clone(&category);
            let logged = source().inspect(move |item| {
                info!(category = %on_next, "onNext({:?})", item);
            });
            on_exhausted(logged, move || {
                info!(category = %on_complete, "onComplete()");
            })
        })
    }

    /// Emit only the first `n` elements
    pub fn take(self, n: usize) -> Self {
        let source = self.source;
        Self::from_factory(move || source().take(n))
    }

    /// Skip the first `n` elements
    pub fn skip(self, n: usize) -> Self {
        let source = self.source;
        Self::from_factory(move || source().skip(n))
    }

    /// Expose the subscription's signals as elements
    pub fn materialize(&self) -> Flux<Signal<T>> {
        let source = Arc::clone(&self.source);
        Flux::from_factory(move || materialize(source()))
    }

    /// Count the emitted elements
    pub fn count(&self) -> Mono<usize> {
        let source = Arc::clone(&self.source);
        Mono::from_factory(move || {
            source()
                .fold(0usize, |n, _| future::ready(n + 1))
                .map(Some)
        })
    }

    /// Collect every element into a vector, in emission order
    pub fn collect_list(&self) -> Mono<Vec<T>> {
        let source = Arc::clone(&self.source);
        Mono::from_factory(move || source().collect::<Vec<T>>().map(Some))
    }

    /// The first element, if any
    pub fn next(&self) -> Mono<T> {
        let source = Arc::clone(&self.source);
        Mono::from_factory(move || {
            let mut stream = source();
            async move { stream.next().await }
        })
    }

    /// Subscribe with a consumer invoked for each element
    ///
    /// Must be called from within a tokio runtime.
    pub fn subscribe<F>(&self, consumer: F) -> Subscription
    where
        F: FnMut(T) + Send + 'static,
    {
        self.subscribe_with(FnSubscriber::new(consumer))
    }

    /// Subscribe with a full [`Subscriber`] using the default configuration
    pub fn subscribe_with<S>(&self, subscriber: S) -> Subscription
    where
        S: Subscriber<T> + 'static,
    {
        self.subscribe_with_config(subscriber, &ReactiveConfig::default())
    }

    /// Subscribe with a full [`Subscriber`] and explicit configuration
    pub fn subscribe_with_config<S>(&self, subscriber: S, config: &ReactiveConfig) -> Subscription
    where
        S: Subscriber<T> + 'static,
    {
        Subscription::spawn(self.to_stream(), subscriber, config)
    }
}

impl<T: Send + 'static> Publisher<T> for Flux<T> {
    type Mapped<U: Send + 'static> = Flux<U>;

    fn map<U, F>(self, f: F) -> Flux<U>
    where
        F: Fn(T) -> U + Clone + Send + Sync + 'static,
        U: Send + 'static,
    {
        let source = self.source;
        Flux::from_factory(move || source().map(f.clone()))
    }

    fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Clone + Send + Sync + 'static,
    {
        let source = self.source;
        Flux::from_factory(move || {
            let predicate = predicate.clone();
            source().filter(move |item| future::ready(predicate(item)))
        })
    }

    fn to_stream(&self) -> BoxStream<'static, T> {
        (self.source)()
    }
}
