// Copyright (c) 2025 - Cowboy AI, Inc.
//! Publisher Trait and Signals
//!
//! `Publisher` is the shared abstraction over [`Mono`](super::Mono) and
//! [`Flux`](super::Flux). A publisher is a cold, lazy description of a
//! sequence: nothing runs until it is subscribed, and every subscription
//! replays the source from the start.
//!
//! # Type Hierarchy
//!
//! ```text
//! Publisher<T>
//!   ├── Mono<T>  (zero or one value)
//!   └── Flux<T>  (ordered, finite values)
//! ```
//!
//! # Functor Laws
//!
//! `map` must satisfy:
//!
//! 1. **Identity**: `p.map(|x| x) == p`
//! 2. **Composition**: `p.map(f).map(g) == p.map(|x| g(f(x)))`
//!
//! # Signals
//!
//! A subscription observes a sequence of [`Signal`]s:
//!
//! ```text
//! Subscribe ──> Next(v)* ──> Complete
//! ```

use futures::stream::BoxStream;
use std::fmt::Debug;

/// Base trait for cold publishers
///
/// # Type Parameters
///
/// - `T`: The element type (must be Send to cross task boundaries)
pub trait Publisher<T: Send + 'static>: Clone + Debug + Send + Sync {
    /// The publisher kind produced by map
    type Mapped<U: Send + 'static>: Publisher<U>;

    /// Transform each element with a pure function
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let commands: Mono<PersonCommand> = Mono::just(fiona).map(PersonCommand::from);
    /// ```
    fn map<U, F>(self, f: F) -> Self::Mapped<U>
    where
        F: Fn(T) -> U + Clone + Send + Sync + 'static,
        U: Send + 'static;

    /// Keep only elements matching the predicate
    fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Clone + Send + Sync + 'static;

    /// Subscribe once and return the raw element stream
    ///
    /// Each call starts an independent run of the source.
    fn to_stream(&self) -> BoxStream<'static, T>;
}

/// A single observable event of a subscription
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal<T> {
    /// The subscription started
    Subscribe,
    /// An element was emitted
    Next(T),
    /// No further elements will be emitted
    Complete,
}

impl<T> Signal<T> {
    /// Name of the signal as it appears in logs and verification errors
    pub fn kind(&self) -> &'static str {
        match self {
            Signal::Subscribe => "onSubscribe",
            Signal::Next(_) => "onNext",
            Signal::Complete => "onComplete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::{Flux, Mono};
    use futures::StreamExt;

    // Works for any publisher kind
    fn lengths<P>(publisher: P) -> P::Mapped<usize>
    where
        P: Publisher<String>,
    {
        publisher.map(|s| s.len())
    }

    #[tokio::test]
    async fn test_generic_map_over_both_kinds() {
        let mono = lengths(Mono::just("Weston".to_string()));
        assert_eq!(mono.block().await, Some(6));

        let flux = lengths(Flux::just(vec!["Sam".to_string(), "Axe".to_string()]));
        let collected: Vec<usize> = flux.to_stream().collect().await;
        assert_eq!(collected, vec![3, 3]);
    }

    #[test]
    fn test_signal_kind() {
        assert_eq!(Signal::<()>::Subscribe.kind(), "onSubscribe");
        assert_eq!(Signal::Next(1).kind(), "onNext");
        assert_eq!(Signal::<()>::Complete.kind(), "onComplete");
    }
}
