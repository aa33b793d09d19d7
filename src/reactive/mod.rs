// Copyright (c) 2025 - Cowboy AI, Inc.
//! Reactive Publishers
//!
//! This module provides cold, composable publishers for values that arrive
//! over time. It distinguishes single-value and multi-value sequences and
//! runs subscriptions on tokio tasks.
//!
//! # Core Concepts
//!
//! ## Publisher<T>
//!
//! Base trait for all publishers. Supports `map` and `filter` and can be
//! turned into a raw stream.
//!
//! ## Mono<T> (Single Value)
//!
//! Emits zero or one value, then completes.
//!
//! ```text
//! Time: ────────────────────────────→
//! Value:      ●|
//! ```
//!
//! ## Flux<T> (Ordered Values)
//!
//! Emits a finite, ordered series of values, then completes.
//!
//! ```text
//! Time: ────────────────────────────→
//! Value:  ●    ●    ●    ●|
//! ```
//!
//! ## Completion
//!
//! Completion is a one-shot signal. A [`Subscription`] releases its
//! [`CountDownLatch`] exactly once, after the last element; a Flux can also
//! run a hook via `do_on_complete`.
//!
//! # Laws
//!
//! ```text
//! map id = id
//! map (g . f) = map g . map f
//! filter p . filter q = filter (λx. q x && p x)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use reactive_examples::reactive::*;
//!
//! let latch = CountDownLatch::new(1);
//! let done = latch.clone();
//!
//! Flux::just(people)
//!     .delay_elements(Duration::from_secs(1))
//!     .filter(|p| p.first_name().is_some_and(|n| n.contains('i')))
//!     .do_on_complete(move || done.count_down())
//!     .subscribe(|p| info!("{}", p.say_my_name()));
//!
//! latch.wait().await;
//! ```

pub mod combinators;
pub mod flux;
pub mod latch;
pub mod mono;
pub mod signal;
pub mod subscriber;
pub mod verifier;

pub use combinators::{concat, merge};
pub use flux::Flux;
pub use latch::CountDownLatch;
pub use mono::Mono;
pub use signal::{Publisher, Signal};
pub use subscriber::{FnSubscriber, Subscriber, Subscription, SubscriptionId};
pub use verifier::{StepVerifier, VerificationError};
