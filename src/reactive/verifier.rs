// Copyright (c) 2025 - Cowboy AI, Inc.
//! StepVerifier - Signal-by-Signal Publisher Assertions
//!
//! Builds a script of expectations and checks a publisher against it. The
//! publisher is subscribed once, materialized into [`Signal`]s, and each
//! expectation consumes the signals it describes. Verification ends by
//! requiring exactly one completion.
//!
//! ```rust,ignore
//! StepVerifier::create(Flux::just(vec![michael, fiona]))
//!     .consume_next_with(|p| assert_eq!(p.say_my_name(), "My Name is Michael Weston."))
//!     .expect_next(fiona)
//!     .verify_complete()
//!     .await?;
//! ```

use futures::stream::BoxStream;
use futures::StreamExt;
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tracing::debug;

use super::combinators::materialize;
use super::signal::{Publisher, Signal};
use crate::config::ReactiveConfig;

/// Verification failure
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("expectation #{step}: expected {expected}, got {actual}")]
    UnexpectedSignal {
        step: usize,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("expectation #{step}: {message}")]
    NextRejected { step: usize, message: String },

    #[error("expectation #{step}: expect_subscription must be the first expectation")]
    SubscriptionNotFirst { step: usize },

    #[error("publisher ended without a terminal signal")]
    MissingTerminal,

    #[error("verification timed out after {0:?}")]
    Timeout(Duration),
}

type NextCheck<T> = Box<dyn FnOnce(T) -> Result<(), String> + Send>;

type Subscribe<T> = Box<dyn FnOnce() -> BoxStream<'static, Signal<T>> + Send>;

enum Expectation<T> {
    Subscription,
    Next(NextCheck<T>),
    NextCount(usize),
}

/// Scripted verifier for a single subscription
pub struct StepVerifier<T> {
    subscribe: Subscribe<T>,
    expectations: Vec<Expectation<T>>,
    timeout: Duration,
}

impl<T: Send + 'static> StepVerifier<T> {
    /// Prepare to verify `publisher`
    ///
    /// The publisher is not subscribed until verification runs.
    pub fn create<P>(publisher: P) -> Self
    where
        P: Publisher<T> + 'static,
    {
        Self::create_with_config(publisher, &ReactiveConfig::default())
    }

    /// Prepare to verify `publisher`, taking the deadline from `config`
    pub fn create_with_config<P>(publisher: P, config: &ReactiveConfig) -> Self
    where
        P: Publisher<T> + 'static,
    {
        Self {
            subscribe: Box::new(move || materialize(publisher.to_stream()).boxed()),
            expectations: Vec::new(),
            timeout: config.verify_timeout,
        }
    }

    /// Take the deadline from `config`
    pub fn with_config(self, config: &ReactiveConfig) -> Self {
        self.with_timeout(config.verify_timeout)
    }

    /// Override the verification deadline
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Expect the subscription signal; only valid as the first expectation
    pub fn expect_subscription(mut self) -> Self {
        self.expectations.push(Expectation::Subscription);
        self
    }

    /// Hand the next element to `consumer`, which typically asserts on it
    pub fn consume_next_with<F>(mut self, consumer: F) -> Self
    where
        F: FnOnce(T) + Send + 'static,
    {
        self.expectations.push(Expectation::Next(Box::new(move |item| {
            consumer(item);
            Ok(())
        })));
        self
    }

    /// Expect the next element to equal `expected`
    pub fn expect_next(mut self, expected: T) -> Self
    where
        T: PartialEq + Debug,
    {
        self.expectations.push(Expectation::Next(Box::new(move |item| {
            if item == expected {
                Ok(())
            } else {
                Err(format!("expected value {:?}, got {:?}", expected, item))
            }
        })));
        self
    }

    /// Expect `count` more elements, whatever their values
    pub fn expect_next_count(mut self, count: usize) -> Self {
        self.expectations.push(Expectation::NextCount(count));
        self
    }

    /// Run the script and require completion afterwards
    ///
    /// Returns the time taken on success.
    pub async fn verify_complete(self) -> Result<Duration, VerificationError> {
        let started = Instant::now();
        let timeout = self.timeout;

        match tokio::time::timeout(timeout, self.run()).await {
            Ok(result) => result.map(|()| {
                let elapsed = started.elapsed();
                debug!("Verified in {:?}", elapsed);
                elapsed
            }),
            Err(_) => Err(VerificationError::Timeout(timeout)),
        }
    }

    async fn run(self) -> Result<(), VerificationError> {
        let Self {
            subscribe,
            expectations,
            ..
        } = self;
        let mut signals = subscribe();

        let terminal_step = expectations.len();

        // materialize always leads with Subscribe
        match signals.next().await {
            Some(Signal::Subscribe) => {}
            Some(other) => {
                return Err(VerificationError::UnexpectedSignal {
                    step: 0,
                    expected: "onSubscribe",
                    actual: other.kind(),
                })
            }
            None => return Err(VerificationError::MissingTerminal),
        }

        for (step, expectation) in expectations.into_iter().enumerate() {
            match expectation {
                Expectation::Subscription => {
                    if step != 0 {
                        return Err(VerificationError::SubscriptionNotFirst { step });
                    }
                }
                Expectation::Next(check) => {
                    let item = next_value(&mut signals, step).await?;
                    check(item).map_err(|message| VerificationError::NextRejected { step, message })?;
                }
                Expectation::NextCount(count) => {
                    for _ in 0..count {
                        next_value(&mut signals, step).await?;
                    }
                }
            }
        }

        match signals.next().await {
            Some(Signal::Complete) => Ok(()),
            Some(other) => Err(VerificationError::UnexpectedSignal {
                step: terminal_step,
                expected: "onComplete",
                actual: other.kind(),
            }),
            None => Err(VerificationError::MissingTerminal),
        }
    }
}

async fn next_value<T>(
    signals: &mut BoxStream<'static, Signal<T>>,
    step: usize,
) -> Result<T, VerificationError> {
    match signals.next().await {
        Some(Signal::Next(item)) => Ok(item),
        Some(other) => Err(VerificationError::UnexpectedSignal {
            step,
            expected: "onNext",
            actual: other.kind(),
        }),
        None => Err(VerificationError::MissingTerminal),
    }
}
