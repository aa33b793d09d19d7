// Copyright (c) 2025 - Cowboy AI, Inc.
//! CountDownLatch - One-Shot Completion Signal
//!
//! A latch starts at a count and releases every waiter once the count
//! reaches zero. With a count of one it is the completion signal used by
//! subscriptions: it fires exactly once and further count-downs are no-ops.
//!
//! ```rust,ignore
//! let latch = CountDownLatch::new(1);
//!
//! people
//!     .delay_elements(Duration::from_secs(1))
//!     .do_on_complete({
//!         let latch = latch.clone();
//!         move || latch.count_down()
//!     })
//!     .subscribe(|person| info!("{}", person.say_my_name()));
//!
//! latch.wait().await;
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;

/// Awaitable count-down latch
///
/// Clones share the same counter.
#[derive(Clone, Debug)]
pub struct CountDownLatch {
    inner: Arc<LatchState>,
}

#[derive(Debug)]
struct LatchState {
    count: AtomicUsize,
    released: Notify,
}

impl CountDownLatch {
    /// Create a latch that opens after `count` calls to [`count_down`](Self::count_down)
    pub fn new(count: usize) -> Self {
        Self {
            inner: Arc::new(LatchState {
                count: AtomicUsize::new(count),
                released: Notify::new(),
            }),
        }
    }

    /// Decrement the count, releasing waiters when it reaches zero
    ///
    /// Saturates at zero.
    pub fn count_down(&self) {
        let previous = self
            .inner
            .count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));

        if previous == Ok(1) {
            self.inner.released.notify_waiters();
        }
    }

    /// Current count
    pub fn count(&self) -> usize {
        self.inner.count.load(Ordering::Acquire)
    }

    /// Whether the count has reached zero
    pub fn is_released(&self) -> bool {
        self.count() == 0
    }

    /// Wait until the count reaches zero
    pub async fn wait(&self) {
        loop {
            // Register before checking so a release between the two is not missed.
            let notified = self.inner.released.notified();
            if self.is_released() {
                return;
            }
            notified.await;
        }
    }

    /// Wait until the count reaches zero or `timeout` elapses
    ///
    /// Returns `true` if the latch was released.
    pub async fn wait_timeout(&self, timeout: Duration) -> bool {
        tokio::time::timeout(timeout, self.wait()).await.is_ok()
    }
}
