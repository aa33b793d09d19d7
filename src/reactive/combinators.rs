// Copyright (c) 2025 - Cowboy AI, Inc.
//! Publisher Combinators
//!
//! Functions for composing publishers and the stream-level helpers the
//! operators are built from.
//!
//! # Available Combinators
//!
//! - `concat` - All elements of one flux, then all of another
//! - `merge` - Elements of two fluxes interleaved as they arrive
//! - `materialize` - Wrap a stream's lifecycle as [`Signal`]s
//! - `on_exhausted` - Run a callback once a stream has ended
//!
//! # Examples
//!
//! ```rust,ignore
//! let first = Flux::just(vec![michael, fiona]);
//! let second = Flux::just(vec![sam, jesse]);
//!
//! let everyone = concat(first, second);
//! ```

use futures::future;
use futures::stream::{self, Stream, StreamExt};

use super::flux::Flux;
use super::signal::{Publisher, Signal};

/// Emit every element of `a`, then every element of `b`
pub fn concat<T>(a: Flux<T>, b: Flux<T>) -> Flux<T>
where
    T: Send + 'static,
{
    Flux::from_factory(move || a.to_stream().chain(b.to_stream()))
}

/// Emit elements of `a` and `b` in arrival order
///
/// Completes once both sources have completed. Relative order within each
/// source is preserved.
pub fn merge<T>(a: Flux<T>, b: Flux<T>) -> Flux<T>
where
    T: Send + 'static,
{
    Flux::from_factory(move || stream::select(a.to_stream(), b.to_stream()))
}

/// Wrap a stream as `Subscribe`, `Next(v)`..., `Complete`
pub fn materialize<S>(source: S) -> impl Stream<Item = Signal<S::Item>> + Send + 'static
where
    S: Stream + Send + 'static,
    S::Item: Send + 'static,
{
    stream::once(future::ready(Signal::Subscribe))
        .chain(source.map(Signal::Next))
        .chain(stream::once(future::ready(Signal::Complete)))
}

/// Pass `source` through unchanged and call `f` once after its last element
pub fn on_exhausted<S, F>(source: S, f: F) -> impl Stream<Item = S::Item> + Send + 'static
where
    S: Stream + Send + 'static,
    S::Item: Send + 'static,
    F: FnOnce() + Send + 'static,
{
    let tail = stream::once(async move {
        f();
        None::<S::Item>
    })
    .filter_map(future::ready);

    source.chain(tail)
}
